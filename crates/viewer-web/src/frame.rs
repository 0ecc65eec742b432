use crate::dom;
use crate::render;
use crate::viewer::Viewer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub viewer: Viewer,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(viewer: Viewer) -> Self {
        Self {
            viewer,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut app = self.viewer.app.borrow_mut();
        let session = match app.session_mut() {
            Some(s) => s,
            None => return,
        };
        let mut slot = self.viewer.stage.borrow_mut();
        let stage = match slot.as_mut() {
            Some(stage) if stage.matches(&session.ticket()) => stage,
            _ => return,
        };

        if let Some(level) = session.record_frame(dt) {
            log::info!("[quality] backing store now {}x", level.pixel_ratio());
            dom::sync_canvas_backing_size(&stage.canvas, level.pixel_ratio());
        }
        session.camera_mut().update();

        if let Some(gpu) = &mut stage.gpu {
            gpu.resize_if_needed(stage.canvas.width(), stage.canvas.height());
            let camera = session.camera().camera(gpu.aspect());
            if let Err(e) = gpu.render(&camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
