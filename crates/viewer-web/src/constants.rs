// Host page contract and front-end tuning constants

// Element ids provided by index.html
pub const ID_CATALOG_GRID: &str = "catalog-grid";
pub const ID_VIEWER: &str = "viewer";
pub const ID_VIEWER_NAME: &str = "viewer-name";
pub const ID_VIEWER_PRICE: &str = "viewer-price";
pub const ID_VIEWER_DESCRIPTION: &str = "viewer-description";
pub const ID_VIEWER_STAGE: &str = "viewer-stage";
pub const ID_VIEWER_STATUS: &str = "viewer-status";
pub const ID_VIEWER_STATUS_TEXT: &str = "viewer-status-text";
pub const ID_VIEWER_RETRY: &str = "viewer-retry";
pub const ID_VIEWER_BACK: &str = "viewer-back";
pub const ID_VIEWER_RESET: &str = "viewer-reset";
pub const ID_FOOTER_YEAR: &str = "footer-year";

pub const BRAND: &str = "Creatix AR";
pub const LOADING_TEXT: &str = "Loading...";

// Canvas backing store never exceeds this many pixels per side
pub const MAX_BACKING_PX: u32 = 4096;

// Wheel deltaY that counts as one zoom notch
pub const WHEEL_NOTCH_PX: f32 = 100.0;
// Upper bound on notches applied from a single wheel event
pub const WHEEL_MAX_NOTCHES: f32 = 10.0;

// Viewport background (linear RGBA)
pub const CLEAR_COLOR: [f64; 4] = [0.92, 0.93, 0.95, 1.0];

// Direction the key light travels, world space
pub const LIGHT_DIRECTION: [f32; 3] = [-0.4, -1.0, -0.6];
