use crate::constants::ID_CATALOG_GRID;
use crate::dom;
use crate::input;
use std::rc::Rc;
use viewer_core::{Catalog, ProductCard, ProductId};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fill the catalog grid with one card per product, in catalog order.
/// Clicking a card, or pressing Enter or Space on a focused card, calls
/// `on_select` once with its product id.
pub fn render_catalog(
    document: &web::Document,
    catalog: &Catalog,
    on_select: Rc<dyn Fn(ProductId)>,
) -> anyhow::Result<()> {
    let grid = dom::element(document, ID_CATALOG_GRID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ID_CATALOG_GRID))?;
    dom::clear_children(&grid);
    for card in catalog.cards() {
        let el = build_card(document, &card)?;
        let on_select = on_select.clone();
        let id = card.id;
        {
            let on_select = on_select.clone();
            dom::add_element_click_listener(&el, move || on_select(id));
        }
        dom::add_element_key_listener(&el, input::activates_card, move || on_select(id));
        grid.append_child(&el).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    log::info!("[catalog] rendered {} cards", catalog.len());
    Ok(())
}

fn build_card(document: &web::Document, card: &ProductCard) -> anyhow::Result<web::Element> {
    let create = |tag: &str| document.create_element(tag).map_err(|e| anyhow::anyhow!("{:?}", e));
    let root = create("article")?;
    let _ = root.set_attribute("class", "card");
    let _ = root.set_attribute("data-product-id", &card.id.to_string());
    let _ = root.set_attribute("tabindex", "0");

    let img = create("img")?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(card.thumbnail);
    img.set_alt(card.name);

    let name = create("h3")?;
    name.set_text_content(Some(card.name));
    let price = create("p")?;
    let _ = price.set_attribute("class", "price");
    price.set_text_content(Some(card.price));
    let description = create("p")?;
    let _ = description.set_attribute("class", "description");
    description.set_text_content(Some(card.description));

    for child in [img.unchecked_ref::<web::Element>(), &name, &price, &description] {
        root.append_child(child).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(root)
}
