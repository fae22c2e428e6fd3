use crate::dom::{Dom, NodeId};
use crate::menu::{Category, MenuItem};

pub const DEFAULT_FALLBACK_IMAGE: &str = "assets/images/food_variety.jpg";
pub const MENU_DATA_FILE_NAME: &str = "menu-data 1.json";

pub const SECTION_CLASS: &str = "menu-section";
pub const SECTION_TITLE_CLASS: &str = "menu-category-title";
pub const CARD_CLASS: &str = "menu-card";

pub const UNTITLED: &str = "Untitled";
pub const IMAGE_ALT_FALLBACK: &str = "Menu item";
pub const PRICE_PLACEHOLDER: &str = "\u{2014}";
pub const PRICE_MISSING_TOOLTIP: &str = "Price not available";

pub const LOADING_TITLE: &str = "Loading Menu...";
pub const UNAVAILABLE_TITLE: &str = "Menu unavailable";
pub const LOAD_ERROR_TITLE: &str = "Couldn\u{2019}t load the menu";

fn element_with_class(dom: &mut Dom, tag: &str, class: &str) -> NodeId {
    let node = dom.create_element(tag);
    dom.set_attr(node, "class", class);
    node
}

pub fn create_menu_card(
    dom: &mut Dom,
    item: &MenuItem,
    category_slug: &str,
    fallback_image: &str,
) -> NodeId {
    let card = element_with_class(dom, "article", CARD_CLASS);
    dom.set_attr(card, "data-category", category_slug);

    let image_wrap = element_with_class(dom, "div", "menu-card-image");
    let img = dom.create_element("img");
    dom.set_attr(img, "loading", "lazy");
    let alt = if item.title.is_empty() {
        IMAGE_ALT_FALLBACK
    } else {
        item.title.as_str()
    };
    dom.set_attr(img, "alt", alt);
    dom.set_attr(
        img,
        "src",
        item.image_url.as_deref().unwrap_or(fallback_image),
    );
    dom.append_child(image_wrap, img);

    let content = element_with_class(dom, "div", "menu-card-content");
    let head = element_with_class(dom, "div", "menu-item-head");

    let name = element_with_class(dom, "h3", "menu-item-name");
    let title = if item.title.is_empty() {
        UNTITLED
    } else {
        item.title.as_str()
    };
    dom.set_text(name, title);
    dom.append_child(head, name);

    let price = element_with_class(dom, "span", "menu-item-price");
    match item.price.as_deref() {
        Some(p) => dom.set_text(price, p),
        None => {
            dom.set_text(price, PRICE_PLACEHOLDER);
            dom.add_class(price, "is-empty");
            dom.set_attr(price, "title", PRICE_MISSING_TOOLTIP);
        }
    }
    dom.append_child(head, price);
    dom.append_child(content, head);

    if let Some(description) = item.description.as_deref() {
        let p = element_with_class(dom, "p", "menu-item-description");
        dom.set_text(p, description);
        dom.append_child(content, p);
    }

    dom.append_child(card, image_wrap);
    dom.append_child(card, content);
    card
}

pub fn create_menu_section(dom: &mut Dom, category: &Category, fallback_image: &str) -> NodeId {
    let section = element_with_class(dom, "section", SECTION_CLASS);
    dom.set_attr(section, "id", &category.slug);

    let h2 = element_with_class(dom, "h2", SECTION_TITLE_CLASS);
    dom.set_text(h2, &category.name);

    let grid = element_with_class(dom, "div", "menu-grid");
    for item in &category.items {
        let card = create_menu_card(dom, item, &category.slug, fallback_image);
        dom.append_child(grid, card);
    }

    dom.append_child(section, h2);
    dom.append_child(section, grid);
    section
}

pub fn create_placeholder_section(dom: &mut Dom, title: &str) -> NodeId {
    let section = element_with_class(dom, "section", SECTION_CLASS);
    let h2 = element_with_class(dom, "h2", SECTION_TITLE_CLASS);
    dom.set_text(h2, title);
    dom.append_child(section, h2);
    section
}

pub fn create_load_error_section(dom: &mut Dom) -> NodeId {
    let section = create_placeholder_section(dom, LOAD_ERROR_TITLE);
    let p = element_with_class(dom, "p", "menu-load-error");
    let before = dom.create_text(
        "If you opened this page as a file, please run it via a local server \
         (like VS Code \u{201c}Live Server\u{201d}) so the browser can fetch ",
    );
    let strong = dom.create_element("strong");
    dom.set_text(strong, MENU_DATA_FILE_NAME);
    let after = dom.create_text(".");
    dom.append_child(p, before);
    dom.append_child(p, strong);
    dom.append_child(p, after);
    dom.append_child(section, p);
    section
}
