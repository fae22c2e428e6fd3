use serde_json::{json, Value};

use crate::filter::{Filter, Scroll};
use crate::loader::{LoadError, MenuLoader};
use crate::menu::slugify;
use crate::page::{MenuPage, PageShell, PageStatus, UiEvent};
use crate::runner::{load_and_render, RenderOutcome};

struct StaticLoader(Value);

impl MenuLoader for StaticLoader {
    async fn load(&self) -> Result<Value, LoadError> {
        Ok(self.0.clone())
    }
}

struct FailingLoader;

impl MenuLoader for FailingLoader {
    async fn load(&self) -> Result<Value, LoadError> {
        Err(LoadError::Read {
            path: "menu-data 1.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        })
    }
}

struct StatusLoader(u16);

impl MenuLoader for StatusLoader {
    async fn load(&self) -> Result<Value, LoadError> {
        Err(LoadError::Status { status: self.0 })
    }
}

fn sample_menu() -> Value {
    json!({
        "Starters": {"items": [
            {"food-title": "Soup", "food-price": "", "description": ""},
            {"food-title": "Samosa", "food-price": "$4", "description": "Two pieces", "img-url": "img/samosa.jpg"}
        ]},
        "Briyani": {"items": [{"food-title": "Chicken Biriyani", "food-price": "$14"}]},
        "Breads & Parottas": {"items": [{"food-title": "Kerala Parotta", "food-price": "$3"}]}
    })
}

fn shell_page() -> MenuPage {
    MenuPage::new(PageShell::default().build())
}

async fn rendered(value: Value) -> (MenuPage, RenderOutcome) {
    let mut page = shell_page();
    let outcome = load_and_render(&mut page, &StaticLoader(value)).await;
    (page, outcome)
}

fn visible_sections(page: &MenuPage) -> Vec<String> {
    page.sections()
        .into_iter()
        .filter(|s| page.is_visible(*s))
        .filter_map(|s| page.dom().attr(s, "id").map(|id| id.to_string()))
        .collect()
}

#[test]
fn slug_examples() {
    assert_eq!(slugify("Briyani"), "biriyani");
    assert_eq!(slugify("Breads & Parottas"), "breads-parottas");
    assert_eq!(slugify(&slugify("Breads & Parottas")), "breads-parottas");
}

#[tokio::test]
async fn renders_sections_and_starts_on_all() {
    let (page, outcome) = rendered(sample_menu()).await;
    assert_eq!(
        outcome,
        RenderOutcome::Ready {
            categories: 3,
            items: 4
        }
    );
    assert_eq!(page.status(), PageStatus::Ready);
    assert_eq!(page.active_filter(), Some(&Filter::All));
    assert_eq!(
        visible_sections(&page),
        ["starters", "biriyani", "breads-parottas"]
    );
    assert_eq!(page.empty_state_visible(), Some(false));

    let all = page.filter_buttons()[0];
    assert!(page.dom().has_class(all, "active"));
}

#[tokio::test]
async fn soup_card_shows_placeholders() {
    let (page, _) = rendered(json!({
        "Starters": {"items": [{"food-title": "Soup", "food-price": "", "description": ""}]}
    }))
    .await;
    let section = page.dom().get_element_by_id("starters").unwrap();
    let card = page.dom().find_first_by_class(section, "menu-card").unwrap();
    let name = page.dom().find_first_by_class(card, "menu-item-name").unwrap();
    let price = page.dom().find_first_by_class(card, "menu-item-price").unwrap();
    assert_eq!(page.dom().text_content(name), "Soup");
    assert_eq!(page.dom().text_content(price), "\u{2014}");
    assert!(page.dom().has_class(price, "is-empty"));
    assert!(page
        .dom()
        .find_first_by_class(card, "menu-item-description")
        .is_none());
}

#[tokio::test]
async fn all_filter_resets_any_prior_state() {
    let (mut page, _) = rendered(sample_menu()).await;
    page.apply_filter(&Filter::category("curries"));
    assert!(visible_sections(&page).is_empty());
    assert_eq!(page.empty_state_visible(), Some(true));

    assert_eq!(page.apply_filter(&Filter::All), Some(Scroll::Top));
    assert_eq!(visible_sections(&page).len(), 3);
    assert_eq!(page.empty_state_visible(), Some(false));
}

#[tokio::test]
async fn repeated_filter_changes_keep_document_size() {
    let (mut page, _) = rendered(sample_menu()).await;
    page.apply_filter(&Filter::category("starters"));
    let before = page.dom().node_count();
    for _ in 0..1_000 {
        page.apply_filter(&Filter::category("starters"));
        page.apply_filter(&Filter::category("biriyani"));
        page.apply_filter(&Filter::All);
    }
    let trigger = page.handles().filter_trigger.unwrap();
    let biriyani = page
        .filter_buttons()
        .into_iter()
        .find(|b| page.dom().attr(*b, "data-filter") == Some("biriyani"))
        .unwrap();
    for _ in 0..100 {
        page.dispatch(UiEvent::Click(trigger));
        page.dispatch(UiEvent::Click(biriyani));
    }
    assert_eq!(page.dom().node_count(), before);
}

#[tokio::test]
async fn unknown_slug_hides_everything() {
    let (mut page, _) = rendered(sample_menu()).await;
    assert_eq!(page.apply_filter(&Filter::category("specials")), None);
    assert!(visible_sections(&page).is_empty());
    assert_eq!(page.empty_state_visible(), Some(true));
}

#[tokio::test]
async fn empty_object_shows_unavailable() {
    let (page, outcome) = rendered(json!({})).await;
    assert_eq!(outcome, RenderOutcome::Empty);
    assert_eq!(page.status(), PageStatus::Empty);
    let sections = page.sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(page.dom().text_content(sections[0]), "Menu unavailable");
    assert_eq!(page.empty_state_visible(), Some(true));
    assert_eq!(page.active_filter(), None);
}

#[tokio::test]
async fn null_document_is_treated_as_empty() {
    let (_, outcome) = rendered(Value::Null).await;
    assert_eq!(outcome, RenderOutcome::Empty);
}

#[tokio::test]
async fn controls_without_sections_end_disabled() {
    let (page, _) = rendered(sample_menu()).await;
    assert_eq!(
        page.disabled_filters(),
        ["curries", "desserts", "beverages"]
    );
    for control in page
        .filter_buttons()
        .into_iter()
        .chain(page.dropdown_options())
    {
        if page.dom().attr(control, "data-filter") == Some("all") {
            assert!(!page.dom().has_attr(control, "disabled"));
        }
    }
}

#[tokio::test]
async fn fetch_rejection_shows_error_placeholder() {
    let mut page = shell_page();
    let outcome = load_and_render(&mut page, &FailingLoader).await;
    assert!(matches!(outcome, RenderOutcome::Failed { .. }));
    assert_eq!(page.status(), PageStatus::Failed);
    let sections = page.sections();
    assert_eq!(sections.len(), 1);
    let text = page.dom().text_content(sections[0]);
    assert!(text.contains("Couldn\u{2019}t load the menu"));
    assert!(text.contains("menu-data 1.json"));
    assert!(page.dom().find_first_by_class(sections[0], "menu-load-error").is_some());
}

#[tokio::test]
async fn http_error_status_takes_failure_branch() {
    let mut page = shell_page();
    let outcome = load_and_render(&mut page, &StatusLoader(503)).await;
    assert_eq!(
        outcome,
        RenderOutcome::Failed {
            message: "failed to load menu JSON (503)".to_string()
        }
    );
    assert!(page.dispatch(UiEvent::Click(page.filter_buttons()[1])).is_none());
    assert_eq!(page.active_filter(), None);
}

#[tokio::test]
async fn non_object_document_takes_failure_branch() {
    let (page, outcome) = rendered(json!(["Starters"])).await;
    assert!(matches!(outcome, RenderOutcome::Failed { .. }));
    assert_eq!(page.status(), PageStatus::Failed);
}

#[tokio::test]
async fn missing_sections_container_halts() {
    let mut dom = crate::dom::Dom::new();
    let body = dom.create_element("body");
    dom.append_child(dom.root(), body);
    let mut page = MenuPage::new(dom);
    let outcome = load_and_render(&mut page, &StaticLoader(sample_menu())).await;
    assert_eq!(outcome, RenderOutcome::Skipped);
    assert_eq!(page.status(), PageStatus::Blank);
}

#[tokio::test]
async fn bare_shell_degrades_without_optional_parts() {
    let shell = PageShell {
        dropdown: false,
        mobile_nav: false,
        empty_state: false,
        ..PageShell::default()
    };
    let mut page = MenuPage::new(shell.build());
    let outcome = load_and_render(&mut page, &StaticLoader(sample_menu())).await;
    assert!(matches!(outcome, RenderOutcome::Ready { .. }));
    assert!(page.dropdown_options().is_empty());

    let biriyani = page
        .filter_buttons()
        .into_iter()
        .find(|b| page.dom().attr(*b, "data-filter") == Some("biriyani"))
        .unwrap();
    page.dispatch(UiEvent::Click(biriyani));
    assert_eq!(visible_sections(&page), ["biriyani"]);
    assert_eq!(page.empty_state_visible(), None);
    page.dispatch(UiEvent::KeyDown("Escape".to_string()));
}

#[tokio::test]
async fn colliding_slugs_show_together() {
    let (mut page, _) = rendered(json!({
        "Hot Drinks": {"items": [{"food-title": "Chai"}]},
        "hot drinks": {"items": [{"food-title": "Coffee"}]}
    }))
    .await;
    page.apply_filter(&Filter::category("hot-drinks"));
    assert_eq!(visible_sections(&page), ["hot-drinks", "hot-drinks"]);
}

#[tokio::test]
async fn html_output_contains_rendered_cards() {
    let (page, _) = rendered(sample_menu()).await;
    let html = String::from_utf8(crate::output::render_html(&page)).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<section class=\"menu-section\" id=\"breads-parottas\" style=\"display: block\">"));
    assert!(html.contains("<h2 class=\"menu-category-title\">Breads &amp; Parottas</h2>"));
    assert!(html.contains("<img loading=\"lazy\" alt=\"Samosa\" src=\"img/samosa.jpg\">"));
}

#[tokio::test]
async fn json_summary_reflects_filter() {
    let (mut page, _) = rendered(sample_menu()).await;
    page.apply_filter(&Filter::category("starters"));
    let summary: Value = serde_json::from_slice(&crate::output::render_json(&page)).unwrap();
    assert_eq!(summary["status"], "ready");
    assert_eq!(summary["active_filter"], "starters");
    assert_eq!(summary["empty_state_visible"], false);
    assert_eq!(summary["sections"][0]["visible"], true);
    assert_eq!(summary["sections"][1]["visible"], false);
    assert_eq!(summary["sections"][0]["items"][0]["price_missing"], true);
    assert_eq!(summary["sections"][0]["items"][1]["description"], "Two pieces");
}

#[tokio::test]
async fn text_output_lists_visible_sections() {
    let (mut page, _) = rendered(sample_menu()).await;
    page.apply_filter(&Filter::category("biriyani"));
    let text = String::from_utf8(crate::output::render_text(&page)).unwrap();
    assert!(text.contains("== Briyani (biriyani)"));
    assert!(text.contains("Chicken Biriyani"));
    assert!(!text.contains("Samosa"));
}
