use serde::Serialize;

use crate::filter::Filter;
use crate::page::{MenuPage, PageStatus};
use crate::render;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
    Text,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "json" => Some(Self::Json),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Debug, Serialize)]
pub struct ItemRecord {
    pub title: String,
    pub price: String,
    pub price_missing: bool,
    pub description: Option<String>,
    pub image: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SectionRecord {
    pub id: String,
    pub title: String,
    pub visible: bool,
    pub items: Vec<ItemRecord>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PageSummary {
    pub status: PageStatus,
    pub active_filter: Option<Filter>,
    pub empty_state_visible: Option<bool>,
    pub sections: Vec<SectionRecord>,
    pub disabled_filters: Vec<String>,
}

fn first_text(page: &MenuPage, scope: crate::dom::NodeId, class: &str) -> Option<String> {
    page.dom()
        .find_first_by_class(scope, class)
        .map(|n| page.dom().text_content(n))
}

pub fn summarize(page: &MenuPage) -> PageSummary {
    let dom = page.dom();
    let sections = page
        .sections()
        .into_iter()
        .filter_map(|s| {
            let id = dom.attr(s, "id")?.to_string();
            let items = dom
                .find_all(s, |el| el.has_class(render::CARD_CLASS))
                .into_iter()
                .map(|card| {
                    let price_el = dom.find_first_by_class(card, "menu-item-price");
                    ItemRecord {
                        title: first_text(page, card, "menu-item-name").unwrap_or_default(),
                        price: price_el.map(|p| dom.text_content(p)).unwrap_or_default(),
                        price_missing: price_el
                            .map(|p| dom.has_class(p, "is-empty"))
                            .unwrap_or(true),
                        description: first_text(page, card, "menu-item-description"),
                        image: dom
                            .find_all(card, |el| el.tag() == "img")
                            .first()
                            .and_then(|img| dom.attr(*img, "src"))
                            .unwrap_or_default()
                            .to_string(),
                    }
                })
                .collect();
            Some(SectionRecord {
                id,
                title: first_text(page, s, render::SECTION_TITLE_CLASS).unwrap_or_default(),
                visible: page.is_visible(s),
                items,
            })
        })
        .collect();

    PageSummary {
        status: page.status(),
        active_filter: page.active_filter().cloned(),
        empty_state_visible: page.empty_state_visible(),
        sections,
        disabled_filters: page.disabled_filters(),
    }
}

pub fn render_html(page: &MenuPage) -> Vec<u8> {
    page.to_html().into_bytes()
}

pub fn render_json(page: &MenuPage) -> Vec<u8> {
    let mut out = serde_json::to_vec_pretty(&summarize(page)).unwrap_or_else(|_| b"{}".to_vec());
    out.push(b'\n');
    out
}

pub fn render_text(page: &MenuPage) -> Vec<u8> {
    let summary = summarize(page);
    let mut out = String::new();
    match summary.status {
        PageStatus::Failed => {
            out.push_str(render::LOAD_ERROR_TITLE);
            out.push('\n');
        }
        PageStatus::Empty => {
            out.push_str(render::UNAVAILABLE_TITLE);
            out.push('\n');
        }
        _ => {}
    }
    for s in summary.sections.iter().filter(|s| s.visible) {
        out.push_str(&format!("== {} ({})\n", s.title, s.id));
        for item in &s.items {
            out.push_str(&format!("  {:<40} {}\n", item.title, item.price));
            if let Some(d) = item.description.as_deref() {
                out.push_str(&format!("    {d}\n"));
            }
        }
    }
    if summary.empty_state_visible == Some(true) && summary.status == PageStatus::Ready {
        out.push_str("(no items in this category)\n");
    }
    out.into_bytes()
}

pub fn render(page: &MenuPage, format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Html => render_html(page),
        OutputFormat::Json => render_json(page),
        OutputFormat::Text => render_text(page),
    }
}
