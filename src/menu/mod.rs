pub mod slug;

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Number, Value};
use thiserror::Error;
use tracing::warn;

pub use slug::slugify;

pub const TITLE_KEY: &str = "food-title";
pub const DESCRIPTION_KEY: &str = "description";
pub const PRICE_KEY: &str = "food-price";
pub const IMAGE_KEY: &str = "img-url";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu data must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub title: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    pub items: Vec<MenuItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub categories: Vec<Category>,
}

impl Menu {
    pub fn from_json(value: &Value) -> Result<Self, MenuError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(normalize(map)),
            other => Err(MenuError::NotAnObject {
                found: json_kind(other),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn duplicate_slugs(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for c in &self.categories {
            let n = counts.entry(c.slug.as_str()).or_insert(0);
            if *n == 0 {
                order.push(c.slug.as_str());
            }
            *n += 1;
        }
        order
            .into_iter()
            .filter(|s| counts.get(s).copied().unwrap_or(0) > 1)
            .map(|s| s.to_string())
            .collect()
    }
}

// Top-level key order is the render order.
fn normalize(map: &Map<String, Value>) -> Menu {
    let categories = map
        .iter()
        .map(|(name, entry)| Category {
            name: name.clone(),
            slug: slugify(name),
            items: category_items(entry),
        })
        .collect::<Vec<_>>();
    let menu = Menu { categories };
    for slug in menu.duplicate_slugs() {
        warn!(slug = %slug, "several categories share one section id");
    }
    menu
}

fn category_items(entry: &Value) -> Vec<MenuItem> {
    match entry.get("items") {
        Some(Value::Array(items)) => items.iter().map(normalize_item).collect(),
        _ => Vec::new(),
    }
}

fn normalize_item(item: &Value) -> MenuItem {
    MenuItem {
        title: coerce_field(item, TITLE_KEY),
        description: non_empty(coerce_field(item, DESCRIPTION_KEY)),
        price: non_empty(coerce_field(item, PRICE_KEY)),
        image_url: non_empty(coerce_field(item, IMAGE_KEY)),
    }
}

fn coerce_field(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

// `120.0` reads as `120`, the way the page script prints numbers.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
