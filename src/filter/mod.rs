pub mod availability;
pub mod dropdown;

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::dom::NodeId;
use crate::page::{control_filter, control_label, MenuPage};

pub const ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL {
            Self::All
        } else {
            Self::Category(raw.to_string())
        }
    }

    pub fn category(slug: &str) -> Self {
        Self::parse(slug)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Category(slug) => slug,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scroll {
    Top,
    IntoView(NodeId),
}

impl MenuPage {
    pub fn apply_filter(&mut self, filter: &Filter) -> Option<Scroll> {
        let matched = self.set_sections_visibility(filter);
        self.sync_buttons(filter);
        self.sync_dropdown_options(filter);
        self.active_filter = Some(filter.clone());
        debug!(filter = %filter, matched = matched.len(), "applied filter");

        match filter {
            Filter::All => Some(Scroll::Top),
            Filter::Category(_) => matched.first().copied().map(Scroll::IntoView),
        }
    }

    fn set_sections_visibility(&mut self, filter: &Filter) -> Vec<NodeId> {
        let sections = self.sections();
        if filter.is_all() {
            for s in &sections {
                self.dom.set_display(*s, "block");
            }
            self.set_empty_state_visible(false);
            return sections;
        }

        let mut matched = Vec::new();
        for s in sections {
            let show = self.dom.attr(s, "id") == Some(filter.as_str());
            self.dom.set_display(s, if show { "block" } else { "none" });
            if show {
                matched.push(s);
            }
        }
        self.set_empty_state_visible(matched.is_empty());
        matched
    }

    fn sync_buttons(&mut self, filter: &Filter) {
        let buttons = self.filter_buttons();
        for b in &buttons {
            self.dom.remove_class(*b, "active");
        }
        let active = buttons
            .into_iter()
            .find(|b| control_filter(&self.dom, *b) == *filter);
        if let Some(b) = active {
            self.dom.add_class(b, "active");
        }

        if let Some(value_el) = self.handles.filter_value {
            let label = active
                .map(|b| control_label(&self.dom, b))
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| "All".to_string());
            self.dom.set_text(value_el, &label);
        }
    }

    fn sync_dropdown_options(&mut self, filter: &Filter) {
        for opt in self.dropdown_options() {
            let on = control_filter(&self.dom, opt) == *filter;
            self.dom.toggle_class(opt, "is-active", on);
        }
    }
}
