use serde::{Deserialize, Serialize};

use crate::dom::{Dom, NodeId};

use super::{
    EMPTY_STATE_ID, FILTER_BUTTON_CLASS, FILTER_MENU_ID, FILTER_TRIGGER_ID, FILTER_VALUE_CLASS,
    MENU_TOGGLE_ID, NAV_CLASS, SECTIONS_ROOT_ID,
};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterControl {
    pub label: String,
    #[serde(default)]
    pub value: String,
}

impl FilterControl {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

pub fn default_filters() -> Vec<FilterControl> {
    vec![
        FilterControl::new("All", "all"),
        FilterControl::new("Starters", "starters"),
        FilterControl::new("Biriyani", "biriyani"),
        FilterControl::new("Breads & Parottas", "breads-parottas"),
        FilterControl::new("Curries", "curries"),
        FilterControl::new("Desserts", "desserts"),
        FilterControl::new("Beverages", "beverages"),
    ]
}

pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "index.html"),
        NavLink::new("Menu", "menu.html"),
        NavLink::new("About", "about.html"),
        NavLink::new("Contact", "contact.html"),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageShell {
    pub title: String,
    pub filters: Vec<FilterControl>,
    pub nav_links: Vec<NavLink>,
    pub dropdown: bool,
    pub mobile_nav: bool,
    pub empty_state: bool,
    pub empty_state_text: String,
}

impl Default for PageShell {
    fn default() -> Self {
        Self {
            title: "Menu".to_string(),
            filters: default_filters(),
            nav_links: default_nav_links(),
            dropdown: true,
            mobile_nav: true,
            empty_state: true,
            empty_state_text: "No items available in this category yet.".to_string(),
        }
    }
}

fn child(dom: &mut Dom, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let node = dom.create_element(tag);
    for (k, v) in attrs {
        dom.set_attr(node, k, v);
    }
    dom.append_child(parent, node);
    node
}

impl PageShell {
    pub fn build(&self) -> Dom {
        let mut dom = Dom::new();
        let root = dom.root();
        let html = child(&mut dom, root, "html", &[("lang", "en")]);

        let head = child(&mut dom, html, "head", &[]);
        child(&mut dom, head, "meta", &[("charset", "utf-8")]);
        child(
            &mut dom,
            head,
            "meta",
            &[
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1.0"),
            ],
        );
        let title = child(&mut dom, head, "title", &[]);
        dom.set_text(title, &self.title);

        let body = child(&mut dom, html, "body", &[]);
        self.build_header(&mut dom, body);

        let main = child(&mut dom, body, "main", &[("class", "menu-page")]);
        self.build_filters(&mut dom, main);
        child(
            &mut dom,
            main,
            "div",
            &[("id", SECTIONS_ROOT_ID), ("class", "menu-sections")],
        );
        if self.empty_state {
            let empty = child(
                &mut dom,
                main,
                "p",
                &[("id", EMPTY_STATE_ID), ("class", "menu-empty-state")],
            );
            dom.set_text(empty, &self.empty_state_text);
            dom.set_hidden(empty, true);
        }
        dom
    }

    fn build_header(&self, dom: &mut Dom, body: NodeId) {
        let header = child(dom, body, "header", &[("class", "site-header")]);
        if self.mobile_nav {
            child(
                dom,
                header,
                "input",
                &[
                    ("type", "checkbox"),
                    ("id", MENU_TOGGLE_ID),
                    ("class", "menu-toggle"),
                ],
            );
            let label = child(
                dom,
                header,
                "label",
                &[
                    ("for", MENU_TOGGLE_ID),
                    ("class", "menu-icon"),
                    ("aria-label", "Toggle navigation"),
                ],
            );
            dom.set_text(label, "\u{2630}");
        }
        let nav = child(dom, header, "nav", &[("class", NAV_CLASS)]);
        for link in &self.nav_links {
            let a = child(dom, nav, "a", &[("href", link.href.as_str())]);
            dom.set_text(a, &link.label);
        }
    }

    fn build_filters(&self, dom: &mut Dom, main: NodeId) {
        let row = child(
            dom,
            main,
            "div",
            &[("class", "menu-filters"), ("role", "toolbar")],
        );
        for control in &self.filters {
            let button = child(
                dom,
                row,
                "button",
                &[("type", "button"), ("class", FILTER_BUTTON_CLASS)],
            );
            if !control.value.is_empty() {
                dom.set_attr(button, "data-filter", &control.value);
            }
            dom.set_text(button, &control.label);
        }

        if !self.dropdown {
            return;
        }
        let wrap = child(dom, main, "div", &[("class", "filter-dd")]);
        let trigger = child(
            dom,
            wrap,
            "button",
            &[
                ("type", "button"),
                ("id", FILTER_TRIGGER_ID),
                ("class", "filter-dd-trigger"),
                ("aria-haspopup", "listbox"),
                ("aria-expanded", "false"),
            ],
        );
        let value = child(dom, trigger, "span", &[("class", FILTER_VALUE_CLASS)]);
        dom.set_text(value, "All");
        let menu = child(
            dom,
            wrap,
            "div",
            &[
                ("id", FILTER_MENU_ID),
                ("class", "filter-dd-menu"),
                ("role", "listbox"),
            ],
        );
        dom.set_hidden(menu, true);
    }
}
