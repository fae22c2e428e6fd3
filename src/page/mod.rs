pub mod events;
pub mod shell;

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::dom::{Dom, NodeId};
use crate::filter::Filter;
use crate::menu::Menu;
use crate::render;

pub use events::{Action, UiEvent};
pub use shell::{FilterControl, NavLink, PageShell};

pub const SECTIONS_ROOT_ID: &str = "menu-sections";
pub const EMPTY_STATE_ID: &str = "menu-empty-state";
pub const FILTER_TRIGGER_ID: &str = "menu-filter-trigger";
pub const FILTER_VALUE_CLASS: &str = "filter-dd-value";
pub const FILTER_MENU_ID: &str = "menu-filter-options";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";

pub const FILTER_BUTTON_CLASS: &str = "filter-btn";
pub const FILTER_OPTION_CLASS: &str = "filter-dd-option";
pub const NAV_CLASS: &str = "nav";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageHandles {
    pub sections_root: Option<NodeId>,
    pub empty_state: Option<NodeId>,
    pub filter_trigger: Option<NodeId>,
    pub filter_value: Option<NodeId>,
    pub filter_menu: Option<NodeId>,
    pub menu_toggle: Option<NodeId>,
}

impl PageHandles {
    pub fn locate(dom: &Dom) -> Self {
        let filter_trigger = dom.get_element_by_id(FILTER_TRIGGER_ID);
        Self {
            sections_root: dom.get_element_by_id(SECTIONS_ROOT_ID),
            empty_state: dom.get_element_by_id(EMPTY_STATE_ID),
            filter_trigger,
            filter_value: filter_trigger
                .and_then(|t| dom.find_first_by_class(t, FILTER_VALUE_CLASS)),
            filter_menu: dom.get_element_by_id(FILTER_MENU_ID),
            menu_toggle: dom.get_element_by_id(MENU_TOGGLE_ID),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Blank,
    Loading,
    Ready,
    Empty,
    Failed,
}

#[derive(Debug, Clone)]
pub struct MenuPage {
    pub(crate) dom: Dom,
    pub(crate) handles: PageHandles,
    pub(crate) fallback_image: String,
    pub(crate) click_actions: HashMap<NodeId, Vec<Action>>,
    pub(crate) image_fallbacks: HashSet<NodeId>,
    pub(crate) dismiss_dropdown: bool,
    pub(crate) active_filter: Option<Filter>,
    pub(crate) status: PageStatus,
}

impl MenuPage {
    pub fn new(dom: Dom) -> Self {
        let handles = PageHandles::locate(&dom);
        Self {
            dom,
            handles,
            fallback_image: render::DEFAULT_FALLBACK_IMAGE.to_string(),
            click_actions: HashMap::new(),
            image_fallbacks: HashSet::new(),
            dismiss_dropdown: false,
            active_filter: None,
            status: PageStatus::Blank,
        }
    }

    pub fn with_fallback_image(mut self, path: &str) -> Self {
        self.fallback_image = path.to_string();
        self
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn handles(&self) -> &PageHandles {
        &self.handles
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn fallback_image(&self) -> &str {
        &self.fallback_image
    }

    pub fn active_filter(&self) -> Option<&Filter> {
        self.active_filter.as_ref()
    }

    pub fn sections(&self) -> Vec<NodeId> {
        self.dom.find_all_by_class(render::SECTION_CLASS)
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections()
            .into_iter()
            .filter_map(|s| self.dom.attr(s, "id").map(|id| id.to_string()))
            .collect()
    }

    pub fn filter_buttons(&self) -> Vec<NodeId> {
        self.dom.find_all_by_class(FILTER_BUTTON_CLASS)
    }

    pub fn dropdown_options(&self) -> Vec<NodeId> {
        match self.handles.filter_menu {
            Some(menu) => self
                .dom
                .find_all(menu, |el| el.has_class(FILTER_OPTION_CLASS)),
            None => Vec::new(),
        }
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        !self.dom.is_hidden(node) && self.dom.display(node) != Some("none")
    }

    pub fn empty_state_visible(&self) -> Option<bool> {
        self.handles.empty_state.map(|e| !self.dom.is_hidden(e))
    }

    pub fn dropdown_open(&self) -> bool {
        self.handles
            .filter_trigger
            .and_then(|t| self.dom.attr(t, "aria-expanded"))
            == Some("true")
    }

    pub fn to_html(&self) -> String {
        self.dom.document_html()
    }

    pub(crate) fn set_empty_state_visible(&mut self, visible: bool) {
        if let Some(empty) = self.handles.empty_state {
            self.dom.set_hidden(empty, !visible);
        }
    }

    fn replace_sections(&mut self, section: Option<NodeId>) {
        if let Some(root) = self.handles.sections_root {
            self.dom.clear_children(root);
            if let Some(section) = section {
                self.dom.append_child(root, section);
            }
        }
    }

    pub(crate) fn show_loading(&mut self) {
        let section = render::create_placeholder_section(&mut self.dom, render::LOADING_TITLE);
        self.replace_sections(Some(section));
        self.status = PageStatus::Loading;
    }

    pub(crate) fn show_unavailable(&mut self) {
        let section = render::create_placeholder_section(&mut self.dom, render::UNAVAILABLE_TITLE);
        self.replace_sections(Some(section));
        self.set_empty_state_visible(true);
        self.status = PageStatus::Empty;
    }

    pub(crate) fn show_load_error(&mut self) {
        let section = render::create_load_error_section(&mut self.dom);
        self.replace_sections(Some(section));
        self.status = PageStatus::Failed;
    }

    pub(crate) fn render_sections(&mut self, menu: &Menu) {
        let Some(root) = self.handles.sections_root else {
            return;
        };
        self.dom.clear_children(root);
        for category in &menu.categories {
            let section =
                render::create_menu_section(&mut self.dom, category, &self.fallback_image);
            self.dom.append_child(root, section);
        }
        for img in self.dom.find_all(root, |el| el.tag() == "img") {
            self.image_fallbacks.insert(img);
        }
        debug!(
            categories = menu.categories.len(),
            items = menu.item_count(),
            "rendered menu sections"
        );
        self.status = PageStatus::Ready;
    }
}

// A missing or empty data-filter means all.
pub(crate) fn control_filter(dom: &Dom, node: NodeId) -> Filter {
    Filter::parse(dom.attr(node, "data-filter").unwrap_or_default())
}

pub(crate) fn control_label(dom: &Dom, node: NodeId) -> String {
    dom.text_content(node).trim().to_string()
}
