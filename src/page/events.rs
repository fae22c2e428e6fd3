use tracing::debug;

use crate::dom::NodeId;
use crate::filter::{Filter, Scroll};

use super::{control_filter, MenuPage, NAV_CLASS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ApplyFilter(Filter),
    SelectOption(Filter),
    ToggleDropdown,
    CloseMobileNav,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Click(NodeId),
    KeyDown(String),
    ImageError(NodeId),
}

impl MenuPage {
    pub(crate) fn bind(&mut self, node: NodeId, action: Action) {
        self.click_actions.entry(node).or_default().push(action);
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Option<Scroll> {
        match event {
            UiEvent::Click(target) => self.dispatch_click(target),
            UiEvent::KeyDown(key) => {
                if self.dismiss_dropdown && key == "Escape" {
                    self.set_dropdown_open(false);
                }
                None
            }
            UiEvent::ImageError(img) => {
                self.handle_image_error(img);
                None
            }
        }
    }

    fn path_to_root(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut cur = self.dom.parent(target);
        while let Some(n) = cur {
            path.push(n);
            cur = self.dom.parent(n);
        }
        path
    }

    // Clicks run every action bound from the target up to the document, then
    // the document-level dropdown dismissal.
    fn dispatch_click(&mut self, target: NodeId) -> Option<Scroll> {
        let path = self.path_to_root(target);
        let blocked = path
            .iter()
            .any(|n| self.dom.tag(*n) == Some("button") && self.dom.has_attr(*n, "disabled"));
        if blocked {
            debug!("click on disabled control ignored");
            return None;
        }

        if self.dom.tag(target) == Some("input")
            && self.dom.attr(target, "type") == Some("checkbox")
        {
            let checked = self.dom.has_attr(target, "checked");
            self.dom.set_flag(target, "checked", !checked);
        }

        let mut scroll = None;
        for node in path {
            let actions = self.click_actions.get(&node).cloned().unwrap_or_default();
            for action in actions {
                if let Some(s) = self.run_action(action) {
                    scroll = Some(s);
                }
            }
        }

        if self.dismiss_dropdown {
            let inside = [self.handles.filter_trigger, self.handles.filter_menu]
                .into_iter()
                .flatten()
                .any(|n| self.dom.contains(n, target));
            if !inside {
                self.set_dropdown_open(false);
            }
        }
        scroll
    }

    fn run_action(&mut self, action: Action) -> Option<Scroll> {
        match action {
            Action::ApplyFilter(filter) => self.apply_filter(&filter),
            Action::SelectOption(filter) => {
                self.set_dropdown_open(false);
                self.apply_filter(&filter)
            }
            Action::ToggleDropdown => {
                self.toggle_dropdown();
                None
            }
            Action::CloseMobileNav => {
                if let Some(toggle) = self.handles.menu_toggle {
                    self.dom.set_flag(toggle, "checked", false);
                }
                None
            }
        }
    }

    // A src already on the fallback is left alone so a missing fallback cannot loop.
    fn handle_image_error(&mut self, img: NodeId) {
        if !self.image_fallbacks.contains(&img) {
            return;
        }
        let src = self.dom.attr(img, "src").unwrap_or_default();
        if src.ends_with(self.fallback_image.as_str()) {
            return;
        }
        let fallback = self.fallback_image.clone();
        self.dom.set_attr(img, "src", &fallback);
    }

    pub(crate) fn wire_filters(&mut self) {
        for button in self.filter_buttons() {
            let filter = control_filter(&self.dom, button);
            self.bind(button, Action::ApplyFilter(filter));
        }
    }

    pub(crate) fn wire_mobile_nav_close(&mut self) -> bool {
        if self.handles.menu_toggle.is_none() {
            debug!("mobile menu toggle not present, skipping");
            return false;
        }
        let mut links: Vec<NodeId> = Vec::new();
        for nav in self.dom.find_all_by_class(NAV_CLASS) {
            for link in self.dom.find_all(nav, |el| el.tag() == "a") {
                if !links.contains(&link) {
                    links.push(link);
                }
            }
        }
        for link in links {
            self.bind(link, Action::CloseMobileNav);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::menu::Menu;
    use crate::page::PageShell;
    use crate::render::DEFAULT_FALLBACK_IMAGE;

    fn wired_page() -> MenuPage {
        let mut page = MenuPage::new(PageShell::default().build());
        let menu = Menu::from_json(&json!({
            "Starters": {"items": [{"food-title": "Soup", "img-url": "img/soup.jpg"}]},
            "Briyani": {"items": [{"food-title": "Mutton Biriyani"}]}
        }))
        .unwrap();
        page.render_sections(&menu);
        page.wire_filter_dropdown();
        page.wire_filters();
        page.disable_missing_filters();
        page.wire_mobile_nav_close();
        page.apply_filter(&Filter::All);
        page
    }

    fn button(page: &MenuPage, value: &str) -> NodeId {
        page.filter_buttons()
            .into_iter()
            .find(|b| page.dom().attr(*b, "data-filter") == Some(value))
            .unwrap()
    }

    fn option(page: &MenuPage, value: &str) -> NodeId {
        page.dropdown_options()
            .into_iter()
            .find(|o| page.dom().attr(*o, "data-filter") == Some(value))
            .unwrap()
    }

    #[test]
    fn button_click_applies_filter() {
        let mut page = wired_page();
        let b = button(&page, "biriyani");
        let scroll = page.dispatch(UiEvent::Click(b));
        assert_eq!(page.active_filter(), Some(&Filter::category("biriyani")));
        let section = page.dom().get_element_by_id("biriyani").unwrap();
        assert_eq!(scroll, Some(Scroll::IntoView(section)));
        assert!(page.dom().has_class(b, "active"));
    }

    #[test]
    fn click_on_button_text_bubbles_to_button() {
        let mut page = wired_page();
        let b = button(&page, "starters");
        let text = page.dom().children(b)[0];
        page.dispatch(UiEvent::Click(text));
        assert_eq!(page.active_filter(), Some(&Filter::category("starters")));
    }

    #[test]
    fn disabled_button_ignores_clicks() {
        let mut page = wired_page();
        let b = button(&page, "desserts");
        assert_eq!(page.dispatch(UiEvent::Click(b)), None);
        assert_eq!(page.active_filter(), Some(&Filter::All));
    }

    #[test]
    fn trigger_toggles_and_option_closes() {
        let mut page = wired_page();
        let trigger = page.handles().filter_trigger.unwrap();
        page.dispatch(UiEvent::Click(trigger));
        assert!(page.dropdown_open());

        let opt = option(&page, "starters");
        page.dispatch(UiEvent::Click(opt));
        assert!(!page.dropdown_open());
        assert_eq!(page.active_filter(), Some(&Filter::category("starters")));
        assert!(page.dom().has_class(opt, "is-active"));
        let value = page.handles().filter_value.unwrap();
        assert_eq!(page.dom().text_content(value), "Starters");

        page.dispatch(UiEvent::Click(trigger));
        page.dispatch(UiEvent::Click(trigger));
        assert!(!page.dropdown_open());
    }

    #[test]
    fn outside_click_and_escape_close_dropdown() {
        let mut page = wired_page();
        let trigger = page.handles().filter_trigger.unwrap();
        page.dispatch(UiEvent::Click(trigger));
        let body = page.sections()[0];
        page.dispatch(UiEvent::Click(body));
        assert!(!page.dropdown_open());

        page.dispatch(UiEvent::Click(trigger));
        page.dispatch(UiEvent::KeyDown("Enter".to_string()));
        assert!(page.dropdown_open());
        page.dispatch(UiEvent::KeyDown("Escape".to_string()));
        assert!(!page.dropdown_open());
    }

    #[test]
    fn nav_link_unchecks_mobile_toggle() {
        let mut page = wired_page();
        let toggle = page.handles().menu_toggle.unwrap();
        page.dispatch(UiEvent::Click(toggle));
        assert!(page.dom().has_attr(toggle, "checked"));

        let link = page.dom().find_all(page.dom().root(), |el| el.tag() == "a")[0];
        page.dispatch(UiEvent::Click(link));
        assert!(!page.dom().has_attr(toggle, "checked"));
    }

    #[test]
    fn image_error_swaps_to_fallback_once() {
        let mut page = wired_page();
        let imgs = page.dom().find_all(page.dom().root(), |el| el.tag() == "img");
        let soup = imgs[0];
        assert_eq!(page.dom().attr(soup, "src"), Some("img/soup.jpg"));
        page.dispatch(UiEvent::ImageError(soup));
        assert_eq!(page.dom().attr(soup, "src"), Some(DEFAULT_FALLBACK_IMAGE));
        page.dispatch(UiEvent::ImageError(soup));
        assert_eq!(page.dom().attr(soup, "src"), Some(DEFAULT_FALLBACK_IMAGE));

        let biriyani = imgs[1];
        page.dispatch(UiEvent::ImageError(biriyani));
        assert_eq!(page.dom().attr(biriyani, "src"), Some(DEFAULT_FALLBACK_IMAGE));
    }
}
