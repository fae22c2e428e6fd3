use itertools::Itertools;
use tracing::debug;

use crate::page::{control_filter, control_label, Action, MenuPage, FILTER_OPTION_CLASS};

impl MenuPage {
    pub fn set_dropdown_open(&mut self, open: bool) {
        let (Some(trigger), Some(menu)) = (self.handles.filter_trigger, self.handles.filter_menu)
        else {
            return;
        };
        self.dom
            .set_attr(trigger, "aria-expanded", if open { "true" } else { "false" });
        self.dom.set_hidden(menu, !open);
    }

    pub fn toggle_dropdown(&mut self) {
        let open = self.dropdown_open();
        self.set_dropdown_open(!open);
    }

    pub(crate) fn wire_filter_dropdown(&mut self) -> bool {
        let (Some(trigger), Some(menu)) = (self.handles.filter_trigger, self.handles.filter_menu)
        else {
            debug!("filter dropdown not present, skipping");
            return false;
        };

        let options = self
            .filter_buttons()
            .into_iter()
            .map(|b| {
                let filter = control_filter(&self.dom, b);
                let label = control_label(&self.dom, b);
                (filter, label)
            })
            .unique_by(|(filter, _)| filter.clone())
            .collect::<Vec<_>>();

        for old in self.dom.descendants(menu) {
            self.click_actions.remove(&old);
        }
        self.dom.clear_children(menu);

        for (filter, label) in options {
            let opt = self.dom.create_element("button");
            self.dom.set_attr(opt, "type", "button");
            self.dom.set_attr(opt, "class", FILTER_OPTION_CLASS);
            self.dom.set_attr(opt, "role", "option");
            self.dom.set_attr(opt, "data-filter", filter.as_str());
            let text = if label.is_empty() {
                filter.as_str().to_string()
            } else {
                label
            };
            self.dom.set_text(opt, &text);
            self.dom.append_child(menu, opt);
            self.bind(opt, Action::SelectOption(filter));
        }

        self.bind(trigger, Action::ToggleDropdown);
        self.dismiss_dropdown = true;
        true
    }
}
