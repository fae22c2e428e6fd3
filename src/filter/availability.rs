use std::collections::HashSet;

use tracing::debug;

use crate::page::{control_filter, MenuPage};

pub const NO_ITEMS_TOOLTIP: &str = "No items available";

impl MenuPage {
    pub(crate) fn disable_missing_filters(&mut self) -> usize {
        let rendered: HashSet<String> = self.section_ids().into_iter().collect();
        let mut controls = self.filter_buttons();
        controls.extend(self.dropdown_options());

        let mut disabled = 0;
        for control in controls {
            let filter = control_filter(&self.dom, control);
            if filter.is_all() || rendered.contains(filter.as_str()) {
                continue;
            }
            self.dom.set_flag(control, "disabled", true);
            self.dom.set_attr(control, "title", NO_ITEMS_TOOLTIP);
            disabled += 1;
        }
        debug!(disabled, "disabled filters without sections");
        disabled
    }

    pub fn disabled_filters(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut controls = self.filter_buttons();
        controls.extend(self.dropdown_options());
        controls
            .into_iter()
            .filter(|c| self.dom.has_attr(*c, "disabled"))
            .map(|c| control_filter(&self.dom, c).as_str().to_string())
            .filter(|f| seen.insert(f.clone()))
            .collect()
    }
}
