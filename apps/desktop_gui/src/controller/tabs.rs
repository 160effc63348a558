//! Mutually-exclusive tab selection for the page's nav strip.

pub struct NavTab {
    pub id: String,
    pub label: String,
    pub active: bool,
}

pub struct TabContent {
    pub id: String,
    pub visible: bool,
}

/// Nav tabs and their content panels. At most one content panel is visible
/// and exactly one nav tab is marked active after any switch.
pub struct TabStrip {
    nav: Vec<NavTab>,
    contents: Vec<TabContent>,
}

impl TabStrip {
    /// Build from `(id, label)` pairs; the first tab starts visible/active.
    pub fn new<'a>(tabs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut nav = Vec::new();
        let mut contents = Vec::new();
        for (idx, (id, label)) in tabs.into_iter().enumerate() {
            nav.push(NavTab {
                id: id.to_string(),
                label: label.to_string(),
                active: idx == 0,
            });
            contents.push(TabContent {
                id: id.to_string(),
                visible: idx == 0,
            });
        }
        Self { nav, contents }
    }

    /// Hide every content panel, reveal the one matching `target_id` (silent
    /// no-op when absent), then move the active marker to the nav tab that was
    /// clicked. The activating tab is passed explicitly rather than read from
    /// ambient event state.
    pub fn switch_to(&mut self, target_id: &str, activated_nav: usize) {
        for content in &mut self.contents {
            content.visible = false;
        }
        if let Some(content) = self.contents.iter_mut().find(|c| c.id == target_id) {
            content.visible = true;
        }
        if activated_nav < self.nav.len() {
            for tab in &mut self.nav {
                tab.active = false;
            }
            self.nav[activated_nav].active = true;
        }
    }

    pub fn nav(&self) -> &[NavTab] {
        &self.nav
    }

    pub fn visible_content(&self) -> Option<&str> {
        self.contents
            .iter()
            .find(|c| c.visible)
            .map(|c| c.id.as_str())
    }

    #[cfg(test)]
    pub fn active_nav(&self) -> Option<usize> {
        self.nav.iter().position(|t| t.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> TabStrip {
        TabStrip::new([
            ("orders", "Orders"),
            ("new-order", "New Order"),
            ("menu", "Menu"),
            ("customers", "Customers"),
            ("tables", "Tables"),
        ])
    }

    #[test]
    fn switching_keeps_exactly_one_visible_and_one_active() {
        let mut tabs = strip();
        for (idx, id) in ["menu", "orders", "tables"].iter().enumerate() {
            tabs.switch_to(id, idx);
            assert_eq!(tabs.visible_content(), Some(*id));
            assert_eq!(tabs.nav().iter().filter(|t| t.active).count(), 1);
            assert_eq!(tabs.active_nav(), Some(idx));
        }
    }

    #[test]
    fn unknown_target_hides_everything_but_does_not_fail() {
        let mut tabs = strip();
        tabs.switch_to("reports", 1);
        assert_eq!(tabs.visible_content(), None);
        // the active marker still moved to the clicked nav tab
        assert_eq!(tabs.active_nav(), Some(1));
    }

    #[test]
    fn out_of_range_nav_index_leaves_marker_untouched() {
        let mut tabs = strip();
        tabs.switch_to("menu", 99);
        assert_eq!(tabs.visible_content(), Some("menu"));
        assert_eq!(tabs.active_nav(), Some(0));
    }
}
