//! Section Tracker
//!
//! Which page section is highlighted in the navigation. Two sources write
//! the same value: explicit navigation clicks and the scrollspy. The most
//! recent write wins; a click on a distant section while a scroll is still
//! settling can briefly flicker back. That is accepted as is.

/// What caused an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// User picked a navigation control
    Navigate,
    /// Scrollspy saw the section reach the top of the viewport
    Observed,
}

/// Active section over a fixed, ordered set of section ids
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    sections: Vec<String>,
    active: String,
}

impl SectionTracker {
    /// Start with the first section active.
    ///
    /// `sections` must not be empty; the catalog always supplies the info section.
    pub fn new(sections: Vec<String>) -> Self {
        let active = sections.first().cloned().unwrap_or_default();
        Self { sections, active }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    /// Overwrite the active id. Unknown ids are ignored.
    /// Returns whether the active id changed.
    pub fn activate(&mut self, id: &str, source: Activation) -> bool {
        if !self.contains(id) {
            log::warn!("[SECTION] ignoring unknown section '{}' ({:?})", id, source);
            return false;
        }
        if self.active == id {
            return false;
        }
        log::debug!("[SECTION] {} -> {} ({:?})", self.active, id, source);
        self.active = id.to_string();
        true
    }

    pub fn navigate(&mut self, id: &str) -> bool {
        self.activate(id, Activation::Navigate)
    }

    pub fn observe(&mut self, id: &str) -> bool {
        self.activate(id, Activation::Observed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_scrollspy::Subscription;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn make_tracker() -> SectionTracker {
        SectionTracker::new(
            ["infos", "pizza", "pasta", "drinks"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_initial_section_is_first() {
        let tracker = make_tracker();
        assert_eq!(tracker.active(), "infos");
        assert!(tracker.is_active("infos"));
    }

    #[test]
    fn test_navigate_sets_active_synchronously() {
        let mut tracker = make_tracker();
        assert!(tracker.navigate("drinks"));
        assert_eq!(tracker.active(), "drinks");
    }

    #[test]
    fn test_last_write_wins() {
        let mut tracker = make_tracker();
        tracker.observe("pizza");
        tracker.navigate("drinks");
        assert_eq!(tracker.active(), "drinks");

        // A queued observation from the previous scroll still lands afterwards
        tracker.observe("pasta");
        assert_eq!(tracker.active(), "pasta");
    }

    #[test]
    fn test_unknown_section_ignored() {
        let mut tracker = make_tracker();
        tracker.navigate("pasta");
        assert!(!tracker.navigate("desserts"));
        assert!(!tracker.observe(""));
        assert_eq!(tracker.active(), "pasta");
    }

    #[test]
    fn test_reactivating_same_section_reports_no_change() {
        let mut tracker = make_tracker();
        assert!(!tracker.navigate("infos"));
        assert!(tracker.observe("pizza"));
        assert!(!tracker.observe("pizza"));
    }

    #[test]
    fn test_no_changes_after_teardown() {
        let tracker = Rc::new(RefCell::new(make_tracker()));
        let sub = Subscription::new();

        let feed = |id: &str| {
            let tracker = tracker.clone();
            let id = id.to_string();
            sub.deliver(move || {
                tracker.borrow_mut().observe(&id);
            })
        };

        assert!(feed("pizza"));
        assert_eq!(tracker.borrow().active(), "pizza");

        // Page unmounted
        sub.cancel();
        assert!(!feed("pasta"));
        assert!(!feed("drinks"));
        assert_eq!(tracker.borrow().active(), "pizza");

        // Navigation still works without the watch
        tracker.borrow_mut().navigate("drinks");
        assert_eq!(tracker.borrow().active(), "drinks");
    }
}
