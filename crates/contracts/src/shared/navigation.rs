//! Scroll geometry for the single-page navigation: which section is in view,
//! where an anchor jump should land, and scroll-event throttling.

use serde::{Deserialize, Serialize};

/// Position of a page section, in document pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let start = self.top - offset;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Id of the section currently scrolled into view.
///
/// Sections are scanned in document order; when several match, the last one
/// wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.contains(scroll_y, offset))
        .map(|s| s.id.as_str())
}

/// `href` of the nav link for a section id.
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

/// Strips the leading `#` from an in-page anchor. Other hrefs yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section just below the fixed navbar.
pub fn smooth_scroll_target(section_top: f64, navbar_offset: f64) -> f64 {
    section_top - navbar_offset
}

/// Trailing-edge throttle for scroll handlers.
///
/// The first event while idle schedules a run after the interval; events
/// arriving while a run is pending are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrottleGate {
    pending: bool,
}

impl ThrottleGate {
    /// Returns `true` when the caller must schedule the handler.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Marks the scheduled run as done.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("about", 600.0, 800.0),
            SectionBounds::new("contact", 1400.0, 500.0),
        ]
    }

    #[test]
    fn test_active_section_uses_offset() {
        let sections = page();
        assert_eq!(active_section(0.0, &sections, 100.0), Some("home"));
        assert_eq!(active_section(499.0, &sections, 100.0), Some("home"));
        assert_eq!(active_section(500.0, &sections, 100.0), Some("about"));
        assert_eq!(active_section(1300.0, &sections, 100.0), Some("contact"));
    }

    #[test]
    fn test_active_section_none_past_the_end() {
        assert_eq!(active_section(1800.0, &page(), 100.0), None);
        assert_eq!(active_section(10.0, &[], 100.0), None);
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 1000.0),
            SectionBounds::new("b", 200.0, 100.0),
        ];
        assert_eq!(active_section(150.0, &sections, 0.0), Some("a"));
        assert_eq!(active_section(250.0, &sections, 0.0), Some("b"));
    }

    #[test]
    fn test_anchor_helpers() {
        assert_eq!(section_href("about"), "#about");
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }

    #[test]
    fn test_smooth_scroll_target() {
        assert_eq!(smooth_scroll_target(600.0, 70.0), 530.0);
        assert_eq!(smooth_scroll_target(20.0, 70.0), -50.0);
    }

    #[test]
    fn test_throttle_gate() {
        let mut gate = ThrottleGate::default();
        assert!(gate.request());
        assert!(gate.is_pending());
        assert!(!gate.request());
        assert!(!gate.request());
        gate.complete();
        assert!(gate.request());
    }
}
