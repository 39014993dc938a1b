use crate::profile::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};
use crate::view::Section;
use std::collections::BTreeSet;

/// Vertical extent in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub top: u32,
    pub height: u32,
}

impl Span {
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// Fraction of `target` inside `viewport` once the bottom margin is cut off.
pub fn intersection_ratio(target: Span, viewport: Span) -> f32 {
    if target.height == 0 {
        return 0.0;
    }
    let view_bottom = viewport
        .bottom()
        .saturating_sub(REVEAL_BOTTOM_MARGIN_PX)
        .max(viewport.top);
    let top = target.top.max(viewport.top);
    let bottom = target.bottom().min(view_bottom);
    if bottom <= top {
        return 0.0;
    }
    (bottom - top) as f32 / target.height as f32
}

/// Sections move hidden → revealed exactly once.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: BTreeSet<Section>,
}

impl RevealTracker {
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    /// True only on the first qualifying observation.
    pub fn observe(&mut self, section: Section, ratio: f32) -> bool {
        ratio >= REVEAL_THRESHOLD && self.revealed.insert(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Span = Span {
        top: 0,
        height: 600,
    };

    #[test]
    fn test_fully_visible() {
        let s = Span {
            top: 100,
            height: 200,
        };
        assert_eq!(intersection_ratio(s, VIEWPORT), 1.0);
    }

    #[test]
    fn test_bottom_margin_excluded() {
        // Section sits entirely in the last 100px of the viewport.
        let s = Span {
            top: 520,
            height: 400,
        };
        assert_eq!(intersection_ratio(s, VIEWPORT), 0.0);

        let s = Span {
            top: 450,
            height: 500,
        };
        assert!((intersection_ratio(s, VIEWPORT) - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scrolled_past() {
        let viewport = Span {
            top: 1000,
            height: 600,
        };
        let s = Span {
            top: 0,
            height: 500,
        };
        assert_eq!(intersection_ratio(s, viewport), 0.0);
    }

    #[test]
    fn test_reveal_once() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.observe(Section::About, 0.05));
        assert!(tracker.observe(Section::About, 0.1));
        assert!(!tracker.observe(Section::About, 1.0));
        assert!(!tracker.observe(Section::About, 0.0));
        assert!(tracker.is_revealed(Section::About));
        assert!(!tracker.is_revealed(Section::Contact));
    }
}
