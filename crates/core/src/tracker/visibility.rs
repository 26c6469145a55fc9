use std::collections::HashMap;

use showcase_protocol::Viewport;

use super::{SectionGeometry, Signal};
use crate::model::SectionId;

/// One section's visibility at the moment it crossed the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub id: SectionId,
    /// Visible fraction of the section's area, in `[0, 1]`.
    pub ratio: f64,
}

/// Reports sections whose visible fraction crosses a threshold.
///
/// Behaves like a browser intersection observer with a single threshold:
/// an entry is delivered only when a section moves from below to at-or-above
/// the threshold, or back. A section seen for the first time is reported
/// only if it is already at or above the threshold.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f64,
    above: HashMap<SectionId, bool>,
}

impl VisibilityObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            above: HashMap::new(),
        }
    }

    /// Forget every previous observation.
    pub fn reset(&mut self) {
        self.above.clear();
    }

    /// Observe the current layout. Returns `None` when nothing crossed.
    pub fn observe(&mut self, viewport: &Viewport, layout: &[SectionGeometry]) -> Option<Signal> {
        let mut entries = Vec::new();
        for section in layout {
            let ratio = viewport.visible_ratio(&section.rect);
            let is_above = ratio >= self.threshold;
            let previous = self.above.insert(section.id.clone(), is_above);
            let crossed = match previous {
                Some(was_above) => was_above != is_above,
                None => is_above,
            };
            if crossed {
                entries.push(IntersectionEntry {
                    id: section.id.clone(),
                    ratio,
                });
            }
        }

        // Sections no longer laid out start fresh if they come back.
        if self.above.len() > layout.len() {
            self.above
                .retain(|id, _| layout.iter().any(|section| &section.id == id));
        }

        (!entries.is_empty()).then_some(Signal::Visibility(entries))
    }
}
