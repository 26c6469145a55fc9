use showcase_protocol::Viewport;

use super::{SectionGeometry, Signal};

/// Scan sections in document order for a scroll event.
///
/// A section qualifies when its top edge, relative to the top of the
/// viewport, lies in `[0, viewport.height / 2]`. Every qualifying id is
/// reported so the tracker can apply them in order.
pub fn scan(viewport: &Viewport, layout: &[SectionGeometry]) -> Option<Signal> {
    let half = viewport.height / 2.0;
    let qualifying: Vec<_> = layout
        .iter()
        .filter(|section| (0.0..=half).contains(&viewport.relative_top(&section.rect)))
        .map(|section| section.id.clone())
        .collect();
    (!qualifying.is_empty()).then_some(Signal::Scroll(qualifying))
}
