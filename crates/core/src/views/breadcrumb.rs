use showcase_protocol::Breadcrumb;

use crate::config::PageConfig;
use crate::model::Registry;
use crate::tracker::ActiveSection;

/// Header crumbs: the root label, then the active section's title or the
/// default label when nothing (or nothing known) is active.
pub fn render_breadcrumb(
    registry: &Registry,
    active: &ActiveSection,
    config: &PageConfig,
) -> Breadcrumb {
    let current = active
        .id()
        .and_then(|id| registry.find(id))
        .map_or_else(|| config.default_label.clone(), |record| record.title().clone());
    Breadcrumb {
        root: config.root_label.clone(),
        current,
    }
}
