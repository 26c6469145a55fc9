use showcase_protocol::{NavItem, Navigation, ScrollBehavior, SharedStr};

use crate::host::ViewportHost;
use crate::model::{Registry, SectionId};
use crate::tracker::ActiveSection;

/// One control per section, in registry order; the active one is selected.
pub fn render_navigation(
    registry: &Registry,
    active: &ActiveSection,
    group_label: &SharedStr,
) -> Navigation {
    Navigation {
        group_label: group_label.clone(),
        items: registry
            .iter()
            .map(|record| NavItem {
                id: record.id().clone(),
                title: record.title().clone(),
                selected: active.is(record.id()),
            })
            .collect(),
    }
}

/// Handle a click on the control for `target`: one smooth scroll request.
///
/// The active id is left alone; the tracker picks the new section up from
/// the scroll signals the movement produces.
pub fn activate(host: &dyn ViewportHost, target: &SectionId) -> bool {
    let found = host.scroll_into_view(target, ScrollBehavior::Smooth);
    if !found {
        log::debug!("no element for section '{target}', scroll request dropped");
    }
    found
}
