use std::rc::Rc;

use showcase_protocol::{Breadcrumb, Navigation, SectionBlock, Viewport};

use crate::config::PageConfig;
use crate::host::{HostError, Mount, ViewportHost};
use crate::model::{Manifest, ManifestError, Registry, SectionId};
use crate::tracker::{
    self, ActiveSection, ActiveSectionTracker, SectionGeometry, SignalKind, VisibilityObserver,
};
use crate::views;

/// What the host measured for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameLayout<'a> {
    pub viewport: Viewport,
    /// Rendered sections, in document order.
    pub sections: &'a [SectionGeometry],
    /// Whether the scroll offset moved since the previous frame.
    pub scrolled: bool,
}

/// Root state of the page.
///
/// Owns the registry and the active section; children get read-only views
/// through the `render_*` methods and report host geometry through
/// [`Page::observe`].
#[derive(Debug)]
pub struct Page {
    registry: Registry,
    config: PageConfig,
    tracker: ActiveSectionTracker,
    observer: VisibilityObserver,
}

impl Page {
    pub fn new(registry: Registry, config: PageConfig) -> Self {
        let config = config.normalized();
        Self {
            tracker: ActiveSectionTracker::new(config.visibility_threshold),
            observer: VisibilityObserver::new(config.visibility_threshold),
            registry,
            config,
        }
    }

    pub fn from_manifest(manifest: Manifest) -> Self {
        Self::new(manifest.registry, manifest.page)
    }

    pub fn builtin() -> Result<Self, ManifestError> {
        let manifest = Manifest::builtin()?;
        log::info!("loaded {} section(s)", manifest.registry.len());
        Ok(Self::from_manifest(manifest))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn active(&self) -> &ActiveSection {
        self.tracker.active()
    }

    /// Subscribe to the configured signals. Observation state starts over,
    /// so sections already in view are reported again.
    pub fn mount(&mut self, host: Rc<dyn ViewportHost>) -> Result<Mount, HostError> {
        self.observer.reset();
        Mount::attach(host, &self.config.signals.enabled_kinds())
    }

    /// Run every producer the host is listening for and apply its signal.
    /// Returns `true` if the active section changed.
    pub fn observe(&mut self, host: &dyn ViewportHost, frame: &FrameLayout<'_>) -> bool {
        let mut changed = false;
        if host.is_listening(SignalKind::Visibility)
            && let Some(signal) = self.observer.observe(&frame.viewport, frame.sections)
        {
            changed |= self.tracker.apply(&self.registry, &signal);
        }
        if frame.scrolled
            && host.is_listening(SignalKind::Scroll)
            && let Some(signal) = tracker::scroll::scan(&frame.viewport, frame.sections)
        {
            changed |= self.tracker.apply(&self.registry, &signal);
        }
        changed
    }

    pub fn breadcrumb(&self) -> Breadcrumb {
        views::render_breadcrumb(&self.registry, self.tracker.active(), &self.config)
    }

    pub fn navigation(&self) -> Navigation {
        views::render_navigation(
            &self.registry,
            self.tracker.active(),
            &self.config.nav_group_label,
        )
    }

    pub fn sections(&self) -> Vec<SectionBlock> {
        views::render_sections(&self.registry, self.tracker.active())
    }

    pub fn navigate(&self, host: &dyn ViewportHost, target: &SectionId) -> bool {
        views::activate(host, target)
    }
}

#[cfg(test)]
mod tests {
    use showcase_protocol::Rect;

    use super::*;
    use crate::config::SignalConfig;
    use crate::host::testing::RecordingHost;
    use crate::model::SectionRecord;

    fn page(signals: SignalConfig) -> Page {
        let registry = Registry::new(vec![
            SectionRecord::new("a", "Alpha"),
            SectionRecord::new("b", "Beta"),
        ])
        .expect("valid registry");
        Page::new(
            registry,
            PageConfig {
                signals,
                ..PageConfig::default()
            },
        )
    }

    fn layout() -> Vec<SectionGeometry> {
        vec![
            SectionGeometry {
                id: "a".into(),
                rect: Rect::new(0.0, 0.0, 800.0, 480.0),
            },
            SectionGeometry {
                id: "b".into(),
                rect: Rect::new(0.0, 480.0, 800.0, 480.0),
            },
        ]
    }

    fn frame(sections: &[SectionGeometry], scroll_y: f64, scrolled: bool) -> FrameLayout<'_> {
        FrameLayout {
            viewport: Viewport {
                x: 0.0,
                y: scroll_y,
                width: 800.0,
                height: 600.0,
            },
            sections,
            scrolled,
        }
    }

    #[test]
    fn nothing_happens_before_mount() {
        let mut page = page(SignalConfig::default());
        let host = RecordingHost::default();
        let sections = layout();
        assert!(!page.observe(&host, &frame(&sections, 0.0, true)));
        assert!(page.active().is_unset());
    }

    #[test]
    fn mounted_page_tracks_visibility() {
        let mut page = page(SignalConfig::default());
        let host = Rc::new(RecordingHost::default());
        let _mount = page.mount(host.clone()).expect("mount");
        let sections = layout();
        assert!(page.observe(&*host, &frame(&sections, 0.0, false)));
        assert!(page.active().is("a"));
        assert_eq!(page.breadcrumb().current, "Alpha");
    }

    #[test]
    fn disabled_scroll_signal_never_applies() {
        let mut page = page(SignalConfig {
            visibility: false,
            scroll: false,
        });
        let host = Rc::new(RecordingHost::default());
        let _mount = page.mount(host.clone()).expect("mount");
        let sections = layout();
        assert!(!page.observe(&*host, &frame(&sections, 300.0, true)));
        assert!(page.active().is_unset());
    }

    #[test]
    fn scroll_only_page_uses_section_tops() {
        let mut page = page(SignalConfig {
            visibility: false,
            scroll: true,
        });
        let host = Rc::new(RecordingHost::default());
        let _mount = page.mount(host.clone()).expect("mount");
        let sections = layout();
        // b's top is 180px below the viewport top, within the upper half.
        assert!(page.observe(&*host, &frame(&sections, 300.0, true)));
        assert!(page.active().is("b"));
        // Without a scroll event the scanner stays quiet.
        assert!(!page.observe(&*host, &frame(&sections, 0.0, false)));
        assert!(page.active().is("b"));
    }

    #[test]
    fn unmounted_page_stops_tracking() {
        let mut page = page(SignalConfig::default());
        let host = Rc::new(RecordingHost::default());
        let mount = page.mount(host.clone()).expect("mount");
        drop(mount);
        let sections = layout();
        assert!(!page.observe(&*host, &frame(&sections, 0.0, true)));
    }
}
