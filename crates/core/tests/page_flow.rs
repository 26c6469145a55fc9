//! End-to-end: a page mounted on a fake host, driven by viewport frames,
//! checked through the header, navigation and section views.

use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::model::{Manifest, Registry, SectionId, SectionRecord};
use showcase_core::page::{FrameLayout, Page};
use showcase_core::tracker::{SectionGeometry, SignalKind};
use showcase_core::{HostError, ListenerHandle, PageConfig, ViewportHost};
use showcase_protocol::{
    DescriptionBody, Rect, RepositoryBody, ScrollBehavior, VideoBody, Viewport,
};

const SECTION_HEIGHT: f64 = 480.0;

/// Host that lays sections out top to bottom and scrolls instantly.
#[derive(Default)]
struct StackedHost {
    listeners: RefCell<Vec<ListenerHandle>>,
    sections: Vec<SectionGeometry>,
    scroll_y: RefCell<f64>,
    requests: RefCell<Vec<SectionId>>,
}

impl StackedHost {
    fn new(registry: &Registry) -> Self {
        let sections = registry
            .ids()
            .enumerate()
            .map(|(i, id)| SectionGeometry {
                id: id.clone(),
                rect: Rect::new(0.0, i as f64 * SECTION_HEIGHT, 800.0, SECTION_HEIGHT),
            })
            .collect();
        Self {
            sections,
            ..Self::default()
        }
    }

    fn frame(&self, scrolled: bool) -> FrameLayout<'_> {
        FrameLayout {
            viewport: Viewport {
                x: 0.0,
                y: *self.scroll_y.borrow(),
                width: 800.0,
                height: 600.0,
            },
            sections: &self.sections,
            scrolled,
        }
    }
}

impl ViewportHost for StackedHost {
    fn add_listener(&self, kind: SignalKind) -> Result<ListenerHandle, HostError> {
        let mut listeners = self.listeners.borrow_mut();
        let handle = ListenerHandle {
            id: listeners.len() as u64,
            kind,
        };
        listeners.push(handle);
        Ok(handle)
    }

    fn remove_listener(&self, handle: ListenerHandle) {
        self.listeners.borrow_mut().retain(|h| *h != handle);
    }

    fn is_listening(&self, kind: SignalKind) -> bool {
        self.listeners.borrow().iter().any(|h| h.kind == kind)
    }

    fn scroll_into_view(&self, target: &SectionId, _behavior: ScrollBehavior) -> bool {
        self.requests.borrow_mut().push(target.clone());
        match self.sections.iter().find(|s| &s.id == target) {
            Some(section) => {
                *self.scroll_y.borrow_mut() = section.rect.top();
                true
            }
            None => false,
        }
    }
}

#[test]
fn single_section_example() {
    let registry = Registry::new(vec![
        SectionRecord::new("a", "Sanamente").with_video("https://x/embed/1"),
    ])
    .expect("valid registry");
    let mut page = Page::new(registry, PageConfig::default());
    let host = Rc::new(StackedHost::new(page.registry()));

    // No viewport events yet.
    assert_eq!(page.breadcrumb().current, "Home");
    assert!(page.sections().iter().all(|b| b.detail.is_none()));

    // The section is 480px tall inside a 600px viewport: fully visible.
    let _mount = page.mount(host.clone()).expect("mount");
    assert!(page.observe(&*host, &host.frame(false)));
    assert_eq!(page.breadcrumb().current, "Sanamente");

    let sections = page.sections();
    let detail = sections[0].detail.as_ref().expect("active section expands");
    assert_eq!(
        detail.video.body,
        VideoBody::Embed {
            url: "https://x/embed/1".into()
        }
    );
    assert!(matches!(
        &detail.repository.body,
        RepositoryBody::Missing { message } if message == "No repository link found."
    ));
    assert!(matches!(
        &detail.description.body,
        DescriptionBody::Missing { message } if message == "No description available."
    ));
}

#[test]
fn navigation_round_trip_through_the_host() {
    let manifest = Manifest::builtin().expect("builtin manifest");
    let mut page = Page::from_manifest(manifest);
    let host = Rc::new(StackedHost::new(page.registry()));
    let _mount = page.mount(host.clone()).expect("mount");

    page.observe(&*host, &host.frame(false));
    assert!(page.active().is("section-1"));

    // Clicking the third entry moves the viewport; the next frame picks it up.
    assert!(page.navigate(&*host, &"section-3".into()));
    assert_eq!(host.requests.borrow().len(), 1);
    assert!(page.observe(&*host, &host.frame(true)));
    assert!(page.active().is("section-3"));

    let nav = page.navigation();
    let selected: Vec<_> = nav.items.iter().filter(|i| i.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].title, page.breadcrumb().current);

    let expanded = page.sections().iter().filter(|b| b.detail.is_some()).count();
    assert_eq!(expanded, 1);
}

#[test]
fn stale_navigation_target_is_ignored() {
    let mut page = Page::builtin().expect("builtin page");
    let host = Rc::new(StackedHost::new(page.registry()));
    let _mount = page.mount(host.clone()).expect("mount");
    page.observe(&*host, &host.frame(false));

    assert!(!page.navigate(&*host, &"section-9".into()));
    assert!(!page.observe(&*host, &host.frame(true)));
    assert!(page.active().is("section-1"));
}

#[test]
fn builtin_descriptions_render_one_paragraph_per_line() {
    let registry = Registry::builtin().expect("builtin registry");
    for record in registry.iter() {
        let detail = showcase_core::views::render_detail(&registry, record.id());
        let DescriptionBody::Paragraphs(lines) = detail.description.body else {
            panic!("{} should have a description", record.id());
        };
        assert!(lines.len() >= 2);
        assert!(lines.iter().all(|line| !line.is_blank()));
    }
}
