use std::cell::{Cell, RefCell};

use showcase_core::model::SectionId;
use showcase_core::tracker::SignalKind;
use showcase_core::{HostError, ListenerHandle, ViewportHost};
use showcase_protocol::ScrollBehavior;

/// [`ViewportHost`] backed by the page's egui scroll area.
///
/// egui has no element tree to query, so the host remembers which sections
/// were laid out last frame and parks scroll requests until the target is
/// drawn again.
#[derive(Debug, Default)]
pub struct EguiViewport {
    listeners: RefCell<Vec<ListenerHandle>>,
    next_id: Cell<u64>,
    laid_out: RefCell<Vec<SectionId>>,
    pending_scroll: RefCell<Option<(SectionId, ScrollBehavior)>>,
}

impl EguiViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the sections drawn this frame, in document order.
    pub fn record_layout(&self, ids: Vec<SectionId>) {
        *self.laid_out.borrow_mut() = ids;
    }

    /// Take the parked scroll request if it targets `id`.
    pub fn take_scroll_request(&self, id: &str) -> Option<ScrollBehavior> {
        let targets_id = self
            .pending_scroll
            .borrow()
            .as_ref()
            .is_some_and(|(target, _)| target == id);
        if !targets_id {
            return None;
        }
        self.pending_scroll
            .borrow_mut()
            .take()
            .map(|(_, behavior)| behavior)
    }
}

impl ViewportHost for EguiViewport {
    fn add_listener(&self, kind: SignalKind) -> Result<ListenerHandle, HostError> {
        if self.is_listening(kind) {
            return Err(HostError::AlreadyListening(kind));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = ListenerHandle { id, kind };
        self.listeners.borrow_mut().push(handle);
        log::debug!("listening for {kind} signals");
        Ok(handle)
    }

    fn remove_listener(&self, handle: ListenerHandle) {
        self.listeners.borrow_mut().retain(|h| *h != handle);
    }

    fn is_listening(&self, kind: SignalKind) -> bool {
        self.listeners.borrow().iter().any(|h| h.kind == kind)
    }

    fn scroll_into_view(&self, target: &SectionId, behavior: ScrollBehavior) -> bool {
        if !self.laid_out.borrow().contains(target) {
            return false;
        }
        *self.pending_scroll.borrow_mut() = Some((target.clone(), behavior));
        true
    }
}
