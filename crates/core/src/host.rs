use std::rc::Rc;

use showcase_protocol::ScrollBehavior;
use thiserror::Error;

use crate::model::SectionId;
use crate::tracker::SignalKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("a {0} listener is already registered")]
    AlreadyListening(SignalKind),
    #[error("host cannot deliver {0} signals")]
    Unsupported(SignalKind),
}

/// Token for one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle {
    pub id: u64,
    pub kind: SignalKind,
}

/// The environment the page is rendered into.
///
/// Methods take `&self`: hosts live behind an `Rc` shared with the
/// [`Mount`] that owns their listeners, and keep their bookkeeping in
/// cells.
pub trait ViewportHost {
    fn add_listener(&self, kind: SignalKind) -> Result<ListenerHandle, HostError>;

    fn remove_listener(&self, handle: ListenerHandle);

    fn is_listening(&self, kind: SignalKind) -> bool;

    /// Ask the host to bring the section into view. Returns `false` when the
    /// host has no such element; that is not an error.
    fn scroll_into_view(&self, target: &SectionId, behavior: ScrollBehavior) -> bool;
}

/// Listener registrations held for the page's visible lifetime.
///
/// Every listener taken by [`Mount::attach`] is released when the mount is
/// dropped, including when `attach` itself fails part way.
pub struct Mount {
    host: Rc<dyn ViewportHost>,
    handles: Vec<ListenerHandle>,
}

impl Mount {
    pub fn attach(host: Rc<dyn ViewportHost>, kinds: &[SignalKind]) -> Result<Self, HostError> {
        let mut mount = Self {
            host,
            handles: Vec::with_capacity(kinds.len()),
        };
        for &kind in kinds {
            let handle = mount
                .host
                .add_listener(kind)
                .inspect_err(|e| log::warn!("failed to subscribe: {e}"))?;
            mount.handles.push(handle);
        }
        log::info!("mounted with {} listener(s)", mount.handles.len());
        Ok(mount)
    }

    pub fn handles(&self) -> &[ListenerHandle] {
        &self.handles
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        let released = self.handles.len();
        for handle in self.handles.drain(..).rev() {
            self.host.remove_listener(handle);
        }
        log::info!("unmounted, released {released} listener(s)");
    }
}

impl std::fmt::Debug for Mount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mount").field("handles", &self.handles).finish()
    }
}
