//! Active-section tracking.
//!
//! Two independent producers turn viewport geometry into [`Signal`]s:
//! [`VisibilityObserver`] reports sections crossing a visible-area
//! threshold, [`scroll::scan`] reports sections whose top edge sits in the
//! upper half of the viewport. [`ActiveSectionTracker`] consumes both and
//! keeps the last qualifying id. The two producers are not ordered relative
//! to each other.

pub mod scroll;
pub mod visibility;

use std::fmt;

use serde::{Deserialize, Serialize};
use showcase_protocol::Rect;

use crate::model::{Registry, SectionId};

pub use visibility::{IntersectionEntry, VisibilityObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    Visibility,
    Scroll,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Visibility => f.write_str("visibility"),
            SignalKind::Scroll => f.write_str("scroll"),
        }
    }
}

/// Where a rendered section currently sits on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGeometry {
    pub id: SectionId,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// One observation batch, in delivery order.
    Visibility(Vec<IntersectionEntry>),
    /// Sections qualifying on a scroll event, in document order.
    Scroll(Vec<SectionId>),
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Visibility(_) => SignalKind::Visibility,
            Signal::Scroll(_) => SignalKind::Scroll,
        }
    }
}

/// The id of the section currently considered in view, or unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSection(Option<SectionId>);

impl ActiveSection {
    pub fn unset() -> Self {
        Self(None)
    }

    pub fn id(&self) -> Option<&SectionId> {
        self.0.as_ref()
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    pub fn is(&self, id: &str) -> bool {
        self.0.as_ref().is_some_and(|active| active == id)
    }
}

/// Sole writer of [`ActiveSection`].
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    active: ActiveSection,
    threshold: f64,
}

impl ActiveSectionTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            active: ActiveSection::unset(),
            threshold,
        }
    }

    pub fn active(&self) -> &ActiveSection {
        &self.active
    }

    /// Apply a signal, last write wins. Returns `true` if the active id
    /// changed.
    ///
    /// Ids the registry does not know are skipped, as are visibility entries
    /// below the threshold.
    pub fn apply(&mut self, registry: &Registry, signal: &Signal) -> bool {
        let candidates: Vec<&SectionId> = match signal {
            Signal::Visibility(entries) => entries
                .iter()
                .filter(|entry| entry.ratio >= self.threshold)
                .map(|entry| &entry.id)
                .collect(),
            Signal::Scroll(ids) => ids.iter().collect(),
        };

        let before = self.active.clone();
        for id in candidates {
            if !registry.contains(id) {
                log::debug!("ignoring {} signal for unknown section '{id}'", signal.kind());
                continue;
            }
            self.active = ActiveSection(Some(id.clone()));
        }

        let changed = self.active != before;
        if changed {
            log::debug!(
                "active section {:?} -> {:?} ({} signal)",
                before.id(),
                self.active.id(),
                signal.kind()
            );
        }
        changed
    }
}
