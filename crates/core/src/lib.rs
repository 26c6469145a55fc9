//! Section registry, active-section tracking and page views for the
//! showcase site. Renderer-independent: hosts feed geometry in through
//! [`page::Page::observe`] and paint the protocol types it hands back.

pub mod config;
pub mod host;
pub mod model;
pub mod page;
pub mod tracker;
pub mod views;

pub use config::{PageConfig, SignalConfig};
pub use host::{HostError, ListenerHandle, Mount, ViewportHost};
pub use page::{FrameLayout, Page};
