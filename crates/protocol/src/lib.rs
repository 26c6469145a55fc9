pub mod page;
pub mod shared_str;
pub mod theme;
pub mod types;

pub use page::{
    Breadcrumb, Card, DescriptionBody, NavItem, Navigation, RepositoryBody, ScrollBehavior,
    SectionBlock, SectionDetail, VideoBody,
};
pub use shared_str::SharedStr;
pub use theme::{ThemeMode, ThemeToken};
pub use types::{Rect, Viewport};
