pub mod breadcrumb;
pub mod navigation;
pub mod sections;

pub use breadcrumb::render_breadcrumb;
pub use navigation::{activate, render_navigation};
pub use sections::{render_detail, render_sections, split_description};
