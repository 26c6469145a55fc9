use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;

/// Header label pair: the fixed root crumb and the current page label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub root: SharedStr,
    pub current: SharedStr,
}

/// One control in the side navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: SharedStr,
    pub title: SharedStr,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    pub group_label: SharedStr,
    pub items: Vec<NavItem>,
}

impl Navigation {
    pub fn selected(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.selected)
    }
}

/// A section as laid out on the page.
///
/// `detail` is `Some` only for the active section; every other section is
/// an empty placeholder that still occupies its anchor position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub id: SharedStr,
    pub title: SharedStr,
    pub detail: Option<SectionDetail>,
}

impl SectionBlock {
    pub fn is_expanded(&self) -> bool {
        self.detail.is_some()
    }
}

/// The three detail cards of the active section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDetail {
    pub video: Card<VideoBody>,
    pub description: Card<DescriptionBody>,
    pub repository: Card<RepositoryBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card<B> {
    pub title: SharedStr,
    pub body: B,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VideoBody {
    /// An embeddable player pointed at `url`.
    Embed { url: SharedStr },
    Missing { message: SharedStr },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DescriptionBody {
    /// One paragraph per description line, in order.
    Paragraphs(Vec<SharedStr>),
    Missing { message: SharedStr },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RepositoryBody {
    /// Outbound link, opened in a new browsing context.
    Link { url: SharedStr, label: SharedStr },
    Missing { message: SharedStr },
}

/// How the host should move the viewport when asked to reveal a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
}
