use serde::{Deserialize, Serialize};
use showcase_protocol::SharedStr;

/// Stable section identifier. Doubles as the page anchor.
pub type SectionId = SharedStr;

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    id: SectionId,
    title: SharedStr,
    #[serde(default)]
    video_url: Option<SharedStr>,
    #[serde(default)]
    description: Option<SharedStr>,
    #[serde(default)]
    repo_link: Option<SharedStr>,
}

impl SectionRecord {
    pub fn new(id: impl Into<SectionId>, title: impl Into<SharedStr>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            video_url: None,
            description: None,
            repo_link: None,
        }
    }

    pub fn with_video(mut self, url: impl Into<SharedStr>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn with_description(mut self, text: impl Into<SharedStr>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_repo_link(mut self, url: impl Into<SharedStr>) -> Self {
        self.repo_link = Some(url.into());
        self
    }

    pub fn id(&self) -> &SectionId {
        &self.id
    }

    pub fn title(&self) -> &SharedStr {
        &self.title
    }

    pub fn video_url(&self) -> Option<&SharedStr> {
        self.video_url.as_ref()
    }

    pub fn description(&self) -> Option<&SharedStr> {
        self.description.as_ref()
    }

    pub fn repo_link(&self) -> Option<&SharedStr> {
        self.repo_link.as_ref()
    }

    /// Blank optional fields are treated as absent.
    pub(crate) fn normalized(mut self) -> Self {
        for field in [
            &mut self.video_url,
            &mut self.description,
            &mut self.repo_link,
        ] {
            if matches!(field, Some(value) if value.is_blank()) {
                *field = None;
            }
        }
        self
    }
}
