use showcase_protocol::{
    Card, DescriptionBody, RepositoryBody, SectionBlock, SectionDetail, SharedStr, VideoBody,
};

use crate::model::{Registry, SectionRecord};
use crate::tracker::ActiveSection;

pub const VIDEO_TITLE: &str = "Video";
pub const DESCRIPTION_TITLE: &str = "Technologies";
pub const REPOSITORY_TITLE: &str = "Repository";

pub const NO_VIDEO: &str = "No content found for this section.";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_REPOSITORY: &str = "No repository link found.";

/// Lay out every registered section, in registry order.
///
/// Only the section matching `active` gets its detail cards; the rest are
/// empty placeholders.
pub fn render_sections(registry: &Registry, active: &ActiveSection) -> Vec<SectionBlock> {
    registry
        .iter()
        .map(|record| SectionBlock {
            id: record.id().clone(),
            title: record.title().clone(),
            detail: active
                .is(record.id())
                .then(|| render_detail(registry, record.id())),
        })
        .collect()
}

/// Detail cards for `id`. An id with no record gets the fallback message
/// in all three cards.
pub fn render_detail(registry: &Registry, id: &str) -> SectionDetail {
    let record = registry.find(id);
    SectionDetail {
        video: Card {
            title: VIDEO_TITLE.into(),
            body: video_body(record),
        },
        description: Card {
            title: DESCRIPTION_TITLE.into(),
            body: description_body(record),
        },
        repository: Card {
            title: REPOSITORY_TITLE.into(),
            body: repository_body(record),
        },
    }
}

fn video_body(record: Option<&SectionRecord>) -> VideoBody {
    match record.and_then(SectionRecord::video_url) {
        Some(url) => VideoBody::Embed { url: url.clone() },
        None => VideoBody::Missing {
            message: NO_VIDEO.into(),
        },
    }
}

fn description_body(record: Option<&SectionRecord>) -> DescriptionBody {
    let paragraphs = record
        .and_then(SectionRecord::description)
        .map(|text| split_description(text))
        .unwrap_or_default();
    if paragraphs.is_empty() {
        DescriptionBody::Missing {
            message: NO_DESCRIPTION.into(),
        }
    } else {
        DescriptionBody::Paragraphs(paragraphs)
    }
}

fn repository_body(record: Option<&SectionRecord>) -> RepositoryBody {
    match record.and_then(SectionRecord::repo_link) {
        Some(url) => RepositoryBody::Link {
            url: url.clone(),
            label: link_label(url).into(),
        },
        None => RepositoryBody::Missing {
            message: NO_REPOSITORY.into(),
        },
    }
}

/// One paragraph per line. Lines are trimmed and blank lines dropped, so
/// indentation and trailing newlines in the manifest don't render.
pub fn split_description(text: &str) -> Vec<SharedStr> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(SharedStr::from)
        .collect()
}

fn link_label(url: &str) -> &'static str {
    let host = url
        .split_once("://")
        .map_or(url, |(_, rest)| rest)
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    if host == "github.com" || host.ends_with(".github.com") {
        "GitHub"
    } else {
        "Open link"
    }
}
