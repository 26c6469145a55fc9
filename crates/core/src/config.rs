use serde::{Deserialize, Serialize};
use showcase_protocol::{SharedStr, ThemeMode};

use crate::tracker::SignalKind;

pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.6;
pub const DEFAULT_SECTION_MIN_HEIGHT: f64 = 0.8;

/// Page-level settings, read from the `page` object of the manifest.
///
/// Every field has a default, so an empty object (or no `page` key at all)
/// yields the stock page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Header label shown while no section is active.
    pub default_label: SharedStr,
    /// First breadcrumb entry.
    pub root_label: SharedStr,
    pub nav_group_label: SharedStr,
    /// Visible fraction at which a section becomes active.
    pub visibility_threshold: f64,
    pub signals: SignalConfig,
    /// Minimum section height as a fraction of the viewport height.
    pub section_min_height: f64,
    pub theme: ThemeMode,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_label: "Home".into(),
            root_label: "Application".into(),
            nav_group_label: "Sections".into(),
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            signals: SignalConfig::default(),
            section_min_height: DEFAULT_SECTION_MIN_HEIGHT,
            theme: ThemeMode::default(),
        }
    }
}

impl PageConfig {
    /// Clamp numeric settings into their usable ranges. Non-finite values
    /// fall back to the defaults.
    pub fn normalized(mut self) -> Self {
        self.visibility_threshold = if self.visibility_threshold.is_finite() {
            self.visibility_threshold.clamp(f64::EPSILON, 1.0)
        } else {
            DEFAULT_VISIBILITY_THRESHOLD
        };
        self.section_min_height = if self.section_min_height.is_finite() {
            self.section_min_height.clamp(0.1, 1.0)
        } else {
            DEFAULT_SECTION_MIN_HEIGHT
        };
        self
    }
}

/// Which tracker signals the page subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub visibility: bool,
    pub scroll: bool,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            visibility: true,
            scroll: true,
        }
    }
}

impl SignalConfig {
    pub fn enabled_kinds(&self) -> Vec<SignalKind> {
        let mut kinds = Vec::with_capacity(2);
        if self.visibility {
            kinds.push(SignalKind::Visibility);
        }
        if self.scroll {
            kinds.push(SignalKind::Scroll);
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config: PageConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.default_label, "Home");
        assert_eq!(config.visibility_threshold, 0.6);
    }

    #[test]
    fn partial_signals_keep_other_default() {
        let config: PageConfig =
            serde_json::from_str(r#"{"signals":{"scroll":false}}"#).expect("valid config");
        assert!(config.signals.visibility);
        assert!(!config.signals.scroll);
        assert_eq!(config.signals.enabled_kinds(), vec![SignalKind::Visibility]);
    }

    #[test]
    fn normalization_clamps_out_of_range_values() {
        let config = PageConfig {
            visibility_threshold: 3.0,
            section_min_height: f64::NAN,
            ..PageConfig::default()
        }
        .normalized();
        assert_eq!(config.visibility_threshold, 1.0);
        assert_eq!(config.section_min_height, DEFAULT_SECTION_MIN_HEIGHT);

        let config = PageConfig {
            visibility_threshold: -1.0,
            ..PageConfig::default()
        }
        .normalized();
        assert!(config.visibility_threshold > 0.0);
    }

    #[test]
    fn theme_parses_lowercase() {
        let config: PageConfig =
            serde_json::from_str(r#"{"theme":"light"}"#).expect("valid config");
        assert_eq!(config.theme, ThemeMode::Light);
    }
}
