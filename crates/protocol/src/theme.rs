use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    // Header
    HeaderBackground,
    HeaderText,

    // Side navigation
    SidebarBackground,
    SidebarGroupLabel,
    NavItemText,
    NavItemActive,

    // Sections
    SectionBackground,
    CardBackground,
    CardBorder,
    CardTitle,
    MediaFrame,
    LinkText,
    MissingText,
}

/// Which palette the renderer resolves tokens against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}
