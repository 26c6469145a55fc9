use showcase_protocol::{ThemeMode, ThemeToken};

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
struct ResolvedColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

/// Base egui visuals for the mode, with panel fills taken from the palette.
pub fn visuals(mode: ThemeMode) -> egui::Visuals {
    let mut visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };
    visuals.panel_fill = resolve(ThemeToken::Background, mode);
    visuals.hyperlink_color = resolve(ThemeToken::LinkText, mode);
    visuals.selection.bg_fill = resolve(ThemeToken::NavItemActive, mode);
    visuals
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Catppuccin Mocha
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
        Border => ResolvedColor::rgb(0x31, 0x32, 0x44),     // Surface0

        TextPrimary => ResolvedColor::rgb(0xcd, 0xd6, 0xf4), // Text
        TextSecondary => ResolvedColor::rgb(0xba, 0xc2, 0xde), // Subtext1
        TextMuted => ResolvedColor::rgb(0xa6, 0xad, 0xc8),   // Subtext0

        HeaderBackground => ResolvedColor::rgb(0x00, 0x00, 0x00),
        HeaderText => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),

        SidebarBackground => ResolvedColor::rgb(0x18, 0x18, 0x25), // Mantle
        SidebarGroupLabel => ResolvedColor::rgb(0xa6, 0xad, 0xc8),
        NavItemText => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),
        NavItemActive => ResolvedColor::rgba(0x89, 0xb4, 0xfa, 80), // Blue

        SectionBackground => ResolvedColor::rgba(0x31, 0x32, 0x44, 128), // Surface0, half
        CardBackground => ResolvedColor::rgb(0x1e, 0x1e, 0x2e),         // Base
        CardBorder => ResolvedColor::rgb(0x45, 0x47, 0x5a),             // Surface1
        CardTitle => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),
        MediaFrame => ResolvedColor::rgb(0x11, 0x11, 0x1b),
        LinkText => ResolvedColor::rgb(0x89, 0xb4, 0xfa), // Blue
        MissingText => ResolvedColor::rgb(0x6c, 0x70, 0x86), // Overlay0
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(250, 250, 252),
        Border => ResolvedColor::rgb(210, 210, 220),

        TextPrimary => ResolvedColor::rgb(20, 20, 30),
        TextSecondary => ResolvedColor::rgb(80, 80, 100),
        TextMuted => ResolvedColor::rgb(100, 100, 110),

        HeaderBackground => ResolvedColor::rgb(255, 255, 255),
        HeaderText => ResolvedColor::rgb(20, 20, 30),

        SidebarBackground => ResolvedColor::rgb(244, 244, 247),
        SidebarGroupLabel => ResolvedColor::rgb(100, 100, 110),
        NavItemText => ResolvedColor::rgb(40, 40, 50),
        NavItemActive => ResolvedColor::rgba(66, 135, 245, 60),

        SectionBackground => ResolvedColor::rgb(236, 236, 240),
        CardBackground => ResolvedColor::rgb(255, 255, 255),
        CardBorder => ResolvedColor::rgb(210, 210, 220),
        CardTitle => ResolvedColor::rgb(20, 20, 30),
        MediaFrame => ResolvedColor::rgb(30, 30, 40),
        LinkText => ResolvedColor::rgb(37, 99, 235),
        MissingText => ResolvedColor::rgb(120, 120, 130),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_differ_for_page_background() {
        assert_ne!(
            resolve(ThemeToken::Background, ThemeMode::Dark),
            resolve(ThemeToken::Background, ThemeMode::Light)
        );
    }

    #[test]
    fn visuals_follow_mode() {
        assert!(visuals(ThemeMode::Dark).dark_mode);
        assert!(!visuals(ThemeMode::Light).dark_mode);
        assert_eq!(
            visuals(ThemeMode::Dark).hyperlink_color,
            resolve(ThemeToken::LinkText, ThemeMode::Dark)
        );
    }
}
