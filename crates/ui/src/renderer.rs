use egui::{Align2, CornerRadius, FontId, Margin, RichText, Sense, Stroke, StrokeKind};
use showcase_core::model::SectionId;
use showcase_protocol::{
    Breadcrumb, DescriptionBody, Navigation, RepositoryBody, SectionBlock, SectionDetail,
    ThemeMode, ThemeToken, VideoBody,
};

use crate::theme;

/// Below this width the detail cards stack vertically.
const WIDE_LAYOUT_WIDTH: f32 = 900.0;
const MEDIA_MAX_HEIGHT: f32 = 315.0;
const SECTION_PADDING: i8 = 16;

/// Draw the side navigation. Returns the section whose control was clicked.
pub fn navigation(ui: &mut egui::Ui, nav: &Navigation, mode: ThemeMode) -> Option<SectionId> {
    ui.add_space(8.0);
    ui.label(
        RichText::new(nav.group_label.as_str())
            .small()
            .color(theme::resolve(ThemeToken::SidebarGroupLabel, mode)),
    );
    ui.add_space(4.0);

    let mut clicked = None;
    for item in &nav.items {
        let text = RichText::new(item.title.as_str())
            .color(theme::resolve(ThemeToken::NavItemText, mode));
        let response = ui
            .selectable_label(item.selected, text)
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            clicked = Some(item.id.clone());
        }
    }
    clicked
}

/// `root › current`, as in the page header.
pub fn breadcrumb(ui: &mut egui::Ui, crumbs: &Breadcrumb, mode: ThemeMode) {
    ui.label(
        RichText::new(crumbs.root.as_str()).color(theme::resolve(ThemeToken::TextMuted, mode)),
    );
    ui.label(RichText::new("›").color(theme::resolve(ThemeToken::TextMuted, mode)));
    ui.label(
        RichText::new(crumbs.current.as_str())
            .strong()
            .color(theme::resolve(ThemeToken::HeaderText, mode)),
    );
}

/// Draw one section and return its on-screen rect.
///
/// Collapsed sections still take `min_height` so anchors and scroll
/// positions stay stable while the active section changes.
pub fn section_block(
    ui: &mut egui::Ui,
    block: &SectionBlock,
    min_height: f32,
    mode: ThemeMode,
) -> egui::Rect {
    let frame = egui::Frame::new()
        .fill(theme::resolve(ThemeToken::SectionBackground, mode))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(SECTION_PADDING));
    let margin = 2.0 * f32::from(SECTION_PADDING);
    frame
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(
                ui.available_width(),
                (min_height - margin).max(0.0),
            ));
            if let Some(detail) = &block.detail {
                section_detail(ui, detail, mode);
            }
        })
        .response
        .rect
}

fn section_detail(ui: &mut egui::Ui, detail: &SectionDetail, mode: ThemeMode) {
    if ui.available_width() >= WIDE_LAYOUT_WIDTH {
        let spacing = ui.spacing().item_spacing.x;
        let video_width = (ui.available_width() - spacing) * 2.0 / 3.0;
        ui.horizontal_top(|ui| {
            ui.allocate_ui(egui::vec2(video_width, 0.0), |ui| {
                card(ui, detail.video.title.as_str(), mode, |ui| {
                    video(ui, &detail.video.body, mode);
                });
            });
            ui.vertical(|ui| {
                card(ui, detail.description.title.as_str(), mode, |ui| {
                    description(ui, &detail.description.body, mode);
                });
                card(ui, detail.repository.title.as_str(), mode, |ui| {
                    repository(ui, &detail.repository.body, mode);
                });
            });
        });
    } else {
        card(ui, detail.video.title.as_str(), mode, |ui| {
            video(ui, &detail.video.body, mode);
        });
        card(ui, detail.description.title.as_str(), mode, |ui| {
            description(ui, &detail.description.body, mode);
        });
        card(ui, detail.repository.title.as_str(), mode, |ui| {
            repository(ui, &detail.repository.body, mode);
        });
    }
}

fn card(ui: &mut egui::Ui, title: &str, mode: ThemeMode, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(theme::resolve(ThemeToken::CardBackground, mode))
        .stroke(Stroke::new(1.0, theme::resolve(ThemeToken::CardBorder, mode)))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                RichText::new(title)
                    .heading()
                    .color(theme::resolve(ThemeToken::CardTitle, mode)),
            );
            ui.add_space(6.0);
            body(ui);
        });
    ui.add_space(8.0);
}

fn missing(ui: &mut egui::Ui, message: &str, mode: ThemeMode) {
    ui.label(
        RichText::new(message)
            .italics()
            .color(theme::resolve(ThemeToken::MissingText, mode)),
    );
}

/// egui cannot host an iframe, so the player is a 16:9 media frame that
/// opens the embed URL in a new tab.
fn video(ui: &mut egui::Ui, body: &VideoBody, mode: ThemeMode) {
    let url = match body {
        VideoBody::Embed { url } => url,
        VideoBody::Missing { message } => {
            missing(ui, message, mode);
            return;
        }
    };

    let width = ui.available_width();
    let height = (width * 9.0 / 16.0).min(MEDIA_MAX_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, height), Sense::click());
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        CornerRadius::same(8),
        theme::resolve(ThemeToken::MediaFrame, mode),
    );
    if response.hovered() {
        painter.rect_stroke(
            rect,
            CornerRadius::same(8),
            Stroke::new(1.0, theme::resolve(ThemeToken::LinkText, mode)),
            StrokeKind::Inside,
        );
    }

    // Play triangle
    let center = rect.center();
    let r = (height * 0.12).clamp(12.0, 36.0);
    painter.add(egui::Shape::convex_polygon(
        vec![
            center + egui::vec2(-r * 0.6, -r),
            center + egui::vec2(-r * 0.6, r),
            center + egui::vec2(r, 0.0),
        ],
        theme::resolve(ThemeToken::TextPrimary, mode),
        Stroke::NONE,
    ));
    painter.text(
        rect.center_bottom() - egui::vec2(0.0, 12.0),
        Align2::CENTER_BOTTOM,
        url.as_str(),
        FontId::proportional(11.0),
        theme::resolve(ThemeToken::TextSecondary, mode),
    );

    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(url.as_str()));
    }
}

fn description(ui: &mut egui::Ui, body: &DescriptionBody, mode: ThemeMode) {
    match body {
        DescriptionBody::Paragraphs(lines) => {
            for line in lines {
                ui.label(
                    RichText::new(line.as_str()).color(theme::resolve(ThemeToken::TextPrimary, mode)),
                );
            }
        }
        DescriptionBody::Missing { message } => missing(ui, message, mode),
    }
}

fn repository(ui: &mut egui::Ui, body: &RepositoryBody, mode: ThemeMode) {
    match body {
        RepositoryBody::Link { url, label } => {
            ui.add(
                egui::Hyperlink::from_label_and_url(
                    RichText::new(label.as_str()).underline(),
                    url.as_str(),
                )
                .open_in_new_tab(true),
            );
        }
        RepositoryBody::Missing { message } => missing(ui, message, mode),
    }
}

#[cfg(test)]
mod tests {
    use showcase_core::model::{Registry, SectionRecord};
    use showcase_core::tracker::{ActiveSectionTracker, Signal};
    use showcase_core::views;

    use super::*;

    fn run_central(mut add: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1200.0, 800.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
    }

    #[test]
    fn placeholder_block_keeps_min_height() {
        let block = SectionBlock {
            id: "a".into(),
            title: "Sanamente".into(),
            detail: None,
        };
        let mut height = 0.0;
        run_central(|ui| {
            height = section_block(ui, &block, 640.0, ThemeMode::Dark).height();
        });
        assert!(height >= 640.0 - 0.5, "height was {height}");
    }

    #[test]
    fn active_block_renders_cards_in_both_layouts() {
        let registry = Registry::new(vec![SectionRecord::new("a", "Sanamente")
            .with_video("https://x/embed/1")
            .with_description("Frontend\nBackend")])
        .expect("valid registry");
        let mut tracker = ActiveSectionTracker::new(0.6);
        tracker.apply(&registry, &Signal::Scroll(vec!["a".into()]));
        let blocks = views::render_sections(&registry, tracker.active());

        for width in [600.0, 1100.0] {
            run_central(|ui| {
                ui.set_max_width(width);
                let rect = section_block(ui, &blocks[0], 100.0, ThemeMode::Light);
                // The media frame alone is taller than the minimum.
                assert!(rect.height() > 100.0);
            });
        }
    }

    #[test]
    fn navigation_without_clicks_returns_none() {
        let nav = Navigation {
            group_label: "Sections".into(),
            items: vec![showcase_protocol::NavItem {
                id: "a".into(),
                title: "Sanamente".into(),
                selected: true,
            }],
        };
        let mut clicked = Some(SectionId::from("unset"));
        run_central(|ui| clicked = navigation(ui, &nav, ThemeMode::Dark));
        assert_eq!(clicked, None);
    }
}
