use std::rc::Rc;

use eframe::egui;
use showcase_core::tracker::SectionGeometry;
use showcase_core::{FrameLayout, Mount, Page};
use showcase_protocol::{Rect, ScrollBehavior, ThemeMode, ThemeToken, Viewport};

use crate::host::EguiViewport;
use crate::renderer;
use crate::theme;

const SIDEBAR_WIDTH: f32 = 256.0;
const HEADER_HEIGHT: f32 = 64.0;
const SECTION_GAP: f32 = 16.0;

/// Main application state.
pub struct ShowcaseApp {
    /// `None` when the embedded manifest failed to load.
    page: Option<Page>,
    host: Rc<EguiViewport>,
    /// Listener registrations; released when the app is dropped.
    mount: Option<Mount>,
    theme_mode: ThemeMode,
    sidebar_open: bool,
    /// Scroll offset seen last frame, to detect scroll events.
    last_scroll_y: Option<f32>,
    /// Error message to display.
    error: Option<String>,
}

impl ShowcaseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let host = Rc::new(EguiViewport::new());
        let mut app = Self {
            page: None,
            host,
            mount: None,
            theme_mode: ThemeMode::Dark,
            sidebar_open: true,
            last_scroll_y: None,
            error: None,
        };

        match Page::builtin() {
            Ok(page) => app.install(page),
            Err(e) => {
                log::error!("manifest rejected: {e}");
                app.error = Some(format!("Failed to load sections: {e}"));
            }
        }
        cc.egui_ctx.set_visuals(theme::visuals(app.theme_mode));
        app
    }

    fn install(&mut self, mut page: Page) {
        self.theme_mode = page.config().theme;
        // Drop the old registrations before taking new ones.
        self.mount = None;
        match page.mount(self.host.clone()) {
            Ok(mount) => self.mount = Some(mount),
            Err(e) => {
                // The page still renders; it just never highlights a section.
                self.error = Some(format!("Section tracking unavailable: {e}"));
            }
        }
        self.last_scroll_y = None;
        self.page = Some(page);
    }

    fn header(&mut self, ctx: &egui::Context) {
        let mode = self.theme_mode;
        let frame = egui::Frame::new()
            .fill(theme::resolve(ThemeToken::HeaderBackground, mode))
            .stroke(egui::Stroke::new(1.0, theme::resolve(ThemeToken::Border, mode)))
            .inner_margin(egui::Margin::symmetric(16, 0));

        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if ui.button("☰").on_hover_text("Toggle sidebar").clicked() {
                        self.sidebar_open = !self.sidebar_open;
                    }
                    ui.separator();

                    if let Some(page) = &self.page {
                        renderer::breadcrumb(ui, &page.breadcrumb(), mode);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_label = match self.theme_mode {
                            ThemeMode::Dark => "🌙 Dark",
                            ThemeMode::Light => "☀ Light",
                        };
                        if ui.button(theme_label).clicked() {
                            self.theme_mode = self.theme_mode.toggled();
                            ctx.set_visuals(theme::visuals(self.theme_mode));
                        }
                    });
                });
            });
    }

    fn sidebar(&mut self, ctx: &egui::Context) {
        let Some(page) = &self.page else {
            return;
        };
        let mode = self.theme_mode;
        let frame = egui::Frame::new()
            .fill(theme::resolve(ThemeToken::SidebarBackground, mode))
            .inner_margin(egui::Margin::same(8));

        let clicked = egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .frame(frame)
            .show_animated(ctx, self.sidebar_open, |ui| {
                renderer::navigation(ui, &page.navigation(), mode)
            })
            .and_then(|response| response.inner);

        if let Some(target) = clicked {
            page.navigate(&*self.host, &target);
        }
    }

    fn sections(&mut self, ctx: &egui::Context) {
        let mode = self.theme_mode;
        let central = egui::Frame::new()
            .fill(theme::resolve(ThemeToken::Background, mode))
            .inner_margin(egui::Margin::same(16));

        egui::CentralPanel::default().frame(central).show(ctx, |ui| {
            let Some(page) = self.page.as_mut() else {
                if let Some(err) = &self.error {
                    ui.centered_and_justified(|ui| {
                        ui.colored_label(
                            theme::resolve(ThemeToken::MissingText, mode),
                            err.as_str(),
                        );
                    });
                }
                return;
            };

            let viewport_height = ui.available_height();
            let min_height = viewport_height * page.config().section_min_height as f32;
            let blocks = page.sections();
            let host: &EguiViewport = &self.host;

            let output = egui::ScrollArea::vertical()
                .id_salt("sections")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut layout = Vec::with_capacity(blocks.len());
                    for block in &blocks {
                        let rect = renderer::section_block(ui, block, min_height, mode);
                        if let Some(behavior) = host.take_scroll_request(&block.id) {
                            let animation = match behavior {
                                ScrollBehavior::Smooth => ui.style().scroll_animation,
                            };
                            ui.scroll_to_rect_animation(rect, Some(egui::Align::TOP), animation);
                        }
                        layout.push(SectionGeometry {
                            id: block.id.clone(),
                            rect: to_page_rect(rect),
                        });
                        ui.add_space(SECTION_GAP);
                    }
                    layout
                });

            let scroll_y = output.state.offset.y;
            let scrolled = self.last_scroll_y.is_some_and(|last| last != scroll_y);
            self.last_scroll_y = Some(scroll_y);

            let visible = output.inner_rect;
            let layout = output.inner;
            host.record_layout(layout.iter().map(|section| section.id.clone()).collect());

            let frame = FrameLayout {
                viewport: Viewport {
                    x: f64::from(visible.left()),
                    y: f64::from(visible.top()),
                    width: f64::from(visible.width()),
                    height: f64::from(visible.height()),
                },
                sections: &layout,
                scrolled,
            };
            if self.mount.is_some() && page.observe(host, &frame) {
                // Re-render with the new active section.
                ui.ctx().request_repaint();
            }
        });
    }
}

/// Screen rects share one coordinate space with the scroll area's visible
/// rect, which is all the tracker compares against.
fn to_page_rect(rect: egui::Rect) -> Rect {
    Rect::new(
        f64::from(rect.left()),
        f64::from(rect.top()),
        f64::from(rect.width()),
        f64::from(rect.height()),
    )
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.header(ctx);

        if let (Some(err), Some(_)) = (&self.error, &self.page) {
            let mode = self.theme_mode;
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.colored_label(theme::resolve(ThemeToken::MissingText, mode), err.as_str());
            });
        }

        self.sidebar(ctx);
        self.sections(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headless_app() -> ShowcaseApp {
        let mut app = ShowcaseApp {
            page: None,
            host: Rc::new(EguiViewport::new()),
            mount: None,
            theme_mode: ThemeMode::Dark,
            sidebar_open: true,
            last_scroll_y: None,
            error: None,
        };
        app.install(Page::builtin().expect("builtin manifest"));
        app
    }

    /// Runs `count` frames, a 60 Hz tick apart, starting at `*time`.
    fn run_frames(ctx: &egui::Context, app: &mut ShowcaseApp, time: &mut f64, count: usize) {
        for _ in 0..count {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(1200.0, 800.0),
                )),
                time: Some(*time),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                app.header(ctx);
                app.sidebar(ctx);
                app.sections(ctx);
            });
            *time += 1.0 / 60.0;
        }
    }

    fn active_id(app: &ShowcaseApp) -> Option<String> {
        let page = app.page.as_ref()?;
        page.active().id().map(|id| id.as_str().to_owned())
    }

    #[test]
    fn first_section_becomes_active_after_load() {
        let ctx = egui::Context::default();
        let mut app = headless_app();
        assert!(app.mount.is_some());
        assert!(app.error.is_none());

        let mut time = 0.0;
        run_frames(&ctx, &mut app, &mut time, 5);

        assert_eq!(active_id(&app).as_deref(), Some("section-1"));
        let crumb = app.page.as_ref().map(|page| page.breadcrumb().current);
        assert_eq!(crumb.as_deref(), Some("Sanamente"));
    }

    #[test]
    fn navigation_scrolls_and_moves_the_highlight() {
        let ctx = egui::Context::default();
        let mut app = headless_app();
        let mut time = 0.0;
        run_frames(&ctx, &mut app, &mut time, 5);

        let requested = app
            .page
            .as_ref()
            .is_some_and(|page| page.navigate(&*app.host, &"section-3".into()));
        assert!(requested);
        run_frames(&ctx, &mut app, &mut time, 60);
        assert_eq!(active_id(&app).as_deref(), Some("section-3"));

        let requested = app
            .page
            .as_ref()
            .is_some_and(|page| page.navigate(&*app.host, &"section-2".into()));
        assert!(requested);
        run_frames(&ctx, &mut app, &mut time, 60);
        assert_eq!(active_id(&app).as_deref(), Some("section-2"));
    }

    #[test]
    fn unknown_target_is_not_scrolled_to() {
        let ctx = egui::Context::default();
        let mut app = headless_app();
        let mut time = 0.0;
        run_frames(&ctx, &mut app, &mut time, 5);

        let requested = app
            .page
            .as_ref()
            .is_some_and(|page| page.navigate(&*app.host, &"section-9".into()));
        assert!(!requested);
        run_frames(&ctx, &mut app, &mut time, 10);
        assert_eq!(active_id(&app).as_deref(), Some("section-1"));
    }
}
