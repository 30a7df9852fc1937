//! Main application module

mod menus;
mod panel;
mod scene_panel;
mod styles;

use std::rc::Rc;

use eframe::egui;

use crate::events::EditorHub;
use crate::state::EditorState;
use crate::viewport::SceneViewport;

/// Main application
pub struct EditorApp {
    hub: Rc<EditorHub>,
    state: EditorState,
    viewport: SceneViewport,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last published viewport panel size
    last_panel_size: egui::Vec2,
}

impl EditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = EditorState::default();

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.font_size);

        let hub = Rc::new(EditorHub::new());
        let viewport = SceneViewport::new(Rc::clone(&hub));

        let last_font_size = state.settings.font_size;
        Self {
            hub,
            state,
            viewport,
            last_font_size,
            last_panel_size: egui::Vec2::ZERO,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.font_size);
            self.last_font_size = self.state.settings.font_size;
        }

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::view_menu(ui, &self.hub, &mut self.state, &mut self.viewport);
                menus::language_menu(ui);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Left panel: scene properties ─────────────────────
        egui::SidePanel::left("scene_panel")
            .default_width(230.0)
            .width_range(160.0..=400.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)))
            .show(ctx, |ui| {
                scene_panel::show(ui, &self.hub, &mut self.state.scene_info);
            });

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                panel::show(
                    ui,
                    &mut self.viewport,
                    &self.state.settings,
                    &mut self.last_panel_size,
                );
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.settings.save();
    }
}
