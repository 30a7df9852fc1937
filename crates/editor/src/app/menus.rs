//! Application menu bar and settings window

use eframe::egui;

use crate::events::EditorHub;
use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::{EditorState, FieldValue, SceneField};
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::SceneViewport;

/// Show the view menu
pub fn view_menu(
    ui: &mut egui::Ui,
    hub: &EditorHub,
    state: &mut EditorState,
    viewport: &mut SceneViewport,
) {
    ui.menu_button(t("menu.view"), |ui| {
        let mut grid = state.scene_info.grid_visible;
        if ui.checkbox(&mut grid, t("menu.grid")).changed() {
            state
                .scene_info
                .set_field(hub, SceneField::GridVisible, FieldValue::Bool(grid));
        }

        let mut axes = state.scene_info.axes_visible;
        if ui.checkbox(&mut axes, t("menu.axes")).changed() {
            state
                .scene_info
                .set_field(hub, SceneField::AxesVisible, FieldValue::Bool(axes));
        }

        let mut cube = state.scene_info.view_cube_visible;
        if ui.checkbox(&mut cube, t("menu.view_cube")).changed() {
            state
                .scene_info
                .set_field(hub, SceneField::ViewCubeVisible, FieldValue::Bool(cube));
        }

        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            let aspect = viewport.camera.borrow().aspect;
            let mut camera = ArcBallCamera::new();
            camera.set_aspect(aspect);
            *viewport.camera.borrow_mut() = camera;
            ui.close_menu();
        }
    });
}

/// Show the language menu
pub fn language_menu(ui: &mut egui::Ui) {
    ui.menu_button(t("menu.language"), |ui| {
        if ui.selectable_label(lang() == Lang::En, "English").clicked() {
            set_lang(Lang::En);
            ui.close_menu();
        }
        if ui.selectable_label(lang() == Lang::Zh, "中文").clicked() {
            set_lang(Lang::Zh);
            ui.close_menu();
        }
    });
}

/// Show the settings menu entry
pub fn settings_menu(ui: &mut egui::Ui, state: &mut EditorState) {
    if ui.button(t("menu.settings")).clicked() {
        state.show_settings_window = true;
        ui.close_menu();
    }
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut EditorState) {
    if !state.show_settings_window {
        return;
    }

    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(t("settings.font_size"));
                ui.add(egui::Slider::new(&mut state.settings.font_size, 10.0..=24.0));
            });
            ui.horizontal(|ui| {
                ui.label(t("settings.background"));
                ui.color_edit_button_srgb(&mut state.settings.background_color);
            });
            ui.add_space(8.0);
            if ui.button(t("settings.close")).clicked() {
                close_clicked = true;
            }
        });

    let still_open = open && !close_clicked;
    if !still_open {
        state.settings.save();
    }
    state.show_settings_window = still_open;
}
