//! Scene properties panel.
//!
//! Edits go through [`SceneInfoStore::set_field`], so every change is
//! published on the hub and the helper managers pick it up the same frame.

use eframe::egui;

use crate::events::EditorHub;
use crate::i18n::t;
use crate::state::{FieldValue, SceneField, SceneInfoStore};

pub fn show(ui: &mut egui::Ui, hub: &EditorHub, info: &mut SceneInfoStore) {
    ui.heading(t("panel.scene"));
    ui.separator();

    egui::Grid::new("scene_meta")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(t("scene.name"));
            let mut name = info.name.clone();
            if ui.text_edit_singleline(&mut name).changed() {
                info.set_field(hub, SceneField::Name, FieldValue::Str(name));
            }
            ui.end_row();

            ui.label(t("scene.desc"));
            let mut desc = info.desc.clone();
            if ui.text_edit_singleline(&mut desc).changed() {
                info.set_field(hub, SceneField::Desc, FieldValue::Str(desc));
            }
            ui.end_row();
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new(t("grid.section"))
        .id_salt("grid_section")
        .default_open(true)
        .show(ui, |ui| {
            let mut visible = info.grid_visible;
            if ui.checkbox(&mut visible, t("grid.visible")).changed() {
                info.set_field(hub, SceneField::GridVisible, FieldValue::Bool(visible));
            }

            ui.horizontal(|ui| {
                ui.label(t("grid.size"));
                let mut size = info.grid_size;
                if ui
                    .add(egui::DragValue::new(&mut size).speed(1.0).range(0.0..=10_000.0))
                    .changed()
                {
                    info.set_field(hub, SceneField::GridSize, FieldValue::Num(size));
                }
            });

            ui.horizontal(|ui| {
                ui.label(t("grid.divisions"));
                let mut divisions = info.grid_divisions as f32;
                if ui
                    .add(egui::DragValue::new(&mut divisions).speed(1.0).range(0.0..=1000.0))
                    .changed()
                {
                    info.set_field(hub, SceneField::GridDivisions, FieldValue::Num(divisions));
                }
            });

            ui.horizontal(|ui| {
                ui.label(t("grid.color"));
                let mut color = info.grid_color;
                if ui.color_edit_button_srgb(&mut color).changed() {
                    info.set_field(hub, SceneField::GridColor, FieldValue::Color(color));
                }
            });
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new(t("axes.section"))
        .id_salt("axes_section")
        .default_open(true)
        .show(ui, |ui| {
            let mut visible = info.axes_visible;
            if ui.checkbox(&mut visible, t("axes.visible")).changed() {
                info.set_field(hub, SceneField::AxesVisible, FieldValue::Bool(visible));
            }

            ui.horizontal(|ui| {
                ui.label(t("axes.size"));
                let mut size = info.axes_size;
                if ui
                    .add(egui::DragValue::new(&mut size).speed(0.1).range(0.0..=1000.0))
                    .changed()
                {
                    info.set_field(hub, SceneField::AxesSize, FieldValue::Num(size));
                }
            });
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new(t("cube.section"))
        .id_salt("cube_section")
        .default_open(true)
        .show(ui, |ui| {
            let mut visible = info.view_cube_visible;
            if ui.checkbox(&mut visible, t("cube.visible")).changed() {
                info.set_field(hub, SceneField::ViewCubeVisible, FieldValue::Bool(visible));
            }
        });
}
