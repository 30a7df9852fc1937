//! Central 3D viewport panel: camera input, overlay painting and the
//! clickable view-cube buttons.

use eframe::egui;

use crate::helpers::ViewDirection;
use crate::state::EditorSettings;
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::mesh::LineMeshData;
use crate::viewport::SceneViewport;

pub fn show(
    ui: &mut egui::Ui,
    viewport: &mut SceneViewport,
    settings: &EditorSettings,
    last_size: &mut egui::Vec2,
) {
    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

    // Publish panel size changes so the camera aspect follows.
    let size = rect.size();
    if size.x > 0.0 && size.y > 0.0 && (size - *last_size).length() > 0.5 {
        viewport.notify_resize(size.x, size.y);
        *last_size = size;
    }

    // ── Camera controls ───────────────────────────────────
    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        viewport
            .camera
            .borrow_mut()
            .rotate(-delta.x * 0.4, delta.y * 0.4);
    }
    if response.dragged_by(egui::PointerButton::Secondary)
        || response.dragged_by(egui::PointerButton::Middle)
    {
        let delta = response.drag_delta();
        let mut camera = viewport.camera.borrow_mut();
        let scale = camera.distance * 0.0015;
        camera.pan(-delta.x * scale, delta.y * scale);
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll.abs() > 0.1 {
            viewport.camera.borrow_mut().zoom(scroll * 0.01);
        }
    }

    // Advance any view-cube transition; keep frames coming while it runs.
    let dt = ui.input(|i| i.stable_dt).min(0.1);
    if viewport.advance_tween(dt) {
        ui.ctx().request_repaint();
    }

    let painter = ui.painter_at(rect);
    let bg = settings.background_color;
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(bg[0], bg[1], bg[2]));

    {
        let camera = viewport.camera.borrow();
        if let Some(lines) = viewport.grid.borrow().lines() {
            draw_line_mesh(&painter, rect, &camera, lines);
        }
        let axes = viewport.axes.borrow();
        if let Some(lines) = axes.lines() {
            draw_line_mesh(&painter, rect, &camera, lines);
            draw_axis_labels(&painter, rect, &camera, axes.config().size);
        }
    }

    let cube_visible = viewport.view_cube.borrow().is_visible();
    if cube_visible {
        show_view_cube(ui, rect, viewport);
    }
}

fn draw_line_mesh(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    lines: &LineMeshData,
) {
    for (a, b, color) in lines.segments() {
        let (Some(pa), Some(pb)) = (camera.project(a, rect), camera.project(b, rect)) else {
            continue;
        };
        let stroke = egui::Stroke::new(
            1.0,
            egui::Color32::from_rgba_unmultiplied(
                (color[0] * 255.0) as u8,
                (color[1] * 255.0) as u8,
                (color[2] * 255.0) as u8,
                (color[3] * 255.0) as u8,
            ),
        );
        painter.line_segment([pa, pb], stroke);
    }
}

/// Draw axis labels just past the axis tips
fn draw_axis_labels(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    length: f32,
) {
    let offset = length * 1.08;
    let labels = [
        ([offset, 0.0, 0.0], "X", egui::Color32::from_rgb(220, 70, 70)),
        ([0.0, offset, 0.0], "Y", egui::Color32::from_rgb(70, 200, 70)),
        ([0.0, 0.0, offset], "Z", egui::Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// Six face buttons in the top-right corner
fn show_view_cube(ui: &mut egui::Ui, rect: egui::Rect, viewport: &mut SceneViewport) {
    let button = egui::vec2(52.0, 20.0);
    let gap = 4.0;
    let origin = egui::pos2(
        rect.right() - 8.0 - 3.0 * button.x - 2.0 * gap,
        rect.top() + 8.0,
    );

    for (i, direction) in ViewDirection::ALL.into_iter().enumerate() {
        let col = (i % 3) as f32;
        let row = (i / 3) as f32;
        let min = origin + egui::vec2(col * (button.x + gap), row * (button.y + gap));
        let button_rect = egui::Rect::from_min_size(min, button);
        if ui
            .put(button_rect, egui::Button::new(direction.label()))
            .clicked()
        {
            viewport.orbit_to(direction);
        }
    }
}
