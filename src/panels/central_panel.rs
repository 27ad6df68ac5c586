use crate::DoilyApp;
use crate::app::CANVAS_SIZE;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

pub fn central_panel(app: &mut DoilyApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(CANVAS_SIZE as f32), Sense::drag());
        let rect = response.rect;

        // Route pointer events through the gesture state machine, in
        // canvas-local coordinates.
        if let Some(pos) = response.interact_pointer_pos() {
            let local = Pos2::new(pos.x - rect.min.x, pos.y - rect.min.y);
            if response.drag_started() {
                app.gesture_begin(local);
            } else if response.dragged() {
                app.gesture_motion(local);
            }
        }
        if response.drag_stopped() && app.is_drawing() {
            app.gesture_end();
        }

        // Backdrop and guide overlay sit beneath the drawing surface, so
        // erased regions reveal them.
        painter.rect_filled(rect, 0.0, Color32::GRAY);
        if app.params().guides_visible {
            let guides = app.canvas().guide_lines(app.params().sector_count);
            for [a, b] in guides {
                painter.line_segment(
                    [rect.min + a.to_vec2(), rect.min + b.to_vec2()],
                    Stroke::new(1.0, Color32::LIGHT_GRAY),
                );
            }
        }

        // The persistent buffer, drawn 1:1 on top.
        let texture = app.canvas_texture(ctx);
        painter.image(
            texture,
            rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    });
}
