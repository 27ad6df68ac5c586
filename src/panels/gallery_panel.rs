use crate::DoilyApp;
use crate::gallery::SLOT_COUNT;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

const SLOT_SIZE: f32 = 100.0;

pub fn gallery_panel(app: &mut DoilyApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("gallery_panel")
        .exact_height(SLOT_SIZE + 25.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for index in 0..SLOT_COUNT {
                        slot_ui(app, ctx, ui, index);
                    }
                });
            });
        });
}

fn slot_ui(app: &mut DoilyApp, ctx: &egui::Context, ui: &mut egui::Ui, index: usize) {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::splat(SLOT_SIZE), Sense::click());

    if response.clicked() {
        // Select (exclusively) and restore the stored doily, if any.
        app.select_gallery_slot(index);
    }

    ui.painter().rect_filled(rect, 2.0, Color32::GRAY);
    if let Some(texture) = app.slot_texture(ctx, index) {
        ui.painter().image(
            texture,
            rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    // Border mirrors selection state: blue for selected, red on hover.
    let border = if app.gallery().selected() == Some(index) {
        Color32::BLUE
    } else if response.hovered() {
        Color32::RED
    } else {
        Color32::BLACK
    };
    ui.painter().rect_stroke(rect, 2.0, Stroke::new(1.0, border));
}
