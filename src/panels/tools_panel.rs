use crate::DoilyApp;
use egui;

pub fn tools_panel(app: &mut DoilyApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("control_panel").show(ctx, |ui| {
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            // Pen/eraser behave like a radio group: exactly one is active.
            let eraser = app.params().eraser;
            if ui.selectable_label(!eraser, "PEN").clicked() {
                app.set_eraser(false);
            }
            if ui.selectable_label(eraser, "ERASER").clicked() {
                app.set_eraser(true);
            }

            ui.separator();

            let mut guides = app.params().guides_visible;
            if ui.checkbox(&mut guides, "Sector lines").changed() {
                app.set_guides_visible(guides);
            }
            let mut mirror = app.params().mirror;
            if ui.checkbox(&mut mirror, "Reflect").changed() {
                app.set_mirror(mirror);
            }

            ui.separator();

            let can_undo = app.history().can_undo();
            let can_redo = app.history().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.redo();
            }
            if ui.button("Clear").clicked() {
                app.clear();
            }
        });

        ui.horizontal(|ui| {
            // One slider per color channel, like the original control panel.
            let [mut red, mut green, mut blue] = app.params().pen_color;
            ui.label("R");
            if ui.add(egui::Slider::new(&mut red, 0..=255)).changed() {
                app.set_pen_channel(0, red);
            }
            ui.label("G");
            if ui.add(egui::Slider::new(&mut green, 0..=255)).changed() {
                app.set_pen_channel(1, green);
            }
            ui.label("B");
            if ui.add(egui::Slider::new(&mut blue, 0..=255)).changed() {
                app.set_pen_channel(2, blue);
            }

            ui.separator();

            let mut width = app.params().pen_width;
            ui.label("Size");
            if ui.add(egui::Slider::new(&mut width, 0..=crate::session::PEN_WIDTH_MAX)).changed() {
                app.set_pen_width(width);
            }
        });

        ui.horizontal(|ui| {
            let mut sectors = app.params().sector_count;
            ui.label("Sectors");
            if ui
                .add(egui::DragValue::new(&mut sectors).range(0..=crate::session::SECTOR_COUNT_MAX))
                .changed()
            {
                app.set_sector_count(sectors);
            }

            let mut sensitivity = app.params().mouse_sensitivity;
            ui.label("Smoothing");
            if ui
                .add(egui::DragValue::new(&mut sensitivity).range(0..=crate::session::SENSITIVITY_MAX))
                .changed()
            {
                app.set_mouse_sensitivity(sensitivity);
            }

            ui.separator();

            let slot_selected = app.gallery().selected().is_some();
            if ui
                .add_enabled(slot_selected, egui::Button::new("SAVE"))
                .on_disabled_hover_text("Select a gallery slot first")
                .clicked()
            {
                app.capture_to_gallery();
            }
            if ui
                .add_enabled(slot_selected, egui::Button::new("REMOVE"))
                .on_disabled_hover_text("Select a gallery slot first")
                .clicked()
            {
                app.remove_gallery_slot();
            }
        });

        ui.add_space(4.0);
    });
}
