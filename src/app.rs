use eframe::egui::{self, TextureHandle};

use crate::canvas::CanvasEngine;
use crate::gallery::{GalleryStore, SLOT_COUNT};
use crate::history::StrokeHistory;
use crate::input::StrokeGesture;
use crate::panels;
use crate::session::SessionParams;

/// Side length of the square drawing surface, in pixels.
pub const CANVAS_SIZE: u32 = 650;

/// We derive Deserialize/Serialize so we can persist the session parameters on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct DoilyApp {
    params: SessionParams,
    // Everything below is in-memory state for the life of the process.
    #[serde(skip)]
    canvas: CanvasEngine,
    #[serde(skip)]
    history: StrokeHistory,
    #[serde(skip)]
    gallery: GalleryStore,
    #[serde(skip)]
    gesture: StrokeGesture,
    // Texture caches, refreshed only when the backing pixels change.
    #[serde(skip)]
    canvas_texture: Option<TextureHandle>,
    #[serde(skip)]
    canvas_texture_version: u64,
    #[serde(skip)]
    slot_textures: Vec<Option<(u64, TextureHandle)>>,
}

impl Default for DoilyApp {
    fn default() -> Self {
        Self {
            params: SessionParams::default(),
            canvas: CanvasEngine::new(CANVAS_SIZE, CANVAS_SIZE),
            history: StrokeHistory::new(),
            gallery: GalleryStore::new(),
            gesture: StrokeGesture::new(),
            canvas_texture: None,
            canvas_texture_version: 0,
            slot_textures: (0..SLOT_COUNT).map(|_| None).collect(),
        }
    }
}

impl DoilyApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore the previous session's parameters, if any.
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn gallery(&self) -> &GalleryStore {
        &self.gallery
    }

    pub fn canvas(&self) -> &CanvasEngine {
        &self.canvas
    }

    // ---- stroke capture -----------------------------------------------

    /// Pointer pressed on the canvas (canvas-local coordinates).
    pub fn gesture_begin(&mut self, pos: egui::Pos2) {
        self.gesture
            .begin(pos, &self.params, &mut self.history, &mut self.canvas);
    }

    /// Pointer dragged while drawing.
    pub fn gesture_motion(&mut self, pos: egui::Pos2) {
        self.gesture.motion(pos, &self.params, &mut self.canvas);
    }

    /// Pointer released: the live path becomes an immutable stroke.
    pub fn gesture_end(&mut self) {
        self.gesture.end(&self.params, &mut self.history);
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_drawing()
    }

    // ---- history commands ---------------------------------------------

    pub fn undo(&mut self) {
        if self.history.undo() {
            log::info!("undo ({} strokes remain)", self.history.undo_len());
            self.replay();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            log::info!("redo ({} strokes now)", self.history.undo_len());
            self.replay();
        }
    }

    /// Empty both stacks and the surface.
    pub fn clear(&mut self) {
        log::info!("canvas cleared ({} strokes dropped)", self.history.undo_len());
        self.history.clear();
        self.canvas.clear_surface();
    }

    // ---- session parameter setters ------------------------------------

    pub fn set_eraser(&mut self, eraser: bool) {
        self.params.eraser = eraser;
    }

    pub fn set_mirror(&mut self, mirror: bool) {
        // Affects only strokes drawn after the change.
        self.params.mirror = mirror;
    }

    /// The overlay is repainted fresh every frame and never enters the
    /// buffer, so toggling it needs no replay.
    pub fn set_guides_visible(&mut self, visible: bool) {
        self.params.guides_visible = visible;
    }

    pub fn set_pen_width(&mut self, width: u8) {
        self.params.set_pen_width(width);
    }

    pub fn set_pen_channel(&mut self, channel: usize, value: u8) {
        self.params.set_pen_channel(channel, value);
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: u8) {
        self.params.set_mouse_sensitivity(sensitivity);
    }

    /// Changing the sector count re-derives the whole surface from history.
    pub fn set_sector_count(&mut self, count: u32) {
        self.params.set_sector_count(count);
        self.replay();
    }

    // ---- gallery ------------------------------------------------------

    /// Snapshot the current canvas into the selected gallery slot.
    pub fn capture_to_gallery(&mut self) {
        self.gallery.capture(self.canvas.buffer(), &self.history);
    }

    /// Forget the selected gallery slot. The live canvas is unaffected.
    pub fn remove_gallery_slot(&mut self) {
        self.gallery.remove();
    }

    /// Thumbnail click: select the slot (exclusively) and, if it holds a
    /// doily, replay its history onto the live canvas.
    pub fn select_gallery_slot(&mut self, index: usize) {
        self.gallery.select(index);
        if let Some(strokes) = self.gallery.restore() {
            self.history.replace(strokes);
            self.replay();
        }
    }

    // ---- rendering ----------------------------------------------------

    fn replay(&mut self) {
        self.canvas
            .replay(self.history.strokes(), self.params.sector_count);
    }

    /// The persistent buffer as an egui texture, re-uploaded only when the
    /// buffer version changed since the last upload.
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let version = self.canvas.version();
        let stale = self.canvas_texture.is_none() || self.canvas_texture_version != version;
        if stale {
            let buffer = self.canvas.buffer();
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [buffer.width() as usize, buffer.height() as usize],
                buffer.as_raw(),
            );
            match &mut self.canvas_texture {
                Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.canvas_texture =
                        Some(ctx.load_texture("doily_canvas", image, egui::TextureOptions::NEAREST));
                }
            }
            self.canvas_texture_version = version;
        }
        self.canvas_texture.as_ref().expect("texture just uploaded").id()
    }

    /// The thumbnail texture for one gallery slot, if the slot holds one.
    pub fn slot_texture(&mut self, ctx: &egui::Context, index: usize) -> Option<egui::TextureId> {
        let version = self.gallery.slot_version(index);
        if let Some((cached_version, texture)) = &self.slot_textures[index] {
            if *cached_version == version {
                return Some(texture.id());
            }
        }
        let thumbnail = self.gallery.thumbnail(index)?;
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [thumbnail.width() as usize, thumbnail.height() as usize],
            thumbnail.as_raw(),
        );
        let texture =
            ctx.load_texture(format!("gallery_slot_{index}"), image, egui::TextureOptions::LINEAR);
        let id = texture.id();
        self.slot_textures[index] = Some((version, texture));
        Some(id)
    }
}

impl eframe::App for DoilyApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::gallery_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
