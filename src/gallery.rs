use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::history::StrokeHistory;
use crate::stroke::StrokeRef;

/// Fixed number of gallery slots.
pub const SLOT_COUNT: usize = 12;
/// Captured thumbnails are scaled to this height, preserving aspect ratio.
pub const THUMBNAIL_HEIGHT: u32 = 100;

/// One fixed storage location: a rasterized thumbnail plus an independent
/// copy of the stroke history that produced it.
#[derive(Default)]
pub struct GallerySlot {
    thumbnail: Option<RgbaImage>,
    history: Vec<StrokeRef>,
    /// Bumped whenever the slot contents change, so the gallery panel knows
    /// when to re-upload its thumbnail texture.
    version: u64,
}

impl GallerySlot {
    pub fn is_empty(&self) -> bool {
        self.thumbnail.is_none() && self.history.is_empty()
    }

    fn clear(&mut self) {
        self.thumbnail = None;
        self.history.clear();
        self.version += 1;
    }
}

/// The saved-doily gallery: twelve slots and an exclusive selection.
///
/// Capture and remove key off the current selection implicitly; restore hands
/// back a stored history for the app to replay. A slot's stored history is
/// never aliased with the live undo stack — strokes are immutable `Arc`s and
/// each slot owns its own vector of them.
pub struct GalleryStore {
    slots: [GallerySlot; SLOT_COUNT],
    selected: Option<usize>,
}

impl GalleryStore {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| GallerySlot::default()),
            selected: None,
        }
    }

    /// Select a slot, deselecting all others. Out-of-range indices clear the
    /// selection instead.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < SLOT_COUNT).then_some(index);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn slot(&self, index: usize) -> Option<&GallerySlot> {
        self.slots.get(index)
    }

    pub fn thumbnail(&self, index: usize) -> Option<&RgbaImage> {
        self.slots.get(index)?.thumbnail.as_ref()
    }

    pub fn history_len(&self, index: usize) -> usize {
        self.slots.get(index).map_or(0, |slot| slot.history.len())
    }

    pub fn slot_version(&self, index: usize) -> u64 {
        self.slots.get(index).map_or(0, |slot| slot.version)
    }

    /// Snapshot the current canvas into the selected slot: the buffer scaled
    /// to thumbnail height plus an independent copy of the undo stack.
    /// No-op when nothing is selected.
    pub fn capture(&mut self, buffer: &RgbaImage, history: &StrokeHistory) {
        let Some(index) = self.selected else {
            log::info!("gallery capture ignored: no slot selected");
            return;
        };
        let width = (buffer.width() as f32 * THUMBNAIL_HEIGHT as f32 / buffer.height() as f32)
            .round()
            .max(1.0) as u32;
        let thumbnail = imageops::resize(buffer, width, THUMBNAIL_HEIGHT, FilterType::Triangle);

        let slot = &mut self.slots[index];
        slot.thumbnail = Some(thumbnail);
        slot.history = history.snapshot();
        slot.version += 1;
        log::info!("captured {} strokes into gallery slot {}", slot.history.len(), index);
    }

    /// A copy of the selected slot's stored history, for the canvas to
    /// replay. `None` when nothing is selected or the slot has no history —
    /// the live canvas is left untouched in both cases.
    pub fn restore(&self) -> Option<Vec<StrokeRef>> {
        let index = self.selected?;
        let slot = &self.slots[index];
        if slot.history.is_empty() {
            return None;
        }
        log::info!("restoring {} strokes from gallery slot {}", slot.history.len(), index);
        Some(slot.history.clone())
    }

    /// Clear the selected slot back to empty. Only the slot is forgotten;
    /// the live canvas is unaffected even if it currently shows that doily.
    pub fn remove(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        self.slots[index].clear();
        log::info!("cleared gallery slot {}", index);
    }
}

impl Default for GalleryStore {
    fn default() -> Self {
        Self::new()
    }
}
