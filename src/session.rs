use serde::{Deserialize, Serialize};

pub const PEN_WIDTH_MAX: u8 = 20;
pub const SENSITIVITY_MAX: u8 = 30;
pub const SECTOR_COUNT_MAX: u32 = 200;

/// Live-editable drawing parameters for the active canvas.
///
/// These apply to the *next* stroke being drawn; every completed stroke keeps
/// its own snapshot (see [`crate::stroke::Stroke`]), so editing them never
/// changes history retroactively. The whole struct is persisted across runs
/// via eframe storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SessionParams {
    /// Number of angular sectors each stroke is replicated into.
    pub sector_count: u32,
    /// Whether each sector copy also gets a reflected counterpart.
    pub mirror: bool,
    /// Whether the decorative sector guide lines are drawn.
    pub guides_visible: bool,
    /// Pen color, one channel per RGB slider.
    pub pen_color: [u8; 3],
    /// Pen thickness in pixels.
    pub pen_width: u8,
    /// Whether the pen is currently in eraser mode.
    pub eraser: bool,
    /// Minimum per-axis pointer travel before a drag point is recorded.
    pub mouse_sensitivity: u8,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            sector_count: 30,
            mirror: true,
            guides_visible: true,
            pen_color: [192, 192, 192],
            pen_width: 2,
            eraser: false,
            mouse_sensitivity: 1,
        }
    }
}

impl SessionParams {
    // The UI sliders already clamp to these ranges; the setters clamp again so
    // the core never trusts its callers.

    pub fn set_sector_count(&mut self, count: u32) {
        self.sector_count = count.min(SECTOR_COUNT_MAX);
    }

    pub fn set_pen_width(&mut self, width: u8) {
        self.pen_width = width.min(PEN_WIDTH_MAX);
    }

    /// Set one RGB channel of the pen color (0 = red, 1 = green, 2 = blue).
    pub fn set_pen_channel(&mut self, channel: usize, value: u8) {
        if let Some(slot) = self.pen_color.get_mut(channel) {
            *slot = value;
        }
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: u8) {
        self.mouse_sensitivity = sensitivity.min(SENSITIVITY_MAX);
    }
}
