use egui::Pos2;

use crate::canvas::CanvasEngine;
use crate::history::StrokeHistory;
use crate::session::SessionParams;
use crate::stroke::LiveStroke;

/// Pointer-gesture state machine for stroke capture.
///
/// Idle until a press begins a live path; qualifying drag positions are
/// appended (and previewed straight into the buffer); release snapshots the
/// path plus the current session parameters into an immutable stroke on the
/// undo stack.
pub struct StrokeGesture {
    // Transient state: the stroke being drawn (if any)
    live: Option<LiveStroke>,
}

impl StrokeGesture {
    pub fn new() -> Self {
        Self { live: None }
    }

    pub fn is_drawing(&self) -> bool {
        self.live.is_some()
    }

    /// Gesture start. Unconditionally clears the redo stack — any pending
    /// redo history is lost the moment a new stroke begins — and previews the
    /// degenerate start segment so a plain click leaves a mark.
    pub fn begin(
        &mut self,
        pos: Pos2,
        params: &SessionParams,
        history: &mut StrokeHistory,
        canvas: &mut CanvasEngine,
    ) {
        history.clear_redo();
        let live = LiveStroke::new(pos);
        canvas.render_live_segment(pos, pos, params);
        self.live = Some(live);
    }

    /// Drag motion. The position is recorded (and its segment previewed) only
    /// if the pointer moved more than `mouse_sensitivity` pixels in either
    /// axis independently since the last *recorded* point. The per-axis test
    /// is deliberate: it is cheaper than a distance check and its axis-biased
    /// smoothing is part of the tool's look.
    pub fn motion(&mut self, pos: Pos2, params: &SessionParams, canvas: &mut CanvasEngine) {
        let Some(live) = &mut self.live else {
            return;
        };
        let last = live.last_point();
        let threshold = params.mouse_sensitivity as f32;
        if (pos.x - last.x).abs() > threshold || (pos.y - last.y).abs() > threshold {
            live.add_point(pos);
            canvas.render_live_segment(last, pos, params);
        }
    }

    /// Gesture end: push the finished stroke onto the undo stack. The buffer
    /// already holds every previewed segment, so nothing is re-rendered here.
    pub fn end(&mut self, params: &SessionParams, history: &mut StrokeHistory) {
        if let Some(live) = self.live.take() {
            let stroke = live.finish(params);
            log::debug!("stroke finished with {} points", stroke.points().len());
            history.push(stroke);
        }
    }

}

impl Default for StrokeGesture {
    fn default() -> Self {
        Self::new()
    }
}
