use doily::canvas::CanvasEngine;
use doily::history::StrokeHistory;
use doily::input::StrokeGesture;
use doily::session::SessionParams;
use egui::Pos2;

fn setup() -> (StrokeGesture, StrokeHistory, CanvasEngine, SessionParams) {
    (
        StrokeGesture::new(),
        StrokeHistory::new(),
        CanvasEngine::new(100, 100),
        SessionParams::default(),
    )
}

#[test]
fn sensitivity_filters_sub_threshold_motion_per_axis() {
    let (mut gesture, mut history, mut canvas, mut params) = setup();
    params.set_mouse_sensitivity(5);

    gesture.begin(Pos2::new(0.0, 0.0), &params, &mut history, &mut canvas);
    // Drag events along X at offsets 2, 4, 6, 8 from the start point.
    for x in [2.0, 4.0, 6.0, 8.0] {
        gesture.motion(Pos2::new(x, 0.0), &params, &mut canvas);
    }
    gesture.end(&params, &mut history);

    // Only x=6 exceeds the threshold relative to the last *recorded* point
    // (the start); x=8 is then only 2 px past the new anchor.
    let stroke = &history.strokes()[0];
    assert_eq!(stroke.points(), &[
        Pos2::new(0.0, 0.0),
        Pos2::new(0.0, 0.0),
        Pos2::new(6.0, 0.0),
    ]);
}

#[test]
fn threshold_is_per_axis_and_strictly_greater() {
    let (mut gesture, mut history, mut canvas, mut params) = setup();
    params.set_mouse_sensitivity(3);

    gesture.begin(Pos2::new(10.0, 10.0), &params, &mut history, &mut canvas);
    // 4 px along Y alone qualifies.
    gesture.motion(Pos2::new(10.0, 14.0), &params, &mut canvas);
    // Exactly 3 px in both axes: not "more than" in either one, so dropped
    // even though the Euclidean distance is well over the threshold.
    gesture.motion(Pos2::new(13.0, 17.0), &params, &mut canvas);
    gesture.end(&params, &mut history);

    let stroke = &history.strokes()[0];
    assert_eq!(stroke.points().len(), 3);
    assert_eq!(stroke.points()[2], Pos2::new(10.0, 14.0));
}

#[test]
fn zero_sensitivity_records_every_motion_event() {
    let (mut gesture, mut history, mut canvas, mut params) = setup();
    params.set_mouse_sensitivity(0);

    gesture.begin(Pos2::new(0.0, 0.0), &params, &mut history, &mut canvas);
    for i in 1..=4 {
        gesture.motion(Pos2::new(i as f32, 0.0), &params, &mut canvas);
    }
    gesture.end(&params, &mut history);

    // 2 seed points + 4 recorded motions.
    assert_eq!(history.strokes()[0].points().len(), 6);
}

#[test]
fn click_without_drag_yields_degenerate_stroke() {
    let (mut gesture, mut history, mut canvas, params) = setup();

    gesture.begin(Pos2::new(42.0, 17.0), &params, &mut history, &mut canvas);
    gesture.end(&params, &mut history);

    let stroke = &history.strokes()[0];
    assert_eq!(stroke.points(), &[Pos2::new(42.0, 17.0), Pos2::new(42.0, 17.0)]);
    // The click left a visible mark without any replay.
    assert!(canvas.buffer().pixels().any(|p| p.0[3] != 0));
}

#[test]
fn beginning_a_stroke_clears_pending_redo() {
    let (mut gesture, mut history, mut canvas, params) = setup();

    gesture.begin(Pos2::new(1.0, 1.0), &params, &mut history, &mut canvas);
    gesture.end(&params, &mut history);
    gesture.begin(Pos2::new(2.0, 2.0), &params, &mut history, &mut canvas);
    gesture.end(&params, &mut history);

    history.undo();
    assert!(history.can_redo());

    // undo; beginStroke; endStroke; redo => no-op redo.
    gesture.begin(Pos2::new(3.0, 3.0), &params, &mut history, &mut canvas);
    gesture.end(&params, &mut history);
    assert!(!history.redo());
    assert_eq!(history.undo_len(), 2);
}

#[test]
fn stroke_snapshots_parameters_at_completion_time() {
    let (mut gesture, mut history, mut canvas, mut params) = setup();
    params.pen_color = [7, 8, 9];
    params.set_pen_width(9);
    params.eraser = false;
    params.mirror = false;

    gesture.begin(Pos2::new(5.0, 5.0), &params, &mut history, &mut canvas);
    gesture.end(&params, &mut history);

    // Later parameter edits must not reach back into history.
    params.pen_color = [0, 0, 0];
    params.set_pen_width(1);
    params.mirror = true;

    let stroke = &history.strokes()[0];
    assert_eq!(stroke.color(), [7, 8, 9]);
    assert_eq!(stroke.width(), 9);
    assert!(!stroke.is_mirrored());
    assert!(!stroke.is_eraser());
}

#[test]
fn incremental_preview_matches_full_stroke_render() {
    let (mut gesture, mut history, mut canvas, mut params) = setup();
    params.set_mouse_sensitivity(0);
    params.pen_color = [120, 130, 140];
    params.set_pen_width(4);

    let points = [
        Pos2::new(20.0, 20.0),
        Pos2::new(35.0, 28.0),
        Pos2::new(50.0, 55.0),
        Pos2::new(70.0, 60.0),
    ];
    gesture.begin(points[0], &params, &mut history, &mut canvas);
    for &p in &points[1..] {
        gesture.motion(p, &params, &mut canvas);
    }
    gesture.end(&params, &mut history);
    let previewed = canvas.buffer().clone();

    // A full replay of the finished stroke reproduces the preview exactly.
    canvas.replay(history.strokes(), params.sector_count);
    assert_eq!(canvas.buffer().as_raw(), previewed.as_raw());
}
