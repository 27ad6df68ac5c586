use doily::stroke::{Stroke, StrokeRef};
use doily::history::StrokeHistory;
use egui::Pos2;
use std::sync::Arc;

// Helper to create a distinct stroke for stack-discipline tests
fn test_stroke(seed: f32) -> StrokeRef {
    Stroke::new_ref(
        vec![Pos2::new(seed, seed), Pos2::new(seed + 10.0, seed)],
        [10, 20, 30],
        2,
        false,
        true,
    )
}

#[test]
fn undo_then_redo_restores_both_stacks_exactly() {
    let mut history = StrokeHistory::new();
    let first = test_stroke(1.0);
    let second = test_stroke(2.0);
    history.push(first.clone());
    history.push(second.clone());

    assert!(history.undo());
    assert!(history.redo());

    // Same content, same order, nothing duplicated or lost.
    assert_eq!(history.undo_len(), 2);
    assert_eq!(history.redo_len(), 0);
    assert!(Arc::ptr_eq(&history.strokes()[0], &first));
    assert!(Arc::ptr_eq(&history.strokes()[1], &second));
}

#[test]
fn undo_twice_then_redo_once_moves_single_strokes() {
    let mut history = StrokeHistory::new();
    for i in 0..3 {
        history.push(test_stroke(i as f32));
    }

    assert!(history.undo());
    assert!(history.undo());
    assert_eq!(history.undo_len(), 1);
    assert_eq!(history.redo_len(), 2);

    assert!(history.redo());
    assert_eq!(history.undo_len(), 2);
    assert_eq!(history.redo_len(), 1);
}

#[test]
fn undo_and_redo_on_empty_stacks_are_no_ops() {
    let mut history = StrokeHistory::new();
    assert!(!history.undo());
    assert!(!history.redo());
    assert_eq!(history.undo_len(), 0);
    assert_eq!(history.redo_len(), 0);

    // A stranded redo with an empty undo stack still works the other way.
    history.push(test_stroke(0.0));
    history.undo();
    assert!(!history.undo());
    assert!(history.redo());
}

#[test]
fn clear_redo_discards_pending_redo() {
    let mut history = StrokeHistory::new();
    history.push(test_stroke(0.0));
    history.push(test_stroke(1.0));
    history.undo();
    assert!(history.can_redo());

    // What a new gesture does the moment the pointer goes down.
    history.clear_redo();
    assert!(!history.can_redo());
    assert!(!history.redo());
    assert_eq!(history.undo_len(), 1);
}

#[test]
fn replace_installs_new_stack_and_clears_redo() {
    let mut history = StrokeHistory::new();
    history.push(test_stroke(0.0));
    history.undo();
    assert!(history.can_redo());

    let stored = vec![test_stroke(5.0), test_stroke(6.0)];
    history.replace(stored.clone());
    assert_eq!(history.undo_len(), 2);
    assert!(!history.can_redo());
    assert!(Arc::ptr_eq(&history.strokes()[0], &stored[0]));
}

#[test]
fn snapshot_is_independent_of_later_stack_mutation() {
    let mut history = StrokeHistory::new();
    history.push(test_stroke(0.0));
    history.push(test_stroke(1.0));

    let snapshot = history.snapshot();
    history.undo();
    history.clear();

    assert_eq!(snapshot.len(), 2);
}
