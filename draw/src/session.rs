use crate::events::*;

use spline_curve::*;

///
/// Applies a drained batch of input events to the selection state, returning true
/// if anything changed that a renderer would need to redraw
///
/// This is one iteration of the tool's cooperative cycle: the window glue drains
/// every pending event, hands the batch here, and renders afterwards if asked to.
/// Committing a point resamples the curve synchronously inside `add_point`, so by
/// the time this returns the selection is fully consistent and safe to render.
///
/// A commit when the selection is full is dropped silently: the tool simply stops
/// accepting points at capacity.
///
pub fn apply_input_events<TEventIter: IntoIterator<Item = InputEvent>>(selection: &mut SelectionState, events: TEventIter) -> bool {
    let mut needs_redraw = false;

    for event in events {
        match event {
            InputEvent::PointerMoved(position) => {
                selection.update_pointer_position(position);
                needs_redraw = true;
            }

            InputEvent::CommitPoint => {
                // Points are committed at the last known pointer position; a press
                // before the pointer has entered the window commits nothing
                if let Some(position) = selection.pointer_position() {
                    match selection.add_point(position) {
                        Ok(())                                  => { needs_redraw = true; }
                        Err(SelectionError::CapacityExceeded)   => { }
                    }
                }
            }

            InputEvent::Reset => {
                selection.reset();
                needs_redraw = true;
            }
        }
    }

    needs_redraw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_then_committing_places_a_point() {
        let mut selection = SelectionState::new();

        let changed = apply_input_events(&mut selection, vec![
            InputEvent::PointerMoved(Point2D::new(0.2, 0.3)),
            InputEvent::CommitPoint,
        ]);

        assert!(changed);
        assert!(selection.control_points() == &[Point2D::new(0.2, 0.3)]);
    }

    #[test]
    fn committing_before_any_motion_does_nothing() {
        let mut selection = SelectionState::new();

        apply_input_events(&mut selection, vec![InputEvent::CommitPoint]);

        assert!(selection.control_points().is_empty());
    }

    #[test]
    fn a_batch_is_applied_in_order() {
        let mut selection = SelectionState::new();

        // Move, commit, move, commit: two points at two different positions
        apply_input_events(&mut selection, vec![
            InputEvent::PointerMoved(Point2D::new(-0.5, 0.0)),
            InputEvent::CommitPoint,
            InputEvent::PointerMoved(Point2D::new(0.5, 0.0)),
            InputEvent::CommitPoint,
        ]);

        assert!(selection.control_points() == &[Point2D::new(-0.5, 0.0), Point2D::new(0.5, 0.0)]);
        assert!(selection.curve().len() == 20, "two points should sample a 20 point curve");
    }

    #[test]
    fn reset_clears_the_selection_mid_batch() {
        let mut selection = SelectionState::new();

        apply_input_events(&mut selection, vec![
            InputEvent::PointerMoved(Point2D::new(0.0, 0.0)),
            InputEvent::CommitPoint,
            InputEvent::Reset,
            InputEvent::PointerMoved(Point2D::new(0.1, 0.1)),
            InputEvent::CommitPoint,
        ]);

        assert!(selection.control_points() == &[Point2D::new(0.1, 0.1)], "only the post-reset point should remain");
    }

    #[test]
    fn commits_at_capacity_are_dropped_silently() {
        let mut selection = SelectionState::new();

        apply_input_events(&mut selection, (0..MAX_CONTROL_POINTS).flat_map(|i| {
            vec![InputEvent::PointerMoved(Point2D::new((i as f64) / 100.0, 0.0)), InputEvent::CommitPoint]
        }));
        assert!(selection.mode() == SelectionMode::Full);

        // One more commit: no panic, no growth
        apply_input_events(&mut selection, vec![InputEvent::CommitPoint]);
        assert!(selection.control_points().len() == MAX_CONTROL_POINTS);
    }

    #[test]
    fn pointer_motion_alone_still_requests_a_redraw() {
        // The pointer marker tracks the pointer, so motion redraws even though the
        // curve is untouched
        let mut selection = SelectionState::new();

        let changed = apply_input_events(&mut selection, vec![InputEvent::PointerMoved(Point2D::new(0.0, 0.0))]);

        assert!(changed);
        assert!(selection.curve().is_empty());
    }
}
