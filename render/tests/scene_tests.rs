use spline_curve::*;
use spline_render::*;

///
/// The vertices loaded into a particular buffer by a scene, if any
///
fn buffer_contents(actions: &[RenderAction], buffer_id: VertexBufferId) -> Option<Vec<Vertex2D>> {
    actions.iter()
        .filter_map(|action| match action {
            RenderAction::CreateVertex2DBuffer(id, vertices) if *id == buffer_id => Some(vertices.clone()),
            _ => None,
        })
        .next()
}

fn count_line_strips(actions: &[RenderAction]) -> usize {
    actions.iter().filter(|action| matches!(action, RenderAction::DrawLineStrip(_, _))).count()
}

fn count_triangle_draws(actions: &[RenderAction]) -> usize {
    actions.iter().filter(|action| matches!(action, RenderAction::DrawTriangles(_, _))).count()
}

#[test]
fn every_scene_clears_then_presents() {
    let mut selection = SelectionState::new();
    selection.add_point(Point2D::new(0.0, 0.0)).unwrap();
    selection.add_point(Point2D::new(0.5, 0.5)).unwrap();

    for state in [SelectionState::new(), selection] {
        let actions = spline_scene(&state);

        assert!(actions.first() == Some(&RenderAction::Clear(BACKGROUND_COLOR)), "scene did not start with a clear: {:?}", actions.first());
        assert!(actions.last() == Some(&RenderAction::ShowFrameBuffer), "scene did not end with a present: {:?}", actions.last());
    }
}

#[test]
fn empty_selection_draws_nothing() {
    let actions = spline_scene(&SelectionState::new());

    assert!(count_line_strips(&actions) == 0);
    assert!(count_triangle_draws(&actions) == 0);
    assert!(buffer_contents(&actions, CURVE_BUFFER).is_none());
    assert!(buffer_contents(&actions, MARKER_BUFFER).is_none());
}

#[test]
fn one_point_draws_a_marker_but_no_curve() {
    let mut selection = SelectionState::new();
    selection.add_point(Point2D::new(0.25, -0.5)).unwrap();

    let actions = spline_scene(&selection);

    assert!(count_line_strips(&actions) == 0, "a single point does not define a curve");
    assert!(count_triangle_draws(&actions) == 1);

    let markers = buffer_contents(&actions, MARKER_BUFFER).expect("marker buffer missing");
    assert!(markers.len() == 6, "one marker should be 6 vertices, got {}", markers.len());

    // The marker is centred on the control point
    let centre_x = markers.iter().map(|vertex| { let pos = vertex.pos; pos[0] as f64 }).sum::<f64>() / 6.0;
    let centre_y = markers.iter().map(|vertex| { let pos = vertex.pos; pos[1] as f64 }).sum::<f64>() / 6.0;
    assert!((centre_x - 0.25).abs() < 1e-6 && (centre_y + 0.5).abs() < 1e-6, "marker centred at ({}, {})", centre_x, centre_y);
}

#[test]
fn curve_buffer_matches_the_sampled_curve() {
    let mut selection = SelectionState::new();
    selection.add_point(Point2D::new(0.0, 0.0)).unwrap();
    selection.add_point(Point2D::new(1.0, 0.0)).unwrap();
    selection.add_point(Point2D::new(1.0, 1.0)).unwrap();

    let actions     = spline_scene(&selection);
    let vertices    = buffer_contents(&actions, CURVE_BUFFER).expect("curve buffer missing");

    assert!(vertices.len() == 30, "expected the 30 curve samples, got {} vertices", vertices.len());

    for (vertex, sample) in vertices.iter().zip(selection.curve()) {
        let pos = vertex.pos;

        assert!((pos[0] as f64 - sample.x).abs() < 1e-6, "vertex x {} diverged from sample {:?}", pos[0], sample);
        assert!((pos[1] as f64 - sample.y).abs() < 1e-6, "vertex y {} diverged from sample {:?}", pos[1], sample);
    }

    // The strip covers the whole buffer
    assert!(actions.iter().any(|action| matches!(action, RenderAction::DrawLineStrip(id, range) if *id == CURVE_BUFFER && range.start == 0 && range.end == 30)));
}

#[test]
fn pointer_marker_follows_the_pointer() {
    let mut selection = SelectionState::new();
    selection.update_pointer_position(Point2D::new(-0.4, 0.6));

    let actions = spline_scene(&selection);
    let markers = buffer_contents(&actions, MARKER_BUFFER).expect("pointer marker missing");

    assert!(markers.len() == 6, "pointer alone should produce one marker");

    let centre_x = markers.iter().map(|vertex| { let pos = vertex.pos; pos[0] as f64 }).sum::<f64>() / 6.0;
    let centre_y = markers.iter().map(|vertex| { let pos = vertex.pos; pos[1] as f64 }).sum::<f64>() / 6.0;
    assert!((centre_x + 0.4).abs() < 1e-6 && (centre_y - 0.6).abs() < 1e-6, "marker centred at ({}, {})", centre_x, centre_y);
}

#[test]
fn stale_buffers_are_freed_after_reset() {
    let mut selection = SelectionState::new();
    selection.add_point(Point2D::new(0.0, 0.0)).unwrap();
    selection.add_point(Point2D::new(0.5, 0.5)).unwrap();
    selection.reset();

    // No pointer position was ever recorded, so nothing remains on screen
    let actions = spline_scene(&selection);

    assert!(actions.iter().any(|action| matches!(action, RenderAction::FreeVertexBuffer(id) if *id == CURVE_BUFFER)), "curve buffer should be freed");
    assert!(count_line_strips(&actions) == 0);
}
