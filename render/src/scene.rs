use crate::action::*;
use crate::buffer::*;

use spline_curve::*;

/// The vertex buffer holding the sampled curve polyline
pub const CURVE_BUFFER: VertexBufferId = VertexBufferId(0);

/// The vertex buffer holding the control point and pointer markers
pub const MARKER_BUFFER: VertexBufferId = VertexBufferId(1);

/// The colour the frame is cleared to
pub const BACKGROUND_COLOR: Rgba8 = Rgba8([24, 24, 32, 255]);

/// Half the width of a marker square, in normalised device coordinates
const MARKER_HALF_SIZE: f32 = 0.015;

///
/// Appends the two triangles of a square marker centred on a point
///
fn push_marker(vertices: &mut Vec<Vertex2D>, point: Point2D, r: f32, g: f32, b: f32) {
    let (x, y)  = (point.x as f32, point.y as f32);
    let s       = MARKER_HALF_SIZE;

    let corners = [
        (x - s, y - s), (x + s, y - s), (x + s, y + s),
        (x - s, y - s), (x + s, y + s), (x - s, y + s),
    ];

    vertices.extend(corners.iter().map(|(cx, cy)| Vertex2D::with_pos(*cx, *cy).with_color(r, g, b, 1.0)));
}

///
/// Builds the render actions for one frame of the spline tool
///
/// This is the only place frames are described, so every backend renders the same
/// thing: the background, the sampled curve as a line strip (once 2 or more points
/// are placed), a marker for each control point, and a marker for the live pointer
/// position. The returned list always ends with `ShowFrameBuffer`.
///
pub fn spline_scene(selection: &SelectionState) -> Vec<RenderAction> {
    let mut actions = vec![RenderAction::Clear(BACKGROUND_COLOR)];

    // The curve is drawn beneath the markers
    let curve = selection.curve();
    if !curve.is_empty() {
        let vertices = curve.iter()
            .map(|point| Vertex2D::with_pos(point.x as f32, point.y as f32).with_color(0.9, 0.9, 0.95, 1.0))
            .collect::<Vec<_>>();
        let num_vertices = vertices.len();

        actions.push(RenderAction::CreateVertex2DBuffer(CURVE_BUFFER, vertices));
        actions.push(RenderAction::DrawLineStrip(CURVE_BUFFER, 0..num_vertices));
    } else {
        actions.push(RenderAction::FreeVertexBuffer(CURVE_BUFFER));
    }

    // Control points in amber, the pointer in grey
    let mut markers = vec![];
    for point in selection.control_points() {
        push_marker(&mut markers, *point, 1.0, 0.65, 0.2);
    }
    if let Some(pointer) = selection.pointer_position() {
        push_marker(&mut markers, pointer, 0.5, 0.5, 0.55);
    }

    if !markers.is_empty() {
        let num_vertices = markers.len();

        actions.push(RenderAction::CreateVertex2DBuffer(MARKER_BUFFER, markers));
        actions.push(RenderAction::DrawTriangles(MARKER_BUFFER, 0..num_vertices));
    } else {
        actions.push(RenderAction::FreeVertexBuffer(MARKER_BUFFER));
    }

    actions.push(RenderAction::ShowFrameBuffer);
    actions
}
