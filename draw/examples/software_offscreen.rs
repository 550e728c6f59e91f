//!
//! Renders a scripted spline session to a PNG file using the software renderer
//! instead of a window. Run with `cargo run --example software_offscreen`.
//!

use spline_curve::*;
use spline_draw::*;
use spline_render::*;
use spline_render_software::*;

use std::fs;

fn main() {
    // Replay a fixed session instead of reading mouse input
    let mut selection   = SelectionState::new();
    let events          = vec![
        InputEvent::PointerMoved(Point2D::new(-0.8, -0.6)),
        InputEvent::CommitPoint,
        InputEvent::PointerMoved(Point2D::new(-0.3, 0.7)),
        InputEvent::CommitPoint,
        InputEvent::PointerMoved(Point2D::new(0.4, -0.7)),
        InputEvent::CommitPoint,
        InputEvent::PointerMoved(Point2D::new(0.8, 0.5)),
        InputEvent::CommitPoint,
        InputEvent::PointerMoved(Point2D::new(0.0, 0.9)),
    ];
    apply_input_events(&mut selection, events);

    // Draw the scene into an offscreen frame
    let mut renderer = SoftwareRenderer::new(640, 480);
    renderer.render(spline_scene(&selection));

    // Save the result
    let png_file = fs::File::create("software_offscreen.png").expect("Could not create software_offscreen.png");
    renderer.frame().to_png(png_file).expect("Could not encode software_offscreen.png");

    println!("Rendered {} curve samples to software_offscreen.png", selection.curve().len());
}
