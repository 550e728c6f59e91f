use spline_curve::*;
use spline_draw::*;
use spline_render::*;

use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use futures::executor;

use std::sync::*;

const INITIAL_WIDTH: f64 = 640.0;
const INITIAL_HEIGHT: f64 = 480.0;

///
/// Places control points where the user clicks and draws the bezier curve they
/// define, re-sampled live as points are added. Escape clears the selection.
///
fn main() {
    // Set up an event loop and the window the tool runs in
    let event_loop  = EventLoop::new();
    let window      = WindowBuilder::new()
        .with_title("Splines")
        .with_inner_size(LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT))
        .build(&event_loop)
        .expect("Could not create the main window");

    // Bits of wgpu are async so we need an async blocker here
    executor::block_on(async move {
        // Create a new WGPU instance, surface and adapter
        let backends    = wgpu::util::backend_bits_from_env().unwrap_or(wgpu::Backends::PRIMARY);
        let instance    = wgpu::Instance::new(wgpu::InstanceDescriptor { backends, ..Default::default() });
        let surface     = unsafe { instance.create_surface(&window) }.expect("Could not create a render surface for the main window");
        let adapter     = instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference:       wgpu::PowerPreference::default(),
            force_fallback_adapter: false,
            compatible_surface:     Some(&surface),
        }).await.expect("Could not acquire a graphics adapter");

        // Fetch the device and the queue
        let (device, queue) = adapter.request_device(&wgpu::DeviceDescriptor {
            label:      None,
            features:   wgpu::Features::empty(),
            limits:     wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits()),
        }, None).await.expect("Could not open the graphics device");

        // Create the renderer for the surface
        let device          = Arc::new(device);
        let queue           = Arc::new(queue);
        let surface         = Arc::new(surface);
        let adapter         = Arc::new(adapter);
        let mut renderer    = WgpuRenderer::from_surface(Arc::clone(&device), Arc::clone(&queue), Arc::clone(&surface), Arc::clone(&adapter))
            .expect("Could not create a renderer for the main window");

        let size = window.inner_size();
        renderer.prepare_to_render(size.width, size.height);

        // The tool's entire interactive state: the engine owns it, the loop feeds it
        let mut selection   = SelectionState::new();
        let mut window_size = (size.width, size.height);
        let mut pending     = vec![];

        // Run the main event loop (which is not async)
        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::WindowEvent { event, .. } => {
                    match event {
                        WindowEvent::CloseRequested => {
                            *control_flow = ControlFlow::Exit;
                        }

                        WindowEvent::Resized(new_size) => {
                            window_size = (new_size.width, new_size.height);
                            renderer.prepare_to_render(new_size.width, new_size.height);
                            window.request_redraw();
                        }

                        WindowEvent::CursorMoved { position, .. } => {
                            if let Some(mapped) = pointer_to_ndc(position.x, position.y, window_size.0, window_size.1) {
                                pending.push(InputEvent::PointerMoved(mapped));
                            }
                        }

                        WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                            pending.push(InputEvent::CommitPoint);
                        }

                        WindowEvent::KeyboardInput { input, .. } => {
                            if input.state == ElementState::Pressed && input.virtual_keycode == Some(VirtualKeyCode::Escape) {
                                pending.push(InputEvent::Reset);
                            }
                        }

                        _ => {}
                    }
                }

                Event::MainEventsCleared => {
                    // One cycle: drain everything that arrived, then render if needed
                    if !pending.is_empty() {
                        let points_before = selection.control_points().len();

                        if apply_input_events(&mut selection, pending.drain(..)) {
                            window.request_redraw();
                        }

                        if selection.control_points().len() != points_before {
                            println!("{} control points, {} curve samples", selection.control_points().len(), selection.curve().len());
                        }
                    }
                }

                Event::RedrawRequested(_) => {
                    renderer.render_to_surface(spline_scene(&selection));
                }

                _ => {}
            }
        });
    });
}
