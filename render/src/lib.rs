//! # spline_render
//!
//! The boundary between the curve engine and whatever draws its output: a frame is
//! described as an ordered list of [`RenderAction`]s, and any backend that can carry
//! those actions out can display the tool. [`spline_scene`] is the single producer of
//! action lists, so the GPU backend in this crate and the CPU backend in
//! `spline_render_software` always receive identical frames.

mod action;
mod buffer;
mod scene;
#[cfg(feature = "render-wgpu")]
mod wgpu_renderer;

pub use self::action::*;
pub use self::buffer::*;
pub use self::scene::*;
#[cfg(feature = "render-wgpu")]
pub use self::wgpu_renderer::*;

#[cfg(feature = "render-wgpu")]
pub use wgpu;
