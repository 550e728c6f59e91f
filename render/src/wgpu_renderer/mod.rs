mod error;
mod pipeline;
mod to_buffer;
mod wgpu_renderer;

pub use self::error::*;
pub use self::wgpu_renderer::*;
