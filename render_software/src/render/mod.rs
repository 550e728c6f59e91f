mod rgba_frame;
mod software_renderer;

pub use self::rgba_frame::*;
pub use self::software_renderer::*;
