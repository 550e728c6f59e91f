mod color;
mod identities;
mod render_action;

pub use self::color::*;
pub use self::identities::*;
pub use self::render_action::*;
