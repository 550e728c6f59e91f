mod selection_error;
mod selection_state;

pub use self::selection_error::*;
pub use self::selection_state::*;
