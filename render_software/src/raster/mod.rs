mod line;
mod triangle;

pub use self::line::*;
pub use self::triangle::*;
