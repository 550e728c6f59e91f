mod vertex;

pub use self::vertex::*;
