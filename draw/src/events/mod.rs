mod input_event;

pub use self::input_event::*;
