mod u8_rgba;

pub use self::u8_rgba::*;
