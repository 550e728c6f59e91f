mod binomial;
mod basis;
mod sample;

pub use self::binomial::*;
pub use self::basis::*;
pub use self::sample::*;
