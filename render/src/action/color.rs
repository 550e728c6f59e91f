///
/// An 8-bits per channel RGBA colour
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    ///
    /// The red, green, blue and alpha components as values between 0.0 and 1.0
    ///
    #[inline]
    pub fn to_components(self) -> [f64; 4] {
        let Rgba8([r, g, b, a]) = self;

        [(r as f64) / 255.0, (g as f64) / 255.0, (b as f64) / 255.0, (a as f64) / 255.0]
    }
}
