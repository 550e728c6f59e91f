use spline_render::*;

///
/// An 8-bits per channel RGBA pixel
///
/// The spline scene draws opaque colours onto a cleared background, so pixels are
/// stored straight (no premultiplication) and writes replace whatever was there.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct U8RgbaPixel(pub [u8; 4]);

impl U8RgbaPixel {
    ///
    /// A fully transparent black pixel (the state of a frame before any clear)
    ///
    #[inline]
    pub fn empty() -> U8RgbaPixel {
        U8RgbaPixel([0, 0, 0, 0])
    }
}

impl From<Rgba8> for U8RgbaPixel {
    #[inline]
    fn from(color: Rgba8) -> U8RgbaPixel {
        let Rgba8(components) = color;
        U8RgbaPixel(components)
    }
}

impl From<[u8; 4]> for U8RgbaPixel {
    #[inline]
    fn from(components: [u8; 4]) -> U8RgbaPixel {
        U8RgbaPixel(components)
    }
}
