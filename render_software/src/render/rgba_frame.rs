use crate::pixel::*;

#[cfg(feature = "render_png")]
use std::io;

///
/// A frame of u8 RGBA pixels that the software renderer draws into
///
/// The frame owns its pixels. Plotting outside the bounds is silently ignored, which
/// lets the rasterisers run without clipping their inputs first.
///
pub struct RgbaFrame {
    width:  usize,
    height: usize,
    pixels: Vec<U8RgbaPixel>,
}

impl RgbaFrame {
    ///
    /// Creates a frame of a particular size, initially transparent black
    ///
    pub fn new(width: usize, height: usize) -> RgbaFrame {
        RgbaFrame {
            width:  width,
            height: height,
            pixels: vec![U8RgbaPixel::empty(); width * height],
        }
    }

    /// Width of the frame in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the frame in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// Fills the whole frame with a single colour
    ///
    pub fn fill(&mut self, color: U8RgbaPixel) {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
    }

    ///
    /// Writes a pixel, ignoring coordinates that fall outside the frame
    ///
    #[inline]
    pub fn plot(&mut self, x: i64, y: i64, color: U8RgbaPixel) {
        if x < 0 || y < 0 || x >= (self.width as i64) || y >= (self.height as i64) {
            return;
        }

        self.pixels[(y as usize) * self.width + (x as usize)] = color;
    }

    ///
    /// Reads the pixel at a coordinate inside the frame
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> U8RgbaPixel {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) is outside a {}x{} frame", x, y, self.width, self.height);

        self.pixels[y * self.width + x]
    }

    ///
    /// The frame's pixels in row-major order
    ///
    #[inline]
    pub fn pixels(&self) -> &[U8RgbaPixel] {
        &self.pixels
    }

    ///
    /// The frame's pixels as raw RGBA bytes in row-major order
    ///
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter()
            .flat_map(|U8RgbaPixel(components)| components.iter().copied())
            .collect()
    }

    ///
    /// Encodes the frame as an 8-bit RGBA PNG
    ///
    #[cfg(feature = "render_png")]
    pub fn to_png<TTarget: io::Write>(&self, target: TTarget) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(target, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.to_bytes())?;

        Ok(())
    }
}
