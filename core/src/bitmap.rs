use alloc::vec;
use alloc::vec::Vec;

use crate::pixel::Rgba;

/// Read access to a decoded RGBA image.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Callers stay within `0..width` and `0..height`.
    fn pixel(&self, x: u32, y: u32) -> Rgba;
}

/// Bytes needed for one packed row. The last byte is kept even when only
/// partially populated.
pub fn row_bytes(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Row-major 1-bit mask, least significant bit first within each byte.
/// Rows never share a byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * row_bytes(self.width) + x as usize / 8;
        self.data[index] & (1 << (x % 8)) != 0
    }
}

pub fn pack(image: &impl PixelSource) -> Bitmap {
    let width = image.width();
    let height = image.height();
    let mut data = Vec::with_capacity(height as usize * row_bytes(width));

    for y in 0..height {
        for x in (0..width).step_by(8) {
            let mut byte = 0u8;
            for bit in 0..8 {
                let column = x + bit;
                if column < width && image.pixel(column, y).is_on() {
                    byte |= 1 << bit;
                }
            }
            data.push(byte);
        }
    }

    Bitmap {
        width,
        height,
        data,
    }
}

/// Owned RGBA pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RawImage {
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        RawImage {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let index = y as usize * self.width as usize + x as usize;
        self.pixels[index] = color;
    }
}

impl PixelSource for RawImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
