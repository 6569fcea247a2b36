/// Channels at or below this value count as dark, alpha at or below it as transparent.
pub const THRESHOLD: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// A pixel is foreground when it is mostly opaque and at least one
    /// channel is bright. White glyphs on a transparent background pack to
    /// set bits; transparent, dark or dim coloured pixels pack to clear bits.
    pub fn is_on(self) -> bool {
        self.a > THRESHOLD && (self.r > THRESHOLD || self.g > THRESHOLD || self.b > THRESHOLD)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba { r, g, b, a }
    }
}
