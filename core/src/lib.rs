#![no_std]

pub mod bitmap;
pub mod convert;
pub mod header;
pub mod icons;
pub mod pixel;
pub mod source;


extern crate alloc;

pub use bitmap::{Bitmap, PixelSource, RawImage, pack};
pub use convert::{Error, Generated, Options, PackedIcon, SizePolicy, generate};
pub use icons::{ICONS, IconDescriptor};
pub use pixel::Rgba;
pub use source::IconSource;
