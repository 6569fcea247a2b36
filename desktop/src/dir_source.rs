use std::path::PathBuf;

use iconpack_core::{IconSource, PixelSource, Rgba};
use image::RgbaImage;
use log::debug;

/// Icons read from files in one directory.
pub struct DirSource {
    base_path: PathBuf,
}

impl DirSource {
    pub fn new(base_path: PathBuf) -> Self {
        debug!("Reading icons from {}", base_path.display());
        DirSource { base_path }
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}

impl IconSource for DirSource {
    type Image = DecodedIcon;
    type Error = image::ImageError;

    /// Only a path that is definitely absent counts as missing. Anything
    /// else present under the name, or a path that cannot be checked, is left
    /// for `load` to fail on.
    fn exists(&self, file_name: &str) -> bool {
        self.path(file_name).try_exists().unwrap_or(true)
    }

    fn load(&mut self, file_name: &str) -> Result<DecodedIcon, image::ImageError> {
        let image = image::open(self.path(file_name))?;
        Ok(DecodedIcon(image.into_rgba8()))
    }
}

pub struct DecodedIcon(pub RgbaImage);

impl PixelSource for DecodedIcon {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        Rgba::from(self.0.get_pixel(x, y).0)
    }
}
