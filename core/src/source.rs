use crate::bitmap::PixelSource;

/// Where the orchestrator finds icon images by file name.
pub trait IconSource {
    type Image: PixelSource;
    type Error;

    fn exists(&self, file_name: &str) -> bool;
    fn load(&mut self, file_name: &str) -> Result<Self::Image, Self::Error>;
}
