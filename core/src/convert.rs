use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{info, warn};

use crate::{
    bitmap::{self, Bitmap, PixelSource},
    header,
    icons::{ICON_HEIGHT, ICON_WIDTH, IconDescriptor},
    source::IconSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Pack whatever size the image reports, warn when it is not the nominal size.
    #[default]
    Permissive,
    /// Reject images that are not the nominal size.
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub size_policy: SizePolicy,
}

#[derive(Debug)]
pub enum Error<E> {
    Load { file: &'static str, source: E },
    UnexpectedSize { file: &'static str, width: u32, height: u32 },
    Format,
}

impl<E> From<fmt::Error> for Error<E> {
    fn from(_: fmt::Error) -> Self {
        Error::Format
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load { file, source } => write!(f, "failed to load {file}: {source}"),
            Error::UnexpectedSize {
                file,
                width,
                height,
            } => write!(
                f,
                "{file} is {width}x{height}, expected {ICON_WIDTH}x{ICON_HEIGHT}"
            ),
            Error::Format => f.write_str("failed to format header text"),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Load { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedIcon {
    pub descriptor: IconDescriptor,
    pub bitmap: Bitmap,
}

/// Result of a successful run: the complete header text plus what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub text: String,
    pub icons: Vec<PackedIcon>,
    pub missing: Vec<&'static str>,
}

impl Generated {
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.icons.iter().map(|icon| icon.descriptor.identifier)
    }
}

/// Packs every icon the source has, in table order, into one header.
///
/// Missing files are skipped with a warning. Any load failure aborts the
/// whole run and no text is returned.
pub fn generate<S: IconSource>(
    source: &mut S,
    icons: &[IconDescriptor],
    options: Options,
) -> Result<Generated, Error<S::Error>> {
    let mut text = String::new();
    let mut packed = Vec::with_capacity(icons.len());
    let mut missing = Vec::new();

    header::write_prologue(&mut text)?;

    for descriptor in icons {
        let file = descriptor.file_name;
        if !source.exists(file) {
            warn!("{file} not found.");
            missing.push(file);
            continue;
        }

        info!("Processing {file}...");
        let image = source
            .load(file)
            .map_err(|err| Error::Load { file, source: err })?;
        check_size(file, &image, options.size_policy)?;

        let bitmap = bitmap::pack(&image);
        header::write_array(&mut text, descriptor.identifier, bitmap.as_bytes())?;
        packed.push(PackedIcon {
            descriptor: *descriptor,
            bitmap,
        });
    }

    header::write_epilogue(&mut text)?;

    Ok(Generated {
        text,
        icons: packed,
        missing,
    })
}

fn check_size<E>(
    file: &'static str,
    image: &impl PixelSource,
    policy: SizePolicy,
) -> Result<(), Error<E>> {
    let (width, height) = (image.width(), image.height());
    if width == ICON_WIDTH && height == ICON_HEIGHT {
        return Ok(());
    }
    match policy {
        SizePolicy::Permissive => {
            warn!("{file} is {width}x{height}, expected {ICON_WIDTH}x{ICON_HEIGHT}");
            Ok(())
        }
        SizePolicy::Strict => Err(Error::UnexpectedSize {
            file,
            width,
            height,
        }),
    }
}
