use std::fmt;
use std::path::{Path, PathBuf};

use argh::FromArgs;
use iconpack_core::{Bitmap, ICONS, Options, SizePolicy};
use log::{debug, error, info};

use crate::dir_source::DirSource;

mod dir_source;

#[derive(FromArgs)]
/// Pack the player icons into a C header of 1-bit PROGMEM bitmaps
struct Args {
    /// directory holding the icon PNGs
    #[argh(option, short = 'i', default = "PathBuf::from(\"icons\")")]
    icons_dir: PathBuf,

    /// header file to generate
    #[argh(option, short = 'o', default = "PathBuf::from(\"icons.h\")")]
    output: PathBuf,

    /// fail on icons that are not 24x24
    #[argh(switch)]
    strict: bool,

    /// log an ASCII rendering of every packed icon (debug level)
    #[argh(switch)]
    preview: bool,
}

#[derive(Debug)]
enum ToolError {
    Generate(iconpack_core::Error<image::ImageError>),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Generate(err) => write!(f, "{err}"),
            ToolError::Io { path, source } => write!(f, "failed to write {}: {source}", path.display()),
        }
    }
}

impl From<iconpack_core::Error<image::ImageError>> for ToolError {
    fn from(err: iconpack_core::Error<image::ImageError>) -> Self {
        ToolError::Generate(err)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let args: Args = argh::from_env();

    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ToolError> {
    let mut source = DirSource::new(args.icons_dir.clone());
    let options = Options {
        size_policy: if args.strict {
            SizePolicy::Strict
        } else {
            SizePolicy::Permissive
        },
    };

    let generated = iconpack_core::generate(&mut source, ICONS, options)?;

    if args.preview {
        for icon in &generated.icons {
            debug!("{}:\n{}", icon.descriptor.identifier, preview(&icon.bitmap));
        }
    }

    write_replacing(&args.output, &generated.text)?;
    info!("Done! {} has been updated.", args.output.display());
    Ok(())
}

/// Writes next to the target and renames over it, so a failed run never
/// leaves a truncated header behind.
fn write_replacing(path: &Path, text: &str) -> Result<(), ToolError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, text).map_err(|source| ToolError::Io {
        path: tmp.clone(),
        source,
    })?;
    std::fs::rename(&tmp, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp);
        ToolError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn preview(bitmap: &Bitmap) -> String {
    let mut out = String::with_capacity((bitmap.width() as usize + 1) * bitmap.height() as usize);
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            out.push(if bitmap.is_set(x, y) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dir_source::tests::{scratch_dir, write_icon};
    use image::{Rgba, RgbaImage};

    fn args(dir: &Path) -> Args {
        Args {
            icons_dir: dir.join("icons"),
            output: dir.join("icons.h"),
            strict: false,
            preview: true,
        }
    }

    fn populate(dir: &Path, skip: &[&str]) {
        let icons = dir.join("icons");
        std::fs::create_dir_all(&icons).unwrap();
        let white = RgbaImage::from_pixel(24, 24, Rgba([255, 255, 255, 255]));
        for icon in ICONS.iter().filter(|icon| !skip.contains(&icon.file_name)) {
            write_icon(&icons, icon.file_name, &white);
        }
    }

    #[test]
    fn writes_header_for_present_icons() {
        let dir = scratch_dir("run-missing");
        populate(&dir, &["pause.png"]);

        run(&args(&dir)).unwrap();

        let text = std::fs::read_to_string(dir.join("icons.h")).unwrap();
        assert!(text.starts_with("#ifndef ICONS_H\n#define ICONS_H\n\n#include <Arduino.h>\n"));
        assert!(text.ends_with("\n#endif\n"));
        assert_eq!(text.matches("PROGMEM").count(), 5);
        assert!(!text.contains("icon_pause"));
        assert!(text.find("icon_play").unwrap() < text.find("icon_heart").unwrap());
        assert!(!dir.join("icons.h.tmp").exists());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn rerun_is_byte_identical() {
        let dir = scratch_dir("run-rerun");
        populate(&dir, &[]);

        run(&args(&dir)).unwrap();
        let first = std::fs::read(dir.join("icons.h")).unwrap();
        run(&args(&dir)).unwrap();
        let second = std::fs::read(dir.join("icons.h")).unwrap();
        assert_eq!(first, second);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn corrupt_icon_keeps_previous_header() {
        let dir = scratch_dir("run-corrupt");
        populate(&dir, &[]);
        std::fs::write(dir.join("icons.h"), "previous").unwrap();
        std::fs::write(dir.join("icons").join("skip_next.png"), b"junk").unwrap();

        let err = run(&args(&dir)).unwrap_err();
        assert!(matches!(
            err,
            ToolError::Generate(iconpack_core::Error::Load { file: "skip_next.png", .. })
        ));
        assert_eq!(std::fs::read_to_string(dir.join("icons.h")).unwrap(), "previous");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn directory_in_place_of_icon_is_fatal() {
        let dir = scratch_dir("run-dir-icon");
        populate(&dir, &["pause.png"]);
        std::fs::create_dir(dir.join("icons").join("pause.png")).unwrap();
        std::fs::write(dir.join("icons.h"), "previous").unwrap();

        let err = run(&args(&dir)).unwrap_err();
        assert!(matches!(
            err,
            ToolError::Generate(iconpack_core::Error::Load { file: "pause.png", .. })
        ));
        assert_eq!(std::fs::read_to_string(dir.join("icons.h")).unwrap(), "previous");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn strict_rejects_odd_sizes() {
        let dir = scratch_dir("run-strict");
        populate(&dir, &[]);
        write_icon(
            &dir.join("icons"),
            "favorite_on.png",
            &RgbaImage::from_pixel(32, 32, Rgba([255, 255, 255, 255])),
        );

        let mut strict = args(&dir);
        strict.strict = true;
        let err = run(&strict).unwrap_err();
        assert_eq!(err.to_string(), "favorite_on.png is 32x32, expected 24x24");
        assert!(!dir.join("icons.h").exists());

        run(&args(&dir)).unwrap();
        assert!(dir.join("icons.h").exists());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = scratch_dir("run-unwritable");
        populate(&dir, &[]);

        let mut bad = args(&dir);
        bad.output = dir.join("missing").join("icons.h");
        assert!(matches!(run(&bad).unwrap_err(), ToolError::Io { .. }));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn preview_renders_rows() {
        let mut image = iconpack_core::RawImage::filled(3, 2, iconpack_core::Rgba::TRANSPARENT);
        image.set(1, 0, iconpack_core::Rgba::WHITE);
        image.set(2, 1, iconpack_core::Rgba::WHITE);
        assert_eq!(preview(&iconpack_core::pack(&image)), ".#.\n..#\n");
    }
}
