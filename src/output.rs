//! PNG output and file path generation

use image::{ImageFormat, RgbaImage};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory sprites are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/sprites";

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output directory could not be created
    #[error("cannot create directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The image could not be encoded or written
    #[error("cannot write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Create `dir` and any missing parents.
///
/// Succeeds without touching anything when the directory already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Save an RGBA image to a PNG file.
///
/// Missing parent directories are created first. An existing file at `path`
/// is overwritten.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Generate the output path for a sprite: `{dir}/{name}.png`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use spritegen::output::sprite_path;
///
/// let path = sprite_path(Path::new("assets/sprites"), "fire");
/// assert_eq!(path, PathBuf::from("assets/sprites/fire.png"));
/// ```
pub fn sprite_path(dir: &Path, sprite_name: &str) -> PathBuf {
    dir.join(format!("{}.png", sprite_name))
}
