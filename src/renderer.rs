//! Sprite rendering to canvases and PNG files
//!
//! Sprites are processed one at a time: a fresh transparent canvas is
//! allocated, the sprite's routine draws on it, the result is written out,
//! and the canvas is dropped before the next sprite starts.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::output::{ensure_dir, save_png, sprite_path, OutputError};
use crate::registry::{self, SpriteDescriptor};

/// Error raised while writing a batch of sprites.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output directory could not be prepared
    #[error("cannot prepare output directory")]
    OutputDir(#[source] OutputError),
    /// A sprite could not be written
    #[error("failed to write sprite '{name}'")]
    Sprite {
        name: &'static str,
        #[source]
        source: OutputError,
    },
}

/// Draw a sprite onto a fresh transparent canvas of its declared size.
///
/// # Examples
///
/// ```
/// use spritegen::registry::find;
/// use spritegen::renderer::render;
///
/// let fire = find("fire").unwrap();
/// let canvas = render(fire);
/// assert_eq!(canvas.size(), 16);
/// assert_eq!(canvas.pixel(8, 13), Some(image::Rgba([50, 50, 50, 255])));
/// ```
pub fn render(descriptor: &SpriteDescriptor) -> Canvas {
    let mut canvas = Canvas::new(descriptor.size);
    (descriptor.routine)(&mut canvas);
    debug!(
        sprite = descriptor.name,
        shapes = canvas.shapes().len(),
        "drew sprite"
    );
    canvas
}

/// Render a sprite and write it to `{dir}/{name}.png`.
///
/// Returns the path written. The directory is created if missing.
pub fn render_to(dir: &Path, descriptor: &SpriteDescriptor) -> Result<PathBuf, RenderError> {
    let path = sprite_path(dir, descriptor.name);
    let canvas = render(descriptor);

    save_png(canvas.image(), &path).map_err(|source| RenderError::Sprite {
        name: descriptor.name,
        source,
    })?;

    info!(sprite = descriptor.name, path = %path.display(), "wrote sprite");
    Ok(path)
}

/// Render `descriptors` in order into `dir`.
///
/// Stops at the first failure; sprites already written stay on disk.
pub fn render_batch(
    dir: &Path,
    descriptors: &[SpriteDescriptor],
) -> Result<Vec<PathBuf>, RenderError> {
    ensure_dir(dir).map_err(RenderError::OutputDir)?;

    let mut written = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        written.push(render_to(dir, descriptor)?);
    }

    info!(count = written.len(), dir = %dir.display(), "sprite batch complete");
    Ok(written)
}

/// Render every registered sprite into `dir`.
pub fn render_all(dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
    render_batch(dir, registry::sprites())
}
