//! RGBA color helpers and the shared sprite palette
//!
//! Sprites are authored with literal colors. Alpha is optional at the call
//! site: [`rgb`] is fully opaque, [`rgba`] carries an explicit alpha.

use image::Rgba;

/// Fully transparent pixel; the initial value of every canvas cell.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Opaque color from red, green and blue components.
///
/// # Examples
///
/// ```
/// use spritegen::color::rgb;
///
/// assert_eq!(rgb(255, 215, 0), image::Rgba([255, 215, 0, 255]));
/// ```
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Color with an explicit alpha channel (0 = transparent, 255 = opaque).
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
    Rgba([r, g, b, a])
}

/// Whether a pixel has been left untouched (alpha 0).
pub fn is_transparent(color: Rgba<u8>) -> bool {
    color[3] == 0
}

// Palette shared across several sprites

/// Saddle brown used for handles, trunks and chest bodies.
pub const WOOD: Rgba<u8> = rgb(139, 69, 19);
/// Lighter sienna used for end grain, rails and lids.
pub const LIGHT_WOOD: Rgba<u8> = rgb(160, 82, 45);
/// Darker wood for recessed panels and posts.
pub const DARK_WOOD: Rgba<u8> = rgb(120, 60, 15);
pub const BRONZE: Rgba<u8> = rgb(205, 127, 50);
pub const BRONZE_SHADE: Rgba<u8> = rgb(184, 115, 51);
pub const GOLD: Rgba<u8> = rgb(255, 215, 0);
pub const STEEL: Rgba<u8> = rgb(200, 200, 200);
pub const SILVER: Rgba<u8> = rgb(192, 192, 192);
pub const STONE: Rgba<u8> = rgb(180, 180, 180);
pub const STONE_SHADE: Rgba<u8> = rgb(150, 150, 150);
pub const CHARCOAL: Rgba<u8> = rgb(50, 50, 50);
pub const BLACK: Rgba<u8> = rgb(0, 0, 0);
