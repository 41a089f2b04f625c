//! spritegen - batch generator for the game's pixel-art sprites
//!
//! This library provides functionality to:
//! - Rasterize primitive shapes (rectangles, ellipses, polygons, arcs, lines, points)
//! - Paint them onto transparent RGBA canvases
//! - Render every registered sprite to a PNG file

pub mod canvas;
pub mod cli;
pub mod color;
pub mod output;
pub mod registry;
pub mod renderer;
pub mod shapes;
pub mod sprites;
