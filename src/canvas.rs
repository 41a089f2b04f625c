//! Drawable RGBA canvas that sprite routines paint onto
//!
//! A [`Canvas`] starts fully transparent. Every draw call rasterizes one
//! [`Shape`] and overwrites the covered pixels with the shape's exact RGBA
//! value, alpha included; nothing is blended. Pixels outside the canvas are
//! silently dropped. The shapes are also kept in draw order so the geometry a
//! routine produced can be inspected after the fact.

use std::collections::HashSet;

use image::{Rgba, RgbaImage};

use crate::color::TRANSPARENT;
use crate::shapes::{
    rasterize_arc, rasterize_boundary, rasterize_ellipse, rasterize_points, rasterize_polygon,
    rasterize_rect, rasterize_thick_line, Bounds,
};

/// A single draw call, as issued by a sprite routine.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled rectangle over an inclusive box.
    Rectangle { bounds: Bounds, color: Rgba<u8> },
    /// Filled ellipse inscribed in an inclusive box, optionally outlined.
    Ellipse {
        bounds: Bounds,
        fill: Rgba<u8>,
        outline: Option<Rgba<u8>>,
    },
    /// Filled polygon.
    Polygon {
        points: Vec<(i32, i32)>,
        color: Rgba<u8>,
    },
    /// Elliptical arc stroke; angles in degrees, clockwise from 3 o'clock.
    Arc {
        bounds: Bounds,
        start: i32,
        end: i32,
        width: i32,
        color: Rgba<u8>,
    },
    /// Straight line stroke.
    Line {
        from: (i32, i32),
        to: (i32, i32),
        width: i32,
        color: Rgba<u8>,
    },
    /// Single pixel.
    Point { at: (i32, i32), color: Rgba<u8> },
}

impl Shape {
    /// Inclusive bounding box of the shape's geometry.
    ///
    /// For boxed shapes this is the box they were given; for polygons and
    /// lines it spans the vertices (stroke width is not included).
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Rectangle { bounds, .. }
            | Shape::Ellipse { bounds, .. }
            | Shape::Arc { bounds, .. } => *bounds,
            Shape::Polygon { points, .. } => span(points),
            Shape::Line { from, to, .. } => span(&[*from, *to]),
            Shape::Point { at, .. } => [at.0, at.1, at.0, at.1],
        }
    }
}

fn span(points: &[(i32, i32)]) -> Bounds {
    let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
    [min_x, min_y, max_x, max_y]
}

/// Square RGBA drawing surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Create a fully transparent `size` x `size` canvas.
    pub fn new(size: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, TRANSPARENT),
            shapes: Vec::new(),
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Color at (x, y), or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        let (x, y) = self.index(x, y)?;
        Some(*self.image.get_pixel(x, y))
    }

    /// Shapes drawn so far, in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Rasterize `shape`, paint it, and record it.
    pub fn draw(&mut self, shape: Shape) {
        match &shape {
            Shape::Rectangle { bounds, color } => self.paint(rasterize_rect(*bounds), *color),
            Shape::Ellipse {
                bounds,
                fill,
                outline,
            } => {
                let region = rasterize_ellipse(*bounds);
                if let Some(outline) = outline {
                    let ring = rasterize_boundary(&region);
                    self.paint(region, *fill);
                    self.paint(ring, *outline);
                } else {
                    self.paint(region, *fill);
                }
            }
            Shape::Polygon { points, color } => self.paint(rasterize_polygon(points), *color),
            Shape::Arc {
                bounds,
                start,
                end,
                width,
                color,
            } => self.paint(rasterize_arc(*bounds, *start, *end, *width), *color),
            Shape::Line {
                from,
                to,
                width,
                color,
            } => self.paint(rasterize_thick_line(*from, *to, *width), *color),
            Shape::Point { at, color } => self.paint(rasterize_points(&[*at]), *color),
        }
        self.shapes.push(shape);
    }

    pub fn rectangle(&mut self, bounds: Bounds, color: Rgba<u8>) {
        self.draw(Shape::Rectangle { bounds, color });
    }

    pub fn ellipse(&mut self, bounds: Bounds, fill: Rgba<u8>) {
        self.draw(Shape::Ellipse {
            bounds,
            fill,
            outline: None,
        });
    }

    /// Filled ellipse whose one-pixel rim is repainted in `outline`.
    pub fn ellipse_outlined(&mut self, bounds: Bounds, fill: Rgba<u8>, outline: Rgba<u8>) {
        self.draw(Shape::Ellipse {
            bounds,
            fill,
            outline: Some(outline),
        });
    }

    pub fn polygon(&mut self, points: &[(i32, i32)], color: Rgba<u8>) {
        self.draw(Shape::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    pub fn arc(&mut self, bounds: Bounds, start: i32, end: i32, width: i32, color: Rgba<u8>) {
        self.draw(Shape::Arc {
            bounds,
            start,
            end,
            width,
            color,
        });
    }

    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), width: i32, color: Rgba<u8>) {
        self.draw(Shape::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn point(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        self.draw(Shape::Point { at: (x, y), color });
    }

    fn index(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.image.width() && y < self.image.height()).then_some((x, y))
    }

    fn paint(&mut self, pixels: HashSet<(i32, i32)>, color: Rgba<u8>) {
        for (x, y) in pixels {
            if let Some((x, y)) = self.index(x, y) {
                self.image.put_pixel(x, y, color);
            }
        }
    }
}

impl Default for Canvas {
    /// The standard 16x16 sprite canvas.
    fn default() -> Self {
        Canvas::new(16)
    }
}
