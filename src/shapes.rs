//! Shape rasterization primitives for pixel-perfect rendering.
//!
//! This module provides functions to convert geometric shapes into sets of
//! integer pixel coordinates. Box-shaped primitives take an inclusive
//! [`Bounds`] `[x0, y0, x1, y1]`: both corner pixels belong to the shape.
//! Nothing here clips; coordinates may be negative or arbitrarily large and
//! the canvas discards whatever falls outside it.

use std::collections::HashSet;

/// Inclusive pixel box `[x0, y0, x1, y1]`.
pub type Bounds = [i32; 4];

/// Rasterize a set of points.
///
/// Takes a collection of (x, y) coordinates and returns them as a HashSet.
///
/// # Examples
///
/// ```
/// use spritegen::shapes::rasterize_points;
///
/// let points = vec![(0, 0), (1, 1), (2, 2)];
/// let pixels = rasterize_points(&points);
/// assert_eq!(pixels.len(), 3);
/// assert!(pixels.contains(&(1, 1)));
/// ```
pub fn rasterize_points(points: &[(i32, i32)]) -> HashSet<(i32, i32)> {
    points.iter().copied().collect()
}

/// Rasterize a line using Bresenham's line algorithm.
///
/// Returns all pixels that form a line between two points, endpoints included.
///
/// # Examples
///
/// ```
/// use spritegen::shapes::rasterize_line;
///
/// let pixels = rasterize_line((0, 0), (3, 3));
/// assert_eq!(pixels.len(), 4);
/// assert!(pixels.contains(&(0, 0)));
/// assert!(pixels.contains(&(3, 3)));
/// ```
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        pixels.insert((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    pixels
}

/// Rasterize a line of the given stroke width.
///
/// Each pixel of the Bresenham line is widened across the line's minor axis:
/// vertically for mostly-horizontal lines, horizontally otherwise. Width 1 is
/// the plain Bresenham line; width 0 or less draws nothing.
///
/// # Examples
///
/// ```
/// use spritegen::shapes::rasterize_thick_line;
///
/// let pixels = rasterize_thick_line((0, 0), (3, 0), 2);
/// assert_eq!(pixels.len(), 8);
/// assert!(pixels.contains(&(3, 1)));
/// ```
pub fn rasterize_thick_line(p0: (i32, i32), p1: (i32, i32), width: i32) -> HashSet<(i32, i32)> {
    if width <= 0 {
        return HashSet::new();
    }

    let core = rasterize_line(p0, p1);
    if width == 1 {
        return core;
    }

    let mostly_horizontal = (p1.0 - p0.0).abs() >= (p1.1 - p0.1).abs();
    let lead = (width - 1) / 2;

    core.into_iter()
        .flat_map(|(x, y)| {
            (0..width).map(move |k| {
                let offset = k - lead;
                if mostly_horizontal {
                    (x, y + offset)
                } else {
                    (x + offset, y)
                }
            })
        })
        .collect()
}

/// Rasterize a filled rectangle.
///
/// Returns every pixel inside the inclusive box. A box whose far corner lies
/// before its near corner is empty.
///
/// # Examples
///
/// ```
/// use spritegen::shapes::rasterize_rect;
///
/// let pixels = rasterize_rect([0, 0, 2, 1]);
/// assert_eq!(pixels.len(), 6);
/// assert!(pixels.contains(&(0, 0)));
/// assert!(pixels.contains(&(2, 1)));
/// ```
pub fn rasterize_rect(bounds: Bounds) -> HashSet<(i32, i32)> {
    let [x0, y0, x1, y1] = bounds;
    let mut pixels = HashSet::new();

    for y in y0..=y1 {
        for x in x0..=x1 {
            pixels.insert((x, y));
        }
    }

    pixels
}

/// Whether the center of pixel (x, y) lies inside the ellipse inscribed in
/// `bounds`.
///
/// The ellipse spans the pixel edges `x0..x1 + 1` and `y0..y1 + 1`, so its
/// extreme pixels touch the box. Coordinates are doubled to keep the test in
/// integer arithmetic.
fn inside_ellipse(bounds: Bounds, x: i32, y: i32) -> bool {
    let [x0, y0, x1, y1] = bounds;
    let w = i64::from(x1) - i64::from(x0) + 1;
    let h = i64::from(y1) - i64::from(y0) + 1;
    if w <= 0 || h <= 0 {
        return false;
    }

    let dx = 2 * i64::from(x) - (i64::from(x0) + i64::from(x1));
    let dy = 2 * i64::from(y) - (i64::from(y0) + i64::from(y1));

    dx * dx * h * h + dy * dy * w * w <= w * w * h * h
}

/// Rasterize a filled ellipse inscribed in an inclusive box.
///
/// # Examples
///
/// ```
/// use spritegen::shapes::rasterize_ellipse;
///
/// let pixels = rasterize_ellipse([4, 4, 12, 12]);
/// assert!(pixels.contains(&(8, 8))); // Center
/// assert!(pixels.contains(&(8, 4))); // Touches the top edge
/// assert!(!pixels.contains(&(4, 4))); // Corners are cut
/// ```
pub fn rasterize_ellipse(bounds: Bounds) -> HashSet<(i32, i32)> {
    let [x0, y0, x1, y1] = bounds;
    let mut pixels = HashSet::new();

    for y in y0..=y1 {
        for x in x0..=x1 {
            if inside_ellipse(bounds, x, y) {
                pixels.insert((x, y));
            }
        }
    }

    pixels
}

/// One-pixel boundary ring of a filled region.
///
/// A pixel belongs to the ring when at least one of its four neighbours is
/// outside the region. Used for outlined ellipses.
pub fn rasterize_boundary(region: &HashSet<(i32, i32)>) -> HashSet<(i32, i32)> {
    region
        .iter()
        .copied()
        .filter(|&(x, y)| {
            [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                .iter()
                .any(|n| !region.contains(n))
        })
        .collect()
}

/// Rasterize a filled polygon using scanline fill algorithm.
///
/// Uses an even-odd fill rule sampled at integer rows, then adds the
/// Bresenham-rasterized edges so boundary pixels are always covered.
/// Fewer than three vertices yields nothing.
///
/// # Examples
///
/// ```
/// use spritegen::shapes::rasterize_polygon;
///
/// let triangle = vec![(0, 0), (4, 0), (2, 3)];
/// let pixels = rasterize_polygon(&triangle);
/// assert!(pixels.len() > 0);
/// assert!(pixels.contains(&(2, 1)));
/// ```
pub fn rasterize_polygon(vertices: &[(i32, i32)]) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if vertices.len() < 3 {
        return pixels;
    }

    let min_y = vertices.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let max_y = vertices.iter().map(|&(_, y)| y).max().unwrap_or(0);

    // Scanline fill
    for y in min_y..=max_y {
        let mut crossings: Vec<f64> = Vec::new();

        for (i, &(x1, y1)) in vertices.iter().enumerate() {
            let (x2, y2) = vertices[(i + 1) % vertices.len()];

            // Horizontal edges are covered by the edge pass below
            if y1 == y2 {
                continue;
            }

            // Half-open span: a vertex shared by two edges is counted once
            if y < y1.min(y2) || y >= y1.max(y2) {
                continue;
            }

            let t = f64::from(y - y1) / f64::from(y2 - y1);
            crossings.push(f64::from(x1) + t * f64::from(x2 - x1));
        }

        crossings.sort_by(|a, b| a.total_cmp(b));

        for span in crossings.chunks_exact(2) {
            let x_start = span[0].ceil() as i32;
            let x_end = span[1].floor() as i32;
            for x in x_start..=x_end {
                pixels.insert((x, y));
            }
        }
    }

    // Edges
    for (i, &from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        pixels.extend(rasterize_line(from, to));
    }

    pixels
}

/// Rasterize an elliptical arc stroke.
///
/// Covers the ring between the ellipse inscribed in `bounds` and the one
/// inscribed in `bounds` inset by `width` on every side, limited to angles
/// `start..=end` in degrees. Angles run clockwise from 3 o'clock since y grows
/// downward, so `0..=180` is the lower half. When the inset box collapses the
/// whole ellipse inside the angle range is covered.
///
/// # Examples
///
/// ```
/// use spritegen::shapes::rasterize_arc;
///
/// let pixels = rasterize_arc([0, 2, 8, 6], 0, 180, 1);
/// assert!(pixels.contains(&(4, 6))); // Bottom of the ring
/// assert!(!pixels.contains(&(4, 2))); // Top half is excluded
/// ```
pub fn rasterize_arc(bounds: Bounds, start: i32, end: i32, width: i32) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if width <= 0 {
        return pixels;
    }

    let [x0, y0, x1, y1] = bounds;
    let inner = [x0 + width, y0 + width, x1 - width, y1 - width];
    let full_turn = end - start >= 360;
    // Reversed ranges wrap through 0 degrees
    let sweep = f64::from((end - start).rem_euclid(360));

    // Doubled extents, matching the doubled center offsets below
    let w = f64::from(x1 - x0 + 1);
    let h = f64::from(y1 - y0 + 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            if !inside_ellipse(bounds, x, y) || inside_ellipse(inner, x, y) {
                continue;
            }

            if !full_turn {
                let dx = f64::from(2 * x - (x0 + x1)) / w;
                let dy = f64::from(2 * y - (y0 + y1)) / h;
                let angle = dy.atan2(dx).to_degrees();
                let offset = (angle - f64::from(start)).rem_euclid(360.0);
                // Tolerance keeps the exact end angles inside after rounding
                if offset > sweep + 1e-9 {
                    continue;
                }
            }

            pixels.insert((x, y));
        }
    }

    pixels
}
