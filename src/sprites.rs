//! Drawing routines for every sprite in the game
//!
//! Each routine paints one hard-coded 16x16 layout onto a blank canvas.
//! Coordinates are inclusive pixel boxes; anything outside the canvas is
//! clipped. Draw order matters: later shapes overwrite earlier ones.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{
    rgb, rgba, BLACK, BRONZE, BRONZE_SHADE, CHARCOAL, DARK_WOOD, GOLD, LIGHT_WOOD, SILVER, STEEL,
    STONE, STONE_SHADE, WOOD,
};

// Characters

pub fn draw_player(canvas: &mut Canvas) {
    let tunic = rgb(200, 150, 100);
    // Body
    canvas.rectangle([4, 4, 11, 11], tunic);
    // Head
    canvas.rectangle([5, 1, 10, 4], rgb(255, 200, 150));
    // Arms
    canvas.rectangle([2, 5, 4, 9], tunic);
    canvas.rectangle([11, 5, 13, 9], tunic);
    // Legs
    canvas.rectangle([4, 11, 6, 14], rgb(50, 50, 150));
    canvas.rectangle([9, 11, 11, 14], rgb(50, 50, 150));
}

pub fn draw_goblin(canvas: &mut Canvas) {
    let skin = rgb(50, 150, 50);
    canvas.rectangle([4, 4, 11, 11], skin);
    canvas.rectangle([5, 1, 10, 4], rgb(100, 200, 100));
    canvas.rectangle([2, 5, 4, 9], skin);
    canvas.rectangle([11, 5, 13, 9], skin);
    canvas.rectangle([4, 11, 6, 14], skin);
    canvas.rectangle([9, 11, 11, 14], skin);
}

// Terrain and world objects

pub fn draw_tree(canvas: &mut Canvas) {
    let leaves = rgb(34, 139, 34);
    // Trunk
    canvas.rectangle([6, 8, 10, 15], WOOD);
    // Leaves
    canvas.rectangle([4, 2, 12, 8], leaves);
    canvas.rectangle([2, 4, 14, 6], leaves);
}

pub fn draw_tree_stump(canvas: &mut Canvas) {
    canvas.rectangle([6, 8, 10, 12], WOOD);
    // Cut top
    canvas.ellipse([5, 6, 11, 8], LIGHT_WOOD);
}

pub fn draw_wall(canvas: &mut Canvas) {
    for x in (0..16).step_by(4) {
        for y in (0..16).step_by(4) {
            canvas.rectangle([x, y, x + 3, y + 3], rgb(120, 120, 120));
            canvas.rectangle([x + 1, y + 1, x + 2, y + 2], rgb(100, 100, 100));
        }
    }
}

pub fn draw_fire(canvas: &mut Canvas) {
    // Base
    canvas.rectangle([4, 12, 12, 15], CHARCOAL);
    // Flames
    canvas.polygon(&[(6, 4), (10, 4), (12, 8), (8, 6), (4, 8)], rgb(255, 100, 0));
    canvas.polygon(&[(7, 2), (9, 2), (11, 6), (8, 4), (5, 6)], rgb(255, 200, 0));
}

pub fn draw_fishing_spot(canvas: &mut Canvas) {
    // Ripples, each ring replacing the one beneath
    canvas.ellipse([2, 2, 14, 14], rgba(0, 100, 255, 128));
    canvas.ellipse([4, 4, 12, 12], rgba(0, 150, 255, 128));
    canvas.ellipse([6, 6, 10, 10], rgba(100, 200, 255, 128));
}

pub fn draw_water(canvas: &mut Canvas) {
    let crest = rgba(100, 200, 255, 128);
    canvas.rectangle([0, 0, 15, 15], rgba(0, 100, 255, 200));
    // Waves
    for x in (0..16).step_by(4) {
        canvas.arc([x, 2, x + 8, 6], 0, 180, 1, crest);
        canvas.arc([x - 2, 6, x + 6, 10], 0, 180, 1, crest);
        canvas.arc([x + 2, 10, x + 10, 14], 0, 180, 1, crest);
    }
}

pub fn draw_road(canvas: &mut Canvas) {
    canvas.rectangle([0, 0, 15, 15], rgb(150, 140, 130));
    // Gravel
    for x in (0..16).step_by(4) {
        for y in (0..16).step_by(4) {
            canvas.point(x + 1, y + 1, rgb(130, 120, 110));
            canvas.point(x + 2, y + 2, rgb(170, 160, 150));
        }
    }
}

pub fn draw_fence(canvas: &mut Canvas) {
    // Posts
    canvas.rectangle([2, 4, 4, 12], WOOD);
    canvas.rectangle([12, 4, 14, 12], WOOD);
    // Boards
    canvas.rectangle([2, 6, 14, 8], LIGHT_WOOD);
    canvas.rectangle([2, 10, 14, 12], LIGHT_WOOD);
}

pub fn draw_castle_wall(canvas: &mut Canvas) {
    canvas.rectangle([0, 4, 15, 15], STONE);
    // Crenellations
    for x in (0..16).step_by(4) {
        canvas.rectangle([x, 0, x + 2, 4], STONE);
    }
    // Masonry
    for x in (0..16).step_by(4) {
        for y in (4..16).step_by(4) {
            canvas.rectangle([x + 1, y + 1, x + 3, y + 3], STONE_SHADE);
        }
    }
}

pub fn draw_castle_door(canvas: &mut Canvas) {
    // Frame
    canvas.rectangle([2, 0, 13, 15], WOOD);
    // Arch, mostly above the canvas
    canvas.arc([2, -6, 13, 4], 0, 180, 2, LIGHT_WOOD);
    // Panel
    canvas.rectangle([4, 2, 11, 14], DARK_WOOD);
    // Handle
    canvas.ellipse([9, 7, 10, 8], GOLD);
}

pub fn draw_castle_stairs(canvas: &mut Canvas) {
    for step in 0..4 {
        canvas.rectangle([0, 12 - step * 3, 15 - step * 4, 15 - step * 3], STONE);
        canvas.rectangle([1, 13 - step * 3, 14 - step * 4, 14 - step * 3], STONE_SHADE);
    }
}

pub fn draw_bridge(canvas: &mut Canvas) {
    // Planks
    canvas.rectangle([0, 6, 15, 10], WOOD);
    // Rails
    canvas.rectangle([0, 4, 15, 6], LIGHT_WOOD);
    canvas.rectangle([0, 10, 15, 12], LIGHT_WOOD);
    // Supports
    canvas.rectangle([2, 2, 4, 14], DARK_WOOD);
    canvas.rectangle([12, 2, 14, 14], DARK_WOOD);
}

pub fn draw_path(canvas: &mut Canvas) {
    canvas.rectangle([0, 0, 15, 15], rgb(170, 140, 100));
    // Checkered dirt speckle on the even grid
    for x in (0..16).step_by(2) {
        for y in (0..16).step_by(2) {
            let speck = if (x + y) % 4 == 0 {
                rgb(150, 120, 80)
            } else {
                rgb(190, 160, 120)
            };
            canvas.point(x, y, speck);
        }
    }
}

pub fn draw_bank_chest(canvas: &mut Canvas) {
    // Body
    canvas.rectangle([2, 4, 13, 13], WOOD);
    // Lid
    canvas.rectangle([2, 2, 13, 4], LIGHT_WOOD);
    // Bands
    canvas.rectangle([2, 6, 13, 7], SILVER);
    canvas.rectangle([2, 10, 13, 11], SILVER);
    // Lock
    canvas.rectangle([6, 6, 9, 9], GOLD);
}

// Tools and weapons

pub fn draw_sword(canvas: &mut Canvas) {
    canvas.polygon(&[(8, 2), (10, 2), (10, 12), (8, 12)], STEEL);
    canvas.rectangle([7, 12, 11, 14], WOOD);
    // Guard
    canvas.rectangle([6, 11, 12, 12], GOLD);
}

pub fn draw_bronze_sword(canvas: &mut Canvas) {
    canvas.polygon(&[(8, 2), (10, 2), (10, 12), (8, 12)], BRONZE);
    canvas.rectangle([7, 12, 11, 14], WOOD);
    canvas.rectangle([6, 11, 12, 12], BRONZE);
}

/// Shared by the generic axe and the bronze axe.
pub fn draw_axe(canvas: &mut Canvas) {
    canvas.rectangle([7, 4, 9, 14], WOOD);
    // Head
    canvas.polygon(&[(4, 2), (12, 2), (12, 6), (4, 6)], STEEL);
}

pub fn draw_fishing_rod(canvas: &mut Canvas) {
    canvas.line((4, 2), (12, 8), 2, WOOD);
    // Handle
    canvas.rectangle([2, 12, 6, 14], WOOD);
    // Line
    canvas.line((12, 8), (14, 12), 1, STEEL);
}

pub fn draw_tinderbox(canvas: &mut Canvas) {
    canvas.rectangle([4, 6, 12, 12], WOOD);
    // Flint and steel
    canvas.line((6, 4), (10, 4), 2, STONE_SHADE);
    canvas.rectangle([5, 7, 11, 11], rgb(101, 67, 33));
}

// Armour

pub fn draw_bronze_helmet(canvas: &mut Canvas) {
    canvas.rectangle([4, 4, 12, 12], BRONZE);
    // Dome
    canvas.arc([4, 2, 12, 10], 0, 180, 2, BRONZE);
    // Brow
    canvas.line((4, 8), (12, 8), 1, BRONZE_SHADE);
}

pub fn draw_bronze_platebody(canvas: &mut Canvas) {
    canvas.rectangle([4, 2, 12, 12], BRONZE);
    // Pauldrons
    canvas.rectangle([2, 2, 4, 6], BRONZE);
    canvas.rectangle([12, 2, 14, 6], BRONZE);
    // Plate seams
    canvas.line((6, 4), (10, 4), 1, BRONZE_SHADE);
    canvas.line((6, 8), (10, 8), 1, BRONZE_SHADE);
}

pub fn draw_bronze_platelegs(canvas: &mut Canvas) {
    canvas.rectangle([4, 2, 7, 14], BRONZE);
    canvas.rectangle([9, 2, 12, 14], BRONZE);
    // Belt
    canvas.rectangle([4, 2, 12, 4], BRONZE_SHADE);
}

// Resources and food

pub fn draw_logs(canvas: &mut Canvas) {
    canvas.rectangle([4, 6, 12, 10], WOOD);
    // End grain
    canvas.ellipse([3, 5, 13, 11], LIGHT_WOOD);
    canvas.ellipse([11, 5, 13, 11], LIGHT_WOOD);
}

pub fn draw_fish(canvas: &mut Canvas) {
    let scales = rgb(100, 100, 255);
    canvas.ellipse([4, 6, 12, 10], scales);
    // Tail
    canvas.polygon(&[(2, 8), (4, 6), (4, 10)], scales);
}

pub fn draw_bait(canvas: &mut Canvas) {
    canvas.ellipse([6, 6, 10, 10], rgb(150, 75, 0));
    canvas.ellipse([5, 7, 8, 9], rgb(170, 85, 0));
}

fn shrimp(canvas: &mut Canvas, shell: Rgba<u8>) {
    canvas.ellipse([6, 6, 12, 10], shell);
    canvas.polygon(&[(4, 8), (6, 6), (6, 10)], shell);
}

pub fn draw_raw_shrimp(canvas: &mut Canvas) {
    shrimp(canvas, rgb(255, 150, 150));
}

pub fn draw_cooked_shrimp(canvas: &mut Canvas) {
    shrimp(canvas, rgb(255, 120, 90));
}

/// Trout body facing left with the tail on the right.
fn trout(canvas: &mut Canvas, body: Rgba<u8>) {
    canvas.ellipse([4, 6, 12, 10], body);
    canvas.polygon(&[(12, 8), (14, 6), (14, 10)], body);
}

pub fn draw_raw_trout(canvas: &mut Canvas) {
    trout(canvas, rgb(150, 150, 255));
    // Eye
    canvas.ellipse([5, 7, 6, 8], rgb(255, 255, 255));
    canvas.point(5, 7, BLACK);
}

pub fn draw_cooked_trout(canvas: &mut Canvas) {
    trout(canvas, rgb(180, 140, 100));
    canvas.ellipse([5, 7, 6, 8], STEEL);
    canvas.point(5, 7, BLACK);
}

pub fn draw_burnt_fish(canvas: &mut Canvas) {
    trout(canvas, CHARCOAL);
    // Char marks
    canvas.line((6, 7), (10, 7), 1, rgb(30, 30, 30));
    canvas.line((6, 9), (10, 9), 1, rgb(30, 30, 30));
}

pub fn draw_gp(canvas: &mut Canvas) {
    let rim = rgb(218, 165, 32);
    // Top coin, then its lighter face
    canvas.ellipse([4, 4, 12, 12], GOLD);
    canvas.ellipse([5, 5, 11, 11], rgb(255, 223, 0));
    // Stack below
    canvas.ellipse_outlined([3, 6, 11, 14], GOLD, rim);
    canvas.ellipse_outlined([2, 8, 10, 16], GOLD, rim);
}
