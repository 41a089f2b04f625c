//! Sprite registry: the ordered list of sprites generated on every run
//!
//! Each entry pairs an output name with a canvas size and the routine that
//! draws it. The list is declarative: names double as output file stems, so
//! they are unique, but one routine may back several names (`bronze_axe`
//! reuses the generic axe).

use std::fmt;

use crate::canvas::Canvas;
use crate::sprites::*;

/// Side length of every game sprite.
pub const SPRITE_SIZE: u32 = 16;

/// A sprite drawing routine.
pub type DrawRoutine = fn(&mut Canvas);

/// A registered sprite: output name, canvas size and drawing routine.
#[derive(Clone, Copy)]
pub struct SpriteDescriptor {
    pub name: &'static str,
    pub size: u32,
    pub routine: DrawRoutine,
}

impl SpriteDescriptor {
    pub const fn new(name: &'static str, size: u32, routine: DrawRoutine) -> Self {
        Self {
            name,
            size,
            routine,
        }
    }
}

impl fmt::Debug for SpriteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpriteDescriptor")
            .field("name", &self.name)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

const fn sprite(name: &'static str, routine: DrawRoutine) -> SpriteDescriptor {
    SpriteDescriptor::new(name, SPRITE_SIZE, routine)
}

static SPRITES: [SpriteDescriptor; 34] = [
    sprite("player", draw_player),
    sprite("tree", draw_tree),
    sprite("tree_stump", draw_tree_stump),
    sprite("wall", draw_wall),
    sprite("goblin", draw_goblin),
    sprite("fire", draw_fire),
    sprite("fishing_spot", draw_fishing_spot),
    sprite("sword", draw_sword),
    sprite("axe", draw_axe),
    sprite("logs", draw_logs),
    sprite("fish", draw_fish),
    sprite("water", draw_water),
    sprite("road", draw_road),
    sprite("fence", draw_fence),
    sprite("castle_wall", draw_castle_wall),
    sprite("castle_door", draw_castle_door),
    sprite("castle_stairs", draw_castle_stairs),
    sprite("bridge", draw_bridge),
    sprite("path", draw_path),
    sprite("bronze_helmet", draw_bronze_helmet),
    sprite("bronze_platebody", draw_bronze_platebody),
    sprite("bronze_platelegs", draw_bronze_platelegs),
    sprite("bronze_sword", draw_bronze_sword),
    sprite("bronze_axe", draw_axe),
    sprite("fishing_rod", draw_fishing_rod),
    sprite("bait", draw_bait),
    sprite("tinderbox", draw_tinderbox),
    sprite("raw_shrimp", draw_raw_shrimp),
    sprite("cooked_shrimp", draw_cooked_shrimp),
    sprite("raw_trout", draw_raw_trout),
    sprite("cooked_trout", draw_cooked_trout),
    sprite("burnt_fish", draw_burnt_fish),
    sprite("bank_chest", draw_bank_chest),
    sprite("gp", draw_gp),
];

/// All registered sprites, in generation order.
pub fn sprites() -> &'static [SpriteDescriptor] {
    &SPRITES
}

/// Look up a sprite by its output name.
///
/// # Examples
///
/// ```
/// use spritegen::registry::find;
///
/// assert_eq!(find("fire").map(|s| s.size), Some(16));
/// assert!(find("dragon").is_none());
/// ```
pub fn find(name: &str) -> Option<&'static SpriteDescriptor> {
    SPRITES.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_transparent;
    use std::collections::HashSet;

    fn draw(descriptor: &SpriteDescriptor) -> Canvas {
        let mut canvas = Canvas::new(descriptor.size);
        (descriptor.routine)(&mut canvas);
        canvas
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = sprites().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), sprites().len());
    }

    #[test]
    fn test_every_sprite_is_sixteen_square() {
        assert!(sprites().iter().all(|s| s.size == SPRITE_SIZE));
    }

    #[test]
    fn test_order_is_preserved() {
        let names: Vec<_> = sprites().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), 34);
        assert_eq!(names[0], "player");
        assert_eq!(names[5], "fire");
        assert_eq!(names[22], "bronze_sword");
        assert_eq!(names[23], "bronze_axe");
        assert_eq!(names[33], "gp");
    }

    #[test]
    fn test_bronze_axe_aliases_axe() {
        let axe = find("axe").unwrap();
        let bronze_axe = find("bronze_axe").unwrap();
        assert_eq!(draw(axe).image(), draw(bronze_axe).image());
    }

    #[test]
    fn test_every_routine_draws_something() {
        for descriptor in sprites() {
            let canvas = draw(descriptor);
            assert!(
                !canvas.shapes().is_empty(),
                "sprite '{}' issued no draw calls",
                descriptor.name
            );
            assert!(
                canvas.image().pixels().any(|p| !is_transparent(*p)),
                "sprite '{}' is fully transparent",
                descriptor.name
            );
        }
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("").is_none());
        assert!(find("Player").is_none());
    }
}
