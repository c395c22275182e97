//! Gameplay constants - layout, movement, and spawn tuning.
//!
//! Screen width and height are session parameters, not constants. Box sizes
//! are the render sizes the host draws at; collision uses them directly.

use crate::types::AlienKind;

// Formation layout
pub const FORMATION_COLUMNS: i32 = 11;
pub const FORMATION_ROWS: i32 = 5;
pub const FORMATION_ORIGIN_X: i32 = 120; // column 0 spawn x
pub const FORMATION_COLUMN_SPACING: i32 = 60; // pixels between columns

/// Spawn y per row, top to bottom. The bottom gap is 35, not 45.
pub const FORMATION_ROW_Y: [i32; 5] = [100, 145, 190, 235, 270];

// Formation movement
pub const FORMATION_STEP_INTERVAL_MS: u64 = 250;
pub const FORMATION_STEP_X: i32 = 10; // pixels per horizontal step
pub const FORMATION_STEP_Y: i32 = 25; // pixels per descend step
pub const RIGHT_EDGE_MARGIN: i32 = 10; // pixels
pub const LEFT_EDGE_MARGIN: i32 = 15; // pixels

// Box sizes (pixels)
pub const ALIEN_WIDTH: i32 = 80;
pub const ALIEN_HEIGHT: i32 = 40;
pub const PLAYER_WIDTH: i32 = 36;
pub const PLAYER_HEIGHT: i32 = 24;
pub const SHOT_WIDTH: i32 = 40;
pub const SHOT_HEIGHT: i32 = 28;
pub const BOMB_WIDTH: i32 = 12;
pub const BOMB_HEIGHT: i32 = 24;
pub const MOTHER_SHIP_WIDTH: i32 = 64;
pub const MOTHER_SHIP_HEIGHT: i32 = 28;

// Player
pub const PLAYER_MOVE_STEP: i32 = 10; // pixels per move intent
pub const PLAYER_BOTTOM_OFFSET: i32 = 40; // spawn y = height - this
pub const SHOT_SPAWN_OFFSET_X: i32 = 13; // shot x = player x + this

// Projectile movement
pub const SHOT_STEP: i32 = 10; // pixels per tick, upward
pub const BOMB_STEP: i32 = 6; // pixels per tick, downward

// Bombs
pub const BOMB_SPAWN_THRESHOLD_BASE: i32 = 75; // draw(0..100) must exceed base + destroyed/2
pub const BOMB_COLUMN_DRAW_MAX: i32 = 10; // column draw range; column 10 never drops
pub const BOMB_COLUMN_RETRIES: i32 = 60; // after the initial column draw

// Bonus ship
pub const MOTHER_SHIP_STEP: i32 = 5; // pixels per tick, leftward
pub const MOTHER_SHIP_Y: i32 = 80; // spawn altitude
pub const MOTHER_SHIP_SPAWN_THRESHOLD: i32 = 90; // draw(0..100) must exceed

// Session
pub const STARTING_LIVES: i32 = 3;
pub const ALIEN_POINTS: u32 = 100;
pub const MOTHER_SHIP_POINTS: u32 = 1000;
pub const LOST_LIFE_BANNER_MS: u64 = 1000;

/// Alien kind for a formation row (row 0 is the top).
pub fn alien_kind_for_row(row: i32) -> AlienKind {
    match row {
        0 => AlienKind::Squid,
        1 | 2 => AlienKind::Crab,
        _ => AlienKind::Octopus,
    }
}
