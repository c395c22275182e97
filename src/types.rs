//! Entity and boundary types.
//!
//! Entities carry only gameplay-relevant state (no sprite-sheet coordinates
//! or other render-only fields). Box sizes are fixed at spawn time from the
//! render metadata in `constants` and travel with the entity so collision
//! never has to look the kind up again.

use serde::{Deserialize, Serialize};

/// Point tier / sprite family of a formation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlienKind {
    Squid,
    Crab,
    Octopus,
}

/// Two-phase destruction tag. A shot marks an alien `Hit`; the next
/// formation step promotes it to `Destroyed`. A `Hit` alien is out of
/// shot consideration but still anchors bombs and edge checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlienState {
    Alive,
    Hit,
    Destroyed,
}

/// Horizontal travel direction of the formation and the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Discrete input events from the host, one call per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Fire,
    StartOrRestart,
}

/// Display state of the session. Exactly one holds at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Playing,
    Won,
    Lost,
}

/// Formation member. Never deleted within a wave; only `state` changes.
#[derive(Debug, Clone)]
pub struct Alien {
    pub x: i32,      // pixels
    pub y: i32,      // pixels
    pub width: i32,  // pixels
    pub height: i32, // pixels
    pub kind: AlienKind,
    pub column: i32, // 0..=10
    pub row: i32,    // 0..=4, top to bottom
    pub state: AlienState,
}

/// Player projectile; travels upward.
#[derive(Debug, Clone)]
pub struct Shot {
    pub x: i32,      // pixels
    pub y: i32,      // pixels
    pub width: i32,  // pixels
    pub height: i32, // pixels
    pub removed: bool,
}

/// Formation projectile; travels downward.
#[derive(Debug, Clone)]
pub struct Bomb {
    pub x: i32,      // pixels
    pub y: i32,      // pixels
    pub width: i32,  // pixels
    pub height: i32, // pixels
    pub removed: bool,
}

/// The bonus ship. The session holds at most one in an `Option` slot.
#[derive(Debug, Clone)]
pub struct MotherShip {
    pub x: i32,      // pixels
    pub y: i32,      // pixels
    pub width: i32,  // pixels
    pub height: i32, // pixels
}

/// The player cannon.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,      // pixels
    pub y: i32,      // pixels
    pub width: i32,  // pixels
    pub height: i32, // pixels
}
