//! Invaders core - deterministic simulation of a fixed-screen arcade shooter.
//!
//! This crate contains the complete game logic in integer-only math: the
//! enemy formation state machine, shot/bomb/bonus-ship spawning, collision
//! resolution, and the session phase machine. Rendering, input capture, and
//! the frame clock are host concerns; the host drives one `advance(timestamp)`
//! per frame, feeds discrete input intents, and reads entity state back
//! through accessors. High-score persistence sits behind the [`ScoreStore`]
//! trait so hosts can swap the in-memory default for a file or their own
//! backend.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod constants;
pub mod game;
pub mod rng;
pub mod store;
pub mod types;

// Re-export key items
pub use game::Game;
pub use rng::{RandomSource, SeededRng};
#[cfg(feature = "std")]
pub use store::FileScoreStore;
pub use store::{MemoryScoreStore, ScoreStore};
pub use types::{
    Alien, AlienKind, AlienState, Bomb, Direction, Intent, MotherShip, Phase, Player, Shot,
};
