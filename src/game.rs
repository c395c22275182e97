//! Deterministic fixed-screen invaders session.
//!
//! Headless, integer-only simulation of the classic descend-and-shoot loop.
//! The host owns the frame clock and the input devices: it reports player
//! input as discrete [`Intent`] values and calls [`Game::advance`] once per
//! frame with an elapsed-milliseconds timestamp. Formation cadence, spawn
//! rolls, collisions and the round outcome all resolve in here; rendering
//! and persistence stay outside.

extern crate alloc;
use alloc::vec::Vec;

use crate::constants::*;
use crate::rng::{RandomSource, SeededRng};
use crate::store::{MemoryScoreStore, ScoreStore};
use crate::types::*;

/// Strict axis-aligned overlap: boxes that merely touch do not collide.
#[inline]
fn boxes_overlap(
    ax: i32,
    ay: i32,
    aw: i32,
    ah: i32,
    bx: i32,
    by: i32,
    bw: i32,
    bh: i32,
) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

/// Player cannon at its spawn slot for the given screen.
#[inline]
fn starting_player(width: i32, height: i32) -> Player {
    Player {
        x: width / 2,
        y: height - PLAYER_BOTTOM_OFFSET,
        width: PLAYER_WIDTH,
        height: PLAYER_HEIGHT,
    }
}

/// One game session, generic over its random source and score store.
///
/// [`Game::new`] wires in the seeded default rng and an in-memory store;
/// [`Game::with_parts`] accepts replacements, which is how tests script
/// exact spawn rolls and how hosts plug in persistent storage.
pub struct Game<R: RandomSource = SeededRng, S: ScoreStore = MemoryScoreStore> {
    // Collaborators
    rng: R,
    store: S,

    // Screen bounds (pixels)
    width: i32,
    height: i32,

    // Session bookkeeping
    phase: Phase,
    points: u32,
    lives: i32,
    high_score: u32,
    clock: u64,
    last_formation_step: u64,
    banner_expires_at: Option<u64>,

    // Entities
    player: Player,
    aliens: Vec<Alien>,
    shots: Vec<Shot>,
    bombs: Vec<Bomb>,
    mother_ship: Option<MotherShip>,

    // Formation movement
    formation_direction: Direction,
}

impl Game {
    /// Create a session with the default seeded rng and an in-memory store.
    ///
    /// The session starts in [`Phase::Idle`]; apply
    /// [`Intent::StartOrRestart`] to begin the first round.
    pub fn new(width: i32, height: i32, seed: u32) -> Self {
        Self::with_parts(width, height, SeededRng::new(seed), MemoryScoreStore::new())
    }
}

impl<R: RandomSource, S: ScoreStore> Game<R, S> {
    /// Create a session from explicit collaborators.
    ///
    /// The store is read once here to seat the high score; it is written
    /// again only when a round ends in a new best.
    pub fn with_parts(width: i32, height: i32, rng: R, store: S) -> Self {
        let high_score = store.load().unwrap_or(0);

        Self {
            rng,
            store,
            width,
            height,
            phase: Phase::Idle,
            points: 0,
            lives: STARTING_LIVES,
            high_score,
            clock: 0,
            last_formation_step: 0,
            banner_expires_at: None,
            player: starting_player(width, height),
            aliens: Vec::with_capacity((FORMATION_COLUMNS * FORMATION_ROWS) as usize),
            shots: Vec::new(),
            bombs: Vec::new(),
            mother_ship: None,
            formation_direction: Direction::Right,
        }
    }

    /// Dispatch one player intent.
    ///
    /// Movement and fire intents are dropped unless a round is in
    /// progress; [`Intent::StartOrRestart`] begins a fresh round from any
    /// phase, discarding in-flight entities.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::MoveLeft => self.move_player(Direction::Left),
            Intent::MoveRight => self.move_player(Direction::Right),
            Intent::Fire => self.fire(),
            Intent::StartOrRestart => self.start(),
        }
    }

    /// Run one simulation tick at the given session clock (milliseconds).
    ///
    /// Phases run in a fixed order: bombs, formation, shots, win check,
    /// mother ship. A transition into [`Phase::Won`] or [`Phase::Lost`]
    /// ends the tick early; no later phase runs. Outside of
    /// [`Phase::Playing`] only the clock and the lost-life banner advance.
    pub fn advance(&mut self, now_ms: u64) {
        self.clock = now_ms;

        if let Some(expiry) = self.banner_expires_at {
            if self.clock > expiry {
                self.banner_expires_at = None;
            }
        }

        if self.phase != Phase::Playing {
            return;
        }

        self.update_bombs();
        if self.phase != Phase::Playing {
            return;
        }

        self.update_formation();
        if self.phase != Phase::Playing {
            return;
        }

        self.update_shots();

        if self.aliens.iter().all(|a| a.state == AlienState::Destroyed) {
            self.enter_won();
            return;
        }

        self.update_mother_ship();
    }

    /// Current display phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Points scored in the current round.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Remaining lives.
    pub fn lives(&self) -> i32 {
        self.lives
    }

    /// Best score seen by this session, stored or scored.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Is a round in progress?
    pub fn started(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Did the last round end with every alien destroyed?
    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Did the last round end in defeat?
    pub fn game_over(&self) -> bool {
        self.phase == Phase::Lost
    }

    /// Is the transient "lost a life" banner still showing?
    pub fn lost_a_life(&self) -> bool {
        self.banner_expires_at.is_some()
    }

    /// The full formation, including hit and destroyed entries.
    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    /// Player shots, live ones plus any flagged for removal this tick.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Falling bombs, live ones plus any flagged for removal this tick.
    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    /// The bonus ship, if one is crossing the screen.
    pub fn mother_ship(&self) -> Option<&MotherShip> {
        self.mother_ship.as_ref()
    }

    /// The player cannon.
    pub fn player(&self) -> &Player {
        &self.player
    }

    // ========================================================================
    // Intents
    // ========================================================================

    fn move_player(&mut self, direction: Direction) {
        if self.phase != Phase::Playing {
            return;
        }

        let step = match direction {
            Direction::Left => -PLAYER_MOVE_STEP,
            Direction::Right => PLAYER_MOVE_STEP,
        };
        let max_x = self.width - self.player.width;
        self.player.x = (self.player.x + step).min(max_x).max(0);
    }

    fn fire(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        self.shots.push(Shot {
            x: self.player.x + SHOT_SPAWN_OFFSET_X,
            y: self.player.y,
            width: SHOT_WIDTH,
            height: SHOT_HEIGHT,
            removed: false,
        });
    }

    fn start(&mut self) {
        self.aliens.clear();
        for column in 0..FORMATION_COLUMNS {
            for row in 0..FORMATION_ROWS {
                self.aliens.push(Alien {
                    x: column * FORMATION_COLUMN_SPACING + FORMATION_ORIGIN_X,
                    y: FORMATION_ROW_Y[row as usize],
                    width: ALIEN_WIDTH,
                    height: ALIEN_HEIGHT,
                    kind: alien_kind_for_row(row),
                    column,
                    row,
                    state: AlienState::Alive,
                });
            }
        }
        self.shots.clear();
        self.bombs.clear();
        self.mother_ship = None;
        self.formation_direction = Direction::Right;
        self.player = starting_player(self.width, self.height);
        self.points = 0;
        self.lives = STARTING_LIVES;
        self.banner_expires_at = None;
        // The formation timer restarts from the most recent tick.
        self.last_formation_step = self.clock;
        self.phase = Phase::Playing;
    }

    // ========================================================================
    // Bombs
    // ========================================================================

    fn update_bombs(&mut self) {
        self.bombs.retain(|b| !b.removed);

        // One spawn roll per tick, and only while no bomb is falling. The
        // threshold rises as the formation thins, so drops get rarer.
        let destroyed = self
            .aliens
            .iter()
            .filter(|a| a.state == AlienState::Destroyed)
            .count() as i32;
        if self.bombs.is_empty()
            && self.rng.next_range(0, 100) > BOMB_SPAWN_THRESHOLD_BASE + destroyed / 2
        {
            self.spawn_bomb();
        }

        for bomb in &mut self.bombs {
            bomb.y += BOMB_STEP;
            if bomb.y >= self.height {
                bomb.removed = true;
                continue;
            }
            if boxes_overlap(
                bomb.x,
                bomb.y,
                bomb.width,
                bomb.height,
                self.player.x,
                self.player.y,
                self.player.width,
                self.player.height,
            ) {
                self.lives -= 1;
                bomb.removed = true;
                self.banner_expires_at = Some(self.clock + LOST_LIFE_BANNER_MS);
                if self.lives < 1 {
                    self.phase = Phase::Lost;
                    break;
                }
            }
        }
    }

    fn spawn_bomb(&mut self) {
        let mut column = self.rng.next_range(0, BOMB_COLUMN_DRAW_MAX);
        let mut source = self.bottom_alien_in_column(column);

        let mut attempts = 0;
        while source.is_none() && attempts < BOMB_COLUMN_RETRIES {
            column = self.rng.next_range(0, BOMB_COLUMN_DRAW_MAX);
            source = self.bottom_alien_in_column(column);
            attempts += 1;
        }

        // The search can run out of luck even when live columns exist; in
        // that case no bomb drops this tick.
        let Some(index) = source else {
            return;
        };

        let alien = &self.aliens[index];
        let bomb = Bomb {
            x: alien.x + alien.width / 2,
            y: alien.y,
            width: BOMB_WIDTH,
            height: BOMB_HEIGHT,
            removed: false,
        };
        self.bombs.push(bomb);
    }

    /// Index of the bottom-most non-destroyed alien in a column.
    fn bottom_alien_in_column(&self, column: i32) -> Option<usize> {
        let mut found: Option<usize> = None;
        let mut best_y = i32::MIN;
        for (i, alien) in self.aliens.iter().enumerate() {
            if alien.column != column || alien.state == AlienState::Destroyed {
                continue;
            }
            if alien.y > best_y {
                found = Some(i);
                best_y = alien.y;
            }
        }
        found
    }

    // ========================================================================
    // Formation
    // ========================================================================

    fn update_formation(&mut self) {
        if self.clock.saturating_sub(self.last_formation_step) < FORMATION_STEP_INTERVAL_MS {
            return;
        }
        self.last_formation_step = self.clock;

        // Edge checks only consider aliens still on the board, but every
        // alien moves, so the grid geometry stays in lock-step.
        let at_right_edge = self.aliens.iter().any(|a| {
            a.state != AlienState::Destroyed && a.x + a.width >= self.width - RIGHT_EDGE_MARGIN
        });
        let at_left_edge = self
            .aliens
            .iter()
            .any(|a| a.state != AlienState::Destroyed && a.x <= LEFT_EDGE_MARGIN);

        if at_right_edge && self.formation_direction == Direction::Right {
            self.descend_and_turn(Direction::Left);
        } else if at_left_edge && self.formation_direction == Direction::Left {
            self.descend_and_turn(Direction::Right);
        } else {
            let step = match self.formation_direction {
                Direction::Left => -FORMATION_STEP_X,
                Direction::Right => FORMATION_STEP_X,
            };
            for alien in &mut self.aliens {
                alien.x += step;
            }
        }

        // Hits from the shot phase are promoted one step late.
        for alien in &mut self.aliens {
            if alien.state == AlienState::Hit {
                alien.state = AlienState::Destroyed;
            }
        }

        let reached_player = self.aliens.iter().any(|a| {
            a.state != AlienState::Destroyed
                && boxes_overlap(
                    a.x,
                    a.y,
                    a.width,
                    a.height,
                    self.player.x,
                    self.player.y,
                    self.player.width,
                    self.player.height,
                )
        });
        if reached_player {
            self.lives = 0;
            self.phase = Phase::Lost;
        }
    }

    fn descend_and_turn(&mut self, direction: Direction) {
        for alien in &mut self.aliens {
            alien.y += FORMATION_STEP_Y;
        }
        self.formation_direction = direction;
    }

    // ========================================================================
    // Shots
    // ========================================================================

    fn update_shots(&mut self) {
        self.shots.retain(|s| !s.removed);

        for shot in &mut self.shots {
            shot.y -= SHOT_STEP;
            if shot.y <= 0 {
                shot.removed = true;
                continue;
            }

            // Deepest untouched alien soaks the hit; on equal depth the
            // earliest spawned (lowest column) wins. One kill per shot.
            let mut hit: Option<usize> = None;
            let mut best_y = i32::MIN;
            for (i, alien) in self.aliens.iter().enumerate() {
                if alien.state != AlienState::Alive {
                    continue;
                }
                if alien.y > best_y
                    && boxes_overlap(
                        shot.x,
                        shot.y,
                        shot.width,
                        shot.height,
                        alien.x,
                        alien.y,
                        alien.width,
                        alien.height,
                    )
                {
                    hit = Some(i);
                    best_y = alien.y;
                }
            }
            if let Some(i) = hit {
                self.aliens[i].state = AlienState::Hit;
                shot.removed = true;
                self.points += ALIEN_POINTS;
            }

            // A shot spent on an alien still counts against the mother
            // ship, and downing the mother ship does not remove the shot.
            if let Some(ship) = &self.mother_ship {
                if boxes_overlap(
                    shot.x,
                    shot.y,
                    shot.width,
                    shot.height,
                    ship.x,
                    ship.y,
                    ship.width,
                    ship.height,
                ) {
                    self.points += MOTHER_SHIP_POINTS;
                    self.mother_ship = None;
                }
            }
        }
    }

    // ========================================================================
    // Mother ship
    // ========================================================================

    fn update_mother_ship(&mut self) {
        if self.mother_ship.is_none() && self.rng.next_range(0, 100) > MOTHER_SHIP_SPAWN_THRESHOLD {
            self.mother_ship = Some(MotherShip {
                x: self.width,
                y: MOTHER_SHIP_Y,
                width: MOTHER_SHIP_WIDTH,
                height: MOTHER_SHIP_HEIGHT,
            });
        }

        // Moves on its spawn tick too; gone once it clears the left edge.
        if let Some(mut ship) = self.mother_ship.take() {
            ship.x -= MOTHER_SHIP_STEP;
            if ship.x >= 0 {
                self.mother_ship = Some(ship);
            }
        }
    }

    // ========================================================================
    // Round outcome
    // ========================================================================

    fn enter_won(&mut self) {
        self.phase = Phase::Won;
        if self.points > self.high_score {
            self.high_score = self.points;
            self.store.save(self.high_score);
        }
    }
}
