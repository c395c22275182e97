//! High-score persistence boundary.
//!
//! The session reads the best score once at construction and writes it at
//! most once per won session. Store failures never surface into the game
//! loop: a missing or malformed file loads as `None`, and a failed write is
//! dropped rather than reported.

/// Best-score load/save boundary.
pub trait ScoreStore {
    /// Stored best score, if one could be read.
    fn load(&self) -> Option<u32>;

    /// Persist a new best score. Implementations absorb write failures.
    fn save(&mut self, score: u32);
}

/// In-memory store; the default for sessions without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded best score.
    pub fn with_best(best: u32) -> Self {
        Self { best: Some(best) }
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Option<u32> {
        self.best
    }

    fn save(&mut self, score: u32) {
        self.best = Some(score);
    }
}

// File layout: 4 magic bytes + score as little-endian u32.
#[cfg(feature = "std")]
const MAGIC: &[u8; 4] = b"INV1";
#[cfg(feature = "std")]
const FILE_SIZE: usize = 8;

/// Single-score binary file store.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "std")]
impl FileScoreStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(feature = "std")]
impl ScoreStore for FileScoreStore {
    fn load(&self) -> Option<u32> {
        let data = std::fs::read(&self.path).ok()?;
        if data.len() != FILE_SIZE || &data[0..4] != MAGIC {
            return None;
        }
        Some(u32::from_le_bytes([data[4], data[5], data[6], data[7]]))
    }

    fn save(&mut self, score: u32) {
        let mut buf = [0u8; FILE_SIZE];
        buf[..4].copy_from_slice(MAGIC);
        buf[4..].copy_from_slice(&score.to_le_bytes());
        let _ = std::fs::write(&self.path, buf);
    }
}
