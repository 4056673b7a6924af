//! Output regions: the sinks a dispatcher renders status, results and failures into.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

/// A single display area whose whole text is replaced on every write.
pub trait OutputRegion: Send + Sync {
    fn write_status(&self, text: &str);
    fn write_result(&self, text: &str);
    fn write_error(&self, text: &str);
}

impl<T: OutputRegion + ?Sized> OutputRegion for Arc<T> {
    fn write_status(&self, text: &str) {
        (**self).write_status(text)
    }

    fn write_result(&self, text: &str) {
        (**self).write_result(text)
    }

    fn write_error(&self, text: &str) {
        (**self).write_error(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionWrite {
    Status(String),
    Result(String),
    Error(String),
}

impl RegionWrite {
    pub fn text(&self) -> &str {
        match self {
            Self::Status(text) | Self::Result(text) | Self::Error(text) => text,
        }
    }
}

/// Writes kept by a [`TextRegion`]; older ones are dropped first.
pub const HISTORY_LIMIT: usize = 64;

#[derive(Debug, Default)]
struct RegionState {
    text: String,
    history: VecDeque<RegionWrite>,
}

/// In-memory region. Keeps the current text plus the most recent
/// [`HISTORY_LIMIT`] writes in order, for inspection.
#[derive(Debug, Default)]
pub struct TextRegion {
    state: Mutex<RegionState>,
}

impl TextRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    pub fn history(&self) -> Vec<RegionWrite> {
        self.lock().history.iter().cloned().collect()
    }

    pub fn last_write(&self) -> Option<RegionWrite> {
        self.lock().history.back().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, RegionState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn replace(&self, write: RegionWrite) {
        let mut state = self.lock();
        state.text = write.text().to_string();
        if state.history.len() == HISTORY_LIMIT {
            state.history.pop_front();
        }
        state.history.push_back(write);
    }
}

impl OutputRegion for TextRegion {
    fn write_status(&self, text: &str) {
        self.replace(RegionWrite::Status(text.to_string()));
    }

    fn write_result(&self, text: &str) {
        self.replace(RegionWrite::Result(text.to_string()));
    }

    fn write_error(&self, text: &str) {
        self.replace(RegionWrite::Error(text.to_string()));
    }
}
