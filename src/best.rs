//! Session best score
//!
//! A single scalar plus a couple of counters. Lives in memory for the session;
//! on wasm it can optionally be kept in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub best: u64,
    /// Score of the most recent finished run
    pub last: u64,
    pub runs: u32,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "snack_run_best";

    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        self.runs += 1;
        self.last = score;
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Fold in any `RunEnded` events. Returns true if a new best was set.
    pub fn observe(&mut self, events: &[GameEvent]) -> bool {
        let mut improved = false;
        for event in events {
            if let GameEvent::RunEnded { score, .. } = event {
                improved |= self.record(*score);
            }
        }
        improved
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Load from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(best) = Self::from_json(&json) {
                    log::info!("Loaded best score {}", best.best);
                    return best;
                }
            }
        }

        log::info!("No best score found, starting fresh");
        Self::new()
    }

    /// Save to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.to_json());
            log::info!("Best score saved ({})", self.best);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_max() {
        let mut best = BestScore::new();
        assert!(best.record(120));
        assert!(!best.record(80));
        assert!(!best.record(120));
        assert!(best.record(121));
        assert_eq!(best.best, 121);
        assert_eq!(best.last, 121);
        assert_eq!(best.runs, 4);
    }

    #[test]
    fn test_observe_events() {
        let mut best = BestScore::new();
        let events = [
            GameEvent::RunStarted,
            GameEvent::PickupCollected { bonus: 20.0 },
            GameEvent::RunEnded {
                score: 300,
                best: 300,
                new_best: true,
            },
        ];
        assert!(best.observe(&events));
        assert_eq!(best.best, 300);
        assert_eq!(best.runs, 1);
    }

    #[test]
    fn test_json_round_trip() {
        let mut best = BestScore::new();
        best.record(42);
        assert_eq!(BestScore::from_json(&best.to_json()), Some(best));
        assert_eq!(BestScore::from_json("garbage"), None);
    }
}
