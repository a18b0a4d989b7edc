use crate::data::LevelThreshold;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub current_threshold: u64,
    pub next_threshold: u64,
    /// In `[0, 1]`.
    pub fraction: f64,
    pub is_max_level: bool,
}

/// Ordered rank table. Always contains a base entry at threshold 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTable {
    entries: Vec<LevelThreshold>,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LevelTable {
    pub fn new(mut entries: Vec<LevelThreshold>) -> Self {
        entries.sort_by_key(|entry| (entry.threshold, entry.level));
        if entries.first().is_none_or(|first| first.threshold > 0) {
            entries.insert(
                0,
                LevelThreshold {
                    threshold: 0,
                    level: 1,
                    name: "Novice".to_string(),
                },
            );
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[LevelThreshold] {
        &self.entries
    }

    /// Entry with the greatest threshold not above `balance`.
    pub fn classify(&self, balance: f64) -> &LevelThreshold {
        self.entries
            .iter()
            .rev()
            .find(|entry| balance >= entry.threshold as f64)
            .unwrap_or(&self.entries[0])
    }

    pub fn entry_for_level(&self, level: u32) -> Option<&LevelThreshold> {
        self.entries.iter().find(|entry| entry.level == level)
    }

    pub fn name_for_level(&self, level: u32) -> &str {
        self.entry_for_level(level)
            .or_else(|| {
                self.entries
                    .iter()
                    .rev()
                    .find(|entry| entry.level <= level)
            })
            .map(|entry| entry.name.as_str())
            .unwrap_or(self.entries[0].name.as_str())
    }

    /// How far `balance` sits between the current level and the next one.
    /// Past the last entry the next threshold is taken as ten times the
    /// current one.
    pub fn progress(&self, level: u32, balance: f64) -> LevelProgress {
        let current_threshold = self
            .entry_for_level(level)
            .map(|entry| entry.threshold)
            .unwrap_or(0);
        let next = self.entry_for_level(level.saturating_add(1));
        let next_threshold = next
            .map(|entry| entry.threshold)
            .unwrap_or(current_threshold.saturating_mul(10));

        let span = next_threshold.saturating_sub(current_threshold) as f64;
        let fraction = if span > 0.0 {
            ((balance - current_threshold as f64) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };

        LevelProgress {
            current_threshold,
            next_threshold,
            fraction,
            is_max_level: next.is_none(),
        }
    }
}
