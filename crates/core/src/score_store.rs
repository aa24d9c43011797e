//! High-score persistence seam.
//!
//! The session talks to storage only through [`ScoreStore`]. Both operations
//! are infallible from the session's point of view: a store that cannot read
//! reports 0, and a store that cannot write drops the value.

pub trait ScoreStore {
    /// Stored high score, or 0 when nothing usable is stored.
    fn load(&mut self) -> u32;

    /// Overwrite the stored high score.
    fn save(&mut self, high_score: u32);
}

/// In-memory store; also records how many writes it received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    value: u32,
    saves: u32,
}

impl MemoryScoreStore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> u32 {
        self.value
    }

    fn save(&mut self, high_score: u32) {
        self.value = high_score;
        self.saves += 1;
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&mut self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, high_score: u32) {
        (**self).save(high_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.load(), 0);
        store.save(120);
        assert_eq!(store.load(), 120);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryScoreStore::new(30));
        assert_eq!(store.load(), 30);
        store.save(40);
        assert_eq!(store.load(), 40);
    }
}
