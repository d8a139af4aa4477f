/// Monotonic token that orders overlapping dashboard refreshes.
///
/// Each refresh calls [`FetchGeneration::begin`] and keeps the returned
/// token; when its batch completes, the result is applied only if
/// [`FetchGeneration::is_current`] still holds for that token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchGeneration {
    current: u64,
}

impl FetchGeneration {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.current
    }

    pub fn current(&self) -> u64 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_refresh_wins() {
        let mut generation = FetchGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(second > first);
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_no_refresh_yet() {
        let generation = FetchGeneration::default();
        assert_eq!(generation.current(), 0);
        assert!(!generation.is_current(1));
    }
}
