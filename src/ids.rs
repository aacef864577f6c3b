//! Client-side Todo Ids
//!
//! The backend expects the client to pick the id of a new todo. Ids are
//! millisecond timestamps, bumped past the last one handed out so two
//! creations in the same tick never collide.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn next(&mut self, now_millis: i64) -> i64 {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_timestamp() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(ids.next(1_700_000_000_500), 1_700_000_000_500);
    }

    #[test]
    fn test_same_tick_is_bumped() {
        let mut ids = IdGenerator::default();
        let a = ids.next(1000);
        let b = ids.next(1000);
        let c = ids.next(999);
        assert_eq!((a, b, c), (1000, 1001, 1002));
    }
}
