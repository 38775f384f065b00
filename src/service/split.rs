use serde::Serialize;

/// How a request divides between stock on hand and a back-order.
///
/// `fulfilled + deferred` always equals the requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockSplit {
    pub fulfilled: u32,
    pub deferred: u32,
}

impl StockSplit {
    pub fn new(requested: u32, available: u32) -> Self {
        let fulfilled = requested.min(available);
        Self {
            fulfilled,
            deferred: requested - fulfilled,
        }
    }

    pub fn needs_back_order(&self) -> bool {
        self.deferred > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_enough_stock() {
        let split = StockSplit::new(100, 101);
        assert_eq!(split, StockSplit { fulfilled: 100, deferred: 0 });
        assert!(!split.needs_back_order());
    }

    #[test]
    fn test_short_stock() {
        let split = StockSplit::new(100, 99);
        assert_eq!(split, StockSplit { fulfilled: 99, deferred: 1 });
        assert!(split.needs_back_order());
    }

    #[test]
    fn test_no_stock() {
        assert_eq!(StockSplit::new(3, 0), StockSplit { fulfilled: 0, deferred: 3 });
    }

    proptest! {
        #[test]
        fn split_always_adds_up(requested in 1u32.., available in any::<u32>()) {
            let split = StockSplit::new(requested, available);
            prop_assert_eq!(split.fulfilled + split.deferred, requested);
            prop_assert_eq!(split.fulfilled, requested.min(available));
            prop_assert_eq!(split.deferred, requested.saturating_sub(available));
        }
    }
}
