use crate::OrderSide;

/// A single step of a workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Buy,
    Sell,
    Cancel,
}

impl Action {
    /// Returns the side of the order this action creates, if any.
    #[inline]
    pub const fn side(self) -> Option<OrderSide> {
        match self {
            Action::Buy => Some(OrderSide::Buy),
            Action::Sell => Some(OrderSide::Sell),
            Action::Cancel => None,
        }
    }
}

#[cfg(feature = "rand")]
mod __rand {
    use rand::distributions::Standard;
    use rand::prelude::*;

    use super::*;

    /// Buy, sell and cancel are equally likely.
    impl Distribution<Action> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
            match rng.gen_range(0..3u32) {
                0 => Action::Buy,
                1 => Action::Sell,
                _ => Action::Cancel,
            }
        }
    }
}
