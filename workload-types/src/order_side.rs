use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Wire token of the side.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            OrderSide::Buy => 'B',
            OrderSide::Sell => 'S',
        }
    }
}

impl fmt::Display for OrderSide {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
