use std::fmt;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderId(u32);

impl OrderId {
    pub const ZERO: OrderId = OrderId(0);

    #[inline]
    pub const fn new(order_id: u32) -> Self {
        Self(order_id)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the current id and advances `self` to the following one.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let current = *self;
        self.0 += 1;
        current
    }
}

impl From<u32> for OrderId {
    #[inline]
    fn from(order_id: u32) -> Self {
        Self::new(order_id)
    }
}

impl fmt::Display for OrderId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
