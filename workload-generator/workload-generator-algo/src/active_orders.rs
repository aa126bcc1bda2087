use std::ops::Deref;

use rand::Rng;
use workload_core::Owner;
use workload_core::Registry;
use workload_types::OrderId;

/// Active orders along with the client that created each of them.
///
/// Entries are kept unordered so that a uniformly drawn order can be removed
/// in constant time.
#[derive(Debug)]
pub struct ActiveOrders<O: Owner>(Vec<(OrderId, O)>);

impl<O: Owner> ActiveOrders<O> {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` if `order_id` is still active.
    #[inline]
    pub fn contains(&self, order_id: OrderId) -> bool {
        self.0.iter().any(|&(id, _)| id == order_id)
    }
}

impl<O: Owner> Default for ActiveOrders<O> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Owner> Deref for ActiveOrders<O> {
    type Target = [(OrderId, O)];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<O: Owner> Registry for ActiveOrders<O> {
    type OrderId = OrderId;
    type Owner = O;

    #[inline]
    fn insert(&mut self, order_id: OrderId, owner: O) {
        self.0.push((order_id, owner));
    }

    #[inline]
    fn remove_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<(OrderId, O)> {
        if self.0.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.0.len());
        Some(self.0.swap_remove(index))
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}
