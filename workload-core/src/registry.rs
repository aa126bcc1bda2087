use rand::Rng;

use crate::Owner;

/// The set of orders which were created and not yet cancelled.
///
/// An order enters the registry exactly when its creation command is emitted
/// and leaves it exactly when a cancel command referencing it is emitted.
pub trait Registry {
    /// Order unique identifier.
    type OrderId: Copy + Eq;
    /// Who created the order.
    type Owner: Owner;

    /// Tracks a freshly created order.
    fn insert(&mut self, order_id: Self::OrderId, owner: Self::Owner);

    /// Removes an order drawn uniformly among the active ones, returning it
    /// along with its owner, or `None` if there is nothing to cancel.
    fn remove_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<(Self::OrderId, Self::Owner)>;

    /// Returns the number of active orders.
    fn len(&self) -> usize;

    /// Returns `true` if there is no active order.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
