mod basic;
pub use basic::Basic;
pub use basic::BASIC_ACTIONS;
pub use basic::BASIC_PREAMBLE;
pub use basic::BASIC_SYMBOLS;

mod parameterized;
pub use parameterized::Parameterized;

use std::ops::RangeInclusive;

use rand::Rng;
use workload_core::Owner;
use workload_types::Symbol;

/// What to do when a cancel is drawn while no order is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyCancel {
    /// Emit nothing and leave the order id counter untouched.
    Skip,
    /// Emit a buy creation instead.
    FallbackToBuy,
}

/// Everything that differs between two flavours of workload script.
///
/// The generation algorithm itself is shared; a variant only decides the
/// population (clients, instruments, number of actions), the value ranges
/// and how the owner and instrument of each order are chosen.
pub trait Variant {
    /// Who an order is attributed to.
    type Owner: Owner;

    /// Raw lines written before the client count header.
    fn preamble(&self) -> &[&'static str] {
        &[]
    }

    /// Value of the client count header.
    fn num_clients(&self) -> u32;

    /// How many actions are drawn.
    fn num_actions(&self) -> u32;

    /// Inclusive range of order prices.
    fn price_range(&self) -> RangeInclusive<u32>;

    /// Inclusive range of order quantities.
    fn quantity_range(&self) -> RangeInclusive<u32>;

    /// Picks the owner of a new order.
    fn draw_owner<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Owner;

    /// Picks the instrument of a new order, uniformly among the population.
    fn draw_instrument<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol;

    /// Policy applied to a cancel drawn while no order is active.
    fn empty_cancel(&self) -> EmptyCancel;
}
