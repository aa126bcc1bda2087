//! Single-client workload over a handful of well-known tickers.

use std::ops::RangeInclusive;

use rand::Rng;
use workload_types::Symbol;
use workload_types::PRICE_RANGE;
use workload_types::QUANTITY_RANGE;

use super::EmptyCancel;
use super::Variant;

pub const BASIC_SYMBOLS: [&str; 5] = ["AAPL", "GOOG", "MSFT", "TSLA", "AMZN"];

pub const BASIC_ACTIONS: u32 = 5_000;

pub const BASIC_PREAMBLE: [&str; 2] = ["# Single-threaded test case", ""];

/// Fixed population: one implicit client, [`BASIC_SYMBOLS`] and
/// [`BASIC_ACTIONS`] actions by default.
///
/// A cancel drawn while no order is active is skipped.
#[derive(Clone, Copy, Debug)]
pub struct Basic {
    num_actions: u32,
}

impl Basic {
    /// Same population as the default one, with another number of actions.
    #[inline]
    pub const fn with_actions(num_actions: u32) -> Self {
        Self { num_actions }
    }
}

impl Default for Basic {
    #[inline]
    fn default() -> Self {
        Self::with_actions(BASIC_ACTIONS)
    }
}

impl Variant for Basic {
    type Owner = ();

    #[inline]
    fn preamble(&self) -> &[&'static str] {
        &BASIC_PREAMBLE
    }

    #[inline]
    fn num_clients(&self) -> u32 {
        1
    }

    #[inline]
    fn num_actions(&self) -> u32 {
        self.num_actions
    }

    #[inline]
    fn price_range(&self) -> RangeInclusive<u32> {
        PRICE_RANGE
    }

    #[inline]
    fn quantity_range(&self) -> RangeInclusive<u32> {
        QUANTITY_RANGE
    }

    #[inline]
    fn draw_owner<R: Rng + ?Sized>(&self, _: &mut R) {}

    #[inline]
    fn draw_instrument<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        Symbol::new(BASIC_SYMBOLS[rng.gen_range(0..BASIC_SYMBOLS.len())])
    }

    #[inline]
    fn empty_cancel(&self) -> EmptyCancel {
        EmptyCancel::Skip
    }
}
