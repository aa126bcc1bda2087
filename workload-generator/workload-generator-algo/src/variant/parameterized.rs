use std::ops::RangeInclusive;

use rand::Rng;
use workload_types::ClientId;
use workload_types::Config;
use workload_types::Symbol;
use workload_types::PRICE_RANGE;
use workload_types::QUANTITY_RANGE;

use super::EmptyCancel;
use super::Variant;

/// Operator-sized population: every order is attributed to one of
/// `num_clients` clients and spread over `SYM1..SYMn`.
///
/// Symbols are built when drawn, so the instrument count costs no memory.
/// A cancel drawn while no order is active turns into a buy.
#[derive(Clone, Copy, Debug)]
pub struct Parameterized {
    num_clients: u32,
    num_instruments: u32,
    num_actions: u32,
}

impl Parameterized {
    pub fn new(config: &Config) -> Self {
        Self {
            num_clients: config.num_clients(),
            num_instruments: config.num_instruments(),
            num_actions: config.num_orders(),
        }
    }
}

impl From<Config> for Parameterized {
    #[inline]
    fn from(config: Config) -> Self {
        Self::new(&config)
    }
}

impl Variant for Parameterized {
    type Owner = ClientId;

    #[inline]
    fn num_clients(&self) -> u32 {
        self.num_clients
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
    fn draw_owner<R: Rng + ?Sized>(&self, rng: &mut R) -> ClientId {
        ClientId::new(rng.gen_range(0..self.num_clients))
    }

    #[inline]
    fn draw_instrument<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        Symbol::synthetic(rng.gen_range(1..=self.num_instruments))
    }

    // TODO: the single-client variant skips instead; align both once the
    // harness owners decide which behavior they rely on.
    #[inline]
    fn empty_cancel(&self) -> EmptyCancel {
        EmptyCancel::FallbackToBuy
    }
}
