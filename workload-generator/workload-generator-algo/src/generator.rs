use log::debug;
use rand::Rng;
use workload_core::Registry;
use workload_types::Action;
use workload_types::Command;
use workload_types::OrderId;
use workload_types::OrderSide;

use crate::ActiveOrders;
use crate::EmptyCancel;
use crate::Variant;

/// Lifecycle of a [`Generator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    NotStarted,
    Generating,
    Finished,
}

/// Counters of what a [`Generator`] produced so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Creation commands emitted, fallbacks included.
    pub created: u32,
    /// Cancel commands emitted.
    pub cancelled: u32,
    /// Cancels dropped because no order was active.
    pub skipped: u32,
    /// Cancels turned into a buy because no order was active.
    pub fallbacks: u32,
    /// Orders still active.
    pub active: usize,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    NotStarted,
    Preamble(usize),
    Clients,
    Connect,
    Actions(u32),
    Finished,
}

/// Stateful source of a lifecycle-consistent workload script.
///
/// Order ids are assigned sequentially from zero and every cancel targets an
/// order which is active at that point, which is then forgotten so it can
/// never be cancelled twice.
pub struct Generator<V: Variant> {
    variant: V,
    next_order_id: OrderId,
    active_orders: ActiveOrders<V::Owner>,
    phase: Phase,
    summary: Summary,
}

impl<V: Variant> Generator<V> {
    pub fn new(variant: V) -> Self {
        Self {
            variant,
            next_order_id: OrderId::ZERO,
            active_orders: ActiveOrders::new(),
            phase: Phase::NotStarted,
            summary: Summary::default(),
        }
    }

    #[inline]
    pub fn variant(&self) -> &V {
        &self.variant
    }

    #[inline]
    pub fn active_orders(&self) -> &ActiveOrders<V::Owner> {
        &self.active_orders
    }

    /// Id the next created order will get.
    #[inline]
    pub fn next_order_id(&self) -> OrderId {
        self.next_order_id
    }

    #[inline]
    pub fn state(&self) -> State {
        match self.phase {
            Phase::NotStarted => State::NotStarted,
            Phase::Finished => State::Finished,
            _ => State::Generating,
        }
    }

    #[inline]
    pub fn summary(&self) -> Summary {
        Summary {
            active: self.active_orders.len(),
            ..self.summary
        }
    }

    /// Returns the whole script as an iterator of commands: preamble, client
    /// count, connect, one command per drawn action and terminate.
    ///
    /// Every action is drawn uniformly among buy, sell and cancel from `rng`.
    /// Once the terminate command was yielded the generator is finished and
    /// any later call yields nothing.
    #[inline]
    pub fn commands<'g, R: Rng + ?Sized>(
        &'g mut self,
        rng: &'g mut R,
    ) -> Commands<'g, V, R> {
        Commands {
            generator: self,
            rng,
        }
    }

    /// Applies an already drawn action, returning the command it produced.
    ///
    /// Returns `None` only for a cancel drawn while no order is active on a
    /// variant which skips those.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Option<Command<V::Owner>> {
        match action.side() {
            Some(side) => Some(self.create(side, rng)),
            None => self.cancel(rng),
        }
    }

    fn create<R: Rng + ?Sized>(
        &mut self,
        side: OrderSide,
        rng: &mut R,
    ) -> Command<V::Owner> {
        let owner = self.variant.draw_owner(rng);
        let symbol = self.variant.draw_instrument(rng);
        let price = rng.gen_range(self.variant.price_range());
        let quantity = rng.gen_range(self.variant.quantity_range());
        let order_id = self.next_order_id.post_increment();

        self.active_orders.insert(order_id, owner);
        self.summary.created += 1;

        Command::Create {
            owner,
            side,
            order_id,
            symbol,
            price,
            quantity,
        }
    }

    fn cancel<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<Command<V::Owner>> {
        if let Some((order_id, owner)) = self.active_orders.remove_random(rng)
        {
            self.summary.cancelled += 1;
            return Some(Command::Cancel { owner, order_id });
        }

        match self.variant.empty_cancel() {
            EmptyCancel::Skip => {
                debug!("no active order to cancel, skipping");
                self.summary.skipped += 1;
                None
            }
            EmptyCancel::FallbackToBuy => {
                debug!(
                    "no active order to cancel, buying as order {}",
                    self.next_order_id
                );
                self.summary.fallbacks += 1;
                Some(self.create(OrderSide::Buy, rng))
            }
        }
    }

    fn advance<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<Command<V::Owner>> {
        loop {
            match self.phase {
                Phase::NotStarted => self.phase = Phase::Preamble(0),
                Phase::Preamble(line) => {
                    match self.variant.preamble().get(line).copied() {
                        Some(text) => {
                            self.phase = Phase::Preamble(line + 1);
                            return Some(Command::Comment(text));
                        }
                        None => self.phase = Phase::Clients,
                    }
                }
                Phase::Clients => {
                    self.phase = Phase::Connect;
                    return Some(Command::Clients(self.variant.num_clients()));
                }
                Phase::Connect => {
                    self.phase = Phase::Actions(self.variant.num_actions());
                    return Some(Command::Connect);
                }
                Phase::Actions(0) => {
                    self.phase = Phase::Finished;
                    return Some(Command::Terminate);
                }
                Phase::Actions(remaining) => {
                    self.phase = Phase::Actions(remaining - 1);
                    let action = rng.gen::<Action>();
                    if let Some(command) = self.step(action, rng) {
                        return Some(command);
                    }
                }
                Phase::Finished => return None,
            }
        }
    }
}

/// Iterator over the commands of a script, created by
/// [`Generator::commands`].
pub struct Commands<'g, V: Variant, R: ?Sized> {
    generator: &'g mut Generator<V>,
    rng: &'g mut R,
}

impl<'g, V, R> Iterator for Commands<'g, V, R>
where
    V: Variant,
    R: Rng + ?Sized,
{
    type Item = Command<V::Owner>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.generator.advance(self.rng)
    }
}
