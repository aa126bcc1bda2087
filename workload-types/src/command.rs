use std::fmt;

use workload_core::Owner;

use crate::OrderId;
use crate::OrderSide;
use crate::Symbol;

/// One line of a workload script.
///
/// `O` is the owner prefix written in front of order commands: `()` for the
/// single implicit client, [`ClientId`](crate::ClientId) otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<O> {
    /// Free text the harness skips, written verbatim.
    Comment(&'static str),
    /// Number of clients the harness must spawn.
    Clients(u32),
    /// Connects every client.
    Connect,
    Create {
        owner: O,
        side: OrderSide,
        order_id: OrderId,
        symbol: Symbol,
        price: u32,
        quantity: u32,
    },
    Cancel {
        owner: O,
        order_id: OrderId,
    },
    /// Ends the session.
    Terminate,
}

impl<O: Owner> fmt::Display for Command<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Comment(text) => f.write_str(text),
            Command::Clients(count) => write!(f, "{count}"),
            Command::Connect => f.write_str("o"),
            Command::Create {
                owner,
                side,
                order_id,
                symbol,
                price,
                quantity,
            } => {
                owner.fmt_prefix(f)?;
                write!(f, "{side} {order_id} {symbol} {price} {quantity}")
            }
            Command::Cancel { owner, order_id } => {
                owner.fmt_prefix(f)?;
                write!(f, "C {order_id}")
            }
            Command::Terminate => f.write_str("x"),
        }
    }
}
