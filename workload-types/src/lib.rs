pub mod error;

mod action;
pub use action::Action;

mod client_id;
pub use client_id::ClientId;

mod command;
pub use command::Command;

mod config;
pub use config::Config;
pub use config::Field;
pub use config::MAX_CLIENTS;
pub use config::PRICE_RANGE;
pub use config::QUANTITY_RANGE;

mod order_id;
pub use order_id::OrderId;

mod order_side;
pub use order_side::OrderSide;

mod symbol;
pub use symbol::Symbol;
