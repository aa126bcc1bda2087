mod active_orders;
pub use active_orders::ActiveOrders;

mod generator;
pub use generator::Commands;
pub use generator::Generator;
pub use generator::State;
pub use generator::Summary;

mod variant;
pub use variant::Basic;
pub use variant::EmptyCancel;
pub use variant::Parameterized;
pub use variant::Variant;
pub use variant::BASIC_ACTIONS;
pub use variant::BASIC_PREAMBLE;
pub use variant::BASIC_SYMBOLS;
