mod owner;
pub use crate::owner::Owner;

mod registry;
pub use crate::registry::Registry;
