use std::fmt;

use workload_core::Owner;

/// Zero-based index of a client connection.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClientId(u32);

impl ClientId {
    #[inline]
    pub const fn new(client_id: u32) -> Self {
        Self(client_id)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ClientId {
    #[inline]
    fn from(client_id: u32) -> Self {
        Self::new(client_id)
    }
}

impl fmt::Display for ClientId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Owner for ClientId {
    #[inline]
    fn fmt_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.0)
    }
}
