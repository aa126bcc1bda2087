use std::fmt;

/// The party an order is attributed to on the wire.
pub trait Owner: Copy + fmt::Debug + PartialEq {
    /// Writes the owner prefix of a protocol line, separator included.
    fn fmt_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A single implicit client, which never shows up in a line.
impl Owner for () {
    #[inline]
    fn fmt_prefix(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}
