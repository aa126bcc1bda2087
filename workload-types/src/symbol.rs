use std::fmt;

use compact_str::format_compact;
use compact_str::CompactString;

/// An instrument ticker, as read by the engine.
#[repr(transparent)]
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Symbol(CompactString);

impl Symbol {
    #[inline]
    pub fn new(symbol: &str) -> Self {
        Self(CompactString::new(symbol))
    }

    /// Builds the `k`-th synthesized symbol, `SYM<k>`.
    #[inline]
    pub fn synthetic(k: u32) -> Self {
        Self(format_compact!("SYM{k}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Symbol {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;

    use super::*;

    #[test]
    fn synthesized_symbols_are_numbered() {
        assert!(Symbol::synthetic(1).as_str() == "SYM1");
        assert!(Symbol::synthetic(u32::MAX).as_str() == "SYM4294967295");
    }
}
