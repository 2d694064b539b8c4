//! Strongly typed, zero-cost identifier wrappers.
//!
//! Identifiers are handed out from monotonically increasing counters and are
//! never reused, so comparing a stored id against an incoming one is enough
//! to tell a live callback from a stale one.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// The id following `self` in issue order.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Handle for one armed timer in a [`TimerQueue`][crate::TimerQueue].
    pub struct TimerId(u64);
}

typed_id! {
    /// Identity of one emotion-overlay request.  A revert only applies if the
    /// overlay still carries the token it was armed with.
    pub struct EmotionToken(u64);
}
