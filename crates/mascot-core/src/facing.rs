//! Horizontal facing shared by physics and animation.

/// Which way the character is rendered as looking.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// The opposite facing.
    #[inline]
    pub fn flipped(self) -> Facing {
        match self {
            Facing::Left  => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Left  => "left",
            Facing::Right => "right",
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
