//! Cell states and their color lookup table.

use std::fmt;

/// Discriminant values index `PALETTE` and are exposed as raw bytes to the
/// WASM host — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty = 0,
    Sand = 1,
    Wall = 2,
}

/// RGBA color per cell state, indexed by discriminant.
pub const PALETTE: [[u8; 4]; 3] = [
    [0, 0, 0, 255],
    [194, 178, 128, 255],
    [100, 100, 100, 255],
];

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Sand => write!(f, "Sand"),
            Self::Wall => write!(f, "Wall"),
        }
    }
}

impl Cell {
    #[must_use]
    pub fn rgba(self) -> [u8; 4] {
        PALETTE[self as usize]
    }

    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Sand),
            2 => Some(Self::Wall),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cell_is_1_byte() {
        assert_eq!(std::mem::size_of::<Cell>(), 1);
    }

    #[test]
    fn cell_discriminant_values() {
        assert_eq!(Cell::Empty as u8, 0);
        assert_eq!(Cell::Sand as u8, 1);
        assert_eq!(Cell::Wall as u8, 2);
    }

    #[test]
    fn cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn palette_colors() {
        assert_eq!(Cell::Empty.rgba(), [0, 0, 0, 255]);
        assert_eq!(Cell::Sand.rgba(), [194, 178, 128, 255]);
        assert_eq!(Cell::Wall.rgba(), [100, 100, 100, 255]);
    }

    #[test]
    fn cell_display() {
        assert_eq!(format!("{}", Cell::Sand), "Sand");
        assert_eq!(format!("{}", Cell::Wall), "Wall");
    }

    proptest! {
        #[test]
        fn prop_from_u8_matches_discriminant(value in any::<u8>()) {
            match Cell::from_u8(value) {
                Some(cell) => prop_assert_eq!(cell as u8, value),
                None => prop_assert!(value > 2),
            }
        }
    }
}
