use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A star rating. The input surface only offers these five values,
/// so no further range validation exists anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub const ALL: &[Rating] = &[
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    pub fn as_u8(&self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Rating::One),
            2 => Some(Rating::Two),
            3 => Some(Rating::Three),
            4 => Some(Rating::Four),
            5 => Some(Rating::Five),
            _ => None,
        }
    }

    pub fn stars(&self) -> &'static str {
        match self {
            Rating::One => "★",
            Rating::Two => "★★",
            Rating::Three => "★★★",
            Rating::Four => "★★★★",
            Rating::Five => "★★★★★",
        }
    }

    /// The next higher rating, saturating at five.
    pub fn higher(&self) -> Self {
        Rating::from_u8(self.as_u8() + 1).unwrap_or(*self)
    }

    /// The next lower rating, saturating at one.
    pub fn lower(&self) -> Self {
        Rating::from_u8(self.as_u8() - 1).unwrap_or(*self)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

// Stored and transmitted as the bare integer 1..=5.
impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Rating::from_u8(value)
            .ok_or_else(|| serde::de::Error::custom(format!("rating out of range: {value}")))
    }
}
