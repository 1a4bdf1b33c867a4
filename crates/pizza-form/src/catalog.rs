//! Static menu catalog
//!
//! Pizza sizes and the fixed, ordered topping catalog. Both are closed
//! enums; raw values coming from the rendering surface are parsed into them
//! by the validators in [`crate::validation`].

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Pizza size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
    /// Small
    S,
    /// Medium
    M,
    /// Large
    L,
}

impl Size {
    /// All sizes in menu order
    pub const ALL: [Size; 3] = [Size::S, Size::M, Size::L];

    /// Wire code (`"S"`, `"M"`, `"L"`)
    #[inline]
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::S => "Small",
            Self::M => "Medium",
            Self::L => "Large",
        }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Size {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            other => Err(UnknownCode(other.to_string())),
        }
    }
}

/// Topping in the fixed catalog
///
/// Ids are `1..=5` in menu order. On the wire an id is always a string
/// (`"1"`), but both strings and numbers are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ToppingId {
    /// Pepperoni
    Pepperoni = 1,
    /// Green peppers
    GreenPeppers = 2,
    /// Pineapple
    Pineapple = 3,
    /// Mushrooms
    Mushrooms = 4,
    /// Ham
    Ham = 5,
}

impl ToppingId {
    /// Whole catalog in menu order
    pub const ALL: [ToppingId; 5] = [
        ToppingId::Pepperoni,
        ToppingId::GreenPeppers,
        ToppingId::Pineapple,
        ToppingId::Mushrooms,
        ToppingId::Ham,
    ];

    /// Numeric id
    #[inline]
    #[must_use]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Id as used by checkbox values and the wire format
    #[inline]
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Pepperoni => "1",
            Self::GreenPeppers => "2",
            Self::Pineapple => "3",
            Self::Mushrooms => "4",
            Self::Ham => "5",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pepperoni => "Pepperoni",
            Self::GreenPeppers => "Green Peppers",
            Self::Pineapple => "Pineapple",
            Self::Mushrooms => "Mushrooms",
            Self::Ham => "Ham",
        }
    }
}

impl Display for ToppingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ToppingId {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl TryFrom<u64> for ToppingId {
    type Error = UnknownCode;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| u64::from(t.id()) == value)
            .ok_or_else(|| UnknownCode(value.to_string()))
    }
}

impl Serialize for ToppingId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ToppingId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => ToppingId::try_from(n).map_err(de::Error::custom),
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

/// A raw value that names no catalog entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown menu code: '{0}'")]
pub struct UnknownCode(pub String);

/// Selectable option for the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    /// Value submitted by the input element
    pub value: &'static str,
    /// Display text
    pub label: &'static str,
    /// Whether the option is currently chosen
    pub selected: bool,
}
