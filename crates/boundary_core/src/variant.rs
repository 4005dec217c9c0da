//! The closed enum set and its discriminant contract.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// Enum variants shared across the boundary.
///
/// Transported as a `u32` with the explicit values below.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Discriminant 1.
    One = 1,
    /// Discriminant 2.
    Two = 2,
    /// Discriminant 3.
    Three = 3,
}

impl Variant {
    /// All variants in discriminant order.
    pub const ALL: [Variant; 3] = [Variant::One, Variant::Two, Variant::Three];

    /// Returns the wire discriminant.
    pub const fn discriminant(self) -> u32 {
        self as u32
    }

    /// Decodes a wire discriminant.
    pub fn from_discriminant(value: u32) -> CoreResult<Self> {
        match value {
            1 => Ok(Variant::One),
            2 => Ok(Variant::Two),
            3 => Ok(Variant::Three),
            _ => Err(CoreError::UnknownDiscriminant { value }),
        }
    }

    /// Classification reported to the caller: true only for `Two`.
    pub const fn classify(self) -> bool {
        matches!(self, Variant::Two)
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::One => "one",
            Variant::Two => "two",
            Variant::Three => "three",
        }
    }
}

impl TryFrom<u32> for Variant {
    type Error = CoreError;

    fn try_from(value: u32) -> CoreResult<Self> {
        Self::from_discriminant(value)
    }
}

impl From<Variant> for u32 {
    fn from(variant: Variant) -> Self {
        variant.discriminant()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown variant: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn discriminants_are_fixed() {
        assert_eq!(Variant::One.discriminant(), 1);
        assert_eq!(Variant::Two.discriminant(), 2);
        assert_eq!(Variant::Three.discriminant(), 3);
        assert_eq!(std::mem::size_of::<Variant>(), 4);
    }

    #[test]
    fn decode_known() {
        for variant in Variant::ALL {
            assert_eq!(Variant::try_from(u32::from(variant)), Ok(variant));
        }
    }

    #[test]
    fn decode_unknown() {
        assert_eq!(
            Variant::from_discriminant(0),
            Err(CoreError::UnknownDiscriminant { value: 0 })
        );
        assert!(Variant::from_discriminant(4).is_err());
    }

    #[test]
    fn classification() {
        assert!(!Variant::One.classify());
        assert!(Variant::Two.classify());
        assert!(!Variant::Three.classify());
    }

    #[test]
    fn parse_names() {
        assert_eq!("Two".parse::<Variant>(), Ok(Variant::Two));
        assert_eq!(Variant::Three.to_string(), "three");
        assert_eq!(
            "four".parse::<Variant>(),
            Err("unknown variant: four".to_string())
        );
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
    }

    proptest! {
        #[test]
        fn decode_then_classify_is_total(value in any::<u32>()) {
            let classified = Variant::from_discriminant(value).map_or(false, Variant::classify);
            prop_assert_eq!(classified, value == 2);
        }
    }
}
