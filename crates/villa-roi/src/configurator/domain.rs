use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfiguratorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Bedrooms {
    One,
    Two,
}

impl Bedrooms {
    pub const fn ordered() -> [Self; 2] {
        [Self::One, Self::Two]
    }

    pub const fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "1 Bedroom",
            Self::Two => "2 Bedrooms",
        }
    }
}

impl TryFrom<u8> for Bedrooms {
    type Error = ConfiguratorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(ConfiguratorError::invalid(ConfigField::Bedrooms, other)),
        }
    }
}

impl From<Bedrooms> for u8 {
    fn from(value: Bedrooms) -> Self {
        value.count()
    }
}

impl fmt::Display for Bedrooms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Building height category. `Mezzanine` is the 1.5 option: a half level, not a fractional floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Storeys {
    Single,
    Mezzanine,
    Double,
}

impl Storeys {
    pub const fn ordered() -> [Self; 3] {
        [Self::Single, Self::Mezzanine, Self::Double]
    }

    /// Numeric storey value, also used as the linear capacity scaler for nightly rates.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Single => 1.0,
            Self::Mezzanine => 1.5,
            Self::Double => 2.0,
        }
    }

    /// Shortest decimal rendering: `1`, `1.5`, `2`.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Single => "1",
            Self::Mezzanine => "1.5",
            Self::Double => "2",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "1 Storey",
            Self::Mezzanine => "1.5 Storey (Mezzanine)",
            Self::Double => "2 Storey",
        }
    }

    pub const fn summary_label(self) -> &'static str {
        match self {
            Self::Single => "1",
            Self::Mezzanine => "1.5 (Mezzanine)",
            Self::Double => "2",
        }
    }
}

impl TryFrom<f64> for Storeys {
    type Error = ConfiguratorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(Self::Single)
        } else if value == 1.5 {
            Ok(Self::Mezzanine)
        } else if value == 2.0 {
            Ok(Self::Double)
        } else {
            Err(ConfiguratorError::invalid(ConfigField::Storeys, value))
        }
    }
}

impl From<Storeys> for f64 {
    fn from(value: Storeys) -> Self {
        value.factor()
    }
}

impl fmt::Display for Storeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Plot size in square meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum LandSize {
    Standard,
    Large,
}

impl LandSize {
    pub const fn ordered() -> [Self; 2] {
        [Self::Standard, Self::Large]
    }

    pub const fn square_meters(self) -> u16 {
        match self {
            Self::Standard => 100,
            Self::Large => 200,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "100m²",
            Self::Large => "200m²",
        }
    }
}

impl TryFrom<u16> for LandSize {
    type Error = ConfiguratorError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(Self::Standard),
            200 => Ok(Self::Large),
            other => Err(ConfiguratorError::invalid(ConfigField::LandSize, other)),
        }
    }
}

impl From<LandSize> for u16 {
    fn from(value: LandSize) -> Self {
        value.square_meters()
    }
}

impl fmt::Display for LandSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.square_meters())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStyle {
    Modern,
    Balinese,
    Japanese,
    Moroccan,
}

impl BuildStyle {
    pub const fn ordered() -> [Self; 4] {
        [Self::Modern, Self::Balinese, Self::Japanese, Self::Moroccan]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Balinese => "balinese",
            Self::Japanese => "japanese",
            Self::Moroccan => "moroccan",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Balinese => "Balinese",
            Self::Japanese => "Japanese",
            Self::Moroccan => "Moroccan",
        }
    }

    /// Every non-modern style carries the construction and rental premiums.
    pub const fn is_exotic(self) -> bool {
        !matches!(self, Self::Modern)
    }
}

impl FromStr for BuildStyle {
    type Err = ConfiguratorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ConfiguratorError::invalid(ConfigField::BuildStyle, value))
    }
}

impl fmt::Display for BuildStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cosmetic finish package. Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishVariant {
    #[default]
    Default,
    V2,
    V3,
    Lush,
}

impl FinishVariant {
    pub const fn ordered() -> [Self; 4] {
        [Self::Default, Self::V2, Self::V3, Self::Lush]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::V2 => "v2",
            Self::V3 => "v3",
            Self::Lush => "lush",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::V2 => "Variant 2",
            Self::V3 => "Variant 3",
            Self::Lush => "Lush",
        }
    }

    pub const fn summary_label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::V2 => "V2",
            Self::V3 => "V3",
            Self::Lush => "LUSH",
        }
    }
}

impl FromStr for FinishVariant {
    type Err = ConfiguratorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ConfiguratorError::invalid(ConfigField::FinishVariant, value))
    }
}

impl fmt::Display for FinishVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names one field of a villa configuration for single-field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    Bedrooms,
    Storeys,
    #[serde(alias = "landSize")]
    LandSize,
    #[serde(alias = "buildStyle")]
    BuildStyle,
    #[serde(alias = "finishVariant")]
    FinishVariant,
}

impl ConfigField {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Bedrooms,
            Self::Storeys,
            Self::LandSize,
            Self::BuildStyle,
            Self::FinishVariant,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bedrooms => "bedrooms",
            Self::Storeys => "storeys",
            Self::LandSize => "land_size",
            Self::BuildStyle => "build_style",
            Self::FinishVariant => "finish_variant",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bedrooms => "Bedrooms",
            Self::Storeys => "Storeys",
            Self::LandSize => "Land Size",
            Self::BuildStyle => "Build Style",
            Self::FinishVariant => "Finish Variant",
        }
    }

    /// Changes to these fields can invalidate the current finish variant.
    pub const fn affects_availability(self) -> bool {
        matches!(self, Self::Storeys | Self::BuildStyle)
    }
}

impl FromStr for ConfigField {
    type Err = ConfiguratorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "bedrooms" => Ok(Self::Bedrooms),
            "storeys" => Ok(Self::Storeys),
            "land_size" | "landSize" => Ok(Self::LandSize),
            "build_style" | "buildStyle" => Ok(Self::BuildStyle),
            "finish_variant" | "finishVariant" => Ok(Self::FinishVariant),
            other => Err(ConfiguratorError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_options_reject_values_outside_the_enumeration() {
        assert!(matches!(
            Bedrooms::try_from(3),
            Err(ConfiguratorError::InvalidOption {
                field: ConfigField::Bedrooms,
                ..
            })
        ));
        assert!(Storeys::try_from(1.25).is_err());
        assert!(LandSize::try_from(150).is_err());
        assert_eq!(Storeys::try_from(1.5).expect("mezzanine"), Storeys::Mezzanine);
    }

    #[test]
    fn options_serialize_to_their_wire_values() {
        assert_eq!(serde_json::to_value(Storeys::Mezzanine).expect("json"), 1.5);
        assert_eq!(serde_json::to_value(LandSize::Large).expect("json"), 200);
        assert_eq!(
            serde_json::to_value(FinishVariant::V2).expect("json"),
            serde_json::json!("v2")
        );

        let storeys: Storeys = serde_json::from_str("2").expect("integer storeys parse");
        assert_eq!(storeys, Storeys::Double);
        assert!(serde_json::from_str::<Bedrooms>("4").is_err());
    }

    #[test]
    fn field_names_accept_both_spellings() {
        assert_eq!("landSize".parse::<ConfigField>().expect("camel"), ConfigField::LandSize);
        assert_eq!(
            "finish_variant".parse::<ConfigField>().expect("snake"),
            ConfigField::FinishVariant
        );
        assert!(matches!(
            "colour".parse::<ConfigField>(),
            Err(ConfiguratorError::UnknownField(name)) if name == "colour"
        ));
    }

    #[test]
    fn text_options_parse_case_insensitively() {
        assert_eq!("Japanese".parse::<BuildStyle>().expect("style"), BuildStyle::Japanese);
        assert_eq!("LUSH".parse::<FinishVariant>().expect("variant"), FinishVariant::Lush);
        assert!("gothic".parse::<BuildStyle>().is_err());
    }
}
