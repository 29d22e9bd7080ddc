use serde::{Deserialize, Serialize};
use std::fmt;

use super::domain::{Bedrooms, BuildStyle, ConfigField, FinishVariant, LandSize, Storeys};
use super::error::ConfiguratorError;

/// One candidate villa design. Values are replaced wholesale, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VillaConfiguration {
    pub bedrooms: Bedrooms,
    pub storeys: Storeys,
    pub land_size: LandSize,
    pub build_style: BuildStyle,
    pub finish_variant: FinishVariant,
}

impl Default for VillaConfiguration {
    fn default() -> Self {
        Self {
            bedrooms: Bedrooms::One,
            storeys: Storeys::Single,
            land_size: LandSize::Standard,
            build_style: BuildStyle::Modern,
            finish_variant: FinishVariant::Default,
        }
    }
}

impl VillaConfiguration {
    /// Returns a copy with exactly one field replaced. Finish legality is not checked here.
    pub fn with(self, mutation: Mutation) -> Self {
        let mut next = self;
        match mutation {
            Mutation::Bedrooms(value) => next.bedrooms = value,
            Mutation::Storeys(value) => next.storeys = value,
            Mutation::LandSize(value) => next.land_size = value,
            Mutation::BuildStyle(value) => next.build_style = value,
            Mutation::FinishVariant(value) => next.finish_variant = value,
        }
        next
    }

    /// Untyped single-field update used at the presentation boundary.
    pub fn update(self, field: ConfigField, value: &OptionValue) -> Result<Self, ConfiguratorError> {
        let mutation = Mutation::resolve(field, value)?;
        Ok(self.with(mutation))
    }
}

/// Typed single-field replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Bedrooms(Bedrooms),
    Storeys(Storeys),
    LandSize(LandSize),
    BuildStyle(BuildStyle),
    FinishVariant(FinishVariant),
}

impl Mutation {
    pub fn resolve(field: ConfigField, value: &OptionValue) -> Result<Self, ConfiguratorError> {
        let mutation = match field {
            ConfigField::Bedrooms => {
                let count = value.whole_number(field)?;
                let count = u8::try_from(count).map_err(|_| ConfiguratorError::invalid(field, value))?;
                Self::Bedrooms(Bedrooms::try_from(count)?)
            }
            ConfigField::Storeys => Self::Storeys(Storeys::try_from(value.number(field)?)?),
            ConfigField::LandSize => {
                let size = value.whole_number(field)?;
                let size = u16::try_from(size).map_err(|_| ConfiguratorError::invalid(field, value))?;
                Self::LandSize(LandSize::try_from(size)?)
            }
            ConfigField::BuildStyle => Self::BuildStyle(value.text(field)?.parse()?),
            ConfigField::FinishVariant => Self::FinishVariant(value.text(field)?.parse()?),
        };
        Ok(mutation)
    }

    pub const fn field(&self) -> ConfigField {
        match self {
            Self::Bedrooms(_) => ConfigField::Bedrooms,
            Self::Storeys(_) => ConfigField::Storeys,
            Self::LandSize(_) => ConfigField::LandSize,
            Self::BuildStyle(_) => ConfigField::BuildStyle,
            Self::FinishVariant(_) => ConfigField::FinishVariant,
        }
    }
}

/// Raw option value as sent by a form: a JSON number or a string.
///
/// Numeric fields also accept numeric text so CLI arguments and JSON share one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(f64),
    Text(String),
}

impl OptionValue {
    fn number(&self, field: ConfigField) -> Result<f64, ConfiguratorError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfiguratorError::invalid(field, raw)),
        }
    }

    fn whole_number(&self, field: ConfigField) -> Result<u64, ConfiguratorError> {
        let value = self.number(field)?;
        if value.fract() != 0.0 || value < 0.0 || value > u64::MAX as f64 {
            return Err(ConfiguratorError::invalid(field, self));
        }
        Ok(value as u64)
    }

    fn text(&self, field: ConfigField) -> Result<&str, ConfiguratorError> {
        match self {
            Self::Text(raw) => Ok(raw),
            Self::Number(_) => Err(ConfiguratorError::invalid(field, self)),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(raw) => f.write_str(raw),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
