use serde::Serialize;
use serde_json::{json, Value};

use super::domain::{Bedrooms, BuildStyle, ConfigField, FinishVariant, LandSize, Storeys};
use super::metrics::{FinancialProjection, RoiRating};
use super::model::VillaConfiguration;

/// Everything the presentation layer renders after a configuration change.
#[derive(Debug, Clone, Serialize)]
pub struct ConfiguratorSnapshot {
    pub configuration: VillaConfiguration,
    /// Set when the requested finish variant was illegal and reset to `default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_reset_from: Option<FinishVariant>,
    pub legal_variants: Vec<OptionEntry>,
    pub projection: FinancialProjection,
    pub roi_rating: RoiRating,
    pub roi_label: &'static str,
    pub image: ImagePreview,
    pub summary: ConfigurationSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagePreview {
    pub identifier: String,
    pub path: String,
    pub alt_text: String,
}

impl ImagePreview {
    pub(crate) fn new(identifier: String, base: &str, config: &VillaConfiguration) -> Self {
        let path = format!("{}/{}", base.trim_end_matches('/'), identifier);
        let plural = if config.storeys == Storeys::Single { "" } else { "s" };
        let alt_text = format!(
            "{} villa - {} storey{plural}",
            config.build_style,
            config.storeys.slug()
        );
        Self {
            identifier,
            path,
            alt_text,
        }
    }
}

/// Display labels for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationSummary {
    pub bedrooms: String,
    pub storeys: &'static str,
    pub land_size: &'static str,
    pub build_style: &'static str,
    pub finish_variant: &'static str,
    pub floor_space: String,
    pub floor_space_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionEntry {
    pub value: Value,
    pub label: &'static str,
}

impl OptionEntry {
    pub(crate) fn variant(variant: FinishVariant) -> Self {
        Self {
            value: json!(variant),
            label: variant.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldOptions {
    pub field: ConfigField,
    pub label: &'static str,
    pub options: Vec<OptionEntry>,
}

/// Picker contents for every field plus the starting configuration.
#[derive(Debug, Clone, Serialize)]
pub struct OptionCatalog {
    pub defaults: VillaConfiguration,
    pub fields: Vec<FieldOptions>,
}

impl OptionCatalog {
    pub fn standard() -> Self {
        let fields = ConfigField::ordered()
            .into_iter()
            .map(|field| FieldOptions {
                field,
                label: field.label(),
                options: field_options(field),
            })
            .collect();

        Self {
            defaults: VillaConfiguration::default(),
            fields,
        }
    }
}

fn field_options(field: ConfigField) -> Vec<OptionEntry> {
    match field {
        ConfigField::Bedrooms => Bedrooms::ordered()
            .into_iter()
            .map(|value| OptionEntry {
                value: json!(value),
                label: value.label(),
            })
            .collect(),
        ConfigField::Storeys => Storeys::ordered()
            .into_iter()
            .map(|value| OptionEntry {
                value: json!(value),
                label: value.label(),
            })
            .collect(),
        ConfigField::LandSize => LandSize::ordered()
            .into_iter()
            .map(|value| OptionEntry {
                value: json!(value),
                label: value.label(),
            })
            .collect(),
        ConfigField::BuildStyle => BuildStyle::ordered()
            .into_iter()
            .map(|value| OptionEntry {
                value: json!(value),
                label: value.label(),
            })
            .collect(),
        ConfigField::FinishVariant => FinishVariant::ordered()
            .into_iter()
            .map(OptionEntry::variant)
            .collect(),
    }
}

/// Flat row of the exhaustive configuration matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub bedrooms: Bedrooms,
    pub storeys: Storeys,
    pub land_size: LandSize,
    pub build_style: BuildStyle,
    pub finish_variant: FinishVariant,
    pub floor_space_m2: f64,
    pub build_cost: u32,
    pub nightly_rate: u32,
    pub occupancy_rate: f64,
    pub annual_revenue: f64,
    pub annual_expenses: f64,
    pub annual_profit: f64,
    pub roi_percent: f64,
    pub roi_rating: RoiRating,
    pub image: String,
}

impl MatrixRow {
    pub(crate) fn new(
        config: VillaConfiguration,
        projection: &FinancialProjection,
        image: String,
    ) -> Self {
        Self {
            bedrooms: config.bedrooms,
            storeys: config.storeys,
            land_size: config.land_size,
            build_style: config.build_style,
            finish_variant: config.finish_variant,
            floor_space_m2: projection.floor_space_m2,
            build_cost: projection.build_cost,
            nightly_rate: projection.nightly_rate,
            occupancy_rate: projection.occupancy_rate,
            annual_revenue: projection.annual_revenue,
            annual_expenses: projection.annual_expenses,
            annual_profit: projection.annual_profit,
            roi_percent: projection.roi_percent,
            roi_rating: projection.roi_rating(),
            image,
        }
    }

    pub fn configuration(&self) -> VillaConfiguration {
        VillaConfiguration {
            bedrooms: self.bedrooms,
            storeys: self.storeys,
            land_size: self.land_size,
            build_style: self.build_style,
            finish_variant: self.finish_variant,
        }
    }
}
