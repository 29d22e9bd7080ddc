use tracing::debug;

use super::availability::{AvailabilityError, AvailabilityTable};
use super::domain::{Bedrooms, BuildStyle, ConfigField, FinishVariant, LandSize, Storeys};
use super::error::ConfiguratorError;
use super::metrics::{
    financial_projection, floor_space_note, image_identifier, FinancialProjection,
};
use super::model::{Mutation, OptionValue, VillaConfiguration};
use super::views::{ConfigurationSummary, ConfiguratorSnapshot, ImagePreview, MatrixRow, OptionEntry};
use crate::config::ConfiguratorSettings;

pub const DEFAULT_IMAGE_BASE: &str = "/images";

/// Applies mutations, keeps the finish variant legal, and derives the outbound snapshot.
///
/// Holds no configuration of its own: callers pass the current value in and keep the one
/// returned in the snapshot.
#[derive(Debug, Clone)]
pub struct VillaConfigurator {
    availability: AvailabilityTable,
    image_base: String,
}

impl Default for VillaConfigurator {
    fn default() -> Self {
        Self::new(AvailabilityTable::standard(), DEFAULT_IMAGE_BASE)
    }
}

impl VillaConfigurator {
    pub fn new(availability: AvailabilityTable, image_base: impl Into<String>) -> Self {
        Self {
            availability,
            image_base: image_base.into(),
        }
    }

    pub fn from_settings(settings: &ConfiguratorSettings) -> Result<Self, AvailabilityError> {
        let availability = match &settings.availability_csv {
            Some(path) => AvailabilityTable::from_path(path)?,
            None => AvailabilityTable::standard(),
        };
        Ok(Self::new(availability, settings.image_base.clone()))
    }

    pub fn availability(&self) -> &AvailabilityTable {
        &self.availability
    }

    pub fn quote(&self, config: VillaConfiguration) -> ConfiguratorSnapshot {
        let reconciled = self.availability.reconcile(config);
        self.snapshot(reconciled.configuration, reconciled.reset_from)
    }

    pub fn apply(
        &self,
        current: VillaConfiguration,
        field: ConfigField,
        value: &OptionValue,
    ) -> Result<ConfiguratorSnapshot, ConfiguratorError> {
        let mutation = Mutation::resolve(field, value)?;
        Ok(self.apply_mutation(current, mutation))
    }

    pub fn apply_mutation(
        &self,
        current: VillaConfiguration,
        mutation: Mutation,
    ) -> ConfiguratorSnapshot {
        debug!(field = %mutation.field(), "applying configuration mutation");
        self.quote(current.with(mutation))
    }

    /// Every legal configuration with its derived metrics.
    pub fn matrix(&self) -> Vec<MatrixRow> {
        let mut rows = Vec::new();
        for bedrooms in Bedrooms::ordered() {
            for storeys in Storeys::ordered() {
                for land_size in LandSize::ordered() {
                    for build_style in BuildStyle::ordered() {
                        for finish_variant in self.availability.legal_variants(build_style, storeys)
                        {
                            let config = VillaConfiguration {
                                bedrooms,
                                storeys,
                                land_size,
                                build_style,
                                finish_variant,
                            };
                            let projection = financial_projection(&config);
                            rows.push(MatrixRow::new(config, &projection, image_identifier(&config)));
                        }
                    }
                }
            }
        }
        rows
    }

    fn snapshot(
        &self,
        config: VillaConfiguration,
        reset_from: Option<FinishVariant>,
    ) -> ConfiguratorSnapshot {
        let projection = financial_projection(&config);
        let roi_rating = projection.roi_rating();
        let legal_variants = self
            .availability
            .legal_variants(config.build_style, config.storeys)
            .into_iter()
            .map(OptionEntry::variant)
            .collect();

        ConfiguratorSnapshot {
            configuration: config,
            variant_reset_from: reset_from,
            legal_variants,
            projection,
            roi_rating,
            roi_label: roi_rating.label(),
            image: ImagePreview::new(image_identifier(&config), &self.image_base, &config),
            summary: summarize(&config, &projection),
        }
    }
}

fn summarize(config: &VillaConfiguration, projection: &FinancialProjection) -> ConfigurationSummary {
    ConfigurationSummary {
        bedrooms: config.bedrooms.to_string(),
        storeys: config.storeys.summary_label(),
        land_size: config.land_size.label(),
        build_style: config.build_style.label(),
        finish_variant: config.finish_variant.summary_label(),
        floor_space: format!("{:.2}m²", projection.floor_space_m2),
        floor_space_note: floor_space_note(config.storeys),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_resets_variant_when_style_change_makes_it_illegal() {
        let configurator = VillaConfigurator::default();
        let current = VillaConfiguration {
            finish_variant: FinishVariant::V2,
            ..VillaConfiguration::default()
        };

        let snapshot = configurator
            .apply(current, ConfigField::BuildStyle, &OptionValue::from("japanese"))
            .expect("japanese is a valid style");

        assert_eq!(snapshot.configuration.build_style, BuildStyle::Japanese);
        assert_eq!(snapshot.configuration.finish_variant, FinishVariant::Default);
        assert_eq!(snapshot.variant_reset_from, Some(FinishVariant::V2));
        assert_eq!(snapshot.image.identifier, "japanese-1s.png");
    }

    #[test]
    fn apply_keeps_legal_variant() {
        let configurator = VillaConfigurator::default();
        let current = VillaConfiguration {
            finish_variant: FinishVariant::V2,
            ..VillaConfiguration::default()
        };

        let snapshot = configurator
            .apply(current, ConfigField::BuildStyle, &OptionValue::from("moroccan"))
            .expect("moroccan is a valid style");

        assert_eq!(snapshot.configuration.finish_variant, FinishVariant::V2);
        assert!(snapshot.variant_reset_from.is_none());
    }

    #[test]
    fn apply_rejects_invalid_option_without_producing_a_snapshot() {
        let configurator = VillaConfigurator::default();
        let err = configurator
            .apply(
                VillaConfiguration::default(),
                ConfigField::Storeys,
                &OptionValue::Number(3.0),
            )
            .expect_err("three storeys is not offered");
        assert!(matches!(
            err,
            ConfiguratorError::InvalidOption {
                field: ConfigField::Storeys,
                ..
            }
        ));
    }

    #[test]
    fn matrix_only_contains_legal_configurations() {
        let configurator = VillaConfigurator::default();
        let rows = configurator.matrix();
        let table = configurator.availability();

        let legal_pairs: usize = BuildStyle::ordered()
            .into_iter()
            .flat_map(|style| {
                Storeys::ordered()
                    .into_iter()
                    .map(move |storeys| table.legal_variants(style, storeys).len())
            })
            .sum();
        assert_eq!(rows.len(), legal_pairs * 2 * 2);

        for row in &rows {
            let config = row.configuration();
            assert!(table.is_legal(config.build_style, config.storeys, config.finish_variant));
        }
    }

    #[test]
    fn summary_uses_display_labels() {
        let snapshot = VillaConfigurator::default().quote(VillaConfiguration {
            storeys: Storeys::Mezzanine,
            finish_variant: FinishVariant::V3,
            ..VillaConfiguration::default()
        });

        assert_eq!(snapshot.summary.storeys, "1.5 (Mezzanine)");
        assert_eq!(snapshot.summary.finish_variant, "V3");
        assert_eq!(snapshot.summary.build_style, "Modern");
        assert_eq!(snapshot.summary.land_size, "100m²");
    }
}
