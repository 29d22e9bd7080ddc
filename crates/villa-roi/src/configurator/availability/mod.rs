//! Finish-variant availability per `(build style, storeys)` pair.

mod loader;

pub use loader::AvailabilityError;

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use super::domain::{BuildStyle, FinishVariant, Storeys};
use super::model::VillaConfiguration;

/// Static mapping from `(style, storeys)` to the ordered set of legal finish variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityTable {
    entries: BTreeMap<(BuildStyle, Storeys), BTreeSet<FinishVariant>>,
}

/// Result of reconciling a configuration against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled {
    pub configuration: VillaConfiguration,
    /// The variant that was dropped, when the finish had to be reset.
    pub reset_from: Option<FinishVariant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityEntryView {
    pub build_style: BuildStyle,
    pub storeys: Storeys,
    pub variants: Vec<FinishVariant>,
}

impl AvailabilityTable {
    pub fn standard() -> Self {
        use BuildStyle::{Balinese, Japanese, Modern, Moroccan};
        use FinishVariant::{Default, Lush, V2, V3};
        use Storeys::{Double, Mezzanine, Single};

        let rows: [(BuildStyle, Storeys, &[FinishVariant]); 12] = [
            (Modern, Single, &[Default, V2, V3]),
            (Modern, Mezzanine, &[Default, V2, V3]),
            (Modern, Double, &[Default, V2, V3, Lush]),
            (Balinese, Single, &[Default, V2, Lush]),
            (Balinese, Mezzanine, &[Default, Lush]),
            (Balinese, Double, &[Default, V2, Lush]),
            (Japanese, Single, &[Default, V3]),
            (Japanese, Mezzanine, &[Default]),
            (Japanese, Double, &[Default, V3]),
            (Moroccan, Single, &[Default, V2, V3]),
            (Moroccan, Mezzanine, &[Default, V2]),
            (Moroccan, Double, &[Default, V2, V3]),
        ];

        let entries = rows
            .into_iter()
            .map(|(style, storeys, variants)| ((style, storeys), variants.iter().copied().collect()))
            .collect();

        Self { entries }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AvailabilityError> {
        loader::load_path(path.as_ref())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AvailabilityError> {
        loader::load_reader(reader)
    }

    pub(crate) fn from_entries(
        entries: BTreeMap<(BuildStyle, Storeys), BTreeSet<FinishVariant>>,
    ) -> Self {
        Self { entries }
    }

    /// Legal finish variants in canonical order. A pair with no entry resolves to `{default}`.
    pub fn legal_variants(&self, style: BuildStyle, storeys: Storeys) -> Vec<FinishVariant> {
        match self.entries.get(&(style, storeys)) {
            Some(variants) if !variants.is_empty() => variants.iter().copied().collect(),
            _ => {
                warn!(
                    build_style = %style,
                    storeys = %storeys,
                    "missing availability entry; falling back to default finish only"
                );
                vec![FinishVariant::Default]
            }
        }
    }

    pub fn is_legal(&self, style: BuildStyle, storeys: Storeys, variant: FinishVariant) -> bool {
        self.legal_variants(style, storeys).contains(&variant)
    }

    /// Resets an illegal finish variant to `default`; legal configurations pass through unchanged.
    pub fn reconcile(&self, config: VillaConfiguration) -> Reconciled {
        if self.is_legal(config.build_style, config.storeys, config.finish_variant) {
            return Reconciled {
                configuration: config,
                reset_from: None,
            };
        }

        debug!(
            build_style = %config.build_style,
            storeys = %config.storeys,
            finish_variant = %config.finish_variant,
            "finish variant not available; resetting to default"
        );

        Reconciled {
            configuration: VillaConfiguration {
                finish_variant: FinishVariant::Default,
                ..config
            },
            reset_from: Some(config.finish_variant),
        }
    }

    /// Pairs of the full style × storeys cross-product without an entry.
    pub fn missing_entries(&self) -> Vec<(BuildStyle, Storeys)> {
        BuildStyle::ordered()
            .into_iter()
            .flat_map(|style| Storeys::ordered().into_iter().map(move |storeys| (style, storeys)))
            .filter(|key| self.entries.get(key).map_or(true, BTreeSet::is_empty))
            .collect()
    }

    pub fn entries(&self) -> Vec<AvailabilityEntryView> {
        self.entries
            .iter()
            .map(|(&(build_style, storeys), variants)| AvailabilityEntryView {
                build_style,
                storeys,
                variants: variants.iter().copied().collect(),
            })
            .collect()
    }
}

impl Default for AvailabilityTable {
    fn default() -> Self {
        Self::standard()
    }
}
