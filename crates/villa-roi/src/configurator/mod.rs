//! Villa configuration engine.
//!
//! A configuration is a five-field tuple of enumerated options. Every mutation replaces one field,
//! the availability table then resets an illegal finish variant, and the metrics are derived
//! from the reconciled value. All derivations are pure over the finite option domain.

pub mod availability;
pub mod domain;
mod engine;
mod error;
pub mod export;
pub mod metrics;
pub mod model;
pub mod router;
pub mod views;

pub use availability::{AvailabilityError, AvailabilityTable, Reconciled};
pub use domain::{Bedrooms, BuildStyle, ConfigField, FinishVariant, LandSize, Storeys};
pub use engine::{VillaConfigurator, DEFAULT_IMAGE_BASE};
pub use error::ConfiguratorError;
pub use metrics::{FinancialProjection, RentalInputs, RoiRating};
pub use model::{Mutation, OptionValue, VillaConfiguration};
pub use router::{configurator_router, UpdateRequest};
pub use views::{ConfiguratorSnapshot, MatrixRow, OptionCatalog};
