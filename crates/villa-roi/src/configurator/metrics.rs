//! Pure derivations from a villa configuration: floor area, build cost, rental economics, and
//! the preview image identifier.

use serde::{Deserialize, Serialize};

use super::domain::{Bedrooms, BuildStyle, FinishVariant, LandSize, Storeys};
use super::model::VillaConfiguration;

/// Ground-floor footprint, 8.5m × 7.7m.
pub const FOOTPRINT_WIDTH_M: f64 = 8.5;
pub const FOOTPRINT_DEPTH_M: f64 = 7.7;

const ONE_BEDROOM_DISCOUNT: u32 = 20_000;
const LARGE_LAND_MULTIPLIER: (u32, u32) = (14, 10);

const BASE_NIGHTLY_RATE: f64 = 200.0;
const EXOTIC_RATE_MULTIPLIER: f64 = 1.3;
const TWO_BEDROOM_RATE_MULTIPLIER: f64 = 1.4;

const NIGHTS_PER_YEAR: f64 = 365.0;
/// Management, maintenance, utilities, insurance, and taxes as a share of revenue.
pub const OPERATING_EXPENSE_RATIO: f64 = 0.4;

pub const IMAGE_EXTENSION: &str = "png";

pub fn base_footprint() -> f64 {
    FOOTPRINT_WIDTH_M * FOOTPRINT_DEPTH_M
}

pub fn floor_space(storeys: Storeys) -> f64 {
    base_footprint() * storeys.factor()
}

fn modern_base_cost(storeys: Storeys) -> u32 {
    match storeys {
        Storeys::Single => 200_000,
        Storeys::Mezzanine => 250_000,
        Storeys::Double => 300_000,
    }
}

fn style_premium(style: BuildStyle, storeys: Storeys) -> u32 {
    if !style.is_exotic() {
        return 0;
    }
    match storeys {
        Storeys::Single => 20_000,
        Storeys::Mezzanine => 30_000,
        Storeys::Double => 40_000,
    }
}

/// Expected build cost in whole currency units.
///
/// The land multiplier applies to the total after the one-bedroom discount.
pub fn build_cost(config: &VillaConfiguration) -> u32 {
    let mut cost = modern_base_cost(config.storeys) + style_premium(config.build_style, config.storeys);

    if config.bedrooms == Bedrooms::One {
        cost -= ONE_BEDROOM_DISCOUNT;
    }

    if config.land_size == LandSize::Large {
        let (numerator, denominator) = LARGE_LAND_MULTIPLIER;
        cost = cost * numerator / denominator;
    }

    cost
}

/// Nightly rate rounded to whole currency units. Multipliers apply as style, bedrooms, storeys.
pub fn nightly_rate(config: &VillaConfiguration) -> u32 {
    let mut rate = BASE_NIGHTLY_RATE;

    if config.build_style.is_exotic() {
        rate *= EXOTIC_RATE_MULTIPLIER;
    }
    if config.bedrooms == Bedrooms::Two {
        rate *= TWO_BEDROOM_RATE_MULTIPLIER;
    }
    rate *= config.storeys.factor();

    rate.round() as u32
}

pub fn occupancy_rate(config: &VillaConfiguration) -> f64 {
    match config.bedrooms {
        Bedrooms::One => 0.8,
        Bedrooms::Two => 0.7,
    }
}

/// Raw inputs to the rental projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentalInputs {
    pub floor_space_m2: f64,
    pub nightly_rate: u32,
    pub occupancy_rate: f64,
    pub build_cost: u32,
}

impl RentalInputs {
    pub fn from_configuration(config: &VillaConfiguration) -> Self {
        Self {
            floor_space_m2: floor_space(config.storeys),
            nightly_rate: nightly_rate(config),
            occupancy_rate: occupancy_rate(config),
            build_cost: build_cost(config),
        }
    }
}

/// Annual short-term rental economics for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialProjection {
    pub floor_space_m2: f64,
    pub nightly_rate: u32,
    pub occupancy_rate: f64,
    pub annual_revenue: f64,
    pub annual_expenses: f64,
    pub annual_profit: f64,
    pub build_cost: u32,
    pub roi_percent: f64,
}

impl FinancialProjection {
    pub fn roi_rating(&self) -> RoiRating {
        RoiRating::classify(self.roi_percent)
    }
}

pub fn project(inputs: RentalInputs) -> FinancialProjection {
    let annual_revenue = f64::from(inputs.nightly_rate) * NIGHTS_PER_YEAR * inputs.occupancy_rate;
    let annual_expenses = annual_revenue * OPERATING_EXPENSE_RATIO;
    let annual_profit = annual_revenue - annual_expenses;
    let roi_percent = annual_profit / f64::from(inputs.build_cost) * 100.0;

    FinancialProjection {
        floor_space_m2: inputs.floor_space_m2,
        nightly_rate: inputs.nightly_rate,
        occupancy_rate: inputs.occupancy_rate,
        annual_revenue,
        annual_expenses,
        annual_profit,
        build_cost: inputs.build_cost,
        roi_percent,
    }
}

pub fn financial_projection(config: &VillaConfiguration) -> FinancialProjection {
    project(RentalInputs::from_configuration(config))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl RoiRating {
    pub fn classify(roi_percent: f64) -> Self {
        if roi_percent >= 15.0 {
            Self::Excellent
        } else if roi_percent >= 10.0 {
            Self::Good
        } else if roi_percent >= 5.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Asset file name for the preview, e.g. `balinese-1.5s-200m2-lush.png`.
pub fn image_identifier(config: &VillaConfiguration) -> String {
    let mut slug = format!("{}-{}s", config.build_style, config.storeys.slug());

    if config.land_size == LandSize::Large {
        slug.push_str(&format!("-{}m2", config.land_size.square_meters()));
    }
    if config.finish_variant != FinishVariant::Default {
        slug.push('-');
        slug.push_str(config.finish_variant.as_str());
    }

    format!("{slug}.{IMAGE_EXTENSION}")
}

/// Human-readable account of the floor-space calculation.
pub fn floor_space_note(storeys: Storeys) -> String {
    let multiplier = match storeys {
        Storeys::Single => "× 1 storey",
        Storeys::Mezzanine => "× 1.5 (mezzanine level)",
        Storeys::Double => "× 2 storeys",
    };
    format!(
        "Base footprint ({FOOTPRINT_WIDTH_M}m × {FOOTPRINT_DEPTH_M}m = {:.2}m²) {multiplier} = {:.2}m²",
        base_footprint(),
        floor_space(storeys)
    )
}
