use crate::infra::configurator_from_env;
use chrono::{DateTime, Local};
use clap::Args;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use villa_roi::configurator::export::write_matrix_csv;
use villa_roi::configurator::{
    AvailabilityTable, ConfigField, ConfiguratorSnapshot, OptionValue, VillaConfiguration,
    VillaConfigurator,
};
use villa_roi::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct QuoteArgs {
    /// Bedroom count (1 or 2)
    #[arg(long)]
    pub(crate) bedrooms: Option<u8>,
    /// Storey count (1, 1.5 or 2)
    #[arg(long)]
    pub(crate) storeys: Option<f64>,
    /// Land size in square meters (100 or 200)
    #[arg(long)]
    pub(crate) land_size: Option<u16>,
    /// Architectural style (modern, balinese, japanese, moroccan)
    #[arg(long)]
    pub(crate) build_style: Option<String>,
    /// Finish variant (default, v2, v3, lush)
    #[arg(long)]
    pub(crate) finish_variant: Option<String>,
    /// Print the full snapshot as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl QuoteArgs {
    /// Requested selections in field order, so the finish variant is checked against the final style and storeys.
    fn mutations(&self) -> Vec<(ConfigField, OptionValue)> {
        let mut mutations = Vec::new();
        if let Some(bedrooms) = self.bedrooms {
            mutations.push((ConfigField::Bedrooms, OptionValue::from(f64::from(bedrooms))));
        }
        if let Some(storeys) = self.storeys {
            mutations.push((ConfigField::Storeys, OptionValue::from(storeys)));
        }
        if let Some(land_size) = self.land_size {
            mutations.push((ConfigField::LandSize, OptionValue::from(f64::from(land_size))));
        }
        if let Some(style) = self.build_style.as_deref() {
            mutations.push((ConfigField::BuildStyle, OptionValue::from(style)));
        }
        if let Some(variant) = self.finish_variant.as_deref() {
            mutations.push((ConfigField::FinishVariant, OptionValue::from(variant)));
        }
        mutations
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct MatrixArgs {
    /// Write the CSV to this path instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let (_, configurator) = configurator_from_env()?;
    let snapshot = build_quote(&configurator, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        for line in render_quote(&snapshot, Local::now()) {
            println!("{line}");
        }
    }

    Ok(())
}

pub(crate) fn run_matrix(args: MatrixArgs) -> Result<(), AppError> {
    let (_, configurator) = configurator_from_env()?;
    let rows = configurator.matrix();

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            write_matrix_csv(&rows, file)?;
            eprintln!("Wrote {} configurations to {}", rows.len(), path.display());
        }
        None => write_matrix_csv(&rows, io::stdout().lock())?,
    }

    Ok(())
}

pub(crate) fn run_availability() -> Result<(), AppError> {
    let (config, configurator) = configurator_from_env()?;
    let source = config
        .configurator
        .availability_csv
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in table".to_string());

    println!("Finish availability ({source})");
    for line in render_availability(configurator.availability()) {
        println!("{line}");
    }

    Ok(())
}

fn build_quote(
    configurator: &VillaConfigurator,
    args: &QuoteArgs,
) -> Result<ConfiguratorSnapshot, AppError> {
    let mut snapshot = configurator.quote(VillaConfiguration::default());
    for (field, value) in args.mutations() {
        snapshot = configurator.apply(snapshot.configuration, field, &value)?;
    }
    Ok(snapshot)
}

fn render_quote(snapshot: &ConfiguratorSnapshot, generated_at: DateTime<Local>) -> Vec<String> {
    let summary = &snapshot.summary;
    let projection = &snapshot.projection;
    let mut lines = vec![
        format!("Villa quote (generated {})", generated_at.format("%Y-%m-%d %H:%M")),
        format!(
            "Configuration: {} | {} | {} | {} | {}",
            summary.bedrooms,
            snapshot.configuration.storeys.label(),
            summary.land_size,
            summary.build_style,
            summary.finish_variant
        ),
    ];

    if let Some(previous) = snapshot.variant_reset_from {
        lines.push(format!(
            "  note: {} finish is not offered for this style and height; using {}",
            previous.label(),
            snapshot.configuration.finish_variant.label()
        ));
    }

    lines.push(format!("Floor space:      {}", summary.floor_space));
    lines.push(format!("  {}", summary.floor_space_note));
    lines.push(format!(
        "Build cost:       {}",
        format_currency(f64::from(projection.build_cost))
    ));
    lines.push(format!(
        "Nightly rate:     {}",
        format_currency(f64::from(projection.nightly_rate))
    ));
    lines.push(format!(
        "Occupancy:        {:.0}%",
        projection.occupancy_rate * 100.0
    ));
    lines.push(format!(
        "Annual revenue:   {}",
        format_currency(projection.annual_revenue)
    ));
    lines.push(format!(
        "Annual expenses:  {}",
        format_currency(projection.annual_expenses)
    ));
    lines.push(format!(
        "Annual profit:    {}",
        format_currency(projection.annual_profit)
    ));
    lines.push(format!(
        "ROI:              {:.2}% ({})",
        projection.roi_percent, snapshot.roi_label
    ));
    lines.push(format!(
        "Preview:          {} ({})",
        snapshot.image.path, snapshot.image.alt_text
    ));

    let variants = snapshot
        .legal_variants
        .iter()
        .map(|entry| entry.label)
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("Available finishes: {variants}"));

    lines
}

fn render_availability(table: &AvailabilityTable) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in table.entries() {
        let variants = entry
            .variants
            .iter()
            .map(|variant| variant.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "- {:<9} {:<4} {}",
            entry.build_style.label(),
            entry.storeys.slug(),
            variants
        ));
    }

    let missing = table.missing_entries();
    if !missing.is_empty() {
        lines.push(format!(
            "Missing entries ({}), default finish only:",
            missing.len()
        ));
        for (style, storeys) in missing {
            lines.push(format!("- {:<9} {}", style.label(), storeys.slug()));
        }
    }

    lines
}

/// Whole-dollar amount with thousands separators, e.g. `$35,040`.
fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use villa_roi::configurator::{BuildStyle, FinishVariant, Storeys};

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(200.0), "$200");
        assert_eq!(format_currency(35_040.0), "$35,040");
        assert_eq!(format_currency(1_234_567.4), "$1,234,567");
        assert_eq!(format_currency(-4_500.0), "-$4,500");
    }

    #[test]
    fn quote_replays_options_in_field_order() {
        let args = QuoteArgs {
            storeys: Some(1.5),
            build_style: Some("japanese".to_string()),
            finish_variant: Some("v3".to_string()),
            ..QuoteArgs::default()
        };

        let snapshot =
            build_quote(&VillaConfigurator::default(), &args).expect("options are valid");

        assert_eq!(snapshot.configuration.storeys, Storeys::Mezzanine);
        assert_eq!(snapshot.configuration.build_style, BuildStyle::Japanese);
        assert_eq!(snapshot.configuration.finish_variant, FinishVariant::Default);
        assert_eq!(snapshot.variant_reset_from, Some(FinishVariant::V3));
    }

    #[test]
    fn quote_rejects_invalid_option() {
        let args = QuoteArgs {
            land_size: Some(150),
            ..QuoteArgs::default()
        };

        let err = build_quote(&VillaConfigurator::default(), &args).expect_err("150 is not offered");
        assert!(matches!(err, AppError::Configurator(_)));
    }

    #[test]
    fn renders_default_quote() {
        let snapshot = VillaConfigurator::default().quote(VillaConfiguration::default());
        let lines = render_quote(&snapshot, fixed_time());

        assert_eq!(lines[0], "Villa quote (generated 2025-03-14 09:30)");
        assert!(lines.contains(&"Build cost:       $180,000".to_string()));
        assert!(lines.contains(&"Occupancy:        80%".to_string()));
        assert!(lines.contains(&"Annual profit:    $35,040".to_string()));
        assert!(lines.contains(&"ROI:              19.47% (Excellent)".to_string()));
        assert!(lines.iter().all(|line| !line.contains("note:")));
    }

    #[test]
    fn availability_listing_reports_missing_pairs() {
        let table = AvailabilityTable::from_reader(
            "build_style,storeys,variants\nmodern,1,default|v2\n".as_bytes(),
        )
        .expect("table loads");

        let lines = render_availability(&table);
        assert_eq!(lines[0], "- Modern    1    default, v2");
        assert_eq!(lines[1], "Missing entries (11), default finish only:");
        assert_eq!(lines.len(), 13);
    }
}
