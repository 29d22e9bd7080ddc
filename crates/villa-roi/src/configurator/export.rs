use std::io::Write;

use super::views::MatrixRow;

/// Writes matrix rows as CSV with a header line.
pub fn write_matrix_csv<W: Write>(rows: &[MatrixRow], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configurator::VillaConfigurator;

    #[test]
    fn writes_header_and_one_line_per_row() {
        let rows = VillaConfigurator::default().matrix();
        let mut buffer = Vec::new();
        write_matrix_csv(&rows, &mut buffer).expect("csv written");

        let text = String::from_utf8(buffer).expect("utf8");
        let mut lines = text.lines();
        let header = lines.next().expect("header line");
        assert!(header.starts_with("bedrooms,storeys,land_size,build_style,finish_variant"));
        assert!(header.ends_with("roi_rating,image"));
        assert_eq!(lines.count(), rows.len());
        assert!(text.contains("modern-1s.png"));
        assert!(text.contains(",balinese,lush,"));
    }
}
