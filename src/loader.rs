//! CSV loader for regional cumulative count tables.
//!
//! Reads tables shaped like the JHU daily-report format: a sub-region
//! and region identifier pair, two geographic columns that are dropped,
//! then one cumulative count column per day. Malformed rows are this
//! module's responsibility; the clustering core never sees them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDate;

use crate::core::RegionSeries;
use crate::error::{ClusterError, Result};

const SUB_REGION_COLUMN: &str = "Province/State";
const REGION_COLUMN: &str = "Country/Region";
const GEO_COLUMNS: [&str; 2] = ["Lat", "Long"];

/// Number of leading non-count columns (identifiers + geography).
const PREFIX_COLUMNS: usize = 4;

/// Load a region table from a CSV file.
///
/// The header must carry the identifier and geographic columns in order,
/// followed by date columns in `M/D/YY` form, strictly chronological.
/// Each data row becomes one [`RegionSeries`]: the identifier is the
/// region name, prefixed with the sub-region name when present
/// (`"Hubei, China"`); the geographic cells are discarded; every count
/// cell must parse as a non-negative integer.
pub fn load_regions(path: impl AsRef<Path>) -> Result<Vec<RegionSeries>> {
    let file = File::open(path.as_ref()).map_err(|e| ClusterError::Io(e.to_string()))?;
    let reader = BufReader::new(file);

    let mut regions = Vec::new();
    let mut day_count = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ClusterError::Io(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(&line);
        match day_count {
            None => day_count = Some(parse_header(&fields)?),
            Some(days) => regions.push(parse_row(&fields, days, i + 1)?),
        }
    }

    if day_count.is_none() {
        return Err(ClusterError::MalformedTable("empty file".to_string()));
    }
    Ok(regions)
}

/// Validate the header and return the number of date columns.
fn parse_header(fields: &[String]) -> Result<usize> {
    let expected = [SUB_REGION_COLUMN, REGION_COLUMN, GEO_COLUMNS[0], GEO_COLUMNS[1]];
    for (pos, name) in expected.iter().enumerate() {
        if fields.get(pos).map(String::as_str) != Some(*name) {
            return Err(ClusterError::MalformedTable(format!(
                "expected column {} to be {:?}",
                pos + 1,
                name
            )));
        }
    }

    let date_fields = &fields[PREFIX_COLUMNS..];
    if date_fields.is_empty() {
        return Err(ClusterError::MalformedTable("no date columns".to_string()));
    }

    let mut previous: Option<NaiveDate> = None;
    for field in date_fields {
        let date = NaiveDate::parse_from_str(field, "%m/%d/%y").map_err(|_| {
            ClusterError::MalformedTable(format!("unparseable date column {:?}", field))
        })?;
        if let Some(prev) = previous {
            if date <= prev {
                return Err(ClusterError::MalformedTable(format!(
                    "date columns out of order at {:?}",
                    field
                )));
            }
        }
        previous = Some(date);
    }

    Ok(date_fields.len())
}

/// Parse one data row into a [`RegionSeries`].
fn parse_row(fields: &[String], days: usize, line: usize) -> Result<RegionSeries> {
    if fields.len() != PREFIX_COLUMNS + days {
        return Err(ClusterError::MalformedRow {
            line,
            reason: format!(
                "expected {} fields, got {}",
                PREFIX_COLUMNS + days,
                fields.len()
            ),
        });
    }

    let sub_region = fields[0].trim();
    let region = fields[1].trim();
    let identifier = if sub_region.is_empty() {
        region.to_string()
    } else {
        format!("{}, {}", sub_region, region)
    };

    let mut counts = Vec::with_capacity(days);
    for field in &fields[PREFIX_COLUMNS..] {
        let count = field.trim().parse::<u64>().map_err(|_| ClusterError::MalformedRow {
            line,
            reason: format!("non-numeric count {:?}", field),
        })?;
        counts.push(count);
    }

    Ok(RegionSeries::new(identifier, counts))
}

/// Split one CSV line into fields, honoring double-quoted fields with
/// embedded commas and doubled-quote escapes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    // ==================== split_fields ====================

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_fields("a,b,c"), owned(&["a", "b", "c"]));
    }

    #[test]
    fn preserves_empty_fields() {
        assert_eq!(split_fields(",b,"), owned(&["", "b", ""]));
    }

    #[test]
    fn quoted_field_keeps_embedded_comma() {
        assert_eq!(
            split_fields("\"Korea, South\",1,2"),
            owned(&["Korea, South", "1", "2"])
        );
    }

    #[test]
    fn doubled_quotes_escape() {
        assert_eq!(split_fields("\"say \"\"hi\"\"\",x"), owned(&["say \"hi\"", "x"]));
    }

    // ==================== parse_header ====================

    #[test]
    fn header_with_ordered_dates_is_accepted() {
        let fields = owned(&[
            "Province/State",
            "Country/Region",
            "Lat",
            "Long",
            "1/22/20",
            "1/23/20",
        ]);
        assert_eq!(parse_header(&fields), Ok(2));
    }

    #[test]
    fn header_missing_geo_column_is_rejected() {
        let fields = owned(&["Province/State", "Country/Region", "Lat", "1/22/20"]);
        assert!(matches!(
            parse_header(&fields),
            Err(ClusterError::MalformedTable(_))
        ));
    }

    #[test]
    fn header_with_disordered_dates_is_rejected() {
        let fields = owned(&[
            "Province/State",
            "Country/Region",
            "Lat",
            "Long",
            "1/23/20",
            "1/22/20",
        ]);
        assert!(matches!(
            parse_header(&fields),
            Err(ClusterError::MalformedTable(_))
        ));
    }

    // ==================== parse_row ====================

    #[test]
    fn row_without_sub_region_uses_region_name() {
        let fields = owned(&["", "Alfa", "10.0", "20.0", "0", "3"]);
        let series = parse_row(&fields, 2, 2).unwrap();
        assert_eq!(series.region(), "Alfa");
        assert_eq!(series.counts(), &[0, 3]);
    }

    #[test]
    fn row_with_sub_region_joins_names() {
        let fields = owned(&["Hubei", "China", "30.9", "112.2", "444", "444"]);
        let series = parse_row(&fields, 2, 2).unwrap();
        assert_eq!(series.region(), "Hubei, China");
    }

    #[test]
    fn row_with_wrong_field_count_is_rejected() {
        let fields = owned(&["", "Alfa", "10.0", "20.0", "0"]);
        assert!(matches!(
            parse_row(&fields, 2, 3),
            Err(ClusterError::MalformedRow { line: 3, .. })
        ));
    }

    #[test]
    fn row_with_non_numeric_count_is_rejected() {
        let fields = owned(&["", "Alfa", "10.0", "20.0", "0", "many"]);
        assert!(matches!(
            parse_row(&fields, 2, 4),
            Err(ClusterError::MalformedRow { line: 4, .. })
        ));
    }
}
