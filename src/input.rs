//! Dataset loading for the command-line tool.

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result, bail};
use log::info;
use serde_json::Value;

use crate::plotting::data::{Record, records_from_json};

/// Read records from a JSON file holding an array of objects.
pub fn load_records(path: &str) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("Could not open data file '{}'", path))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Data file '{}' is not valid JSON", path))?;
    let records = parse_records(&value).with_context(|| format!("Reading '{}'", path))?;
    info!("Loaded {} records from {}", records.len(), path);
    Ok(records)
}

/// Records from an already parsed JSON document.
pub fn parse_records(value: &Value) -> Result<Vec<Record>> {
    if !value.is_array() {
        bail!("expected a JSON array of objects");
    }
    Ok(records_from_json(value)?)
}

/// Parse a brush gesture given as `x0,y0,x1,y1` pixel coordinates.
pub fn parse_brush(values: &[f64]) -> Result<[(f64, f64); 2]> {
    let [x0, y0, x1, y1] = values else {
        bail!(
            "--brush takes four comma-separated values x0,y0,x1,y1, got {}",
            values.len()
        );
    };
    Ok([(*x0, *y0), (*x1, *y1)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_records() {
        let records = parse_records(&json!([
            { "Model": "Civic", "HP": 158, "Weight": "2771", "Notes": null },
            { "Model": "RAV4", "HP": 203 }
        ]))
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number("Weight"), Some(2771.0));
        assert!(records[0].get("Notes").is_none());
        assert!(parse_records(&json!({ "Model": "Civic" })).is_err());
        assert!(parse_records(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_parse_brush() {
        assert_eq!(
            parse_brush(&[100.0, 120.0, 400.0, 380.0]).unwrap(),
            [(100.0, 120.0), (400.0, 380.0)]
        );
        assert!(parse_brush(&[1.0, 2.0]).is_err());
    }
}
