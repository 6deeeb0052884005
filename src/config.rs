//! Page configuration loaded from JSON.
//!
//! Lists the charts to draw and how selected records are written to the
//! selection list.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;

use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::plot::{ChartOptions, RecordFormatter, fields_formatter};

/// How a selected record is rendered as a list line.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_fields() -> Vec<String> {
    vec!["Model".to_string(), "Type".to_string()]
}

fn default_separator() -> String {
    ", ".to_string()
}

impl Default for SelectionConfig {
    fn default() -> Self {
        SelectionConfig {
            fields: default_fields(),
            separator: default_separator(),
        }
    }
}

impl SelectionConfig {
    pub fn formatter(&self) -> RecordFormatter {
        fields_formatter(self.fields.clone(), self.separator.clone())
    }
}

/// Charts drawn on one page, all sharing the same dataset and registry.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub charts: Vec<ChartOptions>,
    #[serde(default)]
    pub selection: SelectionConfig,
}

impl PageConfig {
    /// Load page configuration from a JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: PageConfig = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Check for problems that only show up across charts.
    pub fn validate(&self) -> PlotResult<()> {
        if self.charts.is_empty() {
            return Err(PlotError::InvalidConfig(
                "config lists no charts".to_string(),
            ));
        }
        let mut mounts = HashSet::new();
        for chart in &self.charts {
            if chart.mount.is_empty() || chart.mount.contains(['/', '\\']) {
                return Err(PlotError::InvalidConfig(format!(
                    "invalid chart mount '{}'",
                    chart.mount
                )));
            }
            if !mounts.insert(chart.mount.as_str()) {
                return Err(PlotError::InvalidConfig(format!(
                    "duplicate chart mount '{}'",
                    chart.mount
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::data::Record;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> PageConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(json!({
            "charts": [
                { "mount": "plot1", "title": "Cars", "x": "HP", "y": "MPG", "r": "Weight", "color": "Type" }
            ]
        }));
        assert_eq!(config.selection, SelectionConfig::default());
        assert_eq!(config.charts[0].margin, 50.0);
        assert!(config.validate().is_ok());

        let line = (config.selection.formatter())(
            &Record::new().with("Model", "Civic").with("Type", "Sedan"),
        );
        assert_eq!(line, "Civic, Sedan");
    }

    #[test]
    fn test_custom_selection_fields() {
        let config = parse(json!({
            "charts": [
                { "mount": "a", "x": "x", "y": "y", "r": "r", "color": "c", "legend": ["u", "v"], "margin": 80 }
            ],
            "selection": { "fields": ["name"], "separator": " | " }
        }));
        assert_eq!(config.charts[0].legend, vec!["u".to_string(), "v".to_string()]);
        assert_eq!(config.charts[0].margin, 80.0);
        assert_eq!(config.selection.fields, vec!["name".to_string()]);
        assert_eq!(config.selection.separator, " | ");
    }

    #[test]
    fn test_validate_mounts() {
        let chart = json!({ "mount": "p", "x": "x", "y": "y", "r": "r", "color": "c" });
        assert!(parse(json!({ "charts": [] })).validate().is_err());
        assert!(parse(json!({ "charts": [chart.clone(), chart] })).validate().is_err());
        let bad = json!({ "mount": "../p", "x": "x", "y": "y", "r": "r", "color": "c" });
        assert!(parse(json!({ "charts": [bad] })).validate().is_err());
    }
}
