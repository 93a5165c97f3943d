//! Metric Definitions
//!
//! Declarative list of the rows a metrics table reports. Every row is
//! computed by the same `(field, window)` functions; adding a metric is a
//! data change, not a code change.

use jhlj_core::fields;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{MetricsError, Result};

/// One reported metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Display name
    pub name: String,
    /// Record field the metric is computed from
    pub field: String,
    /// Decimal places for trailing values (changes always use 2)
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Emphasised row (at most one per table)
    #[serde(default)]
    pub highlighted: bool,
}

fn default_precision() -> u32 {
    2
}

impl MetricDefinition {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            precision: default_precision(),
            highlighted: false,
        }
    }

    /// Builder: set display precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder: mark as the highlighted row
    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

/// Validated set of metric definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetricDefinitions(Vec<MetricDefinition>);

impl MetricDefinitions {
    /// Validate and wrap a list of definitions.
    ///
    /// Rejects more than one highlighted row, repeated names and empty
    /// field names.
    pub fn new(definitions: Vec<MetricDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for def in &definitions {
            if def.field.trim().is_empty() {
                return Err(MetricsError::EmptyField(def.name.clone()));
            }
            if !seen.insert(def.name.as_str()) {
                return Err(MetricsError::DuplicateMetric(def.name.clone()));
            }
        }

        let highlighted: Vec<String> = definitions
            .iter()
            .filter(|d| d.highlighted)
            .map(|d| d.name.clone())
            .collect();
        if highlighted.len() > 1 {
            return Err(MetricsError::MultipleHighlights {
                count: highlighted.len(),
                names: highlighted,
            });
        }

        Ok(Self(definitions))
    }

    /// The leather jacket panel: price, keyword score, volume and sales
    pub fn standard() -> Self {
        Self(vec![
            MetricDefinition::new("Avg Jacket Price", fields::AVG_PRICE).highlighted(),
            MetricDefinition::new("Jensen Score (Avg)", fields::AVG_JENSEN_SCORE),
            MetricDefinition::new("Daily Listings", fields::TOTAL_LISTINGS).with_precision(0),
            MetricDefinition::new("Items Sold", fields::SOLD_COUNT).with_precision(0),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricDefinition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MetricDefinitions {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'de> Deserialize<'de> for MetricDefinitions {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let definitions = Vec::<MetricDefinition>::deserialize(deserializer)?;
        Self::new(definitions).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_has_single_highlight() {
        let defs = MetricDefinitions::standard();
        assert_eq!(defs.len(), 4);
        assert_eq!(defs.iter().filter(|d| d.highlighted).count(), 1);
        assert!(MetricDefinitions::new(defs.0.clone()).is_ok());
    }

    #[test]
    fn test_rejects_two_highlights() {
        let err = MetricDefinitions::new(vec![
            MetricDefinition::new("A", "a").highlighted(),
            MetricDefinition::new("B", "b").highlighted(),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            MetricsError::MultipleHighlights {
                count: 2,
                names: vec!["A".to_string(), "B".to_string()],
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_and_empty() {
        assert_eq!(
            MetricDefinitions::new(vec![
                MetricDefinition::new("A", "a"),
                MetricDefinition::new("A", "b"),
            ])
            .unwrap_err(),
            MetricsError::DuplicateMetric("A".to_string())
        );
        assert_eq!(
            MetricDefinitions::new(vec![MetricDefinition::new("A", " ")]).unwrap_err(),
            MetricsError::EmptyField("A".to_string())
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: MetricDefinitions =
            serde_json::from_str(r#"[{"name": "Price", "field": "avg_price", "highlighted": true}]"#)
                .unwrap();
        assert_eq!(ok.iter().next().unwrap().precision, 2);

        let bad = serde_json::from_str::<MetricDefinitions>(
            r#"[{"name": "A", "field": "a", "highlighted": true},
                {"name": "B", "field": "b", "highlighted": true}]"#,
        );
        assert!(bad.is_err());
    }
}
