//! Correlation Report
//!
//! Output of a lag scan. Built fresh on every call and never cached.

use serde::{Deserialize, Serialize};

/// Label used when there is not enough data for a lead time
pub const NO_LEAD_TIME: &str = "N/A";

/// Did the scan have enough paired data to run?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStatus {
    /// Fewer paired observations than the analyzer minimum
    InsufficientData,
    /// Lags were scanned
    Estimated,
}

/// Correlation at a single lag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagScore {
    /// Offset of the tracked series, in records
    pub lag: usize,
    /// Pearson coefficient (0 when undefined)
    pub r: f64,
    /// Two-tailed p-value
    pub p_value: f64,
    /// Pairs used at this lag
    pub samples: usize,
}

/// Result of a lead-lag scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub status: CorrelationStatus,
    /// Lag with the highest correlation, in records
    pub best_lag: usize,
    /// Correlation at the best lag
    pub r: f64,
    /// Explained variance at the best lag
    pub r_squared: f64,
    /// Two-tailed p-value at the best lag
    pub p_value: f64,
    /// "0d (Real-time)", "{lag}d", or "N/A"
    pub lead_time: String,
    /// Paired observations available before shifting
    pub sample_size: usize,
    /// Paired observations the analyzer requires
    pub required_samples: usize,
    /// Every lag that was scored, in scan order
    pub scan: Vec<LagScore>,
}

impl CorrelationReport {
    /// Report for a series without enough paired observations
    pub fn insufficient(sample_size: usize, required_samples: usize) -> Self {
        Self {
            status: CorrelationStatus::InsufficientData,
            best_lag: 0,
            r: 0.0,
            r_squared: 0.0,
            p_value: 1.0,
            lead_time: NO_LEAD_TIME.to_string(),
            sample_size,
            required_samples,
            scan: Vec::new(),
        }
    }

    /// Report for a completed scan, selecting `best` (or a neutral lag 0
    /// result when no lag could be scored)
    pub fn estimated(
        best: Option<LagScore>,
        scan: Vec<LagScore>,
        sample_size: usize,
        required_samples: usize,
    ) -> Self {
        let best = best.unwrap_or(LagScore {
            lag: 0,
            r: 0.0,
            p_value: 1.0,
            samples: 0,
        });

        Self {
            status: CorrelationStatus::Estimated,
            best_lag: best.lag,
            r: best.r,
            r_squared: best.r * best.r,
            p_value: best.p_value,
            lead_time: lead_time_label(best.lag),
            sample_size,
            required_samples,
            scan,
        }
    }

    pub fn is_sufficient(&self) -> bool {
        self.status == CorrelationStatus::Estimated
    }
}

/// Display label for a lead time in records
pub fn lead_time_label(lag: usize) -> String {
    if lag == 0 {
        "0d (Real-time)".to_string()
    } else {
        format!("{}d", lag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_time_labels() {
        assert_eq!(lead_time_label(0), "0d (Real-time)");
        assert_eq!(lead_time_label(3), "3d");
    }

    #[test]
    fn test_insufficient_defaults() {
        let report = CorrelationReport::insufficient(4, 10);
        assert!(!report.is_sufficient());
        assert_eq!(report.r_squared, 0.0);
        assert_eq!(report.p_value, 1.0);
        assert_eq!(report.lead_time, "N/A");
        assert!(report.scan.is_empty());
    }

    #[test]
    fn test_estimated_squares_r() {
        let best = LagScore {
            lag: 2,
            r: -0.5,
            p_value: 0.2,
            samples: 12,
        };
        let report = CorrelationReport::estimated(Some(best), vec![best], 14, 10);
        assert_eq!(report.r_squared, 0.25);
        assert_eq!(report.lead_time, "2d");
    }

    #[test]
    fn test_estimated_without_scores_is_neutral() {
        let report = CorrelationReport::estimated(None, Vec::new(), 3, 2);
        assert!(report.is_sufficient());
        assert_eq!(report.best_lag, 0);
        assert_eq!(report.r, 0.0);
        assert_eq!(report.p_value, 1.0);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&CorrelationStatus::InsufficientData).unwrap();
        assert_eq!(json, "\"insufficient_data\"");
    }
}
