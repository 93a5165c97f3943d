//! Insights
//!
//! Plain-language lines describing which thresholds the scan crossed.

use crate::report::CorrelationReport;
use crate::signal::{SignalAssessment, Trend};

/// Attached to every correlation section
pub const DISCLAIMER: &str = "This is not financial advice. This is fashion advice.";

/// p-value below which a correlation is called significant
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Insight derivation
pub struct Insights;

impl Insights {
    /// One sentence per threshold crossed, in a fixed order
    pub fn derive(report: &CorrelationReport, assessment: &SignalAssessment) -> Vec<String> {
        if !report.is_sufficient() {
            return vec![format!(
                "Only {} paired observations so far; {} are needed before a lead time can be estimated",
                report.sample_size, report.required_samples
            )];
        }

        let mut lines = Vec::with_capacity(5);

        lines.push(format!(
            "Explains {:.1}% of the reference's variance at a lead time of {}",
            report.r_squared * 100.0,
            report.lead_time
        ));

        if report.p_value < SIGNIFICANCE_LEVEL {
            lines.push(format!(
                "Statistically significant (p = {:.4})",
                report.p_value
            ));
        } else {
            lines.push(format!(
                "Not statistically significant (p = {:.4})",
                report.p_value
            ));
        }

        if report.r < 0.0 {
            lines.push("Inverse relationship: the series move in opposite directions".to_string());
        }

        if report.best_lag > 0 {
            lines.push(format!(
                "Moves in the tracked series precede the reference by {} records",
                report.best_lag
            ));
        }

        match assessment.trend {
            Some(Trend::Rising) => lines.push("Recent values are rising against the prior period".to_string()),
            Some(Trend::Falling) => lines.push("Recent values are falling against the prior period".to_string()),
            Some(Trend::Flat) => lines.push("Recent values are flat against the prior period".to_string()),
            None => {}
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::LagScore;
    use crate::signal::Signal;

    fn assessment(signal: Signal, trend: Option<Trend>) -> SignalAssessment {
        SignalAssessment {
            signal,
            color: signal.color().to_string(),
            description: String::new(),
            trend,
        }
    }

    fn estimated(lag: usize, r: f64, p_value: f64) -> CorrelationReport {
        let score = LagScore {
            lag,
            r,
            p_value,
            samples: 15,
        };
        CorrelationReport::estimated(Some(score), vec![score], 15, 10)
    }

    #[test]
    fn test_insufficient_reports_counts_only() {
        let report = CorrelationReport::insufficient(6, 10);
        let lines = Insights::derive(&report, &assessment(Signal::Initializing, None));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("6 paired"));
        assert!(lines[0].contains("10 are needed"));
    }

    #[test]
    fn test_significant_leading_bullish() {
        let report = estimated(3, 0.9, 0.001);
        let lines = Insights::derive(&report, &assessment(Signal::Bullish, Some(Trend::Rising)));

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("81.0%"));
        assert!(lines[0].contains("3d"));
        assert!(lines[1].starts_with("Statistically significant"));
        assert!(lines[2].contains("3 records"));
        assert!(lines[3].contains("rising"));
    }

    #[test]
    fn test_inverse_insignificant_synchronized() {
        let report = estimated(0, -0.4, 0.2);
        let lines = Insights::derive(&report, &assessment(Signal::Neutral, None));

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Real-time"));
        assert!(lines[1].starts_with("Not statistically significant"));
        assert!(lines[2].starts_with("Inverse"));
    }

    #[test]
    fn test_disclaimer_text() {
        assert_eq!(DISCLAIMER, "This is not financial advice. This is fashion advice.");
    }
}
