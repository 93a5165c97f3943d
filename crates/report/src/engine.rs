//! Report Engine
//!
//! Assembles the full index report from one snapshot of daily records.
//! The engine holds configuration only; every call recomputes from the
//! snapshot it is given, so identical snapshots produce identical reports.

use chrono::NaiveDate;
use jhlj_core::{DailyRecord, SeriesView};
use jhlj_correlation::{
    CorrelationReport, DISCLAIMER, Insights, LagCorrelationAnalyzer, SignalAssessment,
    SignalClassifier,
};
use jhlj_metrics::{ChangeHistory, HistoryPoint, MetricsTable};
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::Result;

/// Correlation block of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSection {
    pub report: CorrelationReport,
    pub signal: SignalAssessment,
    pub insights: Vec<String>,
    pub disclaimer: String,
}

/// Complete index report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexReport {
    pub ticker: String,
    pub name: String,
    /// Date of the newest record (`None` for an empty snapshot)
    pub last_updated: Option<NaiveDate>,
    pub metrics: MetricsTable,
    pub correlation: CorrelationSection,
    /// Chart points, oldest first
    pub history: Vec<HistoryPoint>,
}

/// Report engine
#[derive(Debug, Clone)]
pub struct ReportEngine {
    config: ReportConfig,
    analyzer: LagCorrelationAnalyzer,
    classifier: SignalClassifier,
}

impl ReportEngine {
    /// Create an engine from a validated configuration
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            analyzer: LagCorrelationAnalyzer::new(config.analyzer()),
            classifier: SignalClassifier::new(config.classifier()),
            config,
        })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Compute the report for one snapshot
    pub fn compute(&self, series: &SeriesView) -> IndexReport {
        let series = series.truncated(self.config.history_limit);
        let config = &self.config;

        let metrics = MetricsTable::build(&series, &config.metrics, &config.windows);

        let report = self
            .analyzer
            .analyze(&series, &config.tracked, &config.reference);
        let signal = self.classifier.classify(&report, &series, &config.tracked);
        let insights = Insights::derive(&report, &signal);

        log::info!(
            "[Report] {} records, signal {} (lag {}, r2 {:.3})",
            series.len(),
            signal.signal,
            report.best_lag,
            report.r_squared
        );

        let history = ChangeHistory::build(&series, &config.tracked, &config.chart_fields);

        IndexReport {
            ticker: config.ticker.clone(),
            name: config.name.clone(),
            last_updated: series.last_updated(),
            metrics,
            correlation: CorrelationSection {
                report,
                signal,
                insights,
                disclaimer: DISCLAIMER.to_string(),
            },
            history,
        }
    }

    /// Parse a JSON array of daily records (any order) and compute the
    /// report
    pub fn compute_json(&self, json: &str) -> Result<IndexReport> {
        let series = load_records(json)?;
        Ok(self.compute(&series))
    }
}

/// Parse a JSON array of daily records in any order into a series view
pub fn load_records(json: &str) -> Result<SeriesView> {
    let records: Vec<DailyRecord> = serde_json::from_str(json)?;
    log::debug!("[Report] parsed {} records", records.len());
    Ok(SeriesView::from_unsorted(records)?)
}
