//! Lead-lag pipeline over a realistic daily panel

use chrono::{Duration, NaiveDate};
use jhlj_core::{DailyRecord, SeriesView};
use jhlj_correlation::{
    AnalyzerConfig, ClassifierConfig, Insights, LagCorrelationAnalyzer, Signal, SignalClassifier,
    Trend,
};

fn init() {
    let _ = env_logger::try_init();
}

/// Jacket prices on trading days only (five on, two off); the close
/// follows the price two records later
fn panel() -> SeriesView {
    let newest = NaiveDate::from_ymd_opt(2025, 3, 28).unwrap();
    let prices: Vec<f64> = (0..40)
        .map(|i| 480.0 + ((i * 5) % 13) as f64 * 2.5)
        .collect();

    let records = (0..40)
        .map(|i| {
            let date = newest - Duration::days((i + 2 * (i / 5)) as i64);
            DailyRecord::new(date)
                .with_field("avg_price", prices[i])
                .with_optional("nvda_close", prices.get(i + 2).map(|p| p * 0.3 - 10.0))
        })
        .collect();
    SeriesView::new(records).unwrap()
}

#[test]
fn test_scan_classify_explain() {
    init();
    let series = panel();
    let analyzer = LagCorrelationAnalyzer::new(AnalyzerConfig::default());
    let classifier = SignalClassifier::new(ClassifierConfig::default());

    let report = analyzer.analyze(&series, "avg_price", "nvda_close");
    let assessment = classifier.classify(&report, &series, "avg_price");
    let insights = Insights::derive(&report, &assessment);

    assert!(report.is_sufficient());
    assert!(report.r_squared > 0.3);
    assert_eq!(report.best_lag, 2);
    assert_eq!(report.sample_size, 38);
    // Newest three average 492.5 against 497.5 before them
    assert_eq!(assessment.signal, Signal::Bearish);
    assert_eq!(assessment.trend, Some(Trend::Falling));
    assert!(insights.iter().any(|line| line.contains("precede the reference")));
}

#[test]
fn test_swapped_fields_do_not_lead() {
    init();
    let series = panel();
    let report = LagCorrelationAnalyzer::default().analyze(&series, "nvda_close", "avg_price");

    // The close trails the price, so shifting the close back never helps
    assert_ne!(report.best_lag, 2);
}
