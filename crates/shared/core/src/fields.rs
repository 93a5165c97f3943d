//! Field names produced by the daily index collector.
//!
//! The engine itself is field-agnostic; these are the names the default
//! configuration and the chart history refer to.

/// Average asking price of the day's listings
pub const AVG_PRICE: &str = "avg_price";
/// Median asking price of the day's listings
pub const MEDIAN_PRICE: &str = "median_price";
/// Average realized price of the day's sold listings
pub const AVG_SOLD_PRICE: &str = "avg_sold_price";
/// Number of listings observed that day
pub const TOTAL_LISTINGS: &str = "total_listings";
/// Number of listings marked sold that day
pub const SOLD_COUNT: &str = "sold_count";
/// Average keyword score of the day's listings
pub const AVG_JENSEN_SCORE: &str = "avg_jensen_score";
/// Reference market close
pub const NVDA_CLOSE: &str = "nvda_close";
/// Reference market daily change (percent)
pub const NVDA_PCT_CHANGE: &str = "nvda_pct_change";
