//! Storage pricing
//!
//! Fixed-rate cost model: a flat per-GB-per-month price applied uniformly to
//! every bucket. Accumulation happens over raw f64 sums; rounding is left to
//! the display layer so it never compounds.

/// Standard storage price per GB per month.
pub const COST_PER_GB_PER_MONTH: f64 = 0.023;

/// Monthly cost of a bucket at the given rate.
pub fn monthly_cost(size_gb: f64, rate_per_gb_month: f64) -> f64 {
    size_gb * rate_per_gb_month
}
