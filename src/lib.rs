//! Role-normalized player ratings for one league season: empirical per-role
//! baselines, percentile ranking with shrinkage, tiered weight aggregation.

pub mod attribution;
pub mod dataset;
pub mod distribution;
pub mod export;
pub mod metrics;
pub mod record;
pub mod role;
pub mod roster;
pub mod sample_season;
pub mod score_config;
