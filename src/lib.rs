//! Career guidance engine: psychometric assessment scoring, profile synthesis,
//! career matching, skill gaps, and the market and learning collaborators that
//! feed the advisor.

pub mod advisor;
pub mod assessment;
pub mod careers;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod learning;
pub mod market;
pub mod profile;
pub mod storage;
pub mod telemetry;
