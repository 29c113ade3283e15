use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use career_ai::careers::{CareerCatalog, SkillGap};
use career_ai::market::{JobMarketSource, SimulatedJobMarket};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Collaborators shared by the `/api/v1` handlers.
#[derive(Clone)]
pub(crate) struct ApiState {
    pub(crate) market: Arc<dyn JobMarketSource>,
    pub(crate) known_roles: Arc<CareerCatalog>,
}

impl ApiState {
    pub(crate) fn simulated(seed: u64) -> Self {
        Self {
            market: Arc::new(SimulatedJobMarket::new(seed)),
            known_roles: Arc::new(CareerCatalog::extended()),
        }
    }
}

/// Skill gap as written by hand in a gaps file; priority and timing are derived.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GapInput {
    pub(crate) skill: String,
    #[serde(default)]
    pub(crate) current: u8,
    pub(crate) required: u8,
}

impl From<GapInput> for SkillGap {
    fn from(input: GapInput) -> Self {
        SkillGap::new(input.skill, input.current, input.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_input_derives_priority() {
        let input: GapInput =
            serde_json::from_str(r#"{"skill":"SQL","required":75}"#).expect("gap input");
        let gap = SkillGap::from(input);
        assert_eq!(gap.current, 0);
        assert_eq!(gap.gap(), 75);
        assert_eq!(gap.time_to_acquire, "8-12 months");
    }
}
