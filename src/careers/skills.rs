use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::SkillRequirement;
use super::traits::lookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

impl GapPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub const fn for_gap(gap: u8) -> Self {
        if gap >= 40 {
            Self::High
        } else if gap >= 20 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Distance between a learner's current level in a skill and what a career needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current: u8,
    pub required: u8,
    pub priority: GapPriority,
    pub time_to_acquire: String,
}

impl SkillGap {
    pub fn new(skill: impl Into<String>, current: u8, required: u8) -> Self {
        let current = current.min(100);
        let required = required.min(100);
        let gap = required.saturating_sub(current);
        Self {
            skill: skill.into(),
            current,
            required,
            priority: GapPriority::for_gap(gap),
            time_to_acquire: time_to_acquire(gap).to_string(),
        }
    }

    pub fn gap(&self) -> u8 {
        self.required.saturating_sub(self.current)
    }
}

fn time_to_acquire(gap: u8) -> &'static str {
    match gap {
        60.. => "8-12 months",
        40..=59 => "6-8 months",
        20..=39 => "3-6 months",
        _ => "1-2 months",
    }
}

/// One gap per requirement the learner falls short of, widest gap first.
/// Skills missing from `current` count as level 0.
pub fn analyze_skill_gaps(
    requirements: &[SkillRequirement],
    current: &BTreeMap<String, f64>,
) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = requirements
        .iter()
        .filter_map(|requirement| {
            let level = lookup(current, &requirement.skill)
                .unwrap_or(0.0)
                .round()
                .clamp(0.0, 100.0) as u8;
            (level < requirement.level)
                .then(|| SkillGap::new(requirement.skill.clone(), level, requirement.level))
        })
        .collect();

    gaps.sort_by(|left, right| right.gap().cmp(&left.gap()));
    gaps
}
