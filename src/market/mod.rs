//! Job-market insight collaborator: salary bands, demand, skill demand and outlook.

mod simulated;

pub use simulated::SimulatedJobMarket;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::ExperienceLevel;

/// Source of labour-market figures for a role and location.
pub trait JobMarketSource: Send + Sync {
    fn market_data(&self, role: &str, location: &str) -> Result<JobMarketData, MarketError>;
    fn location_comparison(
        &self,
        role: &str,
        locations: &[String],
    ) -> Result<Vec<LocationData>, MarketError>;
    fn salary_snapshot(
        &self,
        role: &str,
        experience: ExperienceLevel,
        as_of: DateTime<Utc>,
    ) -> Result<SalarySnapshot, MarketError>;
    fn industry_outlook(&self, industry: &str) -> Result<IndustryOutlook, MarketError>;
    fn skill_trends(&self) -> Result<SkillTrends, MarketError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("role must not be empty")]
    EmptyRole,
    #[error("industry must not be empty")]
    EmptyIndustry,
    #[error("market data unavailable: {0}")]
    Unavailable(String),
}

pub const DEFAULT_BASE_SALARY: u64 = 100_000;

/// National base salary for a role in USD.
pub fn base_salary(role: &str) -> u64 {
    match role.trim() {
        "Data Scientist" => 120_000,
        "Software Engineer" => 110_000,
        "Product Manager" => 130_000,
        "UX Designer" => 95_000,
        "DevOps Engineer" => 115_000,
        "Machine Learning Engineer" => 140_000,
        _ => DEFAULT_BASE_SALARY,
    }
}

/// Cost-of-labour multiplier keyed by the city part of `"City, State"`.
pub fn location_multiplier(location: &str) -> f64 {
    let city = location.split(',').next().unwrap_or_default().trim();
    match city {
        "San Francisco" => 1.4,
        "New York" => 1.3,
        "Seattle" => 1.2,
        "Austin" => 1.1,
        "Chicago" => 1.0,
        "Denver" => 0.95,
        "Atlanta" => 0.9,
        "Remote" => 1.05,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
    pub median: u64,
    pub average: u64,
}

impl SalaryRange {
    fn scaled(adjusted: f64, min: f64, max: f64, median: f64, average: f64) -> Self {
        let at = |factor: f64| (adjusted * factor).round() as u64;
        Self {
            min: at(min),
            max: at(max),
            median: at(median),
            average: at(average),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitsData {
    pub health_insurance: u8,
    pub retirement_401k: u8,
    pub stock_options: u8,
    pub bonus_eligible: u8,
    pub remote_work: u8,
    pub paid_time_off: u8,
    pub average_bonus_percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryGrowth {
    pub year_over_year: f64,
    pub five_year_projection: f64,
    pub inflation_adjusted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInsights {
    pub currency: String,
    pub entry: SalaryRange,
    pub mid: SalaryRange,
    pub senior: SalaryRange,
    pub total: SalaryRange,
    pub percentiles: BTreeMap<String, u64>,
    pub benefits: BenefitsData,
    pub growth: SalaryGrowth,
}

impl SalaryInsights {
    /// Salary bands as fixed multiples of the location-adjusted base salary.
    pub fn for_role(role: &str, location: &str) -> Self {
        let adjusted = base_salary(role) as f64 * location_multiplier(location);
        let percentiles = [
            ("p10", 0.75),
            ("p25", 0.9),
            ("p50", 1.15),
            ("p75", 1.45),
            ("p90", 1.8),
        ]
        .into_iter()
        .map(|(key, factor)| (key.to_string(), (adjusted * factor).round() as u64))
        .collect();

        Self {
            currency: "USD".to_string(),
            entry: SalaryRange::scaled(adjusted, 0.7, 0.95, 0.82, 0.84),
            mid: SalaryRange::scaled(adjusted, 0.95, 1.4, 1.15, 1.18),
            senior: SalaryRange::scaled(adjusted, 1.4, 2.1, 1.7, 1.75),
            total: SalaryRange::scaled(adjusted, 0.7, 2.1, 1.15, 1.25),
            percentiles,
            benefits: BenefitsData {
                health_insurance: 94,
                retirement_401k: 87,
                stock_options: 65,
                bonus_eligible: 78,
                remote_work: 82,
                paid_time_off: 96,
                average_bonus_percentage: 15,
            },
            growth: SalaryGrowth {
                year_over_year: 8.5,
                five_year_projection: 42.0,
                inflation_adjusted: 5.2,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl CompetitionLevel {
    /// More openings means less competition per opening.
    pub const fn from_openings(job_openings: u32) -> Self {
        if job_openings > 3000 {
            Self::Low
        } else if job_openings > 1500 {
            Self::Medium
        } else if job_openings > 500 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandTrend {
    Increasing,
    Stable,
    Decreasing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalData {
    pub peak_months: Vec<String>,
    pub low_months: Vec<String>,
    pub variance: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandMetrics {
    pub job_openings: u32,
    pub hiring_rate: f64,
    pub time_to_fill_days: u32,
    pub competition_level: CompetitionLevel,
    pub demand_trend: DemandTrend,
    pub seasonality: SeasonalData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCriticality {
    Essential,
    Important,
    #[serde(rename = "Nice to Have")]
    NiceToHave,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDemand {
    pub skill: String,
    pub demand_percentage: u8,
    pub salary_premium: u8,
    pub growth_rate: u8,
    pub criticality: SkillCriticality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub metric: String,
    pub value: f64,
    pub change: f64,
    pub period: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorData {
    pub average_experience_years: f64,
    pub top_education: Vec<String>,
    pub most_common_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub career_paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMarketData {
    pub role: String,
    pub location: String,
    pub salary: SalaryInsights,
    pub demand: DemandMetrics,
    pub skill_requirements: Vec<SkillDemand>,
    pub market_trends: Vec<MarketTrend>,
    pub competitor_analysis: CompetitorData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub size: String,
    pub industry: String,
    pub rating: f64,
    pub salary_range: SalaryRange,
    pub benefits: Vec<String>,
    pub culture: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub city: String,
    pub state: String,
    pub country: String,
    pub cost_of_living: f64,
    pub tech_hub_rating: f64,
    pub remote_work_prevalence: f64,
    pub companies: Vec<CompanyInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSalary {
    pub source: String,
    pub last_updated: DateTime<Utc>,
    pub data_points: u32,
    pub base: u64,
    pub bonus: u64,
    pub equity: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryAggregate {
    pub average_base: u64,
    pub average_total: u64,
    pub data_confidence: u8,
    pub sample_size: u32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySnapshot {
    pub role: String,
    pub experience: ExperienceLevel,
    pub sources: Vec<SourceSalary>,
    pub aggregate: SalaryAggregate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub next_year: f64,
    pub five_year: f64,
    pub ten_year: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disruption {
    pub ai_impact: f64,
    pub automation_risk: f64,
    pub emerging_technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEvolution {
    pub declining: Vec<String>,
    pub emerging: Vec<String>,
    pub stable: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryOutlook {
    pub industry: String,
    pub growth_projection: GrowthProjection,
    pub disruption: Disruption,
    pub skill_evolution: SkillEvolution,
    pub market_forces: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl DemandLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTrend {
    pub skill: String,
    /// Signed year-over-year change in postings asking for the skill.
    pub growth_percentage: i16,
    pub demand: DemandLevel,
}

/// Skills grouped by where their demand is heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTrends {
    pub trending: Vec<SkillTrend>,
    pub declining: Vec<SkillTrend>,
    pub stable: Vec<SkillTrend>,
}
