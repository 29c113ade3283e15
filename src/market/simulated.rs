use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{
    CompanyInfo, CompetitionLevel, CompetitorData, DemandLevel, DemandMetrics, DemandTrend,
    Disruption, GrowthProjection, IndustryOutlook, JobMarketData, JobMarketSource, LocationData,
    MarketError, MarketTrend, SalaryAggregate, SalaryInsights, SalaryRange, SalarySnapshot,
    SeasonalData, SkillCriticality, SkillDemand, SkillEvolution, SkillTrend, SkillTrends,
    SourceSalary,
};
use crate::profile::ExperienceLevel;

const SALARY_SOURCES: [&str; 5] = ["Glassdoor", "PayScale", "Levels.fyi", "Blind", "AngelList"];
const EMPLOYERS: [&str; 5] = ["Google", "Microsoft", "Amazon", "Meta", "Apple"];
const COMPANY_SIZES: [&str; 3] = ["Large", "Medium", "Large"];

/// Offline market source: fixed salary tables plus seeded noise for the
/// figures a live feed would supply.
pub struct SimulatedJobMarket {
    rng: Mutex<StdRng>,
}

impl SimulatedJobMarket {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, MarketError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| MarketError::Unavailable("random source poisoned".to_string()))?;
        Ok(f(&mut rng))
    }

    fn demand_metrics(&self) -> Result<DemandMetrics, MarketError> {
        let (job_openings, hiring_rate, time_to_fill_days) = self.with_rng(|rng| {
            (
                rng.gen_range(1000..6000),
                rng.gen_range(5.0..20.0),
                rng.gen_range(25..55),
            )
        })?;

        Ok(DemandMetrics {
            job_openings,
            hiring_rate,
            time_to_fill_days,
            competition_level: CompetitionLevel::from_openings(job_openings),
            demand_trend: DemandTrend::Increasing,
            seasonality: SeasonalData {
                peak_months: strings(&["January", "February", "September"]),
                low_months: strings(&["December", "July"]),
                variance: 25,
            },
        })
    }

    fn companies(&self) -> Result<Vec<CompanyInfo>, MarketError> {
        self.with_rng(|rng| {
            EMPLOYERS
                .iter()
                .map(|name| CompanyInfo {
                    name: name.to_string(),
                    size: COMPANY_SIZES[rng.gen_range(0..COMPANY_SIZES.len())].to_string(),
                    industry: "Technology".to_string(),
                    rating: rng.gen_range(3.5..5.0),
                    salary_range: SalaryRange {
                        min: 90_000,
                        max: 180_000,
                        median: 135_000,
                        average: 132_000,
                    },
                    benefits: strings(&["Health Insurance", "Stock Options", "401k", "Remote Work"]),
                    culture: strings(&["Innovation", "Collaboration", "Growth"]),
                })
                .collect()
        })
    }
}

impl Default for SimulatedJobMarket {
    fn default() -> Self {
        Self::new(crate::fixtures::DEFAULT_SEED)
    }
}

impl JobMarketSource for SimulatedJobMarket {
    fn market_data(&self, role: &str, location: &str) -> Result<JobMarketData, MarketError> {
        let role = require_role(role)?;
        debug!(role, location, "building job market snapshot");

        Ok(JobMarketData {
            role: role.to_string(),
            location: location.to_string(),
            salary: SalaryInsights::for_role(role, location),
            demand: self.demand_metrics()?,
            skill_requirements: skill_demand(),
            market_trends: market_trends(),
            competitor_analysis: competitor_analysis(),
        })
    }

    fn location_comparison(
        &self,
        role: &str,
        locations: &[String],
    ) -> Result<Vec<LocationData>, MarketError> {
        require_role(role)?;
        let mut comparisons = Vec::with_capacity(locations.len());

        for location in locations {
            let mut parts = location.split(',');
            let city = parts.next().unwrap_or_default().trim().to_string();
            let state = parts.next().map(str::trim).unwrap_or_default().to_string();
            let (cost_of_living, tech_hub_rating, remote_work_prevalence) =
                self.with_rng(|rng| {
                    (
                        rng.gen_range(85.0..135.0),
                        rng.gen_range(60.0..100.0),
                        rng.gen_range(60.0..90.0),
                    )
                })?;

            comparisons.push(LocationData {
                city,
                state,
                country: "USA".to_string(),
                cost_of_living,
                tech_hub_rating,
                remote_work_prevalence,
                companies: self.companies()?,
            });
        }

        Ok(comparisons)
    }

    fn salary_snapshot(
        &self,
        role: &str,
        experience: ExperienceLevel,
        as_of: DateTime<Utc>,
    ) -> Result<SalarySnapshot, MarketError> {
        let role = require_role(role)?;
        let sources: Vec<SourceSalary> = self.with_rng(|rng| {
            SALARY_SOURCES
                .iter()
                .map(|source| {
                    let base = rng.gen_range(80_000..120_000);
                    let bonus = rng.gen_range(5_000..25_000);
                    let equity = rng.gen_range(10_000..40_000);
                    SourceSalary {
                        source: source.to_string(),
                        last_updated: as_of,
                        data_points: rng.gen_range(100..600),
                        base,
                        bonus,
                        equity,
                        total: base + bonus + equity,
                    }
                })
                .collect()
        })?;

        let count = sources.len() as f64;
        let average = |pick: fn(&SourceSalary) -> u64| {
            (sources.iter().map(pick).sum::<u64>() as f64 / count).round() as u64
        };
        let aggregate = SalaryAggregate {
            average_base: average(|source| source.base),
            average_total: average(|source| source.total),
            data_confidence: 92,
            sample_size: sources.iter().map(|source| source.data_points).sum(),
            last_updated: as_of,
        };

        Ok(SalarySnapshot {
            role: role.to_string(),
            experience,
            sources,
            aggregate,
        })
    }

    fn industry_outlook(&self, industry: &str) -> Result<IndustryOutlook, MarketError> {
        let industry = industry.trim();
        if industry.is_empty() {
            return Err(MarketError::EmptyIndustry);
        }

        let (growth_projection, ai_impact, automation_risk) = self.with_rng(|rng| {
            (
                GrowthProjection {
                    next_year: rng.gen_range(5.0..20.0),
                    five_year: rng.gen_range(20.0..70.0),
                    ten_year: rng.gen_range(40.0..120.0),
                },
                rng.gen_range(30.0..70.0),
                rng.gen_range(10.0..40.0),
            )
        })?;

        Ok(IndustryOutlook {
            industry: industry.to_string(),
            growth_projection,
            disruption: Disruption {
                ai_impact,
                automation_risk,
                emerging_technologies: strings(&["AI/ML", "Cloud Computing", "IoT", "Blockchain"]),
            },
            skill_evolution: SkillEvolution {
                declining: strings(&["Legacy Systems", "Manual Processes"]),
                emerging: strings(&["AI Integration", "Cloud Architecture", "Data Ethics"]),
                stable: strings(&["Problem Solving", "Communication", "Domain Expertise"]),
            },
            market_forces: strings(&[
                "Digital transformation acceleration",
                "Remote work normalization",
                "AI adoption across industries",
                "Sustainability focus",
            ]),
        })
    }

    fn skill_trends(&self) -> Result<SkillTrends, MarketError> {
        use DemandLevel::{High, Low, VeryHigh, VeryLow};

        Ok(SkillTrends {
            trending: trends(&[
                ("Machine Learning", 45, VeryHigh),
                ("Cloud Architecture", 38, VeryHigh),
                ("Data Engineering", 42, High),
                ("Cybersecurity", 35, VeryHigh),
            ]),
            declining: trends(&[("Flash Development", -85, VeryLow), ("Legacy COBOL", -25, Low)]),
            stable: trends(&[("Project Management", 8, High), ("SQL", 12, High)]),
        })
    }
}

fn trends(rows: &[(&str, i16, DemandLevel)]) -> Vec<SkillTrend> {
    rows.iter()
        .map(|&(skill, growth_percentage, demand)| SkillTrend {
            skill: skill.to_string(),
            growth_percentage,
            demand,
        })
        .collect()
}

fn require_role(role: &str) -> Result<&str, MarketError> {
    let role = role.trim();
    if role.is_empty() {
        Err(MarketError::EmptyRole)
    } else {
        Ok(role)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn skill_demand() -> Vec<SkillDemand> {
    use SkillCriticality::{Essential, Important, NiceToHave};

    [
        ("Python", 85, 12, 25, Essential),
        ("Machine Learning", 78, 18, 35, Essential),
        ("SQL", 82, 8, 12, Essential),
        ("Statistics", 75, 10, 15, Important),
        ("Data Visualization", 68, 7, 18, Important),
        ("Deep Learning", 45, 22, 45, NiceToHave),
        ("Cloud Platforms", 72, 15, 28, Important),
    ]
    .into_iter()
    .map(
        |(skill, demand_percentage, salary_premium, growth_rate, criticality)| SkillDemand {
            skill: skill.to_string(),
            demand_percentage,
            salary_premium,
            growth_rate,
            criticality,
        },
    )
    .collect()
}

fn market_trends() -> Vec<MarketTrend> {
    [
        ("Job Postings", 2850.0, 23.5, "vs last quarter", "Strong growth in demand"),
        ("Average Salary", 118_000.0, 8.2, "vs last year", "Above-inflation salary growth"),
        ("Remote Work", 68.0, 15.3, "vs pre-pandemic", "Significant shift to remote work"),
        ("Skills Premium", 25_000.0, 12.8, "for AI/ML skills", "High premium for specialized skills"),
    ]
    .into_iter()
    .map(|(metric, value, change, period, interpretation)| MarketTrend {
        metric: metric.to_string(),
        value,
        change,
        period: period.to_string(),
        interpretation: interpretation.to_string(),
    })
    .collect()
}

fn competitor_analysis() -> CompetitorData {
    CompetitorData {
        average_experience_years: 4.2,
        top_education: strings(&["Computer Science", "Statistics", "Mathematics", "Data Science"]),
        most_common_skills: strings(&["Python", "SQL", "Machine Learning", "Statistics", "Excel"]),
        certifications: strings(&[
            "AWS Certified",
            "Google Cloud Professional",
            "Microsoft Azure",
            "Coursera ML",
        ]),
        career_paths: strings(&[
            "Data Analyst → Data Scientist",
            "Software Engineer → ML Engineer",
            "Researcher → Data Scientist",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn market_data_is_reproducible_for_a_seed() {
        let first = SimulatedJobMarket::new(9)
            .market_data("Software Engineer", "Austin, TX")
            .expect("market data");
        let second = SimulatedJobMarket::new(9)
            .market_data("Software Engineer", "Austin, TX")
            .expect("market data");
        assert_eq!(first, second);
        assert_eq!(first.salary.entry.min, 84_700);
    }

    #[test]
    fn demand_figures_stay_in_range() {
        let market = SimulatedJobMarket::new(1);
        for _ in 0..50 {
            let data = market
                .market_data("Data Scientist", "Remote")
                .expect("market data");
            let demand = data.demand;
            assert!((1000..6000).contains(&demand.job_openings));
            assert!((25..55).contains(&demand.time_to_fill_days));
            assert_eq!(
                demand.competition_level,
                CompetitionLevel::from_openings(demand.job_openings)
            );
        }
    }

    #[test]
    fn empty_role_is_rejected() {
        let market = SimulatedJobMarket::default();
        assert!(matches!(
            market.market_data("  ", "Chicago"),
            Err(MarketError::EmptyRole)
        ));
        assert!(matches!(
            market.industry_outlook(""),
            Err(MarketError::EmptyIndustry)
        ));
    }

    #[test]
    fn location_comparison_splits_city_and_state() {
        let market = SimulatedJobMarket::default();
        let locations = vec!["Denver, CO".to_string(), "Remote".to_string()];
        let rows = market
            .location_comparison("UX Designer", &locations)
            .expect("comparison");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city, "Denver");
        assert_eq!(rows[0].state, "CO");
        assert_eq!(rows[1].state, "");
        assert_eq!(rows[0].companies.len(), 5);
    }

    #[test]
    fn salary_snapshot_totals_add_up() {
        let as_of = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().expect("time");
        let snapshot = SimulatedJobMarket::default()
            .salary_snapshot("Product Manager", ExperienceLevel::MidLevel, as_of)
            .expect("snapshot");
        assert_eq!(snapshot.sources.len(), 5);
        for source in &snapshot.sources {
            assert_eq!(source.total, source.base + source.bonus + source.equity);
        }
        let sample: u32 = snapshot.sources.iter().map(|s| s.data_points).sum();
        assert_eq!(snapshot.aggregate.sample_size, sample);
        assert_eq!(snapshot.aggregate.last_updated, as_of);
    }

    #[test]
    fn skill_trends_split_by_direction() {
        let trends = SimulatedJobMarket::new(3).skill_trends().expect("trends");
        assert_eq!(trends.trending.len(), 4);
        assert!(trends.trending.iter().all(|t| t.growth_percentage > 0));
        assert!(trends.declining.iter().all(|t| t.growth_percentage < 0));

        let flash = &trends.declining[0];
        assert_eq!(flash.skill, "Flash Development");
        assert_eq!(flash.growth_percentage, -85);
        assert_eq!(flash.demand, DemandLevel::VeryLow);

        let stable: Vec<_> = trends.stable.iter().map(|t| t.skill.as_str()).collect();
        assert_eq!(stable, ["Project Management", "SQL"]);
    }
}
