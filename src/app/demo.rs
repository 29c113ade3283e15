use std::fs::File;
use std::sync::Arc;

use career_ai::advisor::{AdvisorReport, AdvisorService, LocalAssessmentEngine};
use career_ai::assessment::{AnswerImporter, AssessmentSession, Dimension, Questionnaire};
use career_ai::careers::{CareerCatalog, CatalogKind, SkillGap};
use career_ai::config::AppConfig;
use career_ai::error::AppError;
use career_ai::fixtures::TraitFixtures;
use career_ai::learning::{Course, Learner, LearningCatalog, LearningPath, SimulatedCourseCatalog};
use career_ai::market::{
    JobMarketData, JobMarketSource, SalarySnapshot, SimulatedJobMarket, SkillTrend, SkillTrends,
};
use career_ai::profile::{ExperienceLevel, UserProfile};
use career_ai::storage::{FileStore, MemoryStore};
use chrono::Utc;

use crate::app::cli::{AssessArgs, CoursesArgs, DemoArgs, MarketArgs};
use crate::app::infra::GapInput;

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        skills,
        catalog,
        store,
        name,
        location,
        experience,
    } = args;

    let config = AppConfig::load()?;
    let store_dir = store.unwrap_or(config.storage.dir);

    let questionnaire = Questionnaire::standard();
    let responses = AnswerImporter::from_path(&answers, &questionnaire)?;
    let now = Utc::now();
    let session = AssessmentSession::new(questionnaire, now).with_responses(responses);

    let mut profile = UserProfile::new(name, location);
    profile.experience = experience;
    for skill in &skills {
        profile.add_skill(skill);
    }

    let service = AdvisorService::new(
        Arc::new(FileStore::new(&store_dir)),
        Arc::new(LocalAssessmentEngine),
        CareerCatalog::of_kind(catalog),
    );
    let report = service.complete_assessment(&session, &profile, now)?;

    render_report(&report, session.responses().len(), session.questionnaire().len());
    println!("\nResults saved under {}", store_dir.display());
    Ok(())
}

pub(crate) fn run_market(args: MarketArgs) -> Result<(), AppError> {
    let MarketArgs {
        role,
        location,
        experience,
        seed,
    } = args;

    let seed = resolve_seed(seed)?;
    let market = SimulatedJobMarket::new(seed);
    let data = market.market_data(&role, &location)?;
    let snapshot = market.salary_snapshot(&role, experience, Utc::now())?;
    let trends = market.skill_trends()?;

    render_market(&data);
    render_salary_snapshot(&snapshot);
    render_skill_trends(&trends);
    Ok(())
}

pub(crate) fn run_courses(args: CoursesArgs) -> Result<(), AppError> {
    let CoursesArgs {
        gaps,
        experience,
        location,
        goal,
        timeframe,
        limit,
        seed,
    } = args;

    let inputs: Vec<GapInput> = serde_json::from_reader(File::open(&gaps)?)?;
    let gaps: Vec<SkillGap> = inputs.into_iter().map(SkillGap::from).collect();
    let learner = Learner::new(experience, location);
    let catalog = SimulatedCourseCatalog::new(resolve_seed(seed)?);
    let now = Utc::now();

    render_gaps(&gaps);
    let courses = catalog.personalized_courses(&gaps, &learner, now)?;
    render_courses(&courses, limit);

    if let Some(goal) = goal {
        let path = catalog.learning_path(&gaps, &goal, &timeframe, now)?;
        render_learning_path(&path);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        extended,
        location,
    } = args;

    let seed = resolve_seed(seed)?;
    let now = Utc::now();
    let questionnaire = Questionnaire::standard();
    let mut fixtures = TraitFixtures::new(seed);
    let responses = fixtures.responses(&questionnaire)?;
    let session = AssessmentSession::new(questionnaire, now).with_responses(responses);

    let mut profile = UserProfile::new("Demo Learner", location);
    profile.experience = ExperienceLevel::Junior;
    for skill in ["Python", "SQL", "Communication"] {
        profile.add_skill(skill);
    }

    let catalog = if extended {
        CatalogKind::Extended
    } else {
        CatalogKind::Standard
    };
    println!("Career assessment demo (seed {seed}, {} catalog)", catalog.label());

    let service = AdvisorService::new(
        Arc::new(MemoryStore::new()),
        Arc::new(LocalAssessmentEngine),
        CareerCatalog::of_kind(catalog),
    );
    let report = service.complete_assessment(&session, &profile, now)?;
    render_report(&report, session.responses().len(), session.questionnaire().len());

    let courses = service.recommended_courses(&SimulatedCourseCatalog::new(seed), now)?;
    render_courses(&courses, 5);

    if let Some(top) = report.top_match() {
        let market = SimulatedJobMarket::new(seed);
        match market.market_data(&top.title, &profile.location) {
            Ok(data) => render_market(&data),
            Err(err) => println!("\nMarket data unavailable: {err}"),
        }
    }

    Ok(())
}

fn resolve_seed(seed: Option<u64>) -> Result<u64, AppError> {
    match seed {
        Some(seed) => Ok(seed),
        None => Ok(AppConfig::load()?.fixture_seed),
    }
}

fn render_report(report: &AdvisorReport, answered: usize, total: usize) {
    let result = &report.result;
    let profile = &result.personality_profile;

    println!("\nAssessment results ({answered}/{total} questions answered)");
    println!(
        "Overall score {} | completed {} | {} min",
        result.overall_score,
        result.completed_at.to_rfc3339(),
        result.time_taken_minutes
    );
    println!(
        "Cognitive score {:.1} | confidence {:.0}%",
        report.cognitive_score,
        report.confidence * 100.0
    );
    for dimension in Dimension::ordered() {
        println!(
            "  - {:<22} {:>3}",
            dimension.label(),
            result.dimension_scores.get(dimension)
        );
    }

    println!("\nWork style: {}", profile.work_style.label());
    print_list("Strengths", &profile.strengths);
    print_list("Career fit", &profile.career_fit);
    print_list("Development areas", &profile.development_areas);
    print_list("Insights", &profile.insights);

    println!("\nCareer matches (traits from {} analysis)", report.source.label());
    for (rank, recommendation) in report.recommendations.iter().enumerate() {
        let fit = &recommendation.fit_score;
        println!(
            "{}. {} - {}% match (growth {})",
            rank + 1,
            recommendation.title,
            recommendation.match_percentage,
            recommendation.growth_potential
        );
        println!(
            "   personality {:.0} | skills {:.0} | interests {:.0} | aptitude {:.0}",
            fit.personality, fit.skills, fit.interests, fit.aptitude
        );
        for reason in &recommendation.reasoning {
            println!("   * {reason}");
        }
    }

    render_gaps(&report.skill_gaps);
}

fn render_gaps(gaps: &[SkillGap]) {
    if gaps.is_empty() {
        println!("\nSkill gaps: none");
        return;
    }
    println!("\nSkill gaps");
    for gap in gaps {
        println!(
            "  - {}: {} -> {} ({} priority, {})",
            gap.skill,
            gap.current,
            gap.required,
            gap.priority.label(),
            gap.time_to_acquire
        );
    }
}

fn render_courses(courses: &[Course], limit: usize) {
    if courses.is_empty() {
        println!("\nCourse suggestions: none");
        return;
    }
    println!("\nCourse suggestions (top {} of {})", limit.min(courses.len()), courses.len());
    for course in courses.iter().take(limit) {
        let price = if course.price.amount == 0.0 {
            "free".to_string()
        } else {
            format!("{:.2} {}", course.price.amount, course.price.currency)
        };
        println!(
            "  - [{}] {} | {} | rating {:.1} | {}",
            course.provider,
            course.title,
            course.level.label(),
            course.rating,
            price
        );
        println!("    {}", course.personalized_reason);
    }
}

fn render_learning_path(path: &LearningPath) {
    println!("\n{} ({}, {})", path.title, path.duration, path.difficulty.label());
    for (index, milestone) in path.milestones.iter().enumerate() {
        println!(
            "  {}. {} - {} [{}]",
            index + 1,
            milestone.title,
            milestone.description,
            milestone.estimated_time
        );
    }
    println!(
        "  Expected: +{}% salary, {}% placement, payback {}",
        path.roi.avg_salary_increase, path.roi.job_placement_rate, path.roi.payback_period
    );
}

fn render_market(data: &JobMarketData) {
    let salary = &data.salary;
    println!("\nJob market: {} in {}", data.role, data.location);
    println!(
        "  Salary ({}) entry {}-{} | mid {}-{} | senior {}-{}",
        salary.currency,
        salary.entry.min,
        salary.entry.max,
        salary.mid.min,
        salary.mid.max,
        salary.senior.min,
        salary.senior.max
    );
    println!(
        "  {} openings | {:.1}% hiring rate | {} days to fill | {} competition",
        data.demand.job_openings,
        data.demand.hiring_rate,
        data.demand.time_to_fill_days,
        data.demand.competition_level.label()
    );
    println!("  Skills in demand:");
    for skill in data.skill_requirements.iter().take(5) {
        println!(
            "    - {} ({}% of postings, +{}% premium)",
            skill.skill, skill.demand_percentage, skill.salary_premium
        );
    }
}

fn render_salary_snapshot(snapshot: &SalarySnapshot) {
    println!(
        "\nSalary snapshot for {} ({})",
        snapshot.role,
        snapshot.experience.label()
    );
    for source in &snapshot.sources {
        println!(
            "  - {}: base {} | total {} ({} data points)",
            source.source, source.base, source.total, source.data_points
        );
    }
    println!(
        "  Average base {} | average total {} | sample {}",
        snapshot.aggregate.average_base,
        snapshot.aggregate.average_total,
        snapshot.aggregate.sample_size
    );
}

fn render_skill_trends(trends: &SkillTrends) {
    println!("\nSkill trends");
    for (heading, rows) in [
        ("Trending", &trends.trending),
        ("Declining", &trends.declining),
        ("Stable", &trends.stable),
    ] {
        println!("{heading}:");
        for SkillTrend {
            skill,
            growth_percentage,
            demand,
        } in rows
        {
            println!("  - {skill} {growth_percentage:+}% ({} demand)", demand.label());
        }
    }
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{heading}:");
    for item in items {
        println!("  - {item}");
    }
}
