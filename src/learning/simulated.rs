use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{
    order_for_path, path_difficulty, rank_courses, relevance_score, CertificationType,
    CompletionData, Course, CourseLevel, CourseModule, CoursePrice, CourseReview, InstructorInfo,
    Learner, LearningCatalog, LearningError, LearningPath, ModuleKind, PathMilestone, PriceKind,
    ProviderKind, ProviderSummary, RoiData, MAX_RECOMMENDATIONS,
};
use crate::careers::SkillGap;

const INSTRUCTORS: [&str; 5] = [
    "John Smith",
    "Sarah Johnson",
    "Michael Chen",
    "Emily Davis",
    "David Wilson",
];

/// Offline course catalog modelled on the large online providers, with seeded
/// noise for ratings, enrolment and pricing.
pub struct SimulatedCourseCatalog {
    rng: Mutex<StdRng>,
}

impl SimulatedCourseCatalog {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, LearningError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| LearningError::Unavailable("random source poisoned".to_string()))?;
        Ok(f(&mut rng))
    }
}

impl Default for SimulatedCourseCatalog {
    fn default() -> Self {
        Self::new(crate::fixtures::DEFAULT_SEED)
    }
}

impl LearningCatalog for SimulatedCourseCatalog {
    fn personalized_courses(
        &self,
        gaps: &[SkillGap],
        learner: &Learner,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Course>, LearningError> {
        let mut courses = self.with_rng(|rng| {
            let mut courses = Vec::new();
            for (index, gap) in gaps.iter().take(3).enumerate() {
                courses.push(coursera(rng, index, gap, learner, as_of));
            }
            for (index, gap) in gaps.iter().take(4).enumerate() {
                courses.push(udemy(rng, index, gap, learner, as_of));
            }
            for (index, gap) in gaps.iter().take(2).enumerate() {
                courses.push(edx(rng, index, gap, learner, as_of));
            }
            for (index, gap) in gaps.iter().take(3).enumerate() {
                courses.push(linkedin_learning(rng, index, gap, learner, as_of));
            }
            courses
        })?;

        if learner.is_in_india() {
            courses.push(swayam(as_of));
        }
        if learner.is_early_career() {
            courses.push(bootcamp(as_of));
        }

        let mut ranked = rank_courses(courses, gaps, learner);
        ranked.truncate(MAX_RECOMMENDATIONS);
        debug!(gaps = gaps.len(), courses = ranked.len(), "courses ranked");
        Ok(ranked)
    }

    fn learning_path(
        &self,
        gaps: &[SkillGap],
        career_goal: &str,
        timeframe: &str,
        as_of: DateTime<Utc>,
    ) -> Result<LearningPath, LearningError> {
        let goal = career_goal.trim();
        if goal.is_empty() {
            return Err(LearningError::EmptyGoal);
        }

        let courses = self.personalized_courses(gaps, &Learner::default(), as_of)?;

        Ok(LearningPath {
            id: format!("path_{}", slug(goal)),
            title: format!("{goal} Learning Path"),
            description: format!("Comprehensive roadmap to become a successful {goal}"),
            duration: timeframe.to_string(),
            difficulty: path_difficulty(gaps),
            courses: order_for_path(courses),
            milestones: milestones(),
            skills_gained: gaps.iter().map(|gap| gap.skill.clone()).collect(),
            career_outcomes: vec![
                format!("{goal} role readiness"),
                "Portfolio of projects".to_string(),
                "Industry-recognized certifications".to_string(),
                "Professional network expansion".to_string(),
            ],
            roi: RoiData {
                time_to_complete: timeframe.to_string(),
                avg_salary_increase: 45,
                job_placement_rate: 78,
                payback_period: "8 months".to_string(),
            },
        })
    }

    fn provider_comparison(&self, skill: &str) -> Result<Vec<ProviderSummary>, LearningError> {
        debug!(skill, "comparing providers");
        Ok(vec![
            ProviderSummary {
                name: "Coursera".to_string(),
                kind: ProviderKind::Platform,
                rating: 4.6,
                accreditation: strings(&["University partners", "Industry recognition"]),
                specializations: strings(&["Data Science", "AI/ML", "Business"]),
                pricing_model: "Subscription ($49/month)".to_string(),
                support_level: "High".to_string(),
            },
            ProviderSummary {
                name: "Udemy".to_string(),
                kind: ProviderKind::Platform,
                rating: 4.3,
                accreditation: strings(&["Completion certificates"]),
                specializations: strings(&["Technical skills", "Creative", "Business"]),
                pricing_model: "One-time purchase ($50-200)".to_string(),
                support_level: "Medium".to_string(),
            },
            ProviderSummary {
                name: "edX".to_string(),
                kind: ProviderKind::Platform,
                rating: 4.5,
                accreditation: strings(&["University credentials", "MicroMasters"]),
                specializations: strings(&["Computer Science", "Data Science", "Engineering"]),
                pricing_model: "Free + Verified certificates ($50-300)".to_string(),
                support_level: "High".to_string(),
            },
        ])
    }
}

fn coursera(
    rng: &mut StdRng,
    index: usize,
    gap: &SkillGap,
    learner: &Learner,
    as_of: DateTime<Utc>,
) -> Course {
    let skill = gap.skill.as_str();
    Course {
        id: format!("coursera_{index}"),
        title: format!("{skill} Specialization by Stanford University"),
        provider: "Coursera".to_string(),
        url: "https://coursera.org/specializations/data-science".to_string(),
        rating: 4.6 + rng.gen_range(0.0..0.3),
        students: rng.gen_range(100_000..600_000),
        duration: format!("{} months", rng.gen_range(4..12)),
        level: CourseLevel::for_gap(gap),
        price: CoursePrice {
            amount: 49.0,
            currency: "USD".to_string(),
            kind: PriceKind::Subscription,
            discount: rng.gen_bool(0.3).then_some(20),
        },
        skills: skills_for(skill),
        description: format!("Comprehensive {skill} course from leading university professors"),
        syllabus: syllabus(skill),
        instructor: InstructorInfo {
            name: format!("Dr. {}", instructor(rng)),
            credentials: strings(&["PhD", "Professor at Stanford"]),
            rating: 4.7,
            experience: "15+ years".to_string(),
            company: Some("Stanford University".to_string()),
        },
        completion: CompletionData {
            rate: 78,
            average_time: "6 months".to_string(),
            job_placement_rate: Some(85),
            salary_increase: Some(25),
        },
        reviews: reviews(),
        relevance_score: relevance_score(gap, learner),
        personalized_reason: format!("Perfect match for your {skill} skill gap"),
        certification_type: CertificationType::University,
        prerequisites: if gap.current < 30 {
            Vec::new()
        } else {
            strings(&["Basic programming knowledge"])
        },
        outcomes: vec![
            format!("Master {skill}"),
            "Build portfolio projects".to_string(),
            "Industry recognition".to_string(),
        ],
        last_updated: as_of,
    }
}

fn udemy(
    rng: &mut StdRng,
    index: usize,
    gap: &SkillGap,
    learner: &Learner,
    as_of: DateTime<Utc>,
) -> Course {
    let skill = gap.skill.as_str();
    let amount = f64::from(rng.gen_range(50u32..150));
    let discount = rng.gen_bool(0.5).then(|| rng.gen_range(20u8..100));
    Course {
        id: format!("udemy_{index}"),
        title: format!("Complete {skill} Bootcamp 2024"),
        provider: "Udemy".to_string(),
        url: "https://udemy.com/course/complete-python-bootcamp".to_string(),
        rating: 4.4 + rng.gen_range(0.0..0.4),
        students: rng.gen_range(50_000..250_000),
        duration: format!("{} hours", rng.gen_range(10..40)),
        level: CourseLevel::for_gap(gap),
        price: CoursePrice {
            amount,
            currency: "USD".to_string(),
            kind: PriceKind::Paid,
            discount,
        },
        skills: skills_for(skill),
        description: format!("Hands-on {skill} course with real-world projects"),
        syllabus: syllabus(skill),
        instructor: InstructorInfo {
            name: instructor(rng),
            credentials: strings(&["Industry Expert", "Senior Developer"]),
            rating: 4.5,
            experience: "10+ years".to_string(),
            company: Some("Tech Industry".to_string()),
        },
        completion: CompletionData {
            rate: 65,
            average_time: "2 months".to_string(),
            job_placement_rate: None,
            salary_increase: Some(20),
        },
        reviews: reviews(),
        relevance_score: relevance_score(gap, learner),
        personalized_reason: "Practical approach matches your learning style".to_string(),
        certification_type: CertificationType::Completion,
        prerequisites: Vec::new(),
        outcomes: vec![
            format!("Learn {skill}"),
            "Build 5+ projects".to_string(),
            "Job-ready skills".to_string(),
        ],
        last_updated: as_of,
    }
}

fn edx(
    rng: &mut StdRng,
    index: usize,
    gap: &SkillGap,
    learner: &Learner,
    as_of: DateTime<Utc>,
) -> Course {
    let skill = gap.skill.as_str();
    Course {
        id: format!("edx_{index}"),
        title: format!("{skill} MicroMasters Program"),
        provider: "edX".to_string(),
        url: "https://edx.org/micromasters/mitx-statistics-and-data-science".to_string(),
        rating: 4.5 + rng.gen_range(0.0..0.3),
        students: rng.gen_range(30_000..180_000),
        duration: format!("{} months", rng.gen_range(6..18)),
        level: CourseLevel::Advanced,
        price: CoursePrice {
            amount: 150.0,
            currency: "USD".to_string(),
            kind: PriceKind::Paid,
            discount: None,
        },
        skills: skills_for(skill),
        description: format!("Graduate-level {skill} program from top universities"),
        syllabus: syllabus(skill),
        instructor: InstructorInfo {
            name: format!("Prof. {}", instructor(rng)),
            credentials: strings(&["PhD", "MIT Professor"]),
            rating: 4.8,
            experience: "20+ years".to_string(),
            company: Some("MIT".to_string()),
        },
        completion: CompletionData {
            rate: 72,
            average_time: "8 months".to_string(),
            job_placement_rate: Some(90),
            salary_increase: Some(35),
        },
        reviews: reviews(),
        relevance_score: relevance_score(gap, learner),
        personalized_reason: "Advanced curriculum for career acceleration".to_string(),
        certification_type: CertificationType::Professional,
        prerequisites: strings(&["Undergraduate mathematics", "Programming experience"]),
        outcomes: vec![
            format!("Expert-level {skill}"),
            "University credential".to_string(),
            "Career advancement".to_string(),
        ],
        last_updated: as_of,
    }
}

fn linkedin_learning(
    rng: &mut StdRng,
    index: usize,
    gap: &SkillGap,
    learner: &Learner,
    as_of: DateTime<Utc>,
) -> Course {
    let skill = gap.skill.as_str();
    Course {
        id: format!("linkedin_{index}"),
        title: format!("{skill} Essential Training"),
        provider: "LinkedIn Learning".to_string(),
        url: "https://linkedin.com/learning/python-essential-training".to_string(),
        rating: 4.3 + rng.gen_range(0.0..0.4),
        students: rng.gen_range(20_000..120_000),
        duration: format!("{} hours", rng.gen_range(2..10)),
        level: CourseLevel::for_gap(gap),
        price: CoursePrice {
            amount: 29.99,
            currency: "USD".to_string(),
            kind: PriceKind::Subscription,
            discount: None,
        },
        skills: vec![skill.to_string()],
        description: format!("Professional {skill} training for business contexts"),
        syllabus: syllabus(skill),
        instructor: InstructorInfo {
            name: instructor(rng),
            credentials: strings(&["LinkedIn Learning Instructor", "Industry Expert"]),
            rating: 4.4,
            experience: "8+ years".to_string(),
            company: Some("LinkedIn".to_string()),
        },
        completion: CompletionData {
            rate: 82,
            average_time: "1 month".to_string(),
            job_placement_rate: None,
            salary_increase: None,
        },
        reviews: reviews(),
        relevance_score: relevance_score(gap, learner),
        personalized_reason: "Professional focus aligns with career goals".to_string(),
        certification_type: CertificationType::Completion,
        prerequisites: Vec::new(),
        outcomes: vec![
            format!("Professional {skill} skills"),
            "LinkedIn badge".to_string(),
            "Career networking".to_string(),
        ],
        last_updated: as_of,
    }
}

fn swayam(as_of: DateTime<Utc>) -> Course {
    Course {
        id: "swayam_nptel_data_science".to_string(),
        title: "NPTEL Data Science Course".to_string(),
        provider: "SWAYAM".to_string(),
        url: "https://swayam.gov.in/nd1_noc20_cs73".to_string(),
        rating: 4.2,
        students: 45_000,
        duration: "12 weeks".to_string(),
        level: CourseLevel::Intermediate,
        price: CoursePrice {
            amount: 0.0,
            currency: "INR".to_string(),
            kind: PriceKind::Free,
            discount: None,
        },
        skills: strings(&["Data Science", "Python", "Statistics"]),
        description: "Government-backed data science program by IIT professors".to_string(),
        syllabus: syllabus("Data Science"),
        instructor: InstructorInfo {
            name: "Prof. Rajesh Kumar".to_string(),
            credentials: strings(&["PhD", "IIT Delhi Professor"]),
            rating: 4.5,
            experience: "15+ years".to_string(),
            company: Some("IIT Delhi".to_string()),
        },
        completion: CompletionData {
            rate: 68,
            average_time: "3 months".to_string(),
            job_placement_rate: None,
            salary_increase: None,
        },
        reviews: reviews(),
        relevance_score: 85.0,
        personalized_reason: "Government-recognized certification for Indian job market"
            .to_string(),
        certification_type: CertificationType::Verified,
        prerequisites: strings(&["Basic programming"]),
        outcomes: strings(&[
            "Government certificate",
            "IIT-quality education",
            "Job placement support",
        ]),
        last_updated: as_of,
    }
}

fn bootcamp(as_of: DateTime<Utc>) -> Course {
    Course {
        id: "bootcamp_data_science_intensive".to_string(),
        title: "Data Science Intensive Bootcamp".to_string(),
        provider: "General Assembly".to_string(),
        url: "https://generalassemb.ly/education/data-science-circuit".to_string(),
        rating: 4.3,
        students: 5_000,
        duration: "12 weeks".to_string(),
        level: CourseLevel::Intensive,
        price: CoursePrice {
            amount: 3950.0,
            currency: "USD".to_string(),
            kind: PriceKind::Paid,
            discount: None,
        },
        skills: strings(&["Python", "Machine Learning", "SQL", "Statistics"]),
        description: "Full-time intensive bootcamp with job placement guarantee".to_string(),
        syllabus: bootcamp_syllabus(),
        instructor: InstructorInfo {
            name: "Sarah Chen".to_string(),
            credentials: strings(&["Senior Data Scientist", "Ex-Google"]),
            rating: 4.6,
            experience: "12+ years".to_string(),
            company: Some("General Assembly".to_string()),
        },
        completion: CompletionData {
            rate: 95,
            average_time: "3 months".to_string(),
            job_placement_rate: Some(85),
            salary_increase: Some(60),
        },
        reviews: reviews(),
        relevance_score: 90.0,
        personalized_reason: "Intensive format perfect for career transition".to_string(),
        certification_type: CertificationType::Professional,
        prerequisites: strings(&["High school diploma"]),
        outcomes: strings(&[
            "Job placement guarantee",
            "Portfolio projects",
            "Industry mentorship",
        ]),
        last_updated: as_of,
    }
}

/// The gap skill followed by the tools usually taught alongside it.
fn skills_for(skill: &str) -> Vec<String> {
    let related: &[&str] = match skill {
        "Python" => &["NumPy", "Pandas", "Matplotlib"],
        "Machine Learning" => &["Scikit-learn", "TensorFlow", "PyTorch"],
        "SQL" => &["Database Design", "Query Optimization"],
        "Statistics" => &["Probability", "Hypothesis Testing"],
        "Data Visualization" => &["Tableau", "Power BI", "D3.js"],
        _ => &[],
    };
    std::iter::once(skill.to_string())
        .chain(related.iter().map(|name| name.to_string()))
        .collect()
}

fn syllabus(skill: &str) -> Vec<CourseModule> {
    vec![
        CourseModule {
            title: format!("Introduction to {skill}"),
            duration: "2 hours".to_string(),
            topics: vec![
                format!("{skill} fundamentals"),
                "Getting started".to_string(),
                "Basic concepts".to_string(),
            ],
            kind: ModuleKind::Video,
        },
        CourseModule {
            title: format!("{skill} in Practice"),
            duration: "4 hours".to_string(),
            topics: strings(&["Hands-on exercises", "Real-world examples", "Best practices"]),
            kind: ModuleKind::Assignment,
        },
        CourseModule {
            title: format!("Advanced {skill}"),
            duration: "3 hours".to_string(),
            topics: strings(&["Advanced techniques", "Industry applications", "Case studies"]),
            kind: ModuleKind::Project,
        },
    ]
}

fn bootcamp_syllabus() -> Vec<CourseModule> {
    [
        ("Foundations", "3 weeks", ["Python", "Statistics", "SQL"], ModuleKind::Video),
        (
            "Machine Learning",
            "4 weeks",
            ["Supervised Learning", "Unsupervised Learning", "Model Evaluation"],
            ModuleKind::Project,
        ),
        (
            "Specialization",
            "3 weeks",
            ["Deep Learning", "NLP", "Computer Vision"],
            ModuleKind::Project,
        ),
        (
            "Capstone",
            "2 weeks",
            ["End-to-end project", "Presentation", "Portfolio"],
            ModuleKind::Project,
        ),
    ]
    .into_iter()
    .map(|(title, duration, topics, kind)| CourseModule {
        title: title.to_string(),
        duration: duration.to_string(),
        topics: strings(&topics),
        kind,
    })
    .collect()
}

fn milestones() -> Vec<PathMilestone> {
    [
        (
            "Foundation Skills",
            "Master basic programming and statistics",
            "2 months",
            ["Complete first course", "Build basic project"],
        ),
        (
            "Core Competency",
            "Develop machine learning skills",
            "3 months",
            ["Complete ML course", "Build ML project portfolio"],
        ),
        (
            "Specialization",
            "Focus on specific domain expertise",
            "2 months",
            ["Advanced project", "Industry certification"],
        ),
        (
            "Job Readiness",
            "Portfolio completion and job search",
            "1 month",
            ["Complete portfolio", "Practice interviews"],
        ),
    ]
    .into_iter()
    .map(
        |(title, description, estimated_time, deliverables)| PathMilestone {
            title: title.to_string(),
            description: description.to_string(),
            estimated_time: estimated_time.to_string(),
            deliverables: strings(&deliverables),
        },
    )
    .collect()
}

fn reviews() -> Vec<CourseReview> {
    vec![
        CourseReview {
            rating: 5,
            comment: "Excellent course with practical examples".to_string(),
            helpful: 25,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            verified: true,
        },
        CourseReview {
            rating: 4,
            comment: "Good content but could be more detailed".to_string(),
            helpful: 12,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or_default(),
            verified: true,
        },
    ]
}

fn instructor(rng: &mut StdRng) -> String {
    INSTRUCTORS[rng.gen_range(0..INSTRUCTORS.len())].to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn slug(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ExperienceLevel;
    use chrono::TimeZone;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).single().expect("valid time")
    }

    fn gaps() -> Vec<SkillGap> {
        vec![
            SkillGap::new("Python", 30, 85),
            SkillGap::new("Machine Learning", 20, 80),
            SkillGap::new("SQL", 45, 75),
            SkillGap::new("Statistics", 55, 80),
        ]
    }

    #[test]
    fn empty_gaps_yield_no_provider_courses() {
        let catalog = SimulatedCourseCatalog::default();
        let courses = catalog
            .personalized_courses(&[], &Learner::default(), as_of())
            .expect("courses");
        assert!(courses.is_empty());
    }

    #[test]
    fn specialized_courses_do_not_depend_on_gaps() {
        let catalog = SimulatedCourseCatalog::default();
        let learner = Learner::new(Some(ExperienceLevel::None), Some("Bengaluru, India".into()));
        let courses = catalog
            .personalized_courses(&[], &learner, as_of())
            .expect("courses");
        let mut providers: Vec<&str> = courses.iter().map(|c| c.provider.as_str()).collect();
        providers.sort_unstable();
        assert_eq!(providers, vec!["General Assembly", "SWAYAM"]);

        let path = catalog
            .learning_path(&[], "Data Analyst", "3 months", as_of())
            .expect("path");
        assert_eq!(path.difficulty, CourseLevel::Beginner);
        assert!(path.courses.is_empty());
    }

    #[test]
    fn provider_quotas_apply() {
        let catalog = SimulatedCourseCatalog::new(5);
        let courses = catalog
            .personalized_courses(&gaps(), &Learner::default(), as_of())
            .expect("courses");
        let count = |provider: &str| courses.iter().filter(|c| c.provider == provider).count();
        assert_eq!(count("Coursera"), 3);
        assert_eq!(count("Udemy"), 4);
        assert_eq!(count("edX"), 2);
        assert_eq!(count("LinkedIn Learning"), 3);
        assert_eq!(count("SWAYAM"), 0);
        assert_eq!(count("General Assembly"), 0);
        assert!(courses
            .iter()
            .filter(|c| c.provider == "edX")
            .all(|c| c.level == CourseLevel::Advanced));
    }

    #[test]
    fn india_and_early_career_unlock_specialized_courses() {
        let catalog = SimulatedCourseCatalog::new(5);
        let learner = Learner::new(Some(ExperienceLevel::Junior), Some("Pune, India".into()));
        let courses = catalog
            .personalized_courses(&gaps(), &learner, as_of())
            .expect("courses");
        assert!(courses.iter().any(|c| c.provider == "SWAYAM"));
        let bootcamp = courses
            .iter()
            .find(|c| c.provider == "General Assembly")
            .expect("bootcamp offered");
        assert_eq!(bootcamp.level, CourseLevel::Intensive);
        assert_eq!(bootcamp.relevance_score, 90.0);
    }

    #[test]
    fn courses_come_back_ranked() {
        let catalog = SimulatedCourseCatalog::new(8);
        let learner = Learner::new(Some(ExperienceLevel::None), None);
        let gaps = gaps();
        let courses = catalog
            .personalized_courses(&gaps, &learner, as_of())
            .expect("courses");
        let scores: Vec<f64> = courses
            .iter()
            .map(|course| crate::learning::ranking_score(course, &gaps, &learner))
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn learning_path_puts_beginner_courses_first() {
        let catalog = SimulatedCourseCatalog::new(2);
        let path = catalog
            .learning_path(&gaps(), "Data Scientist", "12 months", as_of())
            .expect("path");
        assert_eq!(path.title, "Data Scientist Learning Path");
        assert_eq!(path.id, "path_data_scientist");
        assert_eq!(path.difficulty, CourseLevel::Beginner);
        assert_eq!(path.milestones.len(), 4);
        assert_eq!(path.roi.payback_period, "8 months");

        let first_non_beginner = path
            .courses
            .iter()
            .position(|course| course.level != CourseLevel::Beginner)
            .unwrap_or(path.courses.len());
        assert!(path.courses[first_non_beginner..]
            .iter()
            .all(|course| course.level != CourseLevel::Beginner));
    }

    #[test]
    fn learning_path_requires_goal() {
        let catalog = SimulatedCourseCatalog::default();
        assert!(matches!(
            catalog.learning_path(&gaps(), "  ", "6 months", as_of()),
            Err(LearningError::EmptyGoal)
        ));
    }

    #[test]
    fn related_skills_extend_course_skills() {
        assert_eq!(
            skills_for("SQL"),
            vec!["SQL", "Database Design", "Query Optimization"]
        );
        assert_eq!(skills_for("Rust"), vec!["Rust"]);
    }
}
