use std::path::PathBuf;

use career_ai::careers::CatalogKind;
use career_ai::error::AppError;
use career_ai::profile::ExperienceLevel;
use clap::{Args, Parser, Subcommand};

use crate::app::demo::{run_assess, run_courses, run_demo, run_market};
use crate::app::server;

#[derive(Parser, Debug)]
#[command(
    name = "career-ai",
    about = "Score career assessments, match careers and explore market and learning data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a saved answer file and persist the resulting career report
    Assess(AssessArgs),
    /// Show salary, demand and skill demand for a role
    Market(MarketArgs),
    /// Recommend courses for a list of skill gaps
    Courses(CoursesArgs),
    /// Run a seeded end-to-end walkthrough with generated answers
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Answer file: a `{ "question_id": value }` JSON object or a question_id,answer CSV
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Comma-separated list of skills you already have
    #[arg(long, value_delimiter = ',')]
    pub(crate) skills: Vec<String>,
    /// Career catalog to match against (standard or extended)
    #[arg(long, default_value = "standard")]
    pub(crate) catalog: CatalogKind,
    /// Directory for saved results (defaults to CAREER_AI_STORE_DIR)
    #[arg(long)]
    pub(crate) store: Option<PathBuf>,
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) location: String,
    /// Years of experience: 0, 1-2, 3-5, 5-10 or 10+
    #[arg(long, default_value = "0")]
    pub(crate) experience: ExperienceLevel,
}

#[derive(Args, Debug)]
pub(crate) struct MarketArgs {
    #[arg(long)]
    pub(crate) role: String,
    /// "City, ST" or Remote
    #[arg(long, default_value = "Remote")]
    pub(crate) location: String,
    /// Experience band used for the salary snapshot
    #[arg(long, default_value = "3-5")]
    pub(crate) experience: ExperienceLevel,
    /// Seed for simulated figures (defaults to CAREER_AI_FIXTURE_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct CoursesArgs {
    /// JSON array of `{ "skill", "current", "required" }` objects
    #[arg(long)]
    pub(crate) gaps: PathBuf,
    #[arg(long)]
    pub(crate) experience: Option<ExperienceLevel>,
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Also print a learning path toward this career goal
    #[arg(long)]
    pub(crate) goal: Option<String>,
    /// Timeframe label for the learning path
    #[arg(long, default_value = "6 months")]
    pub(crate) timeframe: String,
    /// Number of courses to list
    #[arg(long, default_value_t = 5)]
    pub(crate) limit: usize,
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for generated answers and simulated collaborators
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Match against the extended catalog instead of the standard three careers
    #[arg(long)]
    pub(crate) extended: bool,
    /// Location used for market data and course suggestions
    #[arg(long, default_value = "Bengaluru, India")]
    pub(crate) location: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Market(args) => run_market(args),
        Command::Courses(args) => run_courses(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assess_parses_skills_and_catalog() {
        let cli = Cli::try_parse_from([
            "career-ai",
            "assess",
            "--answers",
            "answers.json",
            "--skills",
            "Python,SQL",
            "--catalog",
            "extended",
            "--experience",
            "1-2",
        ])
        .expect("arguments parse");
        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.skills, vec!["Python", "SQL"]);
                assert_eq!(args.catalog, CatalogKind::Extended);
                assert_eq!(args.experience, ExperienceLevel::Junior);
                assert!(args.store.is_none());
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["career-ai"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
