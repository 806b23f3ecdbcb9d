use clap::{Parser, Subcommand};

use crate::commands::{
    run_ab_test, run_demo, run_evaluate, run_recommend, run_validate, AbTestArgs, DemoArgs,
    EvaluateArgs, RecommendArgs, ValidateArgs,
};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Internship Recommendation Engine",
    about = "Score internship recommendations and evaluate the algorithms offline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend internships for one student from a CSV dataset
    Recommend(RecommendArgs),
    /// Run the offline evaluation and emit the comparison report
    Evaluate(EvaluateArgs),
    /// Split students into two cohorts and compare two algorithms
    AbTest(AbTestArgs),
    /// Check dataset coverage and interaction-matrix health
    Validate(ValidateArgs),
    /// Run an end-to-end demo on a bundled sample dataset (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(config.environment, &config.telemetry)?;

    let command = cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()));
    match command {
        Command::Recommend(args) => run_recommend(&config, args),
        Command::Evaluate(args) => run_evaluate(&config, args),
        Command::AbTest(args) => run_ab_test(&config, args),
        Command::Validate(args) => run_validate(&config, args),
        Command::Demo(args) => run_demo(args),
    }
}
