// course-analyzer - answers questions about an online course dataset
//
// This is the main entry point. Parses CLI args, loads the dataset once and
// dispatches to one query handler.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use course_analyzer_lib::{
    config::{self, AnalyzerConfig, OutputFormat},
    dataset::{InstructorPortfolio, UserProfile},
    AnalyzerError, CourseAnalyzer,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

// Library events are under course_analyzer_lib, the binary's under course_analyzer
const DEFAULT_LOG_FILTER: &str = "course_analyzer_lib=info,course_analyzer=info";

#[derive(Parser)]
#[command(
    name = "course-analyzer",
    version,
    about = "Participation, ranking, search and recommendations over online course data"
)]
struct Cli {
    /// Dataset CSV (overrides the config file)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Participants per institution
    Institutions,

    /// Participants per institution and subject
    Subjects,

    /// Courses each instructor teaches alone and with others
    Instructors {
        /// Show only this instructor (exact name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Top K courses by hours or participants
    Top {
        /// How many titles to show (default from config)
        top_k: Option<usize>,

        /// Ranking criterion: hours or participants
        #[arg(long)]
        by: String,
    },

    /// Search courses by subject, audited share and length
    Search {
        /// Subject fragment, case-insensitive
        #[arg(long)]
        subject: String,

        /// Minimum percent audited
        #[arg(long)]
        min_audited: f64,

        /// Maximum total course hours (thousands)
        #[arg(long)]
        max_hours: f64,
    },

    /// Recommend 10 courses for a user profile
    Recommend {
        /// Age of the user
        #[arg(long)]
        age: i32,

        /// 0 for female, 1 for male
        #[arg(long)]
        gender: i64,

        /// 1 if bachelor's degree or higher, else 0
        #[arg(long)]
        degree: i64,
    },

    /// Show dataset statistics
    Stats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        // Library errors have friendlier wording than the anyhow chain
        match e.downcast_ref::<AnalyzerError>() {
            Some(err) => eprintln!("✗ {}", err.user_message()),
            None => eprintln!("✗ {:#}", e),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.format
    };

    let analyzer = open_analyzer(cli.dataset, &config)?;

    match cli.command {
        Commands::Institutions => handle_institutions(&analyzer, format),
        Commands::Subjects => handle_subjects(&analyzer, format),
        Commands::Instructors { name } => handle_instructors(&analyzer, name.as_deref(), format),
        Commands::Top { top_k, by } => {
            handle_top(&analyzer, top_k.unwrap_or(config.top_k), &by, format)
        }
        Commands::Search {
            subject,
            min_audited,
            max_hours,
        } => handle_search(&analyzer, &subject, min_audited, max_hours, format),
        Commands::Recommend {
            age,
            gender,
            degree,
        } => handle_recommend(&analyzer, age, gender, degree, format),
        Commands::Stats => handle_stats(&analyzer, format),
    }
}

fn open_analyzer(dataset: Option<PathBuf>, config: &AnalyzerConfig) -> anyhow::Result<CourseAnalyzer> {
    let path = dataset.or_else(|| config.dataset.clone()).ok_or_else(|| {
        anyhow!(
            "No dataset given. Pass --dataset <PATH>, set {} or add `dataset` to {}",
            config::DATASET_ENV_VAR,
            config::LOCAL_CONFIG_FILE
        )
    })?;

    let analyzer = CourseAnalyzer::open(&path)
        .with_context(|| format!("failed to load dataset {}", path.display()))?;
    Ok(analyzer)
}

fn handle_institutions(analyzer: &CourseAnalyzer, format: OutputFormat) -> anyhow::Result<()> {
    let totals = analyzer.participants_by_institution();

    if format == OutputFormat::Json {
        return print_json(&totals);
    }

    print_header("Participants by institution");
    for (i, (institution, total)) in totals.iter().enumerate() {
        println!("{:3}. {:<40} {}", i + 1, institution, total);
    }
    print_rule();

    Ok(())
}

fn handle_subjects(analyzer: &CourseAnalyzer, format: OutputFormat) -> anyhow::Result<()> {
    let rows = analyzer.participants_by_institution_and_subject();

    if format == OutputFormat::Json {
        let keyed: Vec<(String, u64)> = rows.iter().map(|r| (r.key(), r.participants)).collect();
        return print_json(&keyed);
    }

    print_header("Participants by institution and subject");
    for (i, row) in rows.iter().enumerate() {
        println!("{:3}. {:<60} {}", i + 1, row.key(), row.participants);
    }
    print_rule();

    Ok(())
}

fn handle_instructors(
    analyzer: &CourseAnalyzer,
    name: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let portfolios: BTreeMap<String, InstructorPortfolio> = match name {
        Some(name) => match analyzer.instructor_portfolio(name) {
            Some(portfolio) => [(name.to_string(), portfolio)].into_iter().collect(),
            None => {
                println!("No instructor named '{}'", name);
                return Ok(());
            }
        },
        None => analyzer.instructor_portfolios(),
    };

    if format == OutputFormat::Json {
        // [[independent...], [co-developed...]] per instructor
        let lists: BTreeMap<&String, [&Vec<String>; 2]> = portfolios
            .iter()
            .map(|(name, p)| (name, [&p.independent, &p.co_developed]))
            .collect();
        return print_json(&lists);
    }

    print_header("Instructor portfolios");
    for (name, portfolio) in &portfolios {
        println!("\n{}", name);
        println!("   Independent:  {}", portfolio.independent.join("; "));
        println!("   Co-developed: {}", portfolio.co_developed.join("; "));
    }
    println!();
    print_rule();

    Ok(())
}

fn handle_top(
    analyzer: &CourseAnalyzer,
    top_k: usize,
    by: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let titles = analyzer.top_courses(top_k, by)?;

    if format == OutputFormat::Json {
        return print_json(&titles);
    }

    print_header(&format!("Top {} courses by {}", top_k, by));
    print_titles(&titles);
    print_rule();

    Ok(())
}

fn handle_search(
    analyzer: &CourseAnalyzer,
    subject: &str,
    min_audited: f64,
    max_hours: f64,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let titles = analyzer.search_courses(subject, min_audited, max_hours);

    if format == OutputFormat::Json {
        return print_json(&titles);
    }

    if titles.is_empty() {
        println!("No courses found matching '{}'", subject);
    } else {
        print_header(&format!(
            "Found {} course(s) matching '{}'",
            titles.len(),
            subject
        ));
        print_titles(&titles);
        print_rule();
    }

    Ok(())
}

fn handle_recommend(
    analyzer: &CourseAnalyzer,
    age: i32,
    gender: i64,
    degree: i64,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let profile = UserProfile::from_codes(age, gender, degree)?;
    let recommendations = analyzer.recommend_scored(&profile);

    if format == OutputFormat::Json {
        return print_json(&recommendations);
    }

    if recommendations.is_empty() {
        println!("No courses to recommend.");
        return Ok(());
    }

    print_header("Recommended courses");
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{:3}. {} [{}] (similarity {:.2})",
            i + 1,
            rec.title,
            rec.number,
            rec.similarity
        );
    }
    print_rule();

    Ok(())
}

fn handle_stats(analyzer: &CourseAnalyzer, format: OutputFormat) -> anyhow::Result<()> {
    let stats = analyzer.stats();

    if format == OutputFormat::Json {
        return print_json(&stats);
    }

    println!("\ncourse-analyzer Status");
    print_rule();
    if let Some(source) = analyzer.catalog().source() {
        println!("\nDataset: {}", source.display());
    }
    println!("\nCatalog Statistics:");
    println!("  Records:        {}", stats.total_records);
    println!("  Institutions:   {}", stats.institutions);
    println!("  Course numbers: {}", stats.course_numbers);
    println!("  Subjects:       {}", stats.subjects);
    println!("  Titles:         {}", stats.titles);
    println!("  Participants:   {}", stats.total_participants);
    if let (Some(first), Some(last)) = (stats.earliest_launch, stats.latest_launch) {
        println!("  Launches:       {} to {}", first, last);
    }
    print_rule();

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_titles(titles: &[String]) {
    for (i, title) in titles.iter().enumerate() {
        println!("{:3}. {}", i + 1, title);
    }
}

fn print_header(title: &str) {
    println!("\n{}", title);
    print_rule();
}

fn print_rule() {
    println!("{}", "=".repeat(60));
}
