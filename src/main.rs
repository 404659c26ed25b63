use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use skillmatch::config::Config;
use skillmatch::output::terminal;
use skillmatch::text::Normalizer;
use skillmatch::{matching, pipeline};

/// Skillmatch: text-similarity matching for a recruitment and learning
/// platform.
///
/// Every subcommand reads its two inputs from the first two lines of
/// standard input (in the order documented per subcommand) and prints one
/// JSON value on standard output.
#[derive(Parser)]
#[command(name = "skillmatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Render a human-readable table instead of JSON
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract keywords. Input 1: top-N count. Input 2: pipe-delimited text partitions.
    Keywords,

    /// Rank projects against a subject profile. Input 1: subject text. Input 2: project corpus.
    MatchProjects,

    /// Rank id-plus-free-text records against a subject. Input 1: subject text. Input 2: corpus.
    MatchPlain,

    /// Rank users against a query user record. Input 1: user record. Input 2: user corpus.
    MatchUsers,

    /// Report uncovered requirements. Input 1: subject skills. Input 2: project requirements.
    SkillGap,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("skillmatch=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let (input1, input2) = read_inputs()?;
    let normalizer = Normalizer::new();

    match cli.command {
        Commands::Keywords => {
            let config = Config::load()?;
            let keywords = pipeline::keywords::run(&input1, &input2, &config, &normalizer)?;
            if cli.pretty {
                terminal::display_keywords(&keywords);
            } else {
                println!("{}", serde_json::to_string(&keywords)?);
            }
        }

        Commands::MatchProjects => {
            let matches = pipeline::projects::run(&input1, &input2, &normalizer)?;
            print_matches(&matches, cli.pretty)?;
        }

        Commands::MatchPlain => {
            let matches = pipeline::plain::run(&input1, &input2, &normalizer)?;
            print_matches(&matches, cli.pretty)?;
        }

        Commands::MatchUsers => {
            let matches = pipeline::users::run(&input1, &input2, &normalizer)?;
            print_matches(&matches, cli.pretty)?;
        }

        Commands::SkillGap => {
            let missing = pipeline::skill_gap::run(&input1, &input2, &normalizer)?;
            if cli.pretty {
                terminal::display_missing_skills(&missing);
            } else {
                println!("{}", serde_json::to_string(&missing)?);
            }
        }
    }

    Ok(())
}

/// Read the two pipeline inputs from the first two lines of stdin.
///
/// Missing lines or non-UTF-8 input are fatal; no partial output is ever
/// emitted.
fn read_inputs() -> Result<(String, String)> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let input1 = lines
        .next()
        .context("missing input 1 on stdin")?
        .context("input 1 is not valid UTF-8 text")?;
    let input2 = lines
        .next()
        .context("missing input 2 on stdin")?
        .context("input 2 is not valid UTF-8 text")?;

    Ok((input1, input2))
}

/// Print a ranking either as a pretty table or as the JSON id list the
/// upstream consumer expects.
fn print_matches(matches: &[matching::Match], pretty: bool) -> Result<()> {
    if pretty {
        terminal::display_matches(matches);
    } else {
        let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        println!("{}", serde_json::to_string(&ids)?);
    }
    Ok(())
}
