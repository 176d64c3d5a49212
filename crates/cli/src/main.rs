use anyhow::{bail, Context, Result};
use catalog::{Catalog, CoasterRecord};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::preference::{MAX_HEIGHT_FT, MAX_SPEED_MPH, MIN_HEIGHT_FT, MIN_SPEED_MPH};
use engine::{Recommendation, RecommendationOutcome, Recommender, UserPreference};
use rand::Rng;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Coaster Recs - Roller Coaster Recommendation Engine
#[derive(Parser)]
#[command(name = "coaster-recs")]
#[command(about = "Find roller coasters that match your appetite for adventure", long_about = None)]
struct Cli {
    /// Path to the roller coaster CSV export
    #[arg(short, long, default_value = "data/RollerCoasters-Geo.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get coaster recommendations for your preferences
    Recommend {
        /// Ideal top speed in mph (27-120)
        #[arg(long, default_value = "50", value_parser = speed_in_range)]
        speed: f64,

        /// Ideal maximum height in feet (18-420)
        #[arg(long, default_value = "100", value_parser = height_in_range)]
        height: f64,

        /// Only recommend coasters that go upside down
        #[arg(long)]
        inversions: bool,

        /// Design you'd like to ride; repeat for several
        #[arg(long = "design")]
        designs: Vec<String>,

        /// State you'd ride in; repeat for several. With none, nothing matches
        #[arg(long = "state")]
        states: Vec<String>,

        /// Only show the first N recommendations (text and JSON)
        #[arg(long)]
        limit: Option<usize>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List states with their number of coasters
    States,

    /// List the design styles in the catalog
    Designs,

    /// Show the tallest coasters
    Tallest {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show the fastest coasters
    Fastest {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Search for coasters by name
    Search {
        /// Name to search for (case-insensitive substring match)
        #[arg(long)]
        name: String,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.data)
            .with_context(|| format!("Failed to load coaster catalog from {}", cli.data.display()))?,
    );
    info!("Loaded {} coasters in {:?}", catalog.len(), start.elapsed());

    match cli.command {
        Commands::Recommend {
            speed,
            height,
            inversions,
            designs,
            states,
            limit,
            json,
        } => {
            check_choices("state", &states, &catalog.states())?;
            check_choices("design", &designs, &catalog.designs())?;
            let preference = UserPreference::new(speed, height, inversions)?
                .with_designs(designs)
                .with_states(states);
            handle_recommend(catalog, &preference, limit, json)?
        }
        Commands::States => handle_states(&catalog),
        Commands::Designs => handle_designs(&catalog),
        Commands::Tallest { limit } => {
            print_coasters("Tallest Roller Coasters", &catalog.tallest(limit))
        }
        Commands::Fastest { limit } => {
            print_coasters("Fastest Roller Coasters", &catalog.fastest(limit))
        }
        Commands::Search { name } => handle_search(&catalog, &name),
        Commands::Benchmark { requests } => handle_benchmark(catalog, requests)?,
    }

    Ok(())
}

fn speed_in_range(s: &str) -> std::result::Result<f64, String> {
    float_in_range(s, MIN_SPEED_MPH, MAX_SPEED_MPH)
}

fn height_in_range(s: &str) -> std::result::Result<f64, String> {
    float_in_range(s, MIN_HEIGHT_FT, MAX_HEIGHT_FT)
}

fn float_in_range(s: &str, min: f64, max: f64) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between {} and {}", min, max))
    }
}

/// Reject any `--state`/`--design` value the catalog doesn't offer
fn check_choices(kind: &str, chosen: &[String], valid: &[&str]) -> Result<()> {
    if let Some(unknown) = chosen.iter().find(|c| !valid.contains(&c.as_str())) {
        bail!("Unknown {} {:?}; choose from: {}", kind, unknown, valid.join(", "));
    }
    Ok(())
}

/// Keep at most `limit` recommendations
fn truncate_outcome(outcome: &mut RecommendationOutcome, limit: Option<usize>) {
    if let (RecommendationOutcome::Matches { recommendations, .. }, Some(limit)) = (outcome, limit) {
        recommendations.truncate(limit);
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: Arc<Catalog>,
    preference: &UserPreference,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let recommender = Recommender::new(catalog);
    let mut outcome = recommender.recommend(preference)?;
    let found = outcome.recommendations().len();
    truncate_outcome(&mut outcome, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "Your capacity for adventure is {} out of 10.",
        format!("{:.2}", outcome.target_score()).bold()
    );

    match &outcome {
        RecommendationOutcome::Matches { recommendations, .. } => {
            println!(
                "{}",
                format!("Found {} coasters with your guidelines!", found)
                    .bold()
                    .blue()
            );
            print_recommendations(recommendations);
        }
        RecommendationOutcome::NoMatch { .. } => {
            println!(
                "{}",
                "Unfortunately, there are no roller coasters with these guidelines. Try again!"
                    .italic()
                    .yellow()
            );
        }
    }
    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Recommendation]) {
    for rec in recommendations {
        let inversion_status = if rec.has_inversions {
            "has inversion(s)"
        } else {
            "does not have inversion(s)"
        };
        println!(
            "{} {} at {} in {}, {}. It has a max speed of {} mph, a max height of {} ft, {}, and an adventure score of {:.2}, just {:.2} off from your score!",
            format!("{}:", rec.rank).green(),
            rec.name.blue(),
            rec.park.yellow(),
            rec.city.yellow(),
            rec.state.yellow(),
            rec.speed_mph.to_string().magenta(),
            rec.height_ft.to_string().magenta(),
            inversion_status.red(),
            rec.adventure_score,
            rec.score_delta,
        );
    }
}

/// Handle the 'states' command
fn handle_states(catalog: &Catalog) {
    println!("{}", "Coasters by State:".bold().blue());
    for (state, count) in catalog.state_counts() {
        println!("{}{}: {}", "• ".green(), state, count);
    }
}

/// Handle the 'designs' command
fn handle_designs(catalog: &Catalog) {
    println!("{}", "Coaster Designs:".bold().blue());
    for design in catalog.designs() {
        println!("{}{}", "• ".green(), design);
    }
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, name: &str) {
    let matches = catalog.search(name);
    if matches.is_empty() {
        println!("No coasters match '{}'", name);
        return;
    }
    print_coasters(&format!("Search results for '{}':", name), &matches);
}

fn print_coasters(title: &str, coasters: &[&CoasterRecord]) {
    println!("{}", title.bold().blue());
    for (idx, coaster) in coasters.iter().enumerate() {
        println!(
            "{}. {} ({}, {}, {}) - {} ft, {} mph, {} inversion(s)",
            (idx + 1).to_string().green(),
            coaster.name,
            coaster.park,
            coaster.city,
            coaster.state,
            coaster.max_height_ft,
            coaster.top_speed_mph,
            coaster.inversion_count
        );
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(catalog: Arc<Catalog>, requests: usize) -> Result<()> {
    anyhow::ensure!(requests > 0, "Benchmark needs at least one request");

    let states: Vec<String> = catalog.states().into_iter().map(String::from).collect();
    let designs: Vec<String> = catalog.designs().into_iter().map(String::from).collect();
    let recommender = Recommender::new(catalog);

    // Random preferences, generated up front so only the engine is timed
    let mut rng = rand::rng();
    let preferences: Vec<UserPreference> = (0..requests)
        .map(|_| {
            let chosen_states: Vec<&String> = states.iter().filter(|_| rng.random_bool(0.3)).collect();
            let chosen_designs: Vec<&String> = designs.iter().filter(|_| rng.random_bool(0.2)).collect();
            UserPreference::new(
                rng.random_range(MIN_SPEED_MPH..=MAX_SPEED_MPH),
                rng.random_range(MIN_HEIGHT_FT..=MAX_HEIGHT_FT),
                rng.random_bool(0.5),
            )
            .map(|p| {
                p.with_states(chosen_states.into_iter().cloned())
                    .with_designs(chosen_designs.into_iter().cloned())
            })
        })
        .collect::<std::result::Result<_, _>>()?;

    let wall_clock = Instant::now();
    let mut timings: Vec<Duration> = preferences
        .par_iter()
        .map(|preference| -> Result<Duration> {
            let start = Instant::now();
            recommender.recommend(preference)?;
            Ok(start.elapsed())
        })
        .collect::<Result<_>>()?;
    let wall_clock = wall_clock.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / wall_clock.as_secs_f64();

    println!("Benchmark results:");
    println!("Wall clock time: {:?}", wall_clock);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_value_parsers() {
        assert_eq!(speed_in_range("60"), Ok(60.0));
        assert!(speed_in_range("150").is_err());
        assert!(height_in_range("10").is_err());
        assert!(height_in_range("tall").is_err());
    }

    #[test]
    fn test_recommend_args() {
        let cli = Cli::try_parse_from([
            "coaster-recs",
            "recommend",
            "--speed",
            "60",
            "--height",
            "190",
            "--state",
            "Texas",
            "--state",
            "Ohio",
            "--design",
            "Sitdown",
        ])
        .unwrap();

        match cli.command {
            Commands::Recommend { speed, states, designs, inversions, .. } => {
                assert_eq!(speed, 60.0);
                assert_eq!(states, vec!["Texas", "Ohio"]);
                assert_eq!(designs, vec!["Sitdown"]);
                assert!(!inversions);
            }
            _ => panic!("expected recommend"),
        }
        assert_eq!(cli.data, PathBuf::from("data/RollerCoasters-Geo.csv"));
    }

    #[test]
    fn test_unknown_choice_rejected() {
        let valid = ["Flying", "Sitdown"];
        assert!(check_choices("design", &["Sitdown".to_string()], &valid).is_ok());
        let err = check_choices("design", &["Sitdwon".to_string()], &valid).unwrap_err();
        assert!(err.to_string().contains("Flying, Sitdown"));
    }

    fn outcome_with(count: usize) -> RecommendationOutcome {
        let rec = Recommendation {
            rank: 1,
            score_delta: 0.0,
            adventure_score: 2.0,
            city: "Austin".to_string(),
            state: "Texas".to_string(),
            name: "Apex".to_string(),
            inversion_count: 0,
            has_inversions: false,
            height_ft: 200.0,
            speed_mph: 65.0,
            park: "Thrill Park".to_string(),
        };
        RecommendationOutcome::Matches {
            target_score: 2.0,
            recommendations: vec![rec; count],
        }
    }

    #[test]
    fn test_limit_applies_to_outcome() {
        let mut outcome = outcome_with(5);
        truncate_outcome(&mut outcome, Some(2));
        assert_eq!(outcome.recommendations().len(), 2);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 2);

        let mut untouched = outcome_with(5);
        truncate_outcome(&mut untouched, None);
        assert_eq!(untouched.recommendations().len(), 5);
    }

    #[test]
    fn test_recommend_without_states_parses() {
        let cli = Cli::try_parse_from(["coaster-recs", "recommend", "--speed", "60"]).unwrap();
        assert!(matches!(cli.command, Commands::Recommend { ref states, .. } if states.is_empty()));
    }

    #[test]
    fn test_out_of_range_slider_rejected() {
        assert!(Cli::try_parse_from(["coaster-recs", "recommend", "--speed", "150"]).is_err());
    }
}
