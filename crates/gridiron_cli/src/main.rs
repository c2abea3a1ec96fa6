//! Gridiron CLI
//!
//! Simulate one game, run a calibration batch, or print team ratings from
//! roster JSON files (canonical slot shape or legacy grouped arrays).

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use gridiron_core::{
    calculate_team_ratings, simulate_game, BatchRunner, GameOptions, GameResult, Lineup, Roster,
    RosterInput, Side, StrategyContext, TeamStats, TeamStrategy,
};

#[derive(Parser)]
#[command(name = "gridiron")]
#[command(about = "Tier-based American football game simulator", long_about = None)]
struct Cli {
    /// Log drives and scores (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where a team comes from: a roster file, or a uniform roster of one tier.
#[derive(Args, Clone)]
struct Matchup {
    /// Home roster JSON file
    #[arg(long)]
    home: Option<PathBuf>,

    /// Away roster JSON file
    #[arg(long)]
    away: Option<PathBuf>,

    /// Tier for a generated home roster when no file is given
    #[arg(long, default_value_t = 5.0)]
    home_tier: f64,

    /// Tier for a generated away roster when no file is given
    #[arg(long, default_value_t = 5.0)]
    away_tier: f64,

    /// Force the home team to a balanced strategy
    #[arg(long)]
    home_balanced: bool,

    /// Force the away team to a balanced strategy
    #[arg(long)]
    away_balanced: bool,

    /// Let a regulation tie stand
    #[arg(long)]
    no_overtime: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one game
    Play {
        #[command(flatten)]
        matchup: Matchup,

        /// Seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,

        /// Print the play-by-play
        #[arg(long)]
        plays: bool,

        /// Write the full result as JSON to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Run many seeded games and report win rates
    Batch {
        #[command(flatten)]
        matchup: Matchup,

        /// Number of games
        #[arg(long, short = 'n', default_value_t = 1000)]
        games: u32,

        /// Seed of the first game; game i uses seed + i
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Print a roster's strategy and ratings
    Ratings {
        /// Roster JSON file
        roster: PathBuf,

        /// Opponent roster; includes the strategy matchup boosts against it
        #[arg(long)]
        opponent: Option<PathBuf>,

        /// Force a balanced strategy
        #[arg(long)]
        balanced: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play { matchup, seed, plays, out } => {
            let (home, away) = matchup.rosters()?;
            let options = GameOptions { seed, verbose: cli.verbose, ..matchup.options() };
            let result = simulate_game(&home, &away, &options);

            if plays {
                print_plays(&result, &home, &away);
            }
            print_summary(&result, &home, &away);

            if let Some(path) = out {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("writing result to {}", path.display()))?;
                println!("\nResult saved to: {}", path.display());
            }
        }

        Commands::Batch { matchup, games, seed } => {
            let (home, away) = matchup.rosters()?;
            let options = matchup.options();
            let report =
                BatchRunner::new(home.clone(), away.clone(), games, seed).with_options(options).run();

            println!("{} vs {} over {} games", home.name, away.name, report.games);
            println!(
                "   {:<20} {:>5}  ({:.1}%)",
                home.name,
                report.home_wins,
                report.home_win_rate() * 100.0
            );
            println!(
                "   {:<20} {:>5}  ({:.1}%)",
                away.name,
                report.away_wins,
                report.away_win_rate() * 100.0
            );
            println!("   {:<20} {:>5}", "Ties", report.ties);
            println!("   Overtime rate:  {:.1}%", report.overtime_rate() * 100.0);
            println!(
                "   Average score:  {:.1} - {:.1}  (total {:.1})",
                report.avg_home_score(),
                report.avg_away_score(),
                report.avg_total_points()
            );
        }

        Commands::Ratings { roster, opponent, balanced } => {
            let roster = load_roster(&roster)?;
            let strategy = TeamStrategy::derive(&Lineup::from_roster(&roster), balanced);
            let context = match opponent {
                Some(path) => {
                    let opponent = load_roster(&path)?;
                    Some(StrategyContext {
                        opponent: TeamStrategy::derive(&Lineup::from_roster(&opponent), false),
                        force_balanced: balanced,
                    })
                }
                None => None,
            };
            let ratings = calculate_team_ratings(&roster, context.as_ref());

            println!("{}", roster.name);
            println!("   Strategy: {:?} / {:?}", strategy.offense, strategy.defense);
            println!("{}", serde_json::to_string_pretty(&ratings)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

impl Matchup {
    fn rosters(&self) -> Result<(Roster, Roster)> {
        let home = match &self.home {
            Some(path) => load_roster(path)?,
            None => Roster::uniform(format!("Home T{}", self.home_tier), self.home_tier),
        };
        let away = match &self.away {
            Some(path) => load_roster(path)?,
            None => Roster::uniform(format!("Away T{}", self.away_tier), self.away_tier),
        };
        Ok((home, away))
    }

    fn options(&self) -> GameOptions {
        GameOptions {
            home_force_balanced: self.home_balanced,
            away_force_balanced: self.away_balanced,
            allow_overtime: !self.no_overtime,
            ..GameOptions::default()
        }
    }
}

fn load_roster(path: &Path) -> Result<Roster> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    let input: RosterInput = serde_json::from_str(&text)
        .with_context(|| format!("parsing roster {}", path.display()))?;
    Ok(input.into_roster())
}

fn team_name<'a>(side: Side, home: &'a Roster, away: &'a Roster) -> &'a str {
    match side {
        Side::Home => &home.name,
        Side::Away => &away.name,
    }
}

fn print_plays(result: &GameResult, home: &Roster, away: &Roster) {
    for play in &result.plays {
        let clock = format!("{}:{:02}", play.time_remaining / 60, play.time_remaining % 60);
        let situation = if play.down > 0 {
            format!("{}&{} at {}", play.down, play.yards_to_go, play.field_position)
        } else {
            String::new()
        };
        println!(
            "Q{} {:>5}  {:<12} {:<16} {}",
            play.quarter,
            clock,
            team_name(play.offense, home, away),
            situation,
            play.description
        );
    }
    println!();
}

fn print_summary(result: &GameResult, home: &Roster, away: &Roster) {
    let ot = if result.overtime { " (OT)" } else { "" };
    println!("FINAL{ot}: {} {} - {} {}", home.name, result.home_score, result.away_score, away.name);
    println!("Winner: {:?}\n", result.winner);

    println!("{:<22} {:>12} {:>12}", "", home.name, away.name);
    let rows: [(&str, fn(&TeamStats) -> String); 10] = [
        ("Total yards", |s| s.total_yards.to_string()),
        ("Passing", |s| {
            format!("{}/{} {} ({:.0}%)", s.completions, s.pass_attempts, s.passing_yards, s.completion_pct() * 100.0)
        }),
        ("Rushing", |s| {
            format!("{}-{} ({:.1})", s.rush_attempts, s.rushing_yards, s.yards_per_carry())
        }),
        ("First downs", |s| s.first_downs.to_string()),
        ("Third downs", |s| format!("{}/{}", s.third_down_conversions, s.third_down_attempts)),
        ("Sacks taken", |s| format!("{}-{}", s.sacks_taken, s.sack_yards_lost)),
        ("Turnovers", |s| s.turnovers.to_string()),
        ("Field goals", |s| format!("{}/{}", s.field_goals_made, s.field_goal_attempts)),
        ("Punts", |s| s.punts.to_string()),
        ("Possession", |s| {
            format!("{}:{:02}", s.time_of_possession / 60, s.time_of_possession % 60)
        }),
    ];
    for (label, cell) in rows {
        println!(
            "{:<22} {:>12} {:>12}",
            label,
            cell(&result.home_stats),
            cell(&result.away_stats)
        );
    }
    println!("\nDrives: {}  Plays: {}", result.drives.len(), result.plays.len());
}
