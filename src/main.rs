use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use log::info;
use occ_stats::analysis::awards::match_detail;
use occ_stats::analysis::roster::{build_roster, player_profile, RosterQuery, SortKey};
use occ_stats::analysis::standings::{rank_teams, team_profile};
use occ_stats::analysis::summary::{summary_cards, top_run_scorers, top_wicket_takers};
use occ_stats::analysis::timeline::{build_timeline, ALL_STAGES};
use occ_stats::analysis::{find_player_by_name, find_stats, find_team_by_name};
use occ_stats::cache::SnapshotStore;
use occ_stats::config::{Config, DataLocation};
use occ_stats::data::resources;
use occ_stats::data::{DataSource, Dataset, DirectorySource, HttpSource};
use occ_stats::display::output::{
    display_error, display_info, display_match_detail, display_player_profile, display_roster,
    display_standings, display_success, display_summary, display_team_profile, display_timeline,
};
use occ_stats::AppError;
use std::path::PathBuf;

const LEADERBOARD_SIZE: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "occ-stats")]
#[command(
    about = "Browse a cricket tournament: results, standings and player statistics",
    long_about = None
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the tournament JSON files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Base URL the tournament JSON files are served from
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Ignore saved snapshots and fetch again
    #[arg(long, global = true)]
    refresh: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tournament headline numbers and leaderboards
    Summary,

    /// Results grouped by day
    Matches {
        /// Only show one stage (Group League, Super Six, Semi, Eliminator, Final)
        #[arg(short, long, default_value = ALL_STAGES)]
        stage: String,
    },

    /// Scorecard and awards for one match
    Match {
        /// Match number as listed by `matches`
        number: usize,
    },

    /// Standings ranked by net run rating
    Teams,

    /// Captain, roster and season totals for one team
    Team { name: String },

    /// Player list with search, team filter and sorting
    Players {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long)]
        team: Option<String>,

        /// name, best_score, pom or wickets
        #[arg(long, default_value = "none")]
        sort: SortKey,
    },

    /// Profile and statistics for one player
    Player {
        name: String,

        /// Show statistics for this team only
        #[arg(short, long)]
        team: Option<String>,
    },
}

impl Command {
    fn resources(&self) -> &'static [&'static str] {
        match self {
            Command::Summary => &[resources::SUMMARY_STATS, resources::PLAYER_STATS],
            Command::Matches { .. } => &[resources::MATCH_SUMMARIES, resources::TEAMS],
            Command::Match { .. } => &[
                resources::MATCH_SUMMARIES,
                resources::TEAMS,
                resources::PLAYERS,
                resources::PLAYER_STATS,
            ],
            Command::Teams => &[resources::TEAMS, resources::MATCH_SUMMARIES],
            Command::Team { .. } => &[resources::TEAMS, resources::PLAYERS],
            Command::Players { .. } | Command::Player { .. } => &[
                resources::PLAYERS,
                resources::PLAYER_STATS,
                resources::TEAMS,
                resources::MATCH_SUMMARIES,
            ],
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn open_source(config: &Config, refresh: bool) -> Box<dyn DataSource> {
    match &config.location {
        DataLocation::Directory(dir) => Box::new(DirectorySource::new(dir.clone())),
        DataLocation::Remote(url) => {
            let store = SnapshotStore::for_base_url(url);
            info!("snapshots for {} kept in {}", url, store.dir().display());
            Box::new(HttpSource::new(url).with_snapshots(store, config.cache_max_age_mins, refresh))
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?.with_overrides(args.data_dir, args.base_url);
    let mut dataset = Dataset::new(open_source(&config, args.refresh));

    display_info(&format!("Loading tournament data from {}", dataset.describe()));

    let needed = args.command.resources();
    let pb = ProgressBar::new(needed.len() as u64);
    pb.set_message("Loading datasets");
    for resource in needed {
        dataset
            .preload(resource)
            .with_context(|| format!("could not load {}", resource))?;
        pb.inc(1);
    }
    pb.finish_and_clear();
    display_success(&format!("Loaded {} datasets", dataset.cache().len()));

    match args.command {
        Command::Summary => {
            let summary = dataset.summary()?;
            let stats = dataset.player_stats()?;

            display_summary(
                &summary_cards(&summary),
                &top_run_scorers(&stats, LEADERBOARD_SIZE),
                &top_wicket_takers(&stats, LEADERBOARD_SIZE),
            );
        }
        Command::Matches { stage } => {
            let matches = dataset.matches()?;
            let teams = dataset.teams()?;

            display_timeline(&build_timeline(&matches, &teams, Some(&stage)));
        }
        Command::Match { number } => {
            let matches = dataset.matches()?;
            let m = number
                .checked_sub(1)
                .and_then(|idx| matches.get(idx))
                .ok_or_else(|| AppError::not_found("match", &number.to_string()))?;

            let teams = dataset.teams()?;
            let players = dataset.players()?;
            let stats = dataset.player_stats()?;

            let detail = match_detail(m, &teams, &players, &stats);
            display_match_detail(&detail);
        }
        Command::Teams => {
            let teams = dataset.teams()?;
            let matches = dataset.matches()?;

            display_standings(&rank_teams(&teams, &matches));
        }
        Command::Team { name } => {
            let teams = dataset.teams()?;
            let team = find_team_by_name(&teams, &name)
                .or_else(|| teams.iter().find(|t| t.name.eq_ignore_ascii_case(&name)))
                .ok_or_else(|| AppError::not_found("team", &name))?;

            display_team_profile(&team_profile(team, &dataset.players()?));
        }
        Command::Players { search, team, sort } => {
            let players = dataset.players()?;
            let stats = dataset.player_stats()?;
            let teams = dataset.teams()?;
            let matches = dataset.matches()?;

            let query = RosterQuery { search, team, sort };
            let roster = build_roster(&players, &stats, &teams, &matches, &query);
            display_roster(&roster, query.team.as_deref());
        }
        Command::Player { name, team } => {
            let players = dataset.players()?;
            let stats = dataset.player_stats()?;
            let teams = dataset.teams()?;
            let matches = dataset.matches()?;

            let player = find_player_by_name(&players, &name)
                .ok_or_else(|| AppError::not_found("player", &name))?;
            let profile = player_profile(
                player,
                find_stats(&stats, &player.uuid),
                team.as_deref(),
                &teams,
                &matches,
            );
            display_player_profile(&profile);
        }
    }

    Ok(())
}
