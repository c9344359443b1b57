use super::awards::count_player_of_match;
use super::find_stats;
use super::player_role::{classify_player, PlayerRole};
use super::stat_selector::{fields, select_stats, Metric, StatSelection};
use crate::data::models::{MatchSummary, Player, PlayerStatsRecord, Team};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    Name,
    BestScore,
    PlayerOfMatch,
    Wickets,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortKey::None),
            "name" => Ok(SortKey::Name),
            "best_score" | "best-score" => Ok(SortKey::BestScore),
            "pom" => Ok(SortKey::PlayerOfMatch),
            "wickets" => Ok(SortKey::Wickets),
            other => Err(format!(
                "unknown sort key '{}' (expected name, best_score, pom or wickets)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RosterQuery {
    /// Case-insensitive substring of the player name.
    pub search: String,
    pub team: Option<String>,
    pub sort: SortKey,
}

#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub uuid: String,
    pub name: String,
    pub teams: Vec<String>,
    pub role: PlayerRole,
    pub runs: Metric,
    pub wickets: Metric,
    pub player_of_match: u32,
}

/// Runs and wickets for a card: overall, or the team block when the filter matches one.
fn card_totals(record: Option<&PlayerStatsRecord>, team: Option<&str>) -> (Metric, Metric) {
    let selection = select_stats(record, team);
    (selection.stats.batting.runs, selection.stats.bowling.wickets)
}

fn sort_wickets(record: Option<&PlayerStatsRecord>, team: Option<&str>) -> f64 {
    let Some(record) = record else {
        return 0.0;
    };
    let bowling = match team.and_then(|t| record.team_block(t)) {
        Some(block) => block.stats.bowling.as_ref(),
        None => record.overall_stats.as_ref().and_then(|s| s.bowling.as_ref()),
    };
    Metric::lookup(bowling, fields::WICKETS).as_f64_or_zero()
}

/// Filter and sort the player list. Sorts are stable, so ties keep roster order.
pub fn build_roster(
    players: &[Player],
    stats: &[PlayerStatsRecord],
    teams: &[Team],
    matches: &[MatchSummary],
    query: &RosterQuery,
) -> Vec<RosterEntry> {
    let search = query.search.to_lowercase();
    let team = query.team.as_deref().filter(|t| !t.is_empty());

    let mut selected: Vec<&Player> = players
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&search))
        .filter(|p| team.map_or(true, |t| p.plays_for(t)))
        .collect();

    match query.sort {
        SortKey::None => {}
        SortKey::Name => selected.sort_by_cached_key(|p| p.name.to_lowercase()),
        SortKey::BestScore => selected.sort_by(|a, b| {
            b.best_score.unwrap_or(0).cmp(&a.best_score.unwrap_or(0))
        }),
        SortKey::PlayerOfMatch => selected.sort_by(|a, b| {
            b.awards.player_of_match.cmp(&a.awards.player_of_match)
        }),
        SortKey::Wickets => selected.sort_by(|a, b| {
            let wa = sort_wickets(find_stats(stats, &a.uuid), team);
            let wb = sort_wickets(find_stats(stats, &b.uuid), team);
            wb.partial_cmp(&wa).unwrap_or(Ordering::Equal)
        }),
    }

    selected
        .into_iter()
        .map(|p| {
            let record = find_stats(stats, &p.uuid);
            let (runs, wickets) = card_totals(record, team);

            RosterEntry {
                uuid: p.uuid.clone(),
                name: p.name.clone(),
                teams: p.teams.clone(),
                role: classify_player(record.and_then(|r| r.overall_stats.as_ref())),
                runs,
                wickets,
                player_of_match: count_player_of_match(p, team, teams, matches),
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub name: String,
    pub teams: Vec<String>,
    pub role: PlayerRole,
    pub best_score: String,
    pub best_bowling: String,
    pub player_of_match: u32,
    pub bio: String,
    pub selection: StatSelection,
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn player_profile(
    player: &Player,
    record: Option<&PlayerStatsRecord>,
    team_filter: Option<&str>,
    teams: &[Team],
    matches: &[MatchSummary],
) -> PlayerProfile {
    let best_bowling = match &player.best_bowling_figures {
        Some(f) => format!("{}/{} ({} ov)", or_dash(f.wickets), or_dash(f.runs), or_dash(f.overs)),
        None => "-".to_string(),
    };

    PlayerProfile {
        name: player.name.clone(),
        teams: player.teams.clone(),
        role: classify_player(record.and_then(|r| r.overall_stats.as_ref())),
        best_score: or_dash(player.best_score),
        best_bowling,
        player_of_match: count_player_of_match(player, team_filter, teams, matches),
        bio: player
            .bio
            .clone()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| "Not available".to_string()),
        selection: select_stats(record, team_filter),
    }
}
