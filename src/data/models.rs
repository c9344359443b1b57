use serde::{Deserialize, Deserializer};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use serde_json::Value;

/// Metric name -> value, as stored in one batting/bowling/fielding block.
pub type StatMap = serde_json::Map<String, Value>;

/// A count given as a number, a numeric string or null. Null reads as 0.
fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count: Option<u32> = deserialize_option_number_from_string(deserializer)?;
    Ok(count.unwrap_or_default())
}

// match_summaries.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchSummary {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub match_type: String,
    #[serde(default)]
    pub team1_uuid: String,
    #[serde(default)]
    pub team2_uuid: String,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub team1_runs: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub team1_wickets: u32,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub team1_overs: Option<f64>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub team2_runs: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub team2_wickets: u32,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub team2_overs: Option<f64>,
    #[serde(default)]
    pub winner_uuid: Option<String>,
    #[serde(default)]
    pub win_margin: String,
    #[serde(default)]
    pub ground: String,
    #[serde(default)]
    pub player_of_match_uuid: Option<String>,
    #[serde(default)]
    pub best_batter_uuid: Option<String>,
    #[serde(default)]
    pub best_bowler_uuid: Option<String>,
    #[serde(default)]
    pub mvp1_uuid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub mvp1_score: Option<f64>,
    #[serde(default)]
    pub mvp2_uuid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub mvp2_score: Option<f64>,
    #[serde(default)]
    pub mvp3_uuid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub mvp3_score: Option<f64>,
}

impl MatchSummary {
    pub fn involves(&self, team_uuid: &str) -> bool {
        self.team1_uuid == team_uuid || self.team2_uuid == team_uuid
    }
}

// teams.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Team {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub team_icon: String,
    #[serde(default)]
    pub captain_uuid: Option<String>,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_matches: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_wins: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_runs_scored: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_runs_conceded: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub highest_total: u32,
    #[serde(default)]
    pub greatest_win_margin: Value,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_wickets_taken: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_wickets_given: u32,
}

// players.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Player {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub best_score: Option<u32>,
    #[serde(default)]
    pub best_bowling_figures: Option<BowlingFigures>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub awards: Awards,
}

impl Player {
    pub fn plays_for(&self, team_name: &str) -> bool {
        self.teams.iter().any(|t| t == team_name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BowlingFigures {
    #[serde(default)]
    pub wickets: Option<u32>,
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub overs: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Awards {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub player_of_match: u32,
}

// individual_player_stats.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatBlock {
    #[serde(default)]
    pub batting: Option<StatMap>,
    #[serde(default)]
    pub bowling: Option<StatMap>,
    #[serde(default)]
    pub fielding: Option<StatMap>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamStatBlock {
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(flatten)]
    pub stats: StatBlock,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerStatsRecord {
    pub player_uuid: String,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub overall_stats: Option<StatBlock>,
    /// Keyed by team uuid, in document order.
    #[serde(default, deserialize_with = "ordered_team_blocks")]
    pub team_wise_stats: Vec<(String, TeamStatBlock)>,
}

impl PlayerStatsRecord {
    pub fn team_block(&self, team_name: &str) -> Option<&TeamStatBlock> {
        self.team_wise_stats
            .iter()
            .map(|(_, block)| block)
            .find(|block| block.team_name.as_deref() == Some(team_name))
    }
}

fn ordered_team_blocks<'de, D>(deserializer: D) -> Result<Vec<(String, TeamStatBlock)>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Map<String, Value>> = Option::deserialize(deserializer)?;

    raw.unwrap_or_default()
        .into_iter()
        .map(|(team_uuid, value)| {
            TeamStatBlock::deserialize(value)
                .map(|block| (team_uuid, block))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

// summary_stats.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryStats {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_teams: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_players: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_matches_played: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_runs_scored: u32,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_wickets_taken: u32,
    #[serde(default)]
    pub highest_individual_score: IndividualScore,
    #[serde(default)]
    pub best_bowling_figures: BestBowling,
    #[serde(default)]
    pub highest_team_score: TeamScore,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndividualScore {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub score: u32,
    #[serde(default)]
    pub player_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BestBowling {
    #[serde(default)]
    pub figures: BowlingFigures,
    #[serde(default)]
    pub player_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamScore {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub score: u32,
    #[serde(default)]
    pub team_name: String,
}
