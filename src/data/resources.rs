// Dataset file names, relative to the data directory or base URL.

pub const MATCH_SUMMARIES: &str = "match_summaries.json";
pub const PLAYERS: &str = "players.json";
pub const TEAMS: &str = "teams.json";
pub const PLAYER_STATS: &str = "individual_player_stats.json";
pub const SUMMARY_STATS: &str = "summary_stats.json";

pub const ALL: [&str; 5] = [MATCH_SUMMARIES, PLAYERS, TEAMS, PLAYER_STATS, SUMMARY_STATS];
