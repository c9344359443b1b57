pub mod awards;
pub mod player_role;
pub mod roster;
pub mod stage;
pub mod standings;
pub mod stat_selector;
pub mod summary;
pub mod team_stats;
pub mod timeline;

use crate::data::models::{Player, PlayerStatsRecord, Team};

// Lookups return None for unknown ids; callers decide on the placeholder.

pub fn find_team<'a>(teams: &'a [Team], uuid: &str) -> Option<&'a Team> {
    teams.iter().find(|t| t.uuid == uuid)
}

pub fn find_team_by_name<'a>(teams: &'a [Team], name: &str) -> Option<&'a Team> {
    teams.iter().find(|t| t.name == name)
}

pub fn find_player<'a>(players: &'a [Player], uuid: &str) -> Option<&'a Player> {
    players.iter().find(|p| p.uuid == uuid)
}

pub fn find_player_by_name<'a>(players: &'a [Player], name: &str) -> Option<&'a Player> {
    players
        .iter()
        .find(|p| p.name == name)
        .or_else(|| players.iter().find(|p| p.name.eq_ignore_ascii_case(name)))
}

pub fn find_stats<'a>(
    stats: &'a [PlayerStatsRecord],
    player_uuid: &str,
) -> Option<&'a PlayerStatsRecord> {
    stats.iter().find(|r| r.player_uuid == player_uuid)
}
