use super::find_player;
use super::team_stats::{aggregate_teams, TeamTally};
use crate::data::models::{MatchSummary, Player, Team};

#[derive(Debug, Clone)]
pub struct TeamStanding {
    pub team_uuid: String,
    pub name: String,
    pub team_icon: String,
    pub matches: u32,
    pub wins: u32,
    pub rating: f64,
    /// `rating` rescaled to 0–100 across the ranked set.
    pub scaled_rating: f64,
    pub win_pct: f64,
    pub highest: u32,
    pub lowest: Option<u32>,
}

impl TeamStanding {
    fn new(team: &Team, tally: Option<&TeamTally>) -> Self {
        let empty = TeamTally::new(team.uuid.clone());
        let tally = tally.unwrap_or(&empty);

        TeamStanding {
            team_uuid: team.uuid.clone(),
            name: team.name.clone(),
            team_icon: team.team_icon.clone(),
            matches: tally.matches,
            wins: tally.wins,
            rating: tally.rating(),
            scaled_rating: 0.0,
            win_pct: tally.win_pct(),
            highest: tally.highest,
            lowest: tally.lowest,
        }
    }
}

/// Min–max scale every rating onto 0–100. A set with no spread scores 100 across the board.
pub fn scale_ratings(standings: &mut [TeamStanding]) {
    let min = standings.iter().map(|s| s.rating).fold(f64::INFINITY, f64::min);
    let max = standings.iter().map(|s| s.rating).fold(f64::NEG_INFINITY, f64::max);

    for standing in standings.iter_mut() {
        standing.scaled_rating = if max == min {
            100.0
        } else {
            100.0 * (standing.rating - min) / (max - min)
        };
    }
}

/// Aggregate the schedule and rank teams by scaled rating, best first.
/// Teams with equal scores keep their team-list order.
pub fn rank_teams(teams: &[Team], matches: &[MatchSummary]) -> Vec<TeamStanding> {
    let tallies = aggregate_teams(matches, teams);

    let mut standings: Vec<TeamStanding> = teams
        .iter()
        .map(|team| {
            let tally = tallies.iter().find(|t| t.team_uuid == team.uuid);
            TeamStanding::new(team, tally)
        })
        .collect();

    scale_ratings(&mut standings);
    standings.sort_by(|a, b| {
        b.scaled_rating
            .partial_cmp(&a.scaled_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    standings
}

/// Team detail: captain, roster and the precomputed season totals.
#[derive(Debug, Clone)]
pub struct TeamProfile {
    pub team: Team,
    pub captain: String,
    pub members: Vec<String>,
}

pub fn team_profile(team: &Team, players: &[Player]) -> TeamProfile {
    let captain = team
        .captain_uuid
        .as_deref()
        .and_then(|uuid| find_player(players, uuid))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "—".to_string());

    let members = players
        .iter()
        .filter(|p| p.plays_for(&team.name))
        .map(|p| p.name.clone())
        .collect();

    TeamProfile {
        team: team.clone(),
        captain,
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(uuid: &str, name: &str) -> Team {
        Team {
            uuid: uuid.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn player(uuid: &str, name: &str, teams: &[&str]) -> Player {
        Player {
            uuid: uuid.to_string(),
            name: name.to_string(),
            teams: teams.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn played(t1: &str, r1: u32, t2: &str, r2: u32, winner: &str) -> MatchSummary {
        MatchSummary {
            team1_uuid: t1.to_string(),
            team1_runs: r1,
            team1_overs: Some(20.0),
            team2_uuid: t2.to_string(),
            team2_runs: r2,
            team2_overs: Some(20.0),
            winner_uuid: Some(winner.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn two_team_ratings_scale_to_extremes() {
        // A: 300/120 balls for, 250/120 against; B the mirror image
        let teams = vec![team("b", "Hawks"), team("a", "Falcons")];
        let matches = vec![played("a", 300, "b", 250, "a")];

        let standings = rank_teams(&teams, &matches);
        assert_eq!(standings[0].name, "Falcons");
        assert!((standings[0].rating - 0.4167).abs() < 1e-3);
        assert!((standings[1].rating + 0.4167).abs() < 1e-3);
        assert_eq!(standings[0].scaled_rating, 100.0);
        assert_eq!(standings[1].scaled_rating, 0.0);
        assert_eq!(standings[0].win_pct, 100.0);
        assert_eq!(standings[1].lowest, Some(250));
    }

    #[test]
    fn no_matches_scores_everyone_100() {
        let teams = vec![team("a", "Falcons"), team("b", "Hawks"), team("c", "Owls")];
        let standings = rank_teams(&teams, &[]);

        let names: Vec<&str> = standings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Falcons", "Hawks", "Owls"]);
        for s in &standings {
            assert_eq!(s.rating, 0.0);
            assert_eq!(s.scaled_rating, 100.0);
            assert_eq!(s.matches, 0);
            assert_eq!(s.lowest, None);
        }
    }

    #[test]
    fn middle_team_scales_linearly() {
        let teams = vec![team("a", "A"), team("b", "B"), team("c", "C")];
        let matches = vec![
            played("a", 180, "b", 120, "a"),
            played("b", 150, "c", 120, "b"),
        ];

        let standings = rank_teams(&teams, &matches);
        let b = standings.iter().find(|s| s.name == "B").unwrap();
        let (best, worst) = (standings[0].rating, standings[2].rating);
        let expected = 100.0 * (b.rating - worst) / (best - worst);
        assert!((b.scaled_rating - expected).abs() < 1e-9);
        assert_eq!(standings[0].name, "A");
        assert_eq!(standings[2].name, "C");
    }

    #[test]
    fn ranking_uses_aggregated_tallies() {
        let teams = vec![team("a", "Falcons"), team("b", "Hawks"), team("a", "Falcons II")];
        let matches = vec![
            played("a", 160, "b", 150, "a"),
            played("a", 200, "ghost", 90, "a"),
        ];

        let standings = rank_teams(&teams, &matches);
        let tallies = aggregate_teams(&matches, &teams);
        assert_eq!(tallies.len(), 2);

        // Duplicate uuids share the first tally; the match against an unknown side is skipped
        for name in ["Falcons", "Falcons II"] {
            let s = standings.iter().find(|s| s.name == name).unwrap();
            assert_eq!((s.matches, s.wins, s.highest), (1, 1, 160));
            assert_eq!(s.rating, tallies[0].rating());
        }
        assert_eq!(standings[2].name, "Hawks");
    }

    #[test]
    fn empty_team_list_ranks_nothing() {
        assert!(rank_teams(&[], &[played("a", 1, "b", 2, "b")]).is_empty());
    }

    #[test]
    fn profile_resolves_captain_and_members() {
        let falcons = Team {
            captain_uuid: Some("p2".to_string()),
            ..team("a", "Falcons")
        };
        let players = vec![
            player("p1", "Asha", &["Falcons"]),
            player("p2", "Bilal", &["Hawks", "Falcons"]),
            player("p3", "Chen", &["Hawks"]),
        ];

        let profile = team_profile(&falcons, &players);
        assert_eq!(profile.captain, "Bilal");
        assert_eq!(profile.members, vec!["Asha", "Bilal"]);

        let no_captain = team_profile(&team("b", "Hawks"), &players);
        assert_eq!(no_captain.captain, "—");
    }
}
