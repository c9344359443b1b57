use super::{find_player, find_stats, find_team, find_team_by_name};
use crate::data::models::{MatchSummary, Player, PlayerStatsRecord, Team};

/// Player-of-the-match count, scoped to one team when a known team name is given.
///
/// The precomputed counter on the player is not team-aware, so a team filter
/// recounts from the match list.
pub fn count_player_of_match(
    player: &Player,
    team_filter: Option<&str>,
    teams: &[Team],
    matches: &[MatchSummary],
) -> u32 {
    let team_uuid = team_filter
        .filter(|name| !name.is_empty())
        .and_then(|name| find_team_by_name(teams, name))
        .map(|team| team.uuid.as_str());

    match team_uuid {
        None => player.awards.player_of_match,
        Some(uuid) => matches
            .iter()
            .filter(|m| m.player_of_match_uuid.as_deref() == Some(player.uuid.as_str()))
            .filter(|m| m.involves(uuid))
            .count() as u32,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AwardEntry {
    pub label: String,
    pub player_uuid: String,
    pub player_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchAwards {
    pub team1: Vec<AwardEntry>,
    pub team2: Vec<AwardEntry>,
}

fn score_label(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.to_string())
}

/// The fixed award slots of a match, in display order, with their holders.
pub fn award_slots(m: &MatchSummary) -> Vec<(String, Option<&str>)> {
    vec![
        ("Player of the Match".to_string(), m.player_of_match_uuid.as_deref()),
        ("Best Batter".to_string(), m.best_batter_uuid.as_deref()),
        ("Best Bowler".to_string(), m.best_bowler_uuid.as_deref()),
        (format!("MVP 1 ({})", score_label(m.mvp1_score)), m.mvp1_uuid.as_deref()),
        (format!("MVP 2 ({})", score_label(m.mvp2_score)), m.mvp2_uuid.as_deref()),
        (format!("MVP 3 ({})", score_label(m.mvp3_score)), m.mvp3_uuid.as_deref()),
    ]
}

/// File each award under the side its holder played for in this match.
///
/// The side is the first key of the holder's per-team statistics that is one
/// of the two participating team uuids. Slots with no holder, no statistics
/// record or no matching side are left out.
pub fn attribute_awards(
    m: &MatchSummary,
    players: &[Player],
    stats: &[PlayerStatsRecord],
) -> MatchAwards {
    let mut awards = MatchAwards::default();

    for (label, holder) in award_slots(m) {
        let Some(player_uuid) = holder.filter(|uuid| !uuid.is_empty()) else {
            continue;
        };
        let Some(record) = find_stats(stats, player_uuid) else {
            continue;
        };
        let side = record
            .team_wise_stats
            .iter()
            .map(|(team_uuid, _)| team_uuid.as_str())
            .find(|team_uuid| *team_uuid == m.team1_uuid || *team_uuid == m.team2_uuid);

        let entry = AwardEntry {
            label,
            player_uuid: player_uuid.to_string(),
            player_name: find_player(players, player_uuid)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "–".to_string()),
        };

        match side {
            Some(team_uuid) if team_uuid == m.team1_uuid => awards.team1.push(entry),
            Some(_) => awards.team2.push(entry),
            None => {}
        }
    }

    awards
}

#[derive(Debug, Clone)]
pub struct SideDetail {
    pub name: String,
    pub team_icon: String,
    pub runs: u32,
    pub wickets: u32,
    pub overs: String,
    pub awards: Vec<AwardEntry>,
}

#[derive(Debug, Clone)]
pub struct MatchDetail {
    pub date: String,
    pub time: String,
    pub ground: String,
    pub stage: String,
    pub team1: SideDetail,
    pub team2: SideDetail,
    pub winner: String,
    pub win_margin: String,
}

/// Everything the match detail view shows for one match.
pub fn match_detail(
    m: &MatchSummary,
    teams: &[Team],
    players: &[Player],
    stats: &[PlayerStatsRecord],
) -> MatchDetail {
    let awards = attribute_awards(m, players, stats);

    let side = |uuid: &str, placeholder: &str, runs, wickets, overs: Option<f64>, awards| {
        let team = find_team(teams, uuid);
        SideDetail {
            name: team.map_or_else(|| placeholder.to_string(), |t| t.name.clone()),
            team_icon: team.map(|t| t.team_icon.clone()).unwrap_or_default(),
            runs,
            wickets,
            overs: overs.map_or_else(|| "-".to_string(), |o| o.to_string()),
            awards,
        }
    };

    MatchDetail {
        date: m.date.clone(),
        time: m.time.clone(),
        ground: m.ground.clone(),
        stage: super::stage::normalize_stage(&m.match_type).to_string(),
        team1: side(
            &m.team1_uuid,
            "Team 1",
            m.team1_runs,
            m.team1_wickets,
            m.team1_overs,
            awards.team1,
        ),
        team2: side(
            &m.team2_uuid,
            "Team 2",
            m.team2_runs,
            m.team2_wickets,
            m.team2_overs,
            awards.team2,
        ),
        winner: m
            .winner_uuid
            .as_deref()
            .and_then(|uuid| find_team(teams, uuid))
            .map_or_else(|| "Unknown".to_string(), |t| t.name.clone()),
        win_margin: m.win_margin.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn team(uuid: &str, name: &str) -> Team {
        Team {
            uuid: uuid.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn player(uuid: &str, name: &str, poms: u32) -> Player {
        let mut p = Player {
            uuid: uuid.to_string(),
            name: name.to_string(),
            ..Default::default()
        };
        p.awards.player_of_match = poms;
        p
    }

    fn pom_match(t1: &str, t2: &str, pom: &str) -> MatchSummary {
        MatchSummary {
            team1_uuid: t1.to_string(),
            team2_uuid: t2.to_string(),
            player_of_match_uuid: Some(pom.to_string()),
            ..Default::default()
        }
    }

    fn stats_for(player_uuid: &str, team_uuids: &[&str]) -> PlayerStatsRecord {
        let blocks: serde_json::Map<String, serde_json::Value> = team_uuids
            .iter()
            .map(|uuid| (uuid.to_string(), json!({"team_name": uuid, "batting": {}})))
            .collect();
        let raw = json!({"player_uuid": player_uuid, "team_wise_stats": blocks});
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn team_filter_recounts_player_of_match() {
        let teams = vec![team("fal", "Falcons"), team("haw", "Hawks"), team("owl", "Owls")];
        let asha = player("p1", "Asha", 5);
        let matches = vec![
            pom_match("fal", "haw", "p1"),
            pom_match("owl", "fal", "p1"),
            pom_match("haw", "owl", "p1"),
            pom_match("haw", "owl", "p1"),
            pom_match("owl", "haw", "p1"),
            pom_match("fal", "owl", "p9"),
        ];

        assert_eq!(count_player_of_match(&asha, None, &teams, &matches), 5);
        assert_eq!(count_player_of_match(&asha, Some("Falcons"), &teams, &matches), 2);
        assert_eq!(count_player_of_match(&asha, Some("Hawks"), &teams, &matches), 4);
    }

    #[test]
    fn unknown_team_filter_uses_counter() {
        let asha = player("p1", "Asha", 5);
        let matches = vec![pom_match("fal", "haw", "p1")];

        assert_eq!(count_player_of_match(&asha, Some("Nobody"), &[], &matches), 5);
        assert_eq!(count_player_of_match(&asha, Some(""), &[], &matches), 5);
    }

    #[test]
    fn awards_go_to_the_holders_side() {
        let m = MatchSummary {
            team1_uuid: "fal".to_string(),
            team2_uuid: "haw".to_string(),
            player_of_match_uuid: Some("p1".to_string()),
            best_batter_uuid: Some("p1".to_string()),
            best_bowler_uuid: Some("p2".to_string()),
            mvp1_uuid: Some("p2".to_string()),
            mvp1_score: Some(88.5),
            mvp2_uuid: Some("p3".to_string()),
            mvp2_score: Some(40.0),
            mvp3_uuid: None,
            ..Default::default()
        };
        let players = vec![player("p1", "Asha", 0), player("p2", "Bilal", 0)];
        let stats = vec![
            stats_for("p1", &["owl", "fal"]),
            stats_for("p2", &["haw"]),
            stats_for("p3", &["haw"]),
        ];

        let awards = attribute_awards(&m, &players, &stats);
        let team1: Vec<(&str, &str)> = awards
            .team1
            .iter()
            .map(|a| (a.label.as_str(), a.player_name.as_str()))
            .collect();
        assert_eq!(team1, vec![("Player of the Match", "Asha"), ("Best Batter", "Asha")]);

        let team2: Vec<(&str, &str)> = awards
            .team2
            .iter()
            .map(|a| (a.label.as_str(), a.player_name.as_str()))
            .collect();
        assert_eq!(
            team2,
            vec![("Best Bowler", "Bilal"), ("MVP 1 (88.5)", "Bilal"), ("MVP 2 (40)", "–")]
        );
    }

    #[test]
    fn unattributable_awards_are_dropped() {
        let m = MatchSummary {
            team1_uuid: "fal".to_string(),
            team2_uuid: "haw".to_string(),
            player_of_match_uuid: Some("no-stats".to_string()),
            best_batter_uuid: Some("elsewhere".to_string()),
            best_bowler_uuid: Some(String::new()),
            ..Default::default()
        };
        let stats = vec![stats_for("elsewhere", &["owl"])];

        assert_eq!(attribute_awards(&m, &[], &stats), MatchAwards::default());
    }

    #[test]
    fn first_matching_key_decides_side() {
        let m = pom_match("fal", "haw", "p1");
        let stats = vec![stats_for("p1", &["haw", "fal"])];

        let awards = attribute_awards(&m, &[], &stats);
        assert!(awards.team1.is_empty());
        assert_eq!(awards.team2.len(), 1);
    }

    #[test]
    fn detail_resolves_sides_and_winner() {
        let teams = vec![team("fal", "Falcons")];
        let mut m = pom_match("fal", "ghost", "p1");
        m.team1_runs = 150;
        m.team1_wickets = 7;
        m.team1_overs = Some(20.0);
        m.winner_uuid = Some("ghost".to_string());
        m.match_type = "Semi Final".to_string();

        let detail = match_detail(&m, &teams, &[], &[]);
        assert_eq!(detail.team1.name, "Falcons");
        assert_eq!(detail.team1.overs, "20");
        assert_eq!(detail.team2.name, "Team 2");
        assert_eq!(detail.team2.overs, "-");
        assert_eq!(detail.winner, "Unknown");
        assert_eq!(detail.stage, "Semi");
    }
}
