use crate::data::models::{MatchSummary, Team};
use std::collections::HashMap;

/// Legal balls for an overs figure, as `round(overs * 6)`.
///
/// The fractional part is treated as tenths of an over, so `19.4` gives 116
/// rather than the 118 balls cricket notation would mean.
pub fn overs_to_balls(overs: f64) -> u32 {
    (overs * 6.0).round().max(0.0) as u32
}

/// Running batting/bowling totals for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamTally {
    pub team_uuid: String,
    pub runs_scored: u32,
    pub balls_faced: u32,
    pub runs_conceded: u32,
    pub balls_bowled: u32,
    pub matches: u32,
    pub wins: u32,
    pub highest: u32,
    /// `None` until the first match is folded in.
    pub lowest: Option<u32>,
}

impl TeamTally {
    pub fn new(team_uuid: String) -> Self {
        TeamTally {
            team_uuid,
            runs_scored: 0,
            balls_faced: 0,
            runs_conceded: 0,
            balls_bowled: 0,
            matches: 0,
            wins: 0,
            highest: 0,
            lowest: None,
        }
    }

    pub fn add_match(&mut self, runs: u32, overs: f64, opp_runs: u32, opp_overs: f64, won: bool) {
        self.runs_scored += runs;
        self.balls_faced += overs_to_balls(overs);
        self.runs_conceded += opp_runs;
        self.balls_bowled += overs_to_balls(opp_overs);

        self.matches += 1;
        if won {
            self.wins += 1;
        }

        self.highest = self.highest.max(runs);
        self.lowest = Some(self.lowest.map_or(runs, |low| low.min(runs)));
    }

    /// Runs per ball faced minus runs per ball bowled; 0 when either is empty.
    pub fn rating(&self) -> f64 {
        if self.balls_faced == 0 || self.balls_bowled == 0 {
            0.0
        } else {
            self.runs_scored as f64 / self.balls_faced as f64
                - self.runs_conceded as f64 / self.balls_bowled as f64
        }
    }

    pub fn win_pct(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            (self.wins as f64 / self.matches as f64) * 100.0
        }
    }
}

pub struct TeamStatsTracker {
    tallies: Vec<TeamTally>,
    index: HashMap<String, usize>,
}

impl TeamStatsTracker {
    pub fn new(teams: &[Team]) -> Self {
        let mut tracker = TeamStatsTracker {
            tallies: Vec::with_capacity(teams.len()),
            index: HashMap::new(),
        };

        for team in teams {
            if !tracker.index.contains_key(&team.uuid) {
                tracker.index.insert(team.uuid.clone(), tracker.tallies.len());
                tracker.tallies.push(TeamTally::new(team.uuid.clone()));
            }
        }

        tracker
    }

    /// Folds one match into both sides. Returns false, leaving every tally
    /// untouched, when either team is unknown.
    pub fn add_match(&mut self, m: &MatchSummary) -> bool {
        let t1 = self.index.get(&m.team1_uuid).copied();
        let t2 = self.index.get(&m.team2_uuid).copied();
        let (Some(t1), Some(t2)) = (t1, t2) else {
            return false;
        };

        let overs1 = m.team1_overs.unwrap_or(0.0);
        let overs2 = m.team2_overs.unwrap_or(0.0);
        let winner = m.winner_uuid.as_deref();

        self.tallies[t1].add_match(
            m.team1_runs,
            overs1,
            m.team2_runs,
            overs2,
            winner == Some(m.team1_uuid.as_str()),
        );
        self.tallies[t2].add_match(
            m.team2_runs,
            overs2,
            m.team1_runs,
            overs1,
            winner == Some(m.team2_uuid.as_str()),
        );

        true
    }

    pub fn get(&self, team_uuid: &str) -> Option<&TeamTally> {
        self.index.get(team_uuid).map(|&i| &self.tallies[i])
    }
}

/// One tally per distinct team uuid, in team-list order.
pub fn aggregate_teams(matches: &[MatchSummary], teams: &[Team]) -> Vec<TeamTally> {
    let mut tracker = TeamStatsTracker::new(teams);
    for m in matches {
        tracker.add_match(m);
    }
    tracker.tallies
}
