use super::stat_selector::{fields, Metric};
use crate::data::models::StatBlock;
use std::fmt;

pub const GOOD_BATTING_AVERAGE: f64 = 35.0;
pub const GOOD_WICKET_TALLY: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRole {
    Keeper,
    Allrounder,
    Bowler,
    Batsman,
    Fielder,
    Default,
}

impl PlayerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerRole::Keeper => "keeper",
            PlayerRole::Allrounder => "allrounder",
            PlayerRole::Bowler => "bowler",
            PlayerRole::Batsman => "batsman",
            PlayerRole::Fielder => "fielder",
            PlayerRole::Default => "default",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs per innings, counting zero innings as one.
pub fn batting_average(runs: f64, innings: f64) -> f64 {
    runs / innings.max(1.0)
}

/// Infer a role from a player's overall statistics. First matching rule wins.
pub fn classify_player(overall: Option<&StatBlock>) -> PlayerRole {
    let Some(block) = overall else {
        return PlayerRole::Default;
    };
    let (Some(batting), Some(bowling), Some(fielding)) =
        (block.batting.as_ref(), block.bowling.as_ref(), block.fielding.as_ref())
    else {
        return PlayerRole::Default;
    };

    let runs = Metric::lookup(Some(batting), fields::RUNS).as_f64_or_zero();
    let innings = Metric::lookup(Some(batting), fields::INNINGS).as_f64_or_zero();
    let wickets = Metric::lookup(Some(bowling), fields::WICKETS).as_f64_or_zero();
    let stumpings = Metric::lookup(Some(fielding), fields::STUMPINGS).as_f64_or_zero();
    let dismissals = Metric::lookup(Some(fielding), fields::DISMISSALS).as_f64_or_zero();

    let average = batting_average(runs, innings);
    let good_bat = average >= GOOD_BATTING_AVERAGE;
    let good_bowl = wickets >= GOOD_WICKET_TALLY;

    if stumpings > 0.0 && wickets == 0.0 {
        PlayerRole::Keeper
    } else if good_bat && good_bowl {
        PlayerRole::Allrounder
    } else if good_bowl && !good_bat {
        PlayerRole::Bowler
    } else if good_bat && !good_bowl {
        PlayerRole::Batsman
    } else if runs == 0.0 && wickets == 0.0 && dismissals > 0.0 {
        PlayerRole::Fielder
    } else {
        PlayerRole::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn block(value: Value) -> StatBlock {
        serde_json::from_value(value).unwrap()
    }

    fn overall(
        runs: u32,
        innings: u32,
        wickets: u32,
        stumpings: u32,
        dismissals: u32,
    ) -> StatBlock {
        block(json!({
            "batting": {"total_runs": runs, "total_innings": innings},
            "bowling": {"total_wickets": wickets},
            "fielding": {"stumpings": stumpings, "total_dismissals": dismissals}
        }))
    }

    #[test]
    fn batsman_bowler_allrounder() {
        assert_eq!(classify_player(Some(&overall(200, 5, 0, 0, 0))), PlayerRole::Batsman);
        assert_eq!(classify_player(Some(&overall(100, 5, 6, 0, 0))), PlayerRole::Bowler);
        assert_eq!(classify_player(Some(&overall(200, 5, 6, 0, 0))), PlayerRole::Allrounder);
    }

    #[test]
    fn keeper_needs_stumpings_and_no_wickets() {
        assert_eq!(classify_player(Some(&overall(90, 6, 0, 3, 3))), PlayerRole::Keeper);
        // A stumping bowler is classified on batting/bowling instead
        assert_eq!(classify_player(Some(&overall(90, 6, 5, 3, 3))), PlayerRole::Bowler);
    }

    #[test]
    fn keeper_outranks_batsman() {
        assert_eq!(classify_player(Some(&overall(400, 8, 0, 1, 1))), PlayerRole::Keeper);
    }

    #[test]
    fn fielder_has_only_dismissals() {
        assert_eq!(classify_player(Some(&overall(0, 0, 0, 0, 2))), PlayerRole::Fielder);
        assert_eq!(classify_player(Some(&overall(0, 0, 0, 0, 0))), PlayerRole::Default);
        assert_eq!(classify_player(Some(&overall(12, 4, 1, 0, 2))), PlayerRole::Default);
    }

    #[test]
    fn absent_blocks_are_default() {
        assert_eq!(classify_player(None), PlayerRole::Default);
        let no_fielding = block(json!({
            "batting": {"total_runs": 500},
            "bowling": {"total_wickets": 9}
        }));
        assert_eq!(classify_player(Some(&no_fielding)), PlayerRole::Default);
        assert_eq!(
            classify_player(Some(&block(json!({"batting": {}, "bowling": {}, "fielding": null})))),
            PlayerRole::Default
        );
    }

    #[test]
    fn zero_innings_counts_as_one() {
        assert_eq!(batting_average(40.0, 0.0), 40.0);
        assert_eq!(batting_average(200.0, 5.0), 40.0);
        assert_eq!(classify_player(Some(&overall(35, 0, 0, 0, 0))), PlayerRole::Batsman);
    }

    #[test]
    fn short_field_names_are_understood() {
        let stats = block(json!({
            "batting": {"runs": 10, "innings": 4},
            "bowling": {"wickets": 7},
            "fielding": {"dismissals": 1}
        }));
        assert_eq!(classify_player(Some(&stats)), PlayerRole::Bowler);
    }

    #[test]
    fn role_labels() {
        assert_eq!(PlayerRole::Allrounder.to_string(), "allrounder");
        assert_eq!(PlayerRole::Default.as_str(), "default");
    }
}
