use crate::data::models::{PlayerStatsRecord, StatBlock, StatMap};
use serde_json::Value;
use std::fmt;

/// Shown for a metric none of whose candidate fields is present.
pub const PLACEHOLDER: &str = "-";

/// Candidate field names per metric, most specific first.
pub mod fields {
    pub const MATCHES: &[&str] = &["total_matches", "matches"];
    pub const INNINGS: &[&str] = &["total_innings", "innings"];
    pub const RUNS: &[&str] = &["total_runs", "runs"];
    pub const HIGHEST: &[&str] = &["highest_score", "highest"];
    pub const STRIKE_RATE: &[&str] = &["strike_rate"];
    pub const AVERAGE: &[&str] = &["average"];
    pub const WICKETS: &[&str] = &["total_wickets", "wickets"];
    pub const OVERS: &[&str] = &["overs_bowled", "overs"];
    pub const ECONOMY: &[&str] = &["economy_rate"];
    pub const CATCHES: &[&str] = &["total_catches", "catches"];
    pub const STUMPINGS: &[&str] = &["stumpings"];
    pub const DISMISSALS: &[&str] = &["total_dismissals", "dismissals"];
}

/// One normalized statistic; `None` when the source had no usable field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metric(Option<Value>);

impl Metric {
    /// First candidate present with a non-null value.
    pub fn lookup(map: Option<&StatMap>, candidates: &[&str]) -> Self {
        let found = map.and_then(|map| {
            candidates
                .iter()
                .filter_map(|name| map.get(*name))
                .find(|value| !value.is_null())
        });
        Metric(found.cloned())
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Numeric reading, accepting numbers encoded as strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self.0.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_f64_or_zero(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str(PLACEHOLDER),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BattingLine {
    pub matches: Metric,
    pub innings: Metric,
    pub runs: Metric,
    pub highest: Metric,
    pub strike_rate: Metric,
    pub average: Metric,
}

impl BattingLine {
    pub fn from_map(map: Option<&StatMap>) -> Self {
        BattingLine {
            matches: Metric::lookup(map, fields::MATCHES),
            innings: Metric::lookup(map, fields::INNINGS),
            runs: Metric::lookup(map, fields::RUNS),
            highest: Metric::lookup(map, fields::HIGHEST),
            strike_rate: Metric::lookup(map, fields::STRIKE_RATE),
            average: Metric::lookup(map, fields::AVERAGE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BowlingLine {
    pub matches: Metric,
    pub innings: Metric,
    pub wickets: Metric,
    pub overs: Metric,
    pub economy: Metric,
    pub average: Metric,
}

impl BowlingLine {
    pub fn from_map(map: Option<&StatMap>) -> Self {
        BowlingLine {
            matches: Metric::lookup(map, fields::MATCHES),
            innings: Metric::lookup(map, fields::INNINGS),
            wickets: Metric::lookup(map, fields::WICKETS),
            overs: Metric::lookup(map, fields::OVERS),
            economy: Metric::lookup(map, fields::ECONOMY),
            average: Metric::lookup(map, fields::AVERAGE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldingLine {
    pub matches: Metric,
    pub catches: Metric,
    pub stumpings: Metric,
    pub dismissals: Metric,
}

impl FieldingLine {
    pub fn from_map(map: Option<&StatMap>) -> Self {
        FieldingLine {
            matches: Metric::lookup(map, fields::MATCHES),
            catches: Metric::lookup(map, fields::CATCHES),
            stumpings: Metric::lookup(map, fields::STUMPINGS),
            dismissals: Metric::lookup(map, fields::DISMISSALS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedStats {
    pub batting: BattingLine,
    pub bowling: BowlingLine,
    pub fielding: FieldingLine,
}

impl NormalizedStats {
    pub fn from_block(block: Option<&StatBlock>) -> Self {
        NormalizedStats {
            batting: BattingLine::from_map(block.and_then(|b| b.batting.as_ref())),
            bowling: BowlingLine::from_map(block.and_then(|b| b.bowling.as_ref())),
            fielding: FieldingLine::from_map(block.and_then(|b| b.fielding.as_ref())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatScope {
    Overall,
    Team(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamBreakdown {
    pub team_uuid: String,
    pub team_name: String,
    pub stats: NormalizedStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatSelection {
    pub scope: StatScope,
    pub stats: NormalizedStats,
    /// Present when a per-team breakdown should be shown next to the overall block.
    pub breakdown: Option<Vec<TeamBreakdown>>,
}

/// Pick which statistics block to show for a player.
///
/// A filter that names one of the player's team blocks shows only that block.
/// Otherwise the overall block is shown, plus a breakdown when the player has
/// more than one team block.
pub fn select_stats(
    record: Option<&PlayerStatsRecord>,
    team_filter: Option<&str>,
) -> StatSelection {
    let team_filter = team_filter.filter(|t| !t.is_empty());

    if let (Some(record), Some(team_name)) = (record, team_filter) {
        if let Some(block) = record.team_block(team_name) {
            return StatSelection {
                scope: StatScope::Team(team_name.to_string()),
                stats: NormalizedStats::from_block(Some(&block.stats)),
                breakdown: None,
            };
        }
    }

    let overall = record.and_then(|r| r.overall_stats.as_ref());
    let team_blocks = record.map(|r| r.team_wise_stats.as_slice()).unwrap_or_default();

    let breakdown: Option<Vec<TeamBreakdown>> = (team_blocks.len() > 1).then(|| {
        team_blocks
            .iter()
            .map(|(team_uuid, block)| TeamBreakdown {
                team_uuid: team_uuid.clone(),
                team_name: block
                    .team_name
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
                stats: NormalizedStats::from_block(Some(&block.stats)),
            })
            .collect()
    });

    StatSelection {
        scope: StatScope::Overall,
        stats: NormalizedStats::from_block(overall),
        breakdown,
    }
}
