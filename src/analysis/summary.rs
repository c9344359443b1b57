use super::stat_selector::{fields, Metric};
use crate::data::models::{PlayerStatsRecord, StatBlock, StatMap, SummaryStats};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub main: String,
    pub detail: Option<String>,
    pub subtle: Option<String>,
}

impl SummaryCard {
    fn plain(title: &'static str, main: impl ToString) -> Self {
        SummaryCard {
            title,
            main: main.to_string(),
            detail: None,
            subtle: None,
        }
    }
}

fn figure<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Headline tournament cards in display order.
pub fn summary_cards(stats: &SummaryStats) -> Vec<SummaryCard> {
    let bowling = &stats.best_bowling_figures;

    vec![
        SummaryCard::plain("Total Teams", stats.total_teams),
        SummaryCard::plain("Total Players", stats.total_players),
        SummaryCard::plain("Matches", stats.total_matches_played),
        SummaryCard::plain("Runs", stats.total_runs_scored),
        SummaryCard::plain("Wickets", stats.total_wickets_taken),
        SummaryCard {
            detail: Some(format!("({})", stats.highest_individual_score.player_name)),
            ..SummaryCard::plain("Highest Individual Score", stats.highest_individual_score.score)
        },
        SummaryCard {
            title: "Best Bowling Figures",
            main: format!(
                "{}/{}",
                figure(bowling.figures.wickets),
                figure(bowling.figures.runs)
            ),
            detail: Some(format!("in {} ov", figure(bowling.figures.overs))),
            subtle: Some(format!("({})", bowling.player_name)),
        },
        SummaryCard {
            detail: Some(format!("({})", stats.highest_team_score.team_name)),
            ..SummaryCard::plain("Highest Team Score", stats.highest_team_score.score)
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub name: String,
    pub value: f64,
}

fn overall_metric(
    record: &PlayerStatsRecord,
    block: fn(&StatBlock) -> Option<&StatMap>,
    candidates: &[&str],
) -> f64 {
    let map = record.overall_stats.as_ref().and_then(block);
    Metric::lookup(map, candidates).as_f64_or_zero()
}

/// Highest values first, ties in input order, at most `n` entries.
fn leaders<F>(stats: &[PlayerStatsRecord], n: usize, value_of: F) -> Vec<Leader>
where
    F: Fn(&PlayerStatsRecord) -> f64,
{
    let mut leaders: Vec<Leader> = stats
        .iter()
        .map(|record| Leader {
            name: record.player_name.clone(),
            value: value_of(record),
        })
        .collect();

    leaders.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    leaders.truncate(n);
    leaders
}

pub fn top_run_scorers(stats: &[PlayerStatsRecord], n: usize) -> Vec<Leader> {
    leaders(stats, n, |r| overall_metric(r, |b| b.batting.as_ref(), fields::RUNS))
}

pub fn top_wicket_takers(stats: &[PlayerStatsRecord], n: usize) -> Vec<Leader> {
    leaders(stats, n, |r| overall_metric(r, |b| b.bowling.as_ref(), fields::WICKETS))
}
