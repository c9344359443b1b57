use super::find_team;
use super::stage::{normalize_stage, stage_class, StageClass};
use crate::data::models::{MatchSummary, Team};
use chrono::{NaiveDate, NaiveTime, Timelike};
use std::collections::HashMap;

pub const ALL_STAGES: &str = "all";

#[derive(Debug, Clone)]
pub struct MatchCard {
    /// 1-based position in the source list.
    pub number: usize,
    pub time: String,
    pub stage: String,
    pub class: StageClass,
    pub team1: String,
    pub team2: String,
    pub winner: String,
    pub win_margin: String,
}

#[derive(Debug, Clone)]
pub struct DateGroup {
    pub date: String,
    pub matches: Vec<MatchCard>,
}

/// `DD-MM-YY`, two-digit years counted from 2000.
pub fn parse_match_date(date: &str) -> Option<NaiveDate> {
    let mut parts = date.trim().split('-').map(|p| p.parse::<u32>().ok());
    let (day, month, year) = (parts.next()??, parts.next()??, parts.next()??);
    if parts.next().is_some() {
        return None;
    }
    let year = i32::try_from(year).ok()?.checked_add(2000)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Minutes after midnight for `H:MM AM/PM` (or 24-hour `H:MM`).
pub fn parse_match_time(time: &str) -> Option<u32> {
    let time = time.trim();
    let parsed = NaiveTime::parse_from_str(&time.to_uppercase(), "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()?;
    Some(parsed.hour() * 60 + parsed.minute())
}

fn card_for(number: usize, m: &MatchSummary, stage: &str, teams: &[Team]) -> MatchCard {
    let name_of = |uuid: &str, placeholder: &str| {
        find_team(teams, uuid)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| placeholder.to_string())
    };

    MatchCard {
        number,
        time: m.time.clone(),
        stage: stage.to_string(),
        class: stage_class(stage),
        team1: name_of(&m.team1_uuid, "Team 1"),
        team2: name_of(&m.team2_uuid, "Team 2"),
        winner: name_of(m.winner_uuid.as_deref().unwrap_or(""), "Unknown"),
        win_margin: m.win_margin.clone(),
    }
}

/// Matches grouped by date in calendar order, each day ordered by start time.
/// Unparseable dates and times sort last.
///
/// `stage_filter` compares against normalized stages; `None` or `"all"` keeps everything.
pub fn build_timeline(
    matches: &[MatchSummary],
    teams: &[Team],
    stage_filter: Option<&str>,
) -> Vec<DateGroup> {
    let filter = stage_filter.filter(|s| *s != ALL_STAGES);

    let mut groups: Vec<DateGroup> = Vec::new();
    let mut by_date: HashMap<&str, usize> = HashMap::new();

    for (idx, m) in matches.iter().enumerate() {
        let stage = normalize_stage(&m.match_type);
        if filter.is_some_and(|f| f != stage) {
            continue;
        }

        let slot = *by_date.entry(m.date.as_str()).or_insert_with(|| {
            groups.push(DateGroup {
                date: m.date.clone(),
                matches: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].matches.push(card_for(idx + 1, m, stage, teams));
    }

    groups.sort_by_cached_key(|g| {
        let date = parse_match_date(&g.date);
        (date.is_none(), date, g.date.clone())
    });

    for group in &mut groups {
        group.matches.sort_by_cached_key(|card| {
            let minutes = parse_match_time(&card.time);
            (minutes.is_none(), minutes)
        });
    }

    groups
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

    fn fixture(date: &str, time: &str, match_type: &str) -> MatchSummary {
        MatchSummary {
            date: date.to_string(),
            time: time.to_string(),
            match_type: match_type.to_string(),
            team1_uuid: "a".to_string(),
            team2_uuid: "b".to_string(),
            winner_uuid: Some("a".to_string()),
            win_margin: "12 runs".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_dates_and_times() {
        assert_eq!(parse_match_date("05-02-24"), NaiveDate::from_ymd_opt(2024, 2, 5));
        assert_eq!(parse_match_date("31-02-24"), None);
        assert_eq!(parse_match_date("TBD"), None);
        assert_eq!(parse_match_date("01-01-2147483000"), None);
        assert_eq!(parse_match_date("01-01-4294967295"), None);

        assert_eq!(parse_match_time("9:05 AM"), Some(9 * 60 + 5));
        assert_eq!(parse_match_time("1:30 PM"), Some(13 * 60 + 30));
        assert_eq!(parse_match_time("12:15 PM"), Some(12 * 60 + 15));
        assert_eq!(parse_match_time("12:15 AM"), Some(15));
        assert_eq!(parse_match_time("later"), None);
    }

    #[test]
    fn groups_by_date_in_calendar_order() {
        let matches = vec![
            fixture("02-03-24", "9:00 AM", "League Match"),
            fixture("28-02-24", "2:00 PM", "League Match"),
            fixture("02-03-24", "7:30 AM", "League Match"),
            fixture("15-01-25", "9:00 AM", "Final"),
        ];
        let teams = vec![team("a", "Falcons"), team("b", "Hawks")];

        let timeline = build_timeline(&matches, &teams, None);
        let dates: Vec<&str> = timeline.iter().map(|g| g.date.as_str()).collect();
        assert_eq!(dates, vec!["28-02-24", "02-03-24", "15-01-25"]);

        let march: Vec<usize> = timeline[1].matches.iter().map(|c| c.number).collect();
        assert_eq!(march, vec![3, 1]);
    }

    #[test]
    fn noon_sorts_after_morning() {
        let matches = vec![
            fixture("01-03-24", "12:30 PM", "League Match"),
            fixture("01-03-24", "11:00 AM", "League Match"),
            fixture("01-03-24", "whenever", "League Match"),
        ];

        let timeline = build_timeline(&matches, &[], None);
        let order: Vec<usize> = timeline[0].matches.iter().map(|c| c.number).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn filters_on_normalized_stage() {
        let matches = vec![
            fixture("01-03-24", "9:00 AM", "League Match"),
            fixture("05-03-24", "9:00 AM", "Third Position"),
            fixture("05-03-24", "1:00 PM", "Eliminator"),
        ];

        let timeline = build_timeline(&matches, &[], Some("Eliminator"));
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].matches.len(), 2);
        assert!(timeline[0].matches.iter().all(|c| c.class == StageClass::Elim));

        assert_eq!(build_timeline(&matches, &[], Some("all")).len(), 2);
        assert!(build_timeline(&matches, &[], Some("Final")).is_empty());
    }

    #[test]
    fn unresolved_teams_use_placeholders() {
        let mut m = fixture("01-03-24", "9:00 AM", "Friendly");
        m.winner_uuid = None;
        let teams = vec![team("b", "Hawks")];

        let timeline = build_timeline(&[m], &teams, None);
        let card = &timeline[0].matches[0];
        assert_eq!(card.team1, "Team 1");
        assert_eq!(card.team2, "Hawks");
        assert_eq!(card.winner, "Unknown");
        assert_eq!(card.stage, "Friendly");
        assert_eq!(card.class, StageClass::League);
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let matches = vec![
            fixture("TBD", "9:00 AM", "Final"),
            fixture("01-03-24", "9:00 AM", "League Match"),
        ];

        let timeline = build_timeline(&matches, &[], None);
        assert_eq!(timeline[0].date, "01-03-24");
        assert_eq!(timeline[1].date, "TBD");
    }
}
