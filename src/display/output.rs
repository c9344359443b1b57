use crate::analysis::awards::{MatchDetail, SideDetail};
use crate::analysis::roster::{PlayerProfile, RosterEntry};
use crate::analysis::stage::StageClass;
use crate::analysis::standings::{TeamProfile, TeamStanding};
use crate::analysis::stat_selector::{NormalizedStats, StatScope};
use crate::analysis::summary::{Leader, SummaryCard};
use crate::analysis::timeline::DateGroup;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    time: String,
    fixture: String,
    result: String,
    stage: String,
}

#[derive(Tabled)]
struct StandingRow {
    rank: String,
    team: String,
    rating: String,
    #[tabled(rename = "win %")]
    win_pct: String,
    played: String,
    highest: String,
    lowest: String,
}

#[derive(Tabled)]
struct PlayerRow {
    player: String,
    role: String,
    teams: String,
    runs: String,
    wickets: String,
    #[tabled(rename = "PoMs")]
    poms: String,
}

#[derive(Tabled)]
struct LeaderRow {
    rank: String,
    player: String,
    value: String,
}

#[derive(Tabled)]
struct BattingRow {
    scope: String,
    matches: String,
    inns: String,
    runs: String,
    #[tabled(rename = "HS")]
    highest: String,
    #[tabled(rename = "SR")]
    strike_rate: String,
    avg: String,
}

#[derive(Tabled)]
struct BowlingRow {
    scope: String,
    matches: String,
    inns: String,
    wkts: String,
    overs: String,
    econ: String,
    avg: String,
}

#[derive(Tabled)]
struct FieldingRow {
    scope: String,
    matches: String,
    catches: String,
    stumpings: String,
    dismissals: String,
}

fn heading(title: &str, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn colored_stage(stage: &str, class: StageClass) -> String {
    match class {
        StageClass::League => stage.blue().to_string(),
        StageClass::SuperSix => stage.magenta().to_string(),
        StageClass::Semi => stage.yellow().to_string(),
        StageClass::Elim => stage.red().to_string(),
        StageClass::Final => stage.green().bold().to_string(),
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_summary(cards: &[SummaryCard], top_runs: &[Leader], top_wickets: &[Leader]) {
    heading("🏆 TOURNAMENT SUMMARY", 60);

    for card in cards {
        let mut line = format!("{:<26} {}", card.title.bold(), card.main.bold().green());
        if let Some(detail) = &card.detail {
            line.push_str(&format!(" {}", detail));
        }
        if let Some(subtle) = &card.subtle {
            line.push_str(&format!(" {}", subtle.dimmed()));
        }
        println!("  {}", line);
    }

    display_leaders("🏏 TOP RUN SCORERS", "runs", top_runs);
    display_leaders("🎯 TOP WICKET TAKERS", "wickets", top_wickets);
}

fn display_leaders(title: &str, unit: &str, leaders: &[Leader]) {
    heading(title, 40);

    if leaders.is_empty() {
        println!("{}", "No player statistics available".yellow());
        return;
    }

    let rows = leaders
        .iter()
        .enumerate()
        .map(|(idx, leader)| LeaderRow {
            rank: format!("#{}", idx + 1),
            player: leader.name.clone(),
            value: format!("{} {}", leader.value, unit),
        })
        .collect();
    print_table::<LeaderRow>(rows);
}

pub fn display_timeline(groups: &[DateGroup]) {
    heading("📅 MATCH TIMELINE", 80);

    if groups.is_empty() {
        println!("{}", "No matches for this stage".yellow());
        return;
    }

    for group in groups {
        println!("{}", group.date.bold());

        let rows: Vec<MatchRow> = group
            .matches
            .iter()
            .map(|card| MatchRow {
                number: card.number.to_string(),
                time: card.time.clone(),
                fixture: format!("{} vs {}", card.team1, card.team2),
                result: format!("{} {}", card.winner.bold(), card.win_margin),
                stage: colored_stage(&card.stage, card.class),
            })
            .collect();
        print_table(rows);
        println!();
    }
}

fn display_side(side: &SideDetail) {
    println!(
        "  {}  {}/{} in {} ov",
        side.name.bold(),
        side.runs,
        side.wickets,
        side.overs
    );
    for award in &side.awards {
        println!("    {} {}", format!("{}:", award.label).bold(), award.player_name);
    }
}

pub fn display_match_detail(detail: &MatchDetail) {
    heading(&format!("🏏 {} vs {}", detail.team1.name, detail.team2.name), 60);

    println!(
        "  📅 {}   ⏰ {}   📍 {}   {}\n",
        detail.date,
        detail.time,
        detail.ground,
        detail.stage.italic()
    );

    display_side(&detail.team1);
    println!();
    display_side(&detail.team2);

    println!("\n{}", "-".repeat(60).dimmed());
    println!(
        "{} {} ({})\n",
        "Winner:".bold(),
        detail.winner.green().bold(),
        detail.win_margin
    );
}

pub fn display_standings(standings: &[TeamStanding]) {
    heading("📊 TEAM STANDINGS", 70);

    if standings.is_empty() {
        println!("{}", "No teams found".yellow());
        return;
    }

    let rows: Vec<StandingRow> = standings
        .iter()
        .enumerate()
        .map(|(idx, s)| StandingRow {
            rank: format!("#{}", idx + 1),
            team: s.name.clone(),
            rating: format!("{:.0}", s.scaled_rating),
            win_pct: format!("{:.0}%", s.win_pct),
            played: format!("{}/{}", s.wins, s.matches),
            highest: s.highest.to_string(),
            lowest: s.lowest.map_or_else(|| "-".to_string(), |l| l.to_string()),
        })
        .collect();
    print_table(rows);

    println!("\n{}", "Interpretation".bold().yellow());
    println!("• Rating: net runs per ball, scaled so the best team is 100 and the worst 0");
    println!("• Played: wins/matches from the match summaries\n");
}

pub fn display_team_profile(profile: &TeamProfile) {
    let team = &profile.team;
    heading(&format!("🛡️  {}", team.name), 60);

    let margin = match &team.greatest_win_margin {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let lines = [
        ("Captain", profile.captain.clone()),
        ("Matches", team.total_matches.to_string()),
        ("Wins", team.total_wins.to_string()),
        ("Runs Scored", team.total_runs_scored.to_string()),
        ("Runs Conceded", team.total_runs_conceded.to_string()),
        ("Highest Total", team.highest_total.to_string()),
        ("Win Margin", margin),
        ("Wickets Taken", team.total_wickets_taken.to_string()),
        ("Wickets Given", team.total_wickets_given.to_string()),
    ];
    for (label, value) in lines {
        println!("  {:<16} {}", format!("{}:", label).bold(), value);
    }

    println!("\n  {} {}\n", "Members:".bold(), profile.members.join(", "));
}

pub fn display_roster(entries: &[RosterEntry], team: Option<&str>) {
    let title = match team {
        Some(team) => format!("👥 PLAYERS ({})", team),
        None => "👥 PLAYERS".to_string(),
    };
    heading(&title, 70);

    if entries.is_empty() {
        println!("{}", "No players match the current filters".yellow());
        return;
    }

    let rows: Vec<PlayerRow> = entries
        .iter()
        .map(|e| PlayerRow {
            player: e.name.clone(),
            role: e.role.to_string(),
            teams: if e.teams.is_empty() {
                "—".to_string()
            } else {
                e.teams.join(", ")
            },
            runs: e.runs.to_string(),
            wickets: e.wickets.to_string(),
            poms: e.player_of_match.to_string(),
        })
        .collect();
    print_table(rows);
    println!();
}

fn stat_rows(
    scope: &str,
    stats: &NormalizedStats,
    batting: &mut Vec<BattingRow>,
    bowling: &mut Vec<BowlingRow>,
    fielding: &mut Vec<FieldingRow>,
) {
    let bat = &stats.batting;
    batting.push(BattingRow {
        scope: scope.to_string(),
        matches: bat.matches.to_string(),
        inns: bat.innings.to_string(),
        runs: bat.runs.to_string(),
        highest: bat.highest.to_string(),
        strike_rate: bat.strike_rate.to_string(),
        avg: bat.average.to_string(),
    });

    let bowl = &stats.bowling;
    bowling.push(BowlingRow {
        scope: scope.to_string(),
        matches: bowl.matches.to_string(),
        inns: bowl.innings.to_string(),
        wkts: bowl.wickets.to_string(),
        overs: bowl.overs.to_string(),
        econ: bowl.economy.to_string(),
        avg: bowl.average.to_string(),
    });

    let fld = &stats.fielding;
    fielding.push(FieldingRow {
        scope: scope.to_string(),
        matches: fld.matches.to_string(),
        catches: fld.catches.to_string(),
        stumpings: fld.stumpings.to_string(),
        dismissals: fld.dismissals.to_string(),
    });
}

pub fn display_player_profile(profile: &PlayerProfile) {
    heading(&format!("🧢 {} ({})", profile.name, profile.role), 70);

    println!("  {} {}", "Teams:".bold(), profile.teams.join(", "));
    println!("  {} {}", "Best Score:".bold(), profile.best_score);
    println!("  {} {}", "Best Bowl:".bold(), profile.best_bowling);
    if profile.player_of_match > 0 {
        println!("  {} PoM {}", "Awards:".bold(), profile.player_of_match);
    }
    println!("  {} {}", "Bio:".bold(), profile.bio);

    let selection = &profile.selection;
    let scope = match &selection.scope {
        StatScope::Overall => "Overall".to_string(),
        StatScope::Team(name) => name.clone(),
    };

    let (mut batting, mut bowling, mut fielding) = (Vec::new(), Vec::new(), Vec::new());
    stat_rows(&scope, &selection.stats, &mut batting, &mut bowling, &mut fielding);
    for team in selection.breakdown.iter().flatten() {
        stat_rows(&team.team_name, &team.stats, &mut batting, &mut bowling, &mut fielding);
    }

    println!("\n{}", "🏏 Batting".bold());
    print_table(batting);
    println!("\n{}", "🎯 Bowling".bold());
    print_table(bowling);
    println!("\n{}", "🧤 Fielding".bold());
    print_table(fielding);
    println!();
}
