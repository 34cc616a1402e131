use std::io::Write;

use anyhow::Result;
use balldontlie_api::types::{
    Game, PaginationMeta, Player, PlayerStats, SeasonAverage, StatKind, Team,
};
use chrono::DateTime;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct TeamRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u32,
    #[tabled(rename = "Abbr")]
    #[serde(rename = "Abbr")]
    abbreviation: String,
    #[tabled(rename = "Team")]
    #[serde(rename = "Team")]
    full_name: String,
    #[tabled(rename = "Conference")]
    #[serde(rename = "Conference")]
    conference: String,
    #[tabled(rename = "Division")]
    #[serde(rename = "Division")]
    division: String,
}

#[derive(Tabled, Serialize)]
struct PlayerRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Pos")]
    #[serde(rename = "Pos")]
    position: String,
    #[tabled(rename = "Team")]
    #[serde(rename = "Team")]
    team: String,
    #[tabled(rename = "Height")]
    #[serde(rename = "Height")]
    height: String,
    #[tabled(rename = "Weight")]
    #[serde(rename = "Weight")]
    weight: String,
}

#[derive(Tabled, Serialize)]
struct StatsRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Player")]
    #[serde(rename = "Player")]
    player: String,
    #[tabled(rename = "Team")]
    #[serde(rename = "Team")]
    team: String,
    #[tabled(rename = "MIN")]
    #[serde(rename = "MIN")]
    min: String,
    #[tabled(rename = "PTS")]
    #[serde(rename = "PTS")]
    pts: u32,
    #[tabled(rename = "REB")]
    #[serde(rename = "REB")]
    reb: u32,
    #[tabled(rename = "AST")]
    #[serde(rename = "AST")]
    ast: String,
    #[tabled(rename = "STL")]
    #[serde(rename = "STL")]
    stl: u32,
    #[tabled(rename = "BLK")]
    #[serde(rename = "BLK")]
    blk: u32,
    #[tabled(rename = "FG")]
    #[serde(rename = "FG")]
    fg: String,
    #[tabled(rename = "3PT")]
    #[serde(rename = "3PT")]
    fg3: String,
    #[tabled(rename = "FT")]
    #[serde(rename = "FT")]
    ft: String,
}

#[derive(Tabled, Serialize)]
struct AverageRow {
    #[tabled(rename = "Player ID")]
    #[serde(rename = "Player ID")]
    player_id: u32,
    #[tabled(rename = "Season")]
    #[serde(rename = "Season")]
    season: u32,
    #[tabled(rename = "GP")]
    #[serde(rename = "GP")]
    games_played: u32,
    #[tabled(rename = "MIN")]
    #[serde(rename = "MIN")]
    min: String,
    #[tabled(rename = "PTS")]
    #[serde(rename = "PTS")]
    pts: String,
    #[tabled(rename = "REB")]
    #[serde(rename = "REB")]
    reb: String,
    #[tabled(rename = "AST")]
    #[serde(rename = "AST")]
    ast: String,
    #[tabled(rename = "FG%")]
    #[serde(rename = "FG%")]
    fg_pct: String,
    #[tabled(rename = "3P%")]
    #[serde(rename = "3P%")]
    fg3_pct: String,
    #[tabled(rename = "FT%")]
    #[serde(rename = "FT%")]
    ft_pct: String,
}

// -- Row builders --

fn build_team_rows(teams: &[Team]) -> Vec<TeamRow> {
    teams
        .iter()
        .map(|t| TeamRow {
            id: t.id,
            abbreviation: t.abbreviation.clone(),
            full_name: t.full_name.clone(),
            conference: t.conference.clone(),
            division: t.division.clone(),
        })
        .collect()
}

fn build_player_rows(players: &[Player]) -> Vec<PlayerRow> {
    players
        .iter()
        .map(|p| PlayerRow {
            id: p.id,
            name: p.full_name(),
            position: or_dash(&p.position),
            team: match (&p.team, p.team_id()) {
                (Some(team), _) => team.abbreviation.clone(),
                (None, Some(id)) => format!("#{}", id),
                (None, None) => "-".to_string(),
            },
            height: format_height(p.height()),
            weight: format_weight(p.weight_pounds),
        })
        .collect()
}

fn build_stats_rows(stats: &[PlayerStats]) -> Vec<StatsRow> {
    stats
        .iter()
        .map(|s| StatsRow {
            date: format_game_date(s.game.as_ref()),
            player: s.player.full_name(),
            team: s.team.abbreviation.clone(),
            min: or_dash(&s.min),
            pts: s.pts,
            reb: s.reb,
            ast: s
                .ast
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string()),
            stl: s.stl,
            blk: s.blk,
            fg: format_split(s.fgm, s.fga, s.fg_pct_value()),
            fg3: format_split(s.fg3m, s.fg3a, s.fg3_pct_value()),
            ft: format_split(s.ftm, s.fta, s.ft_pct_value()),
        })
        .collect()
}

fn build_average_rows(averages: &[SeasonAverage]) -> Vec<AverageRow> {
    averages
        .iter()
        .map(|a| AverageRow {
            player_id: a.player_id,
            season: a.season,
            games_played: a.games_played,
            min: or_dash(&a.min),
            pts: format!("{:.1}", a.pts),
            reb: format!("{:.1}", a.reb),
            ast: format!("{:.1}", a.ast),
            fg_pct: format_pct(a.fg_pct),
            fg3_pct: format_pct(a.fg3_pct),
            ft_pct: format_pct(a.ft_pct),
        })
        .collect()
}

// -- Rendering --

fn print_rows<R>(rows: Vec<R>, format: &OutputFormat) -> Result<()>
where
    R: Tabled + Serialize,
{
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => write_csv(&rows, std::io::stdout())?,
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

fn write_csv<R: Serialize, W: Write>(rows: &[R], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_teams(teams: &[Team], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&teams);
            Ok(())
        }
        _ => print_rows(build_team_rows(teams), format),
    }
}

pub fn print_players(players: &[Player], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&players);
            Ok(())
        }
        _ => print_rows(build_player_rows(players), format),
    }
}

pub fn print_stats(stats: &[PlayerStats], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&stats);
            Ok(())
        }
        _ => print_rows(build_stats_rows(stats), format),
    }
}

pub fn print_averages(averages: &[SeasonAverage], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&averages);
            Ok(())
        }
        _ => print_rows(build_average_rows(averages), format),
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Chart output --

/// Renders one metric across stats lines as a horizontal text bar chart.
/// Bars are scaled so the largest value spans `width` characters.
pub fn render_chart(stats: &[PlayerStats], kind: StatKind, width: usize) -> String {
    let points: Vec<(String, f64)> = stats
        .iter()
        .map(|s| (s.player.full_name(), kind.value_of(s)))
        .collect();
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let name_width = points.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);

    let mut out = String::from(kind.label());
    for (name, value) in &points {
        let len = if max > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        out.push('\n');
        out.push_str(&format!(
            "{:<name_width$} {:<width$} {:.1}",
            name,
            "#".repeat(len),
            value,
            name_width = name_width,
            width = width
        ));
    }
    out
}

/// One-line paging summary for stderr.
pub fn format_page_summary(meta: &PaginationMeta, noun: &str) -> String {
    let show = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string());
    format!(
        "Page {}/{} ({} total {})",
        show(meta.current_page.map(u64::from)),
        show(meta.total_pages.map(u64::from)),
        show(meta.total_count),
        noun
    )
}

// -- Formatting helpers --

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn format_height(height: Option<(f64, f64)>) -> String {
    match height {
        Some((feet, inches)) => format!("{}' {}\"", feet, inches),
        None => "-".to_string(),
    }
}

fn format_weight(pounds: Option<f64>) -> String {
    match pounds {
        Some(lb) => format!("{} lb", lb),
        None => "-".to_string(),
    }
}

fn format_pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn format_split(made: u32, attempted: u32, fraction: f64) -> String {
    format!("{}-{} ({})", made, attempted, format_pct(fraction))
}

fn format_game_date(game: Option<&Game>) -> String {
    let Some(game) = game else {
        return "-".to_string();
    };
    match DateTime::parse_from_rfc3339(&game.date) {
        Ok(dt) => dt.date_naive().to_string(),
        Err(_) => game.date.get(..10).unwrap_or(&game.date).to_string(),
    }
}
