use std::fmt::Write;

use crate::modules::models::query::NUM_OF_RACES;
use crate::modules::models::race::RaceRecord;
use crate::modules::models::season::SeasonRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Center,
}

/// A titled console table with columns sized to their widest cell.
pub struct TextTable {
    title: String,
    headers: Vec<(String, Justify)>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(title: &str, headers: Vec<(String, Justify)>) -> TextTable {
        TextTable {
            title: title.to_string(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(column, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(column))
                    .map(|value| value.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let separator: String = widths
            .iter()
            .map(|width| "-".repeat(width + 2))
            .collect::<Vec<String>>()
            .join("+");
        let separator = format!("+{}+", separator);

        let mut out = String::new();
        let total = separator.chars().count();
        let _ = writeln!(out, "{}", pad(&self.title, total, Justify::Center).trim_end());
        let _ = writeln!(out, "{}", separator);
        let headers: Vec<String> = self.headers.iter().map(|(header, _)| header.clone()).collect();
        let _ = writeln!(out, "{}", self.line(&headers, &widths, true));
        let _ = writeln!(out, "{}", separator);
        for row in &self.rows {
            let _ = writeln!(out, "{}", self.line(row, &widths, false));
        }
        let _ = writeln!(out, "{}", separator);
        out
    }

    fn line(&self, values: &[String], widths: &[usize], is_header: bool) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let value = values.get(column).map(String::as_str).unwrap_or_default();
                let justify = if is_header { Justify::Center } else { self.headers[column].1 };
                format!(" {} ", pad(value, *width, justify))
            })
            .collect();
        format!("|{}|", cells.join("|"))
    }
}

fn pad(value: &str, width: usize, justify: Justify) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    match justify {
        Justify::Left => format!("{}{}", value, " ".repeat(width - len)),
        Justify::Center => {
            let left = (width - len) / 2;
            format!("{}{}{}", " ".repeat(left), value, " ".repeat(width - len - left))
        }
    }
}

fn headers(columns: &[(&str, Justify)]) -> Vec<(String, Justify)> {
    columns
        .iter()
        .map(|(header, justify)| (header.to_string(), *justify))
        .collect()
}

pub fn race_title(race: &RaceRecord) -> String {
    let mut title = format!(
        "{} Round {} - {} - {} {} Results",
        race.season, race.round, race.name, race.class, race.results_status
    );
    if race.triple_crown {
        title.push_str(" (Triple Crown)");
    }
    title
}

pub fn season_title(season: &SeasonRecord) -> String {
    format!("{} Season - {} Class", season.season, season.class)
}

/// # render a race
/// the race as a console table, one line per rider in finishing order
pub fn render_race(race: &RaceRecord) -> String {
    let mut table = TextTable::new(
        &race_title(race),
        headers(&[
            ("Position", Justify::Left),
            ("Number", Justify::Center),
            ("Rider", Justify::Left),
            ("Hometown", Justify::Left),
            ("Bike", Justify::Left),
            ("Qual", Justify::Center),
            ("Holeshot", Justify::Center),
            ("Laps Led", Justify::Center),
            ("Points", Justify::Center),
        ]),
    );

    for result in &race.results {
        table.add_row(vec![
            result.position.to_string(),
            result.number.to_string(),
            result.rider.to_string(),
            result.hometown.to_string(),
            result.bike.to_string(),
            result.qualifying.to_string(),
            result.holeshot.to_string(),
            result.laps_led.to_string(),
            result.points.to_string(),
        ]);
    }

    table.render()
}

/// # render season standings
/// the standings as a console table with one points column per round
pub fn render_season(season: &SeasonRecord) -> String {
    let mut columns = headers(&[
        ("Position", Justify::Left),
        ("Number", Justify::Center),
        ("Rider", Justify::Left),
        ("Hometown", Justify::Left),
        ("Total Points", Justify::Left),
    ]);
    columns.extend((1..=NUM_OF_RACES).map(|round| (round.to_string(), Justify::Center)));

    let mut table = TextTable::new(&season_title(season), columns);
    for result in &season.results {
        let mut row = vec![
            result.position.to_string(),
            result.number.to_string(),
            result.rider.to_string(),
            result.hometown.to_string(),
            result.total_points.to_string(),
        ];
        row.extend(result.round_points.iter().map(|points| points.to_string()));
        table.add_row(row);
    }

    table.render()
}
