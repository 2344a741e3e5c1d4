use log::{debug, warn};

use crate::errors::{CustomResult, StructuralParseSnafu};
use crate::modules::helpers::text::TextHelper;
use crate::modules::markup::{Markup, MarkupNode};
use crate::modules::models::cell::CellValue;
use crate::modules::models::class::VehicleClass;
use crate::modules::models::race::{RaceRecord, ResultsStatus, RiderResult};
use crate::modules::models::season::{RiderSeasonResult, RoundPoints, SeasonRecord};

pub const HEADER_TAG: &str = "h4";
pub const HEADER_CLASS: &str = "header-class";
pub const COLUMN_ATTRIBUTE: &str = "data-title";
/// only triple crown events have a column for the first of their three mains
pub const TRIPLE_CROWN_MARKER: &str = "M1";

// positions of the headings on a race page
const NAME_HEADING: usize = 1;
const VENUE_HEADING: usize = 2;
const DATE_HEADING: usize = 3;

/// # extract a race
/// read the headings and the results table of an official or provisional
/// race page
///
/// ## Arguments
/// * `document` - the parsed page
/// * `season`, `round`, `class` - what the page was fetched for
/// * `results_status` - the tier the page was found at
///
/// ## Returns
/// * `RaceRecord` - missing headings or cells become empty strings
/// * `StructuralParseError` - when the page has no headings or no table at all
pub fn extract_race<M: Markup>(
    document: &M,
    season: i32,
    round: u32,
    class: VehicleClass,
    results_status: ResultsStatus,
) -> CustomResult<RaceRecord> {
    let headings: Vec<String> = document
        .find_all(HEADER_TAG, &[("class", HEADER_CLASS)])
        .iter()
        .map(|heading| heading.text().trim().to_string())
        .collect();
    if headings.is_empty() {
        return StructuralParseSnafu {
            message: format!("no {HEADER_TAG}.{HEADER_CLASS} headings on race page"),
        }
        .fail();
    }
    let heading = |index: usize| headings.get(index).map(String::as_str).unwrap_or_default();

    let rows = body_rows(document)?;
    let results: Vec<RiderResult> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| RiderResult {
            position: index as u32 + 1,
            number: cell(row, "#"),
            rider: cell(row, "Rider"),
            hometown: cell(row, "Hometown"),
            bike: cell(row, "Bike"),
            qualifying: cell(row, "Qual"),
            holeshot: cell(row, "Holeshot"),
            laps_led: cell(row, "Laps Led"),
            points: cell(row, "Points"),
        })
        .collect();

    let venue = heading(VENUE_HEADING);
    let record = RaceRecord {
        season,
        round,
        class,
        name: heading(NAME_HEADING).to_string(),
        city: TextHelper::get_city(venue),
        state: TextHelper::get_state(venue),
        date: TextHelper::get_date(heading(DATE_HEADING)),
        results_status,
        triple_crown: is_triple_crown(document),
        results,
    };

    if record.name.is_empty() || record.date.is_empty() {
        warn!(target: "extractor", "Incomplete race metadata for {} round {}: {:?}", season, round, headings);
    }
    debug!(target: "extractor", "Extracted {} results for {} round {} ({})", record.results.len(), season, round, class);

    Ok(record)
}

/// # extract season standings
/// read the points standings table, one row per ranked rider
///
/// ## Arguments
/// * `document` - the parsed standings page
/// * `season`, `class` - what the page was fetched for
/// * `through_round` - the round the standings page belongs to
pub fn extract_season<M: Markup>(
    document: &M,
    season: i32,
    class: VehicleClass,
    through_round: u32,
) -> CustomResult<SeasonRecord> {
    let rows = body_rows(document)?;

    let standings: Vec<RiderSeasonResult> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let round_points: RoundPoints =
                std::array::from_fn(|slot| cell(row, &(slot + 1).to_string()));

            RiderSeasonResult {
                position: index as u32 + 1,
                number: cell(row, "#"),
                rider: cell(row, "Rider"),
                hometown: cell(row, "Hometown"),
                total_points: cell(row, "Total Points"),
                round_points,
            }
        })
        .collect();

    debug!(target: "extractor", "Extracted {} standings for {} through round {} ({})", standings.len(), season, through_round, class);

    Ok(SeasonRecord {
        season,
        class,
        through_round,
        results: standings,
    })
}

pub fn is_triple_crown<M: Markup>(document: &M) -> bool {
    document
        .find_first("td", &[(COLUMN_ATTRIBUTE, TRIPLE_CROWN_MARKER)])
        .is_some()
}

/// the rows of the first table on the page, without its header row
fn body_rows<M: Markup>(document: &M) -> CustomResult<Vec<M::Node<'_>>> {
    let table = match document.find_first("table", &[]) {
        Some(table) => table,
        None => {
            return StructuralParseSnafu {
                message: "no results table on page",
            }
            .fail()
        }
    };

    Ok(table.find_all("tr", &[]).into_iter().skip(1).collect())
}

fn cell<N: MarkupNode>(row: &N, column: &str) -> CellValue {
    match row.find_first("td", &[(COLUMN_ATTRIBUTE, column)]) {
        Some(td) => CellValue::from_text(&td.text()),
        None => CellValue::empty(),
    }
}
