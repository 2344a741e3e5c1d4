use log::info;

use crate::errors::CustomResult;
use crate::modules::extractor::{extract_race, extract_season};
use crate::modules::locator::ResultsLocator;
use crate::modules::markup::HtmlDocument;
use crate::modules::models::class::{StatusTier, VehicleClass};
use crate::modules::models::query::Query;
use crate::modules::models::race::{RaceRecord, ResultsStatus};
use crate::modules::models::season::SeasonRecord;

/// # fetch race results
/// find the results page of one race and read it
///
/// ## Returns
/// * `Ok(Some(RaceRecord))` - official results, or provisional ones when no official page exists
/// * `Ok(None)` - the race has no published results
pub fn fetch_race(
    locator: &ResultsLocator,
    season: i32,
    round: u32,
    class: VehicleClass,
) -> CustomResult<Option<RaceRecord>> {
    let query = Query::race(season, round, class)?;
    let located = match locator.locate_query(&query) {
        Some(located) => located,
        None => return Ok(None),
    };

    let status = match located.tier {
        StatusTier::Official => ResultsStatus::Official,
        _ => ResultsStatus::Provisional,
    };

    let document = HtmlDocument::parse(&located.document);
    let race = extract_race(&document, season, round, class, status)?;
    info!(target: "results", "Loaded {} round {} ({}): {}", season, round, class, race.name);

    Ok(Some(race))
}

/// # fetch season standings
/// read the most recent points standings published for the season
pub fn fetch_season(
    locator: &ResultsLocator,
    season: i32,
    class: VehicleClass,
) -> CustomResult<Option<SeasonRecord>> {
    let query = Query::season(season, class)?;
    let located = match locator.locate_query(&query) {
        Some(located) => located,
        None => return Ok(None),
    };

    let document = HtmlDocument::parse(&located.document);
    let standings = extract_season(&document, season, class, located.round)?;
    info!(target: "results", "Loaded {} standings ({}) through round {}", season, class, located.round);

    Ok(Some(standings))
}
