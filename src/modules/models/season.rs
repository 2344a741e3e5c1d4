use serde::Serialize;

use crate::modules::models::cell::CellValue;
use crate::modules::models::class::VehicleClass;
use crate::modules::models::query::NUM_OF_RACES;

/// One slot per round of the season, in round order.
// the standings page publishes a fixed number of weekly columns; a season
// with more rounds than NUM_OF_RACES does not fit this model
pub type RoundPoints = [CellValue; NUM_OF_RACES as usize];

#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct RiderSeasonResult {
    pub position: u32,
    pub number: CellValue,
    pub rider: CellValue,
    pub hometown: CellValue,
    pub total_points: CellValue,
    pub round_points: RoundPoints,
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct SeasonRecord {
    pub season: i32,
    pub class: VehicleClass,
    /// the round whose standings page was found
    pub through_round: u32,
    pub results: Vec<RiderSeasonResult>,
}
