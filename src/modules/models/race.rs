use std::fmt;

use serde::Serialize;

use crate::modules::models::cell::CellValue;
use crate::modules::models::class::VehicleClass;

#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum ResultsStatus {
    Official,
    Provisional,
}

impl fmt::Display for ResultsStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResultsStatus::Official => write!(f, "Official"),
            ResultsStatus::Provisional => write!(f, "Provisional"),
        }
    }
}

/// One rider's line in a race result. `position` is the 1-based row order of
/// the results table, the other fields are the coerced cells of that row.
#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct RiderResult {
    pub position: u32,
    pub number: CellValue,
    pub rider: CellValue,
    pub hometown: CellValue,
    pub bike: CellValue,
    pub qualifying: CellValue,
    pub holeshot: CellValue,
    pub laps_led: CellValue,
    pub points: CellValue,
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct RaceRecord {
    pub season: i32,
    pub round: u32,
    pub class: VehicleClass,
    pub name: String,
    pub city: String,
    pub state: String,
    pub date: String,
    pub results_status: ResultsStatus,
    pub triple_crown: bool,
    pub results: Vec<RiderResult>,
}
