use chrono::Datelike;
use snafu::prelude::*;

use crate::errors::{CustomResult, InvalidArgumentSnafu};
use crate::modules::models::class::VehicleClass;

pub const FIRST_YEAR: i32 = 2013;
pub const NUM_OF_RACES: u32 = 17;

pub fn current_season() -> i32 {
    chrono::Local::now().year()
}

/// A validated request for one race (`round` set) or for the season
/// standings (`round` empty). Holding a `Query` means the arguments were
/// checked, so no request is ever sent for an invalid one.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Query {
    pub season: i32,
    pub round: Option<u32>,
    pub class: VehicleClass,
}

impl Query {
    pub fn new(season: i32, round: Option<u32>, class: VehicleClass) -> CustomResult<Query> {
        let last = current_season();
        ensure!(
            (FIRST_YEAR..=last).contains(&season),
            InvalidArgumentSnafu {
                message: format!("'season' must be between {FIRST_YEAR} and {last}; got {season}"),
            }
        );

        if let Some(round) = round {
            ensure!(
                (1..=NUM_OF_RACES).contains(&round),
                InvalidArgumentSnafu {
                    message: format!("'round' must be between 1 and {NUM_OF_RACES}; got {round}"),
                }
            );
        }

        Ok(Query { season, round, class })
    }

    pub fn race(season: i32, round: u32, class: VehicleClass) -> CustomResult<Query> {
        Query::new(season, Some(round), class)
    }

    pub fn season(season: i32, class: VehicleClass) -> CustomResult<Query> {
        Query::new(season, None, class)
    }

    pub fn is_season_level(&self) -> bool {
        self.round.is_none()
    }
}
