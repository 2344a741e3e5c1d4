use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::select;
use diesel::SqliteConnection;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::macros::database_error_handler::db_handle_error;
use crate::models::NewRace;
use crate::modules::models::race::RaceRecord;
use crate::schema::races;

/// series tag of the supercross championship
pub const SERIES: &str = "SX";

#[derive(Queryable, Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct RaceEntry {
    pub id: i32,
    pub series: String,
    pub year: i32,
    pub round: i32,
    pub date: String,
    pub name: String,
    pub city: String,
    pub state: String,
}

impl RaceEntry {
    /// # create race entry
    /// store the metadata of a race
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `race` - the extracted race
    pub fn new(conn: &mut SqliteConnection, race: &RaceRecord) -> CustomResult<()> {
        let new_race = NewRace {
            series: SERIES.to_string(),
            year: race.season,
            round: race.round as i32,
            date: race.date.clone(),
            name: race.name.clone(),
            city: race.city.clone(),
            state: race.state.clone(),
        };

        db_handle_error!(
            diesel::insert_into(races::table).values(&new_race).execute(conn),
            "models/race_entry:new",
            format!("creating race {} round {}", race.season, race.round)
        );

        Ok(())
    }

    pub fn exists(conn: &mut SqliteConnection, year_in: i32, round_in: u32) -> CustomResult<bool> {
        let found = db_handle_error!(
            select(exists(
                races::table
                    .filter(races::series.eq(SERIES))
                    .filter(races::year.eq(year_in))
                    .filter(races::round.eq(round_in as i32)),
            ))
            .get_result::<bool>(conn),
            "models/race_entry:exists",
            format!("checking race {} round {}", year_in, round_in)
        );

        Ok(found)
    }

    pub fn get_all(conn: &mut SqliteConnection) -> CustomResult<Vec<RaceEntry>> {
        let entries = db_handle_error!(
            races::table
                .order((races::year, races::round))
                .load::<RaceEntry>(conn),
            "models/race_entry:get_all",
            "loading races"
        );

        Ok(entries)
    }
}

/// # save race
/// store a race unless it is already stored
///
/// ## Returns
/// * `bool` - true when the race was added
pub fn save_race(conn: &mut SqliteConnection, race: &RaceRecord) -> CustomResult<bool> {
    if RaceEntry::exists(conn, race.season, race.round)? {
        warn!(target: "saving_race", "race already exists, skipping {} round {}", race.season, race.round);
        return Ok(false);
    }

    RaceEntry::new(conn, race)?;
    info!(target: "saving_race", "race {} round {} saved: {}", race.season, race.round, race.name);
    Ok(true)
}
