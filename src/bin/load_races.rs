use log::{error, info, warn};

use supercross_results::modules::calendar::RaceCalendar;
use supercross_results::modules::helpers::config::Settings;
use supercross_results::modules::helpers::logging::setup_logging;
use supercross_results::modules::locator::ResultsLocator;
use supercross_results::modules::models::class::VehicleClass;
use supercross_results::modules::models::general::{establish_connection, run_migrations};
use supercross_results::modules::models::race_entry::save_race;
use supercross_results::modules::results::fetch_race;

fn main() {
    let settings = Settings::from_env();
    if let Err(error) = setup_logging(&settings) {
        eprintln!("Failed to setup logging: {}", error);
    }

    let connection = &mut match establish_connection(&settings.database_url) {
        Ok(connection) => connection,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };
    if let Err(error) = run_migrations(connection) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }

    let locator = match ResultsLocator::new(&settings) {
        Ok(locator) => locator,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    // get the info from every race and save it into the database
    for (season, round) in RaceCalendar::supported() {
        let race = match fetch_race(&locator, season, round, VehicleClass::Class450) {
            Ok(Some(race)) => race,
            Ok(None) => {
                info!(target: "load_races", "no results for {} round {}", season, round);
                continue;
            }
            Err(error) => {
                warn!(target: "load_races", "failed loading {} round {}: {}", season, round, error);
                continue;
            }
        };

        match save_race(connection, &race) {
            Ok(true) => println!("Race Added: {} {} - {}", season, round, race.name),
            Ok(false) => {}
            Err(error) => {
                error!(target: "load_races", "failed saving {} round {}: {}", season, round, error);
            }
        }
    }
}
