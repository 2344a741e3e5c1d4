use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use log::error;
use snafu::prelude::*;

use supercross_results::errors::{CustomResult, InputSnafu, InvalidArgumentSnafu, SerializationSnafu};
use supercross_results::modules::helpers::config::Settings;
use supercross_results::modules::helpers::logging::setup_logging;
use supercross_results::modules::locator::ResultsLocator;
use supercross_results::modules::models::class::VehicleClass;
use supercross_results::modules::models::query::{current_season, FIRST_YEAR, NUM_OF_RACES};
use supercross_results::modules::render::{render_race, render_season};
use supercross_results::modules::results::{fetch_race, fetch_season};

/// What was given on the command line. A round of 0 asks for the season standings.
#[derive(Debug, Default)]
struct Cli {
    year: Option<i32>,
    class: Option<u32>,
    round: Option<u32>,
    json: bool,
}

fn main() {
    let settings = Settings::from_env();
    if let Err(error) = setup_logging(&settings) {
        eprintln!("Failed to setup logging: {}", error);
    }

    if let Err(error) = run(&settings) {
        error!(target: "cli", "{}", error);
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(settings: &Settings) -> CustomResult<()> {
    let cli = parse_args(env::args().skip(1));
    let last = current_season();

    let year = match cli.year {
        Some(year) => year,
        None => narrow(prompt(&format!("Enter Year [{} - {}]: ", FIRST_YEAR, last))?)?,
    };
    let class = match cli.class {
        Some(class) => class,
        None => narrow(prompt("Enter Class [250 or 450]: ")?)?,
    };
    let class = VehicleClass::from_number(class)?;
    let round = match cli.round {
        Some(round) => round,
        None => narrow(prompt(&format!("Enter Round [1-{}] or 0 for season results: ", NUM_OF_RACES))?)?,
    };

    let locator = ResultsLocator::new(settings)?;

    if round == 0 {
        match fetch_season(&locator, year, class)? {
            Some(season) if cli.json => {
                println!("{}", serde_json::to_string_pretty(&season).context(SerializationSnafu)?)
            }
            Some(season) => print!("{}", render_season(&season)),
            None => println!("Season not found"),
        }
    } else {
        match fetch_race(&locator, year, round, class)? {
            Some(race) if cli.json => {
                println!("{}", serde_json::to_string_pretty(&race).context(SerializationSnafu)?)
            }
            Some(race) => print!("{}", render_race(&race)),
            None => println!("Race not found"),
        }
    }

    Ok(())
}

/// sort the numeric arguments into season, class and round by their range
fn parse_args<I: Iterator<Item = String>>(args: I) -> Cli {
    let last = current_season();
    let mut cli = Cli::default();

    for arg in args {
        if arg == "--json" {
            cli.json = true;
            continue;
        }

        let value: i64 = match arg.parse() {
            Ok(value) => value,
            Err(_) => continue,
        };
        if (FIRST_YEAR as i64..=last as i64).contains(&value) {
            cli.year = Some(value as i32);
        } else if value == 250 || value == 450 {
            cli.class = Some(value as u32);
        } else if (0..=NUM_OF_RACES as i64).contains(&value) {
            cli.round = Some(value as u32);
        }
    }

    cli
}

fn prompt(message: &str) -> CustomResult<i64> {
    print!("{}", message);
    io::stdout().flush().context(InputSnafu)?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context(InputSnafu)?;

    let answer = line.trim();
    match answer.parse::<i64>() {
        Ok(value) if value >= 0 => Ok(value),
        _ => InvalidArgumentSnafu {
            message: format!("expected a number; got '{}'", answer),
        }
        .fail(),
    }
}

/// fit a prompted number into the type it is used as, rejecting anything that would wrap
fn narrow<T: TryFrom<i64>>(value: i64) -> CustomResult<T> {
    match T::try_from(value) {
        Ok(value) => Ok(value),
        Err(_) => InvalidArgumentSnafu {
            message: format!("number out of range; got '{}'", value),
        }
        .fail(),
    }
}
