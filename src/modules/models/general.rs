use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::info;
use snafu::prelude::*;

use crate::errors::{ConnectionSnafu, CustomResult, DatabaseSnafu};

const CREATE_RACES: &str = include_str!("../../../migrations/2024-01-06-000000_create_races/up.sql");

pub fn establish_connection(database_url: &str) -> CustomResult<SqliteConnection> {
    let conn = SqliteConnection::establish(database_url).context(ConnectionSnafu)?;
    info!(target: "models/general:establish_connection", "Connected to {}", database_url);
    Ok(conn)
}

/// create the tables the store needs when they are missing
pub fn run_migrations(conn: &mut SqliteConnection) -> CustomResult<()> {
    conn.batch_execute(CREATE_RACES).context(DatabaseSnafu)
}
