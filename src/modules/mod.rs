pub mod calendar;
pub mod extractor;
pub mod locator;
pub mod markup;
pub mod render;
pub mod results;

pub mod models {
    pub mod cell;
    pub mod class;
    pub mod query;
    pub mod race;
    pub mod season;

    pub mod race_entry;
    pub mod general;
}

pub mod helpers {
    pub mod config;
    pub mod logging;
    pub mod text;
}
