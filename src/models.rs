use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use crate::schema::*;


#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = races)]
pub struct NewRace {
    pub series: String,
    pub year: i32,
    pub round: i32,
    pub date: String,
    pub name: String,
    pub city: String,
    pub state: String,
}
