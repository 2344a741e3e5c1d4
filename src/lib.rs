pub mod errors;
pub mod models;
pub mod schema;
pub mod modules;

mod macros {
    pub mod database_error_handler;
}
