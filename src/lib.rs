pub mod configuration;
pub mod domain;
pub mod form;
pub mod routes;
pub mod spreadsheet_client;
pub mod startup;
pub mod telemetry;
pub mod utils;
