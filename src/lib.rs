pub mod api_client;
pub mod configuration;
pub mod domain;
pub mod runner;
pub mod scenarios;
pub mod startup;
pub mod telemetry;
pub mod utils;
