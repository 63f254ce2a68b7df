pub mod availability;
pub mod error;
pub mod ledger;
pub mod models;
pub mod routes;
pub mod service;
pub mod upstream;
