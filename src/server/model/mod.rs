//! Server application models: shared state, database model aliases and the conversions
//! between database models and transfer objects.

pub mod app;
pub mod db;
pub mod mapping;
