//! Server side of the Pokémon review API: configuration, HTTP routing, services and
//! database access.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
