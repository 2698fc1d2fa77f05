//! Pokémon review REST API.
//!
//! `model` holds the JSON transfer objects exchanged with clients, `server` holds everything
//! that runs behind the HTTP listener.

pub mod model;
pub mod server;
