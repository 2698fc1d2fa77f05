//! Extractors shared by the controllers.

pub mod payload;
