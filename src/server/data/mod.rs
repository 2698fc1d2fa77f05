//! Data access layer repositories.
//!
//! One repository per table family. Repositories are generic over `ConnectionTrait` so the
//! services can hand them either the shared connection or an open transaction.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

#[cfg(test)]
mod tests;
