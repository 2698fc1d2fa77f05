//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories. They apply the request rules
//! shared by every resource: existence checks, the duplicate name scan and path/body ID
//! agreement. Writes touching more than one table run inside a transaction.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

#[cfg(test)]
mod tests;
