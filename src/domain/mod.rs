//! Domain entities and value objects for the card catalog.

pub mod card;
pub mod types;
