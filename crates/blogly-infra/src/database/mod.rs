//! Database connection management, schema and repositories.

mod connections;
mod errors;
mod sea_base;
pub mod entity;
pub mod schema;
pub mod sea_repo;

pub use connections::{DatabaseConfig, connect};
pub use schema::create_tables;
pub use sea_repo::{SeaPostRepository, SeaTagRepository, SeaUserRepository};

#[cfg(test)]
mod tests;
