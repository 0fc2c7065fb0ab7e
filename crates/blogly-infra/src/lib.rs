//! # Blogly Infrastructure
//!
//! Concrete implementations of the repository ports defined in `blogly-core`.
//! Everything here talks to the relational store through SeaORM; both the
//! PostgreSQL and SQLite drivers are compiled in and the backend is picked
//! from the connection URL.

pub mod database;

pub use sea_orm::DbConn;

pub use database::{
    DatabaseConfig, SeaPostRepository, SeaTagRepository, SeaUserRepository, connect,
    create_tables,
};
