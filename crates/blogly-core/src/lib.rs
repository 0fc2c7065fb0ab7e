//! # Blogly Core
//!
//! The domain layer of Blogly: users, their posts, and the tags attached to
//! those posts. This crate contains no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
