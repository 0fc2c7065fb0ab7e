//! # Blogly Shared
//!
//! Types that sit at the HTTP boundary: the HTML form payloads accepted by the
//! server and the problem description rendered on error pages.

pub mod dto;
pub mod response;

pub use dto::{FormError, FormFields, PostForm, TagForm, UserForm};
pub use response::ErrorResponse;
