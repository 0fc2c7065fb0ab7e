use serde::{Deserialize, Serialize};

/// Tag entity - a unique label that can be attached to many posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}
