use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Placeholder avatar used when a user is saved without an image URL.
pub const DEFAULT_IMAGE_URL: &str =
    "https://cdn.pixabay.com/photo/2015/10/05/22/37/blank-profile-picture-973460_960_720.png";

/// User entity - a person who authors posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Field values for creating a user or overwriting an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl NewUser {
    /// Build the field set, falling back to [`DEFAULT_IMAGE_URL`] when no
    /// image URL (or a blank one) was supplied.
    pub fn new(first_name: String, last_name: String, image_url: Option<String>) -> Self {
        let image_url = image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        Self {
            first_name,
            last_name,
            image_url,
        }
    }
}

/// What happens to a user's posts when the user is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserDeletePolicy {
    /// Refuse to delete a user who still has posts.
    #[default]
    Restrict,
    /// Delete the user's posts (and their tag links) together with the user.
    Cascade,
}

impl FromStr for UserDeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restrict" => Ok(Self::Restrict),
            "cascade" => Ok(Self::Cascade),
            other => Err(format!("unknown user delete policy: {other}")),
        }
    }
}

impl fmt::Display for UserDeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restrict => f.write_str("restrict"),
            Self::Cascade => f.write_str("cascade"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_url_uses_default() {
        let user = NewUser::new("Billy".into(), "Bob".into(), None);
        assert_eq!(user.image_url, DEFAULT_IMAGE_URL);

        let blank = NewUser::new("Billy".into(), "Bob".into(), Some("  ".into()));
        assert_eq!(blank.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_supplied_image_url_is_kept() {
        let user = NewUser::new(
            "Billy".into(),
            "Bob".into(),
            Some("https://example.com/billy.png".into()),
        );
        assert_eq!(user.image_url, "https://example.com/billy.png");
    }

    #[test]
    fn test_full_name() {
        let user = User {
            id: 1,
            first_name: "Billy".into(),
            last_name: "Bob".into(),
            image_url: DEFAULT_IMAGE_URL.into(),
        };
        assert_eq!(user.full_name(), "Billy Bob");
    }

    #[test]
    fn test_delete_policy_parse() {
        assert_eq!("restrict".parse(), Ok(UserDeletePolicy::Restrict));
        assert_eq!(" Cascade ".parse(), Ok(UserDeletePolicy::Cascade));
        assert!("nuke".parse::<UserDeletePolicy>().is_err());
        assert_eq!(UserDeletePolicy::default(), UserDeletePolicy::Restrict);
    }
}
