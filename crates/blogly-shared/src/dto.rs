//! Form payloads submitted by the HTML pages.
//!
//! Browsers send `application/x-www-form-urlencoded` bodies where a field may
//! repeat (one `tags` entry per checked box), so forms are first collected as
//! ordered name/value pairs and then converted into typed structs.

use std::collections::BTreeSet;

use thiserror::Error;

/// Problems found while reading a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),

    #[error("invalid value {value:?} for field `{field}`")]
    Invalid { field: &'static str, value: String },
}

/// Raw form fields in submission order. Repeated names are preserved.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value submitted under `name`.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed value of a field that must be present and non-blank.
    fn required(&self, name: &'static str) -> Result<String, FormError> {
        self.get(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or(FormError::Missing(name))
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}

/// Create/edit user form: `firstName`, `lastName`, `img-url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl TryFrom<&FormFields> for UserForm {
    type Error = FormError;

    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: form.required("firstName")?,
            last_name: form.required("lastName")?,
            image_url: form.optional("img-url"),
        })
    }
}

/// Create/edit post form: `title`, `content` and any number of `tags` ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tag_ids: BTreeSet<i32>,
}

impl TryFrom<&FormFields> for PostForm {
    type Error = FormError;

    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        let tag_ids = form
            .get_all("tags")
            .map(|raw| {
                raw.trim().parse::<i32>().map_err(|_| FormError::Invalid {
                    field: "tags",
                    value: raw.to_string(),
                })
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            title: form.required("title")?,
            content: form.required("content")?,
            tag_ids,
        })
    }
}

/// Create/rename tag form: `tag-name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagForm {
    pub name: String,
}

impl TryFrom<&FormFields> for TagForm {
    type Error = FormError;

    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: form.required("tag-name")?,
        })
    }
}
