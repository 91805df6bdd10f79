//! Todo items and the title rule shared by the form and the HTTP adapter.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message reported when the submitted title is blank.
pub const TITLE_REQUIRED: &str = "Title is required";
/// Fallback message when the title field is missing altogether.
pub const INVALID_TITLE: &str = "Invalid title";

/// Store-assigned todo identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct TodoId(i64);

impl TodoId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A titled, completable work item.
///
/// ## Invariants
/// - `id` is assigned by the store and never changed by callers.
/// - `title` is non-blank when created through [`TodoTitle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    #[schema(example = "milk")]
    pub title: String,
    pub is_completed: bool,
}

impl Todo {
    /// Build a todo record.
    pub fn new(id: TodoId, title: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            is_completed,
        }
    }

    /// Copy of this todo with the completion flag flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }
}

/// Payload of the store's `add` verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewTodo {
    #[schema(example = "milk")]
    pub title: String,
}

impl From<TodoTitle> for NewTodo {
    fn from(title: TodoTitle) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Reasons a submitted title is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TodoTitleError {
    /// The field was present but blank once trimmed.
    #[error("{}", TITLE_REQUIRED)]
    Blank,
    /// The field was not submitted at all.
    #[error("{}", INVALID_TITLE)]
    Missing,
}

/// Title that passed validation.
///
/// The submitted text is kept as-is; only the blank check trims.
///
/// # Examples
/// ```
/// use backend::domain::{TodoTitle, TodoTitleError};
///
/// assert_eq!(TodoTitle::parse(Some("  milk ")).unwrap().as_ref(), "  milk ");
/// assert_eq!(TodoTitle::parse(Some("   ")), Err(TodoTitleError::Blank));
/// assert_eq!(TodoTitle::parse(None), Err(TodoTitleError::Missing));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Validate an optional raw field value.
    pub fn parse(raw: Option<&str>) -> Result<Self, TodoTitleError> {
        let raw = raw.ok_or(TodoTitleError::Missing)?;
        Self::new(raw)
    }

    /// Validate a raw title.
    pub fn new(raw: impl Into<String>) -> Result<Self, TodoTitleError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TodoTitleError::Blank);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<TodoTitle> for String {
    fn from(value: TodoTitle) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n ")]
    fn blank_titles_are_rejected(#[case] raw: &str) {
        assert_eq!(TodoTitle::new(raw), Err(TodoTitleError::Blank));
        assert_eq!(TodoTitleError::Blank.to_string(), TITLE_REQUIRED);
    }

    #[rstest]
    fn missing_title_uses_the_generic_message() {
        let err = TodoTitle::parse(None).expect_err("missing field must fail");
        assert_eq!(err.to_string(), INVALID_TITLE);
    }

    #[rstest]
    #[case("a")]
    #[case("buy milk")]
    #[case(" padded ")]
    fn non_blank_titles_are_kept_verbatim(#[case] raw: &str) {
        let title = TodoTitle::new(raw).expect("valid title");
        assert_eq!(title.as_ref(), raw);
    }

    #[rstest]
    fn toggled_flips_only_the_flag() {
        let todo = Todo::new(TodoId::new(1), "milk", false);
        let flipped = todo.toggled();
        assert_eq!(flipped, Todo::new(TodoId::new(1), "milk", true));
        assert_eq!(flipped.toggled(), todo);
    }

    #[rstest]
    fn json_uses_camel_case_fields() {
        let todo = Todo::new(TodoId::new(2), "eggs", true);
        let value = serde_json::to_value(&todo).expect("serialise todo");
        assert_eq!(
            value,
            serde_json::json!({ "id": 2, "title": "eggs", "isCompleted": true })
        );
    }
}
