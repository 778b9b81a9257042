use serde::{Deserialize, Serialize};

/// Longest accepted `name` or `position`, in characters.
pub const MAX_FIELD_LEN: usize = 49;

/// A single employee record. Records are created whole, never mutated in
/// place; they leave the store only through deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub employee_id: u32,
    pub position: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        employee_id: u32,
        position: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            name: name.into(),
            employee_id,
            position: position.into(),
            salary,
        }
    }
}

/// Accepts a name/position value at the input boundary: non-empty and at
/// most [`MAX_FIELD_LEN`] characters. The store itself does not range-check
/// fields; this is for prompting code to enforce before a record is built.
pub fn valid_text_field(value: &str) -> bool {
    let len = value.chars().count();
    len > 0 && len <= MAX_FIELD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_bounds() {
        assert!(!valid_text_field(""));
        assert!(valid_text_field("a"));
        assert!(valid_text_field(&"x".repeat(MAX_FIELD_LEN)));
        assert!(!valid_text_field(&"x".repeat(MAX_FIELD_LEN + 1)));
    }

    #[test]
    fn text_field_counts_characters_not_bytes() {
        // 49 multibyte characters are within bounds even though the byte
        // length is far past it.
        assert!(valid_text_field(&"é".repeat(MAX_FIELD_LEN)));
        assert!(!valid_text_field(&"é".repeat(MAX_FIELD_LEN + 1)));
    }
}
