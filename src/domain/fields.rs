//! Text field limits shared by the record types.

pub const NAME_MAX_LEN: usize = 100;
pub const ADDRESS_MAX_LEN: usize = 200;
pub const ZIP_CODE_MAX_LEN: usize = 10;
pub const PHONE_NUMBER_MAX_LEN: usize = 20;

/// Trims a required text field and checks it against its maximum length.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} is required"));
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(format!("{field} must be at most {max_len} characters, got {len}"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(required_text("name", "  Bistro  ", NAME_MAX_LEN), Ok("Bistro".to_string()));
    }

    #[test]
    fn blank_values_are_rejected() {
        assert_eq!(required_text("name", "   ", NAME_MAX_LEN), Err("name is required".to_string()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let zip = "é".repeat(ZIP_CODE_MAX_LEN);
        assert!(required_text("zip_code", &zip, ZIP_CODE_MAX_LEN).is_ok());
        assert!(required_text("zip_code", &format!("{zip}1"), ZIP_CODE_MAX_LEN).is_err());
    }
}
