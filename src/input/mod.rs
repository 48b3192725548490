//! Value parsing for manual entry and file loading.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::step::Value;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Please enter at least one number.")]
    Empty,
    #[error("All items must be valid numbers (use commas to separate).")]
    NotANumber,
    #[error("No numbers found in file.")]
    NoFileTokens,
    #[error("Invalid number in file: '{0}'")]
    InvalidFileToken(String),
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse the manual-entry field: comma-separated numbers, whitespace
/// tolerated around each.
pub fn parse_values(text: &str) -> Result<Vec<Value>, ParseError> {
    let parts: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        return Err(ParseError::Empty);
    }

    parts
        .iter()
        .map(|part| {
            part.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::from_f64)
                .ok_or(ParseError::NotANumber)
        })
        .collect()
}

/// Interpret a single entered token: a finite number when it parses as one,
/// otherwise a text value (stack and queue accept short labels too).
pub fn parse_single(raw: &str) -> Value {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::from_f64(n),
        _ => Value::Text(raw.to_string()),
    }
}

fn token_splitter() -> &'static Regex {
    static SPLITTER: OnceLock<Regex> = OnceLock::new();
    SPLITTER.get_or_init(|| Regex::new(r"[,\s]+").expect("static token pattern"))
}

/// Load a CSV/TXT file of numbers: tokens split on commas and whitespace,
/// integral floats collapsed. Undecodable bytes are dropped, not fatal.
pub fn load_values_file(path: &Path) -> Result<Vec<Value>, ParseError> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);

    let tokens: Vec<&str> = token_splitter()
        .split(&content)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ParseError::NoFileTokens);
    }

    tokens
        .iter()
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::from_f64)
                .ok_or_else(|| ParseError::InvalidFileToken(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn comma_separated_numbers_parse() {
        let values = parse_values(" 3, 1 ,4 ").unwrap();
        assert_eq!(
            values,
            vec![Value::Int(3), Value::Int(1), Value::Int(4)]
        );
    }

    #[test]
    fn blank_input_is_rejected_with_the_prompt_message() {
        let err = parse_values("  , ,").unwrap_err();
        assert_eq!(err.to_string(), "Please enter at least one number.");
    }

    #[test]
    fn non_numeric_entry_is_rejected() {
        let err = parse_values("1, two, 3").unwrap_err();
        assert!(matches!(err, ParseError::NotANumber));
    }

    #[test]
    fn single_tokens_fall_back_to_text() {
        assert_eq!(parse_single("42"), Value::Int(42));
        assert_eq!(parse_single("4.5"), Value::Float(4.5));
        assert_eq!(parse_single("x"), Value::Text("x".to_string()));
    }

    #[test]
    fn file_tokens_split_on_commas_and_whitespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1, 2\t3\n4.0  5.5").unwrap();

        let values = load_values_file(file.path()).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
                Value::Int(4),
                Value::Float(5.5),
            ]
        );
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_values_file(file.path()).unwrap_err();
        assert!(matches!(err, ParseError::NoFileTokens));
    }

    #[test]
    fn bad_file_token_names_itself() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1, banana, 3").unwrap();

        let err = load_values_file(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid number in file: 'banana'");
    }
}
