use super::domain::{Week, PLACEHOLDER};

/// A raw spreadsheet cell, classified the way the exports are read: blank, numeric or free text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Empty,
    Number(f64),
    Text(&'a str),
}

impl<'a> Cell<'a> {
    pub fn classify(value: Option<&'a str>) -> Self {
        let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::Empty;
        };

        match raw.parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Text(raw),
        }
    }
}

/// Salary as a non-negative number. Currency symbols, thousands separators and whitespace are
/// stripped from text; anything unparseable becomes 0.
pub fn parse_salary(cell: Cell<'_>) -> f64 {
    let value = match cell {
        Cell::Empty => return 0.0,
        Cell::Number(number) => number,
        Cell::Text(text) => {
            let cleaned: String = text
                .chars()
                .filter(|ch| *ch != '$' && *ch != ',' && !ch.is_whitespace())
                .collect();
            match cleaned.parse::<f64>() {
                Ok(number) => number,
                Err(_) => return 0.0,
            }
        }
    };

    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Numeric weeks are kept; blanks and text become [`Week::Unknown`].
pub fn week_or_placeholder(cell: Cell<'_>) -> Week {
    match cell {
        Cell::Number(weeks) => Week::Numeric(weeks),
        Cell::Empty | Cell::Text(_) => Week::Unknown,
    }
}

pub fn normalize_status(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn field_or_placeholder(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}
