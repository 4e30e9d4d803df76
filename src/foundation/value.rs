/// Decimal places kept when a number is written back into a document.
pub const NUMBER_PRECISION: i32 = 6;

/// A develop setting value, coerced from its stored text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AttributeValue {
    /// `True` / `False` in any letter case.
    Boolean(bool),
    /// Any finite number.
    Number(f64),
    /// Everything else, trimmed.
    Text(String),
}

impl AttributeValue {
    /// Coerce stored text into the most specific value kind.
    ///
    /// Booleans win over numbers, numbers over text. Non-finite spellings such as `"inf"` or
    /// `"NaN"` stay text.
    pub fn parse(raw: &str) -> Self {
        let clean = raw.trim();
        if clean.eq_ignore_ascii_case("true") {
            return Self::Boolean(true);
        }
        if clean.eq_ignore_ascii_case("false") {
            return Self::Boolean(false);
        }
        match clean.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(clean.to_owned()),
        }
    }

    /// Serialize back to document text.
    pub fn to_text(&self) -> String {
        match self {
            Self::Boolean(true) => "True".to_owned(),
            Self::Boolean(false) => "False".to_owned(),
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.trim().to_owned(),
        }
    }

    /// Numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Round to [`NUMBER_PRECISION`] decimals and print the shortest representation.
pub fn format_number(n: f64) -> String {
    let scale = 10f64.powi(NUMBER_PRECISION);
    let rounded = (n * scale).round() / scale;
    // -0 prints as "-0"
    if rounded == 0.0 {
        return "0".to_owned();
    }
    rounded.to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/value.rs"]
mod tests;
