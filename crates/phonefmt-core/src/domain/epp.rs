use serde::Serialize;
use std::fmt;

/// Phone number in EPP form: `+<dial code>.<national digits>[x<extension>]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EppNumber(String);

impl EppNumber {
    /// Assembles an EPP number, keeping only ASCII digits from each part.
    /// An extension with no digits is dropped.
    pub(crate) fn from_parts(dial_code: &str, national: &str, extension: Option<&str>) -> Self {
        let mut out = String::with_capacity(dial_code.len() + national.len() + 8);
        out.push('+');
        out.extend(dial_code.chars().filter(char::is_ascii_digit));
        out.push('.');
        out.extend(national.chars().filter(char::is_ascii_digit));

        if let Some(extension) = extension {
            let digits: String = extension.chars().filter(char::is_ascii_digit).collect();
            if !digits.is_empty() {
                out.push('x');
                out.push_str(&digits);
            }
        }

        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EppNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for EppNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EppNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
