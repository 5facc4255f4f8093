use crate::domain::epp::EppNumber;
use crate::error::PhoneError;
use once_cell::sync::Lazy;
use regex::Regex;

// 1: country code, 2: national number with separators, 3: extension digits.
static ITU_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+[0-9]{1,3})[^0-9]+((?:[0-9]+[\s.-]*)+)(?:[^0-9]+([0-9]+))?")
        .expect("ITU pattern compiles")
});

/// Phone number split out of an ITU-T E.123 string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItuNumber {
    /// Leading `+` and 1-3 digits.
    pub country_code: String,
    pub national_number: String,
    pub extension: Option<String>,
}

impl ItuNumber {
    pub fn to_epp(&self) -> EppNumber {
        EppNumber::from_parts(
            &self.country_code,
            &self.national_number,
            self.extension.as_deref(),
        )
    }
}

pub fn parse_itu(value: &str) -> Result<ItuNumber, PhoneError> {
    let captures = ITU_PATTERN
        .captures(value)
        .ok_or_else(|| PhoneError::InvalidFormat {
            value: value.to_string(),
        })?;

    let country_code = captures[1].to_string();
    let national_number = captures[2]
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    let extension = captures.get(3).map(|m| m.as_str().to_string());

    Ok(ItuNumber {
        country_code,
        national_number,
        extension,
    })
}

/// Converts an ITU-T E.123 number (`+44 20 7925 0918`) to EPP form
/// (`+44.2079250918`). Any non-digit run before a trailing digit run is read
/// as the extension delimiter and rendered as `x`.
pub fn itu_to_epp(value: &str) -> Result<EppNumber, PhoneError> {
    Ok(parse_itu(value)?.to_epp())
}
