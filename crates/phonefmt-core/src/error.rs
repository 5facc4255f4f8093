use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("phone number not in ITU format: {value}")]
    InvalidFormat { value: String },
    #[error("no match found for phone number {value} in countries [{countries}]")]
    NoMatch { value: String, countries: String },
    #[error("country not found: {country}")]
    CountryNotFound { country: String },
    #[error("invalid national phone number {value} for country {country}")]
    InvalidNationalNumber { value: String, country: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("invalid dial code: {0}")]
    InvalidDialCode(String),
    #[error("invalid pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },
}
