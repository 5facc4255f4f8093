use crate::domain::EppNumber;
use crate::error::PhoneError;
use crate::rules::source::RuleSource;

/// Formats a national number using the first candidate country whose pattern
/// matches. Unknown or malformed country codes are skipped.
pub fn format_national<S, I>(value: &str, countries: I, source: &S) -> Result<String, PhoneError>
where
    S: RuleSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut tried = Vec::new();
    for country in countries {
        let country = country.as_ref();
        tried.push(country.to_string());

        let Ok(rule) = source.get_rule(country) else {
            continue;
        };
        if let Some(formatted) = rule.format(value) {
            return Ok(formatted);
        }
    }

    Err(PhoneError::NoMatch {
        value: value.to_string(),
        countries: tried.join(", "),
    })
}

/// Tries every country known to `source`, in ascending code order.
pub fn format_national_any<S>(value: &str, source: &S) -> Result<String, PhoneError>
where
    S: RuleSource + ?Sized,
{
    format_national(value, source.countries(), source)
}

/// Converts a national number to EPP form using `country`'s dial code.
pub fn national_to_epp<S>(value: &str, country: &str, source: &S) -> Result<EppNumber, PhoneError>
where
    S: RuleSource + ?Sized,
{
    let rule = source.get_rule(country)?;
    if !rule.matches(value) {
        return Err(PhoneError::InvalidNationalNumber {
            value: value.to_string(),
            country: country.to_string(),
        });
    }

    let (number, extension) = split_extension(value);
    let cleaned = rule.strip_for_epp(number);
    Ok(EppNumber::from_parts(
        rule.dial_code().as_str(),
        &cleaned,
        extension,
    ))
}

// Splits at the last `#` or `x`; `X` is not a delimiter.
fn split_extension(value: &str) -> (&str, Option<&str>) {
    match value.rfind(|ch: char| matches!(ch, '#' | 'x')) {
        Some(idx) => (&value[..idx], Some(&value[idx + 1..])),
        None => (value, None),
    }
}
