pub mod country;
pub mod epp;
pub mod itu;

pub use country::{CountryCode, DialCode};
pub use epp::EppNumber;
pub use itu::{itu_to_epp, parse_itu, ItuNumber};
