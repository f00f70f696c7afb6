pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;
pub(self) mod helper_types;
pub mod metadata_store;
pub mod classifier;

use std::sync::LazyLock;

pub use enums::{CountryCodeSource, NumberLengthType, PhoneNumberFormat, PhoneNumberType, ShortNumberCost};
pub use helper_types::{ExampleNumberMismatch, ValidationResult};
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

/// Process-wide instance over the bundled metadata, built on first use.
pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
