// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use crate::phonenumber::PhoneNumber;

use super::enums::{CountryCodeSource, PhoneNumberType};

/// Verdict of [`PhoneNumberUtil::validate`](crate::PhoneNumberUtil::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// `true` when `number_type` names a specific category. A number that
    /// only fits the general description of its region is reported with
    /// [`PhoneNumberType::General`] and `is_valid == false`.
    pub is_valid: bool,
    pub number_type: PhoneNumberType,
    /// Every specific type whose descriptor accepts the number, in
    /// declaration order of [`PhoneNumberType`]. `number_type` is the one
    /// picked by precedence among them.
    pub matched_types: Vec<PhoneNumberType>,
    /// Region the number was resolved to, "001" for non-geographical entities.
    pub region_code: String,
    pub phone_number: PhoneNumber,
    /// Set when the number was recognised by the short number metadata of the
    /// region hint rather than by its regular numbering plan.
    pub is_short_number: bool,
}

impl ValidationResult {
    /// The normalized national significant number: ASCII digits only, with
    /// international and national prefixes removed.
    pub fn normalized_digits(&self) -> &str {
        self.phone_number.national_number()
    }

    pub fn country_code(&self) -> i32 {
        self.phone_number.country_code()
    }
}

/// Output of the normalization steps shared by `parse` and `validate`.
#[derive(Debug)]
pub(super) struct ParsedNumber<'a> {
    pub phone_number: PhoneNumber,
    pub country_code_source: CountryCodeSource,
    /// Region hint, kept for numbers that were dialled in national form.
    pub default_region: Option<&'a str>,
    /// Digits as dialled, before the national prefix was stripped. Short
    /// numbers are matched against these.
    pub dialled_digits: String,
}

impl<'a> ParsedNumber<'a> {
    pub fn new(
        phone_number: PhoneNumber,
        country_code_source: CountryCodeSource,
        default_region: Option<&'a str>,
        dialled_digits: String,
    ) -> Self {
        Self { phone_number, country_code_source, default_region, dialled_digits }
    }
}

/// An example number that its own descriptor does not accept, reported by
/// [`PhoneNumberUtil::check_example_numbers`](crate::PhoneNumberUtil::check_example_numbers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleNumberMismatch {
    pub region_code: String,
    pub number_type: PhoneNumberType,
    pub example_number: String,
    /// Set for entries of the short number metadata.
    pub short: bool,
}
