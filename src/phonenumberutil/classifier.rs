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

use log::trace;

use crate::{
    interfaces::MatcherApi,
    phonemetadata::{PhoneMetadata, PhoneNumberDesc},
    regex_based_matcher::RegexBasedMatcher,
};

use super::{
    PhoneNumberType,
    helper_functions::{get_number_desc_by_type, specific_types},
};

/// Types tried, in order, before the fixed-line and mobile descriptors.
const TYPES_BEFORE_FIXED_LINE_OR_MOBILE: [PhoneNumberType; 8] = [
    PhoneNumberType::PremiumRate,
    PhoneNumberType::TollFree,
    PhoneNumberType::SharedCost,
    PhoneNumberType::VoIP,
    PhoneNumberType::PersonalNumber,
    PhoneNumberType::Pager,
    PhoneNumberType::UAN,
    PhoneNumberType::VoiceMail,
];

/// Types tried, in order, after the fixed-line and mobile descriptors.
const TYPES_AFTER_FIXED_LINE_OR_MOBILE: [PhoneNumberType; 5] = [
    PhoneNumberType::StandardRate,
    PhoneNumberType::CarrierSpecific,
    PhoneNumberType::SmsServices,
    PhoneNumberType::Emergency,
    PhoneNumberType::ShortCode,
];

/// Precedence used for short number metadata.
const SHORT_NUMBER_TYPES: [PhoneNumberType; 8] = [
    PhoneNumberType::Emergency,
    PhoneNumberType::PremiumRate,
    PhoneNumberType::TollFree,
    PhoneNumberType::StandardRate,
    PhoneNumberType::SharedCost,
    PhoneNumberType::CarrierSpecific,
    PhoneNumberType::SmsServices,
    PhoneNumberType::ShortCode,
];

/// Decides which number type a national significant number belongs to.
pub struct Classifier {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_matcher(Box::new(RegexBasedMatcher::new()))
    }

    pub fn with_matcher(matcher_api: Box<dyn MatcherApi>) -> Self {
        Self { matcher_api }
    }

    pub fn matcher(&self) -> &dyn MatcherApi {
        self.matcher_api.as_ref()
    }

    /// Length-gated full match of `national_number` against `number_desc`.
    /// A descriptor without possible lengths has no numbers and never matches.
    pub fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> bool {
        let actual_length = national_number.len() as i32;
        if !number_desc.possible_length.contains(&actual_length) {
            return false;
        }
        self.matcher_api
            .match_national_number(national_number, number_desc, false)
    }

    fn matches_type(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
        number_type: PhoneNumberType,
    ) -> bool {
        self.is_number_matching_desc(national_number, get_number_desc_by_type(metadata, number_type))
    }

    /// Returns `None` when the number does not even fit the general
    /// description of the region, and [`PhoneNumberType::General`] when it
    /// fits no specific type.
    pub fn classify(
        &self,
        metadata: &PhoneMetadata,
        national_number: &str,
    ) -> Option<PhoneNumberType> {
        if !self.is_number_matching_desc(national_number, &metadata.general_desc) {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return None;
        }
        for number_type in TYPES_BEFORE_FIXED_LINE_OR_MOBILE {
            if self.matches_type(national_number, metadata, number_type) {
                trace!("Number '{national_number}' is a {number_type:?} number.");
                return Some(number_type);
            }
        }

        let is_fixed_line = self.is_number_matching_desc(national_number, &metadata.fixed_line);
        if is_fixed_line {
            if metadata.same_mobile_and_fixed_line_pattern() {
                trace!("Number '{national_number}': fixed-line and mobile patterns equal,\
                 number is fixed-line or mobile");
                return Some(PhoneNumberType::FixedLineOrMobile);
            } else if self.is_number_matching_desc(national_number, &metadata.mobile) {
                trace!("Number '{national_number}': Fixed-line and mobile patterns differ, but number is \
                        still fixed-line or mobile"
                );
                return Some(PhoneNumberType::FixedLineOrMobile);
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return Some(PhoneNumberType::FixedLine);
        }
        // Otherwise, test to see if the number is mobile. Only do this if certain
        // that the patterns for mobile and fixed line aren't the same.
        if !metadata.same_mobile_and_fixed_line_pattern()
            && self.is_number_matching_desc(national_number, &metadata.mobile)
        {
            trace!("Number '{national_number}' is a mobile number.");
            return Some(PhoneNumberType::Mobile);
        }

        for number_type in TYPES_AFTER_FIXED_LINE_OR_MOBILE {
            if self.matches_type(national_number, metadata, number_type) {
                trace!("Number '{national_number}' is a {number_type:?} number.");
                return Some(number_type);
            }
        }
        trace!("Number '{national_number}' matches only the general description.");
        Some(PhoneNumberType::General)
    }

    /// Same as [`Classifier::classify`] for short number metadata, where
    /// emergency numbers take precedence over everything else.
    pub fn classify_short(
        &self,
        metadata: &PhoneMetadata,
        short_number: &str,
    ) -> Option<PhoneNumberType> {
        if !self.is_number_matching_desc(short_number, &metadata.general_desc) {
            trace!("Short number '{short_number}' doesn't match the general short number pattern");
            return None;
        }
        let number_type = SHORT_NUMBER_TYPES
            .into_iter()
            .find(|number_type| self.matches_type(short_number, metadata, *number_type))
            .unwrap_or(PhoneNumberType::General);
        trace!("Short number '{short_number}' is a {number_type:?} number.");
        Some(number_type)
    }

    /// Every specific type whose descriptor accepts the number, in declaration
    /// order. Empty when the general description does not match.
    pub fn matching_types(
        &self,
        metadata: &PhoneMetadata,
        national_number: &str,
    ) -> Vec<PhoneNumberType> {
        if !self.is_number_matching_desc(national_number, &metadata.general_desc) {
            return Vec::new();
        }
        specific_types()
            .filter(|number_type| self.matches_type(national_number, metadata, *number_type))
            .collect()
    }
}
