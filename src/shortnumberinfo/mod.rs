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
    phonemetadata::PhoneMetadata,
    phonenumberutil::{
        PhoneNumberType, ShortNumberCost, classifier::Classifier,
        helper_constants::PLUS_CHARS, helper_functions::normalize_digits_only,
        metadata_store::MetadataStore,
    },
};

/// In these countries, if extra digits are added to an emergency number, it no
/// longer connects to the emergency service.
const REGIONS_WHERE_EMERGENCY_NUMBERS_MUST_BE_EXACT: [&str; 3] = ["BR", "CL", "NI"];

/// Queries over the short number metadata: emergency numbers, short codes and
/// their expected cost.
///
/// Obtained from [`PhoneNumberUtil::short_number_info`](crate::PhoneNumberUtil::short_number_info).
pub struct ShortNumberInfo<'a> {
    metadata_store: &'a MetadataStore,
    classifier: &'a Classifier,
}

impl<'a> ShortNumberInfo<'a> {
    pub(crate) fn new(metadata_store: &'a MetadataStore, classifier: &'a Classifier) -> Self {
        Self { metadata_store, classifier }
    }

    fn metadata_for_region(&self, region_code: &str) -> Option<&'a PhoneMetadata> {
        let metadata = self.metadata_store.short_number_metadata(region_code);
        if metadata.is_none() {
            trace!("No short number metadata for region {region_code}");
        }
        metadata
    }

    /// `true` if `number` is exactly an emergency number of the region.
    pub fn is_emergency_number(&self, number: &str, region_code: &str) -> bool {
        self.matches_emergency_number_helper(number, region_code, false)
    }

    /// `true` if dialling `number` in the region would reach an emergency
    /// service, which includes emergency numbers followed by extra digits in
    /// most regions.
    pub fn connects_to_emergency_number(&self, number: &str, region_code: &str) -> bool {
        self.matches_emergency_number_helper(number, region_code, true)
    }

    fn matches_emergency_number_helper(
        &self,
        number: &str,
        region_code: &str,
        allow_prefix_match: bool,
    ) -> bool {
        // Emergency numbers are dialled without an international prefix.
        if number
            .trim_start()
            .starts_with(|c: char| PLUS_CHARS.contains(c))
        {
            return false;
        }
        let Some(metadata) = self.metadata_for_region(region_code) else {
            return false;
        };
        let normalized_number = normalize_digits_only(number);
        let allow_prefix_match = allow_prefix_match
            && !REGIONS_WHERE_EMERGENCY_NUMBERS_MUST_BE_EXACT.contains(&region_code);
        self.classifier.matcher().match_national_number(
            &normalized_number,
            &metadata.emergency,
            allow_prefix_match,
        )
    }

    /// `true` if the length of `short_number` is one the region uses for short
    /// numbers.
    pub fn is_possible_short_number_for_region(&self, short_number: &str, region_code: &str) -> bool {
        let Some(metadata) = self.metadata_for_region(region_code) else {
            return false;
        };
        let short_number = normalize_digits_only(short_number);
        metadata
            .general_desc
            .possible_length
            .contains(&(short_number.len() as i32))
    }

    pub fn is_valid_short_number_for_region(&self, short_number: &str, region_code: &str) -> bool {
        let Some(metadata) = self.metadata_for_region(region_code) else {
            return false;
        };
        let short_number = normalize_digits_only(short_number);
        if !self
            .classifier
            .is_number_matching_desc(&short_number, &metadata.general_desc)
        {
            return false;
        }
        self.classifier
            .is_number_matching_desc(&short_number, &metadata.short_code)
    }

    /// Gets the expected cost category of a short number when dialled from a
    /// region. Emergency numbers are free.
    pub fn get_expected_cost_for_region(&self, short_number: &str, region_code: &str) -> ShortNumberCost {
        let Some(metadata) = self.metadata_for_region(region_code) else {
            return ShortNumberCost::UnknownCost;
        };
        let short_number = normalize_digits_only(short_number);
        let short_number = short_number.as_str();
        // The possible lengths are not present for a particular sub-type if they
        // match the general description; for this reason, we check the possible
        // lengths against the general description first to allow an early exit
        // if possible.
        if !metadata
            .general_desc
            .possible_length
            .contains(&(short_number.len() as i32))
        {
            return ShortNumberCost::UnknownCost;
        }
        // The cost categories are tested in order of decreasing expense, since if
        // for some reason the patterns overlap the most expensive matching cost
        // category should be returned.
        if self
            .classifier
            .is_number_matching_desc(short_number, &metadata.premium_rate)
        {
            return ShortNumberCost::PremiumRate;
        }
        if self
            .classifier
            .is_number_matching_desc(short_number, &metadata.standard_rate)
        {
            return ShortNumberCost::StandardRate;
        }
        if self
            .classifier
            .is_number_matching_desc(short_number, &metadata.toll_free)
        {
            return ShortNumberCost::TollFree;
        }
        if self
            .classifier
            .is_number_matching_desc(short_number, &metadata.emergency)
        {
            // Emergency numbers are implicitly toll-free.
            return ShortNumberCost::TollFree;
        }
        ShortNumberCost::UnknownCost
    }

    /// Classifies `short_number` with the short number metadata of the region.
    pub fn classify_for_region(&self, short_number: &str, region_code: &str) -> Option<PhoneNumberType> {
        let metadata = self.metadata_for_region(region_code)?;
        self.classifier
            .classify_short(metadata, &normalize_digits_only(short_number))
    }
}
