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

use std::collections::{HashMap, VecDeque};

use log::debug;
use protobuf::MessageField;
use regex::Regex;

use crate::{
    generated::metadata::{METADATA, SHORT_NUMBER_METADATA},
    i18n,
    phonemetadata::{PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc},
    regexp_cache::InvalidRegexError,
};

use super::{
    errors::{MetadataError, UnknownRegionError},
    helper_constants::{
        FIRST_GROUP_PLACEHOLDER, NATIONAL_PREFIX_PLACEHOLDER, REGION_CODE_FOR_NON_GEO_ENTITY,
    },
};

/// Immutable index over the numbering plan metadata.
///
/// Built once, then shared read-only. Every pattern it holds is known to
/// compile and every descriptor follows the same conventions: an empty
/// length set means there are no numbers of that type.
pub struct MetadataStore {
    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code for a non-geographical entity to the
    /// PhoneMetadata for that country calling code. Examples of the country
    /// calling codes include 800 (International Toll Free Service) and 808
    /// (International Shared Cost Service).
    country_code_to_non_geographical_metadata_map: HashMap<i32, PhoneMetadata>,

    /// A mapping from a country calling code to the region codes which denote
    /// the regions represented by that country calling code. Note regions under
    /// NANPA share the country calling code 1 and Russia and Kazakhstan share the
    /// country calling code 7. The main country for a code always comes first.
    /// This is implemented as a sorted vector to achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    /// Short number metadata by region code.
    region_to_short_metadata_map: HashMap<String, PhoneMetadata>,
}

impl MetadataStore {
    /// Loads the metadata bundled with the crate.
    pub fn compiled() -> Result<Self, MetadataError> {
        Self::from_text(METADATA, SHORT_NUMBER_METADATA)
    }

    /// Parses both collections from protobuf text format.
    pub fn from_text(metadata: &str, short_number_metadata: &str) -> Result<Self, MetadataError> {
        let metadata = parse_collection(metadata)?;
        let short_number_metadata = parse_collection(short_number_metadata)?;
        Self::from_collections(metadata, short_number_metadata)
    }

    pub fn from_collections(
        metadata_collection: PhoneMetadataCollection,
        short_number_collection: PhoneMetadataCollection,
    ) -> Result<Self, MetadataError> {
        let mut instance = Self {
            region_to_metadata_map: Default::default(),
            country_code_to_non_geographical_metadata_map: Default::default(),
            country_calling_code_to_region_code_map: Default::default(),
            region_to_short_metadata_map: Default::default(),
        };
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        for mut metadata in metadata_collection.metadata {
            let region_code = metadata.id().to_owned();
            if i18n::RegionCode::get_unknown() == region_code {
                continue;
            }
            normalize_metadata(&mut metadata);
            validate_patterns(&metadata)?;

            let country_calling_code = metadata.country_code();
            let main_country_for_code = metadata.main_country_for_code();
            if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
                if instance
                    .country_code_to_non_geographical_metadata_map
                    .insert(country_calling_code, metadata)
                    .is_some()
                {
                    return Err(MetadataError::DuplicateRegion(format!(
                        "{}/{}",
                        region_code, country_calling_code
                    )));
                }
            } else if instance
                .region_to_metadata_map
                .insert(region_code.clone(), metadata)
                .is_some()
            {
                return Err(MetadataError::DuplicateRegion(region_code));
            }

            let region_codes = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if main_country_for_code {
                region_codes.push_front(region_code);
            } else {
                region_codes.push_back(region_code);
            }
        }

        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .map(|(code, regions)| (code, Vec::from(regions))),
        );
        // Sort all the pairs in ascending order according to country calling code.
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(code, _)| *code);

        for mut metadata in short_number_collection.metadata {
            let region_code = metadata.id().to_owned();
            if i18n::RegionCode::get_unknown() == region_code {
                continue;
            }
            normalize_metadata(&mut metadata);
            validate_patterns(&metadata)?;
            if instance
                .region_to_short_metadata_map
                .insert(region_code.clone(), metadata)
                .is_some()
            {
                return Err(MetadataError::DuplicateRegion(region_code));
            }
        }

        debug!(
            "Loaded metadata for {} regions, {} non-geographical entities and {} short number regions",
            instance.region_to_metadata_map.len(),
            instance.country_code_to_non_geographical_metadata_map.len(),
            instance.region_to_short_metadata_map.len(),
        );
        Ok(instance)
    }

    pub fn lookup(&self, region_code: &str) -> Result<&PhoneMetadata, UnknownRegionError> {
        self.region_to_metadata_map
            .get(region_code)
            .ok_or_else(|| UnknownRegionError::UnknownRegionCode(region_code.to_owned()))
    }

    pub fn lookup_non_geographical(&self, country_calling_code: i32) -> Option<&PhoneMetadata> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
    }

    /// Returns the regions sharing `country_calling_code`, main country
    /// first. Non-geographical entities are listed as "001".
    pub fn region_codes_for_country_code(&self, country_calling_code: i32) -> &[String] {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
            .unwrap_or_default()
    }

    pub fn has_country_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    pub fn metadata_for_region_or_calling_code(
        &self,
        country_calling_code: i32,
        region_code: &str,
    ) -> Option<&PhoneMetadata> {
        if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
            self.lookup_non_geographical(country_calling_code)
        } else {
            self.region_to_metadata_map.get(region_code)
        }
    }

    /// Metadata of the main country for `country_calling_code`. Regions
    /// sharing a calling code keep their formatting and national prefix rules
    /// there, e.g. in "US" for NANPA numbers.
    pub fn metadata_for_country_code(&self, country_calling_code: i32) -> Option<&PhoneMetadata> {
        let region_code = self
            .region_codes_for_country_code(country_calling_code)
            .first()?;
        self.metadata_for_region_or_calling_code(country_calling_code, region_code)
    }

    pub fn short_number_metadata(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_short_metadata_map.get(region_code)
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(String::as_str)
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }

    pub fn supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_code_to_non_geographical_metadata_map
            .keys()
            .copied()
    }

    /// Every regular metadata record, geographical or not, keyed by its
    /// region code.
    pub fn all_metadata(&self) -> impl Iterator<Item = (&str, &PhoneMetadata)> {
        self.region_to_metadata_map
            .iter()
            .map(|(region_code, metadata)| (region_code.as_str(), metadata))
            .chain(
                self.country_code_to_non_geographical_metadata_map
                    .values()
                    .map(|metadata| (REGION_CODE_FOR_NON_GEO_ENTITY, metadata)),
            )
    }

    pub fn all_short_number_metadata(&self) -> impl Iterator<Item = (&str, &PhoneMetadata)> {
        self.region_to_short_metadata_map
            .iter()
            .map(|(region_code, metadata)| (region_code.as_str(), metadata))
    }
}

fn parse_collection(text: &str) -> Result<PhoneMetadataCollection, MetadataError> {
    protobuf::text_format::parse_from_str::<PhoneMetadataCollection>(text)
        .map_err(|err| MetadataError::InvalidText(err.to_string()))
}

fn specific_descs_mut(metadata: &mut PhoneMetadata) -> [&mut MessageField<PhoneNumberDesc>; 16] {
    [
        &mut metadata.fixed_line,
        &mut metadata.mobile,
        &mut metadata.toll_free,
        &mut metadata.premium_rate,
        &mut metadata.shared_cost,
        &mut metadata.personal_number,
        &mut metadata.voip,
        &mut metadata.pager,
        &mut metadata.uan,
        &mut metadata.emergency,
        &mut metadata.voicemail,
        &mut metadata.short_code,
        &mut metadata.standard_rate,
        &mut metadata.carrier_specific,
        &mut metadata.sms_services,
        &mut metadata.no_international_dialling,
    ]
}

fn all_descs(metadata: &PhoneMetadata) -> [&PhoneNumberDesc; 17] {
    [
        &metadata.general_desc,
        &metadata.fixed_line,
        &metadata.mobile,
        &metadata.toll_free,
        &metadata.premium_rate,
        &metadata.shared_cost,
        &metadata.personal_number,
        &metadata.voip,
        &metadata.pager,
        &metadata.uan,
        &metadata.emergency,
        &metadata.voicemail,
        &metadata.short_code,
        &metadata.standard_rate,
        &metadata.carrier_specific,
        &metadata.sms_services,
        &metadata.no_international_dialling,
    ]
}

/// Drops the "-1" marker from the lengths. Returns `true` if it was there.
fn strip_no_numbers_marker(desc: &mut PhoneNumberDesc) -> bool {
    let had_marker = desc.possible_length.contains(&-1);
    desc.possible_length.retain(|length| *length > 0);
    desc.possible_length_local_only.retain(|length| *length > 0);
    had_marker
}

/// Rewrites `$1` group references to `${1}`, so that a digit right after the
/// reference is not read as part of the group name.
fn brace_group_references(rule: &str) -> String {
    let mut braced = String::with_capacity(rule.len() + 4);
    let mut chars = rule.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('$', Some(digit)) if digit.is_ascii_digit() => {
                braced.push_str("${");
                braced.push(*digit);
                braced.push('}');
                chars.next();
            }
            _ => braced.push(c),
        }
    }
    braced
}

fn normalize_metadata(metadata: &mut PhoneMetadata) {
    if let Some(general_desc) = metadata.general_desc.as_mut() {
        strip_no_numbers_marker(general_desc);
    }
    let general_lengths = metadata.general_desc.possible_length.clone();
    for desc in specific_descs_mut(metadata) {
        let Some(desc) = desc.as_mut() else {
            continue;
        };
        let no_numbers = strip_no_numbers_marker(desc);
        // Lengths equal to the general ones are omitted in the data files.
        if !no_numbers
            && desc.possible_length.is_empty()
            && !desc.national_number_pattern().is_empty()
        {
            desc.possible_length = general_lengths.clone();
        }
    }

    if metadata.national_prefix_for_parsing().is_empty() && !metadata.national_prefix().is_empty() {
        let national_prefix = metadata.national_prefix().to_owned();
        metadata.set_national_prefix_for_parsing(national_prefix);
    }
    if metadata.has_national_prefix_transform_rule() {
        let rule = brace_group_references(metadata.national_prefix_transform_rule());
        metadata.set_national_prefix_transform_rule(rule);
    }

    let national_prefix = metadata.national_prefix().to_owned();
    for format in metadata
        .number_format
        .iter_mut()
        .chain(metadata.intl_number_format.iter_mut())
    {
        if format.national_prefix_formatting_rule().is_empty() {
            continue;
        }
        let rule = format
            .national_prefix_formatting_rule()
            .replace(NATIONAL_PREFIX_PLACEHOLDER, &national_prefix)
            .replace(FIRST_GROUP_PLACEHOLDER, "$1");
        format.set_national_prefix_formatting_rule(rule);
    }

    if !metadata.has_same_mobile_and_fixed_line_pattern() {
        let fixed_line_pattern = metadata.fixed_line.national_number_pattern();
        let same = !fixed_line_pattern.is_empty()
            && fixed_line_pattern == metadata.mobile.national_number_pattern();
        metadata.set_same_mobile_and_fixed_line_pattern(same);
    }
}

fn validate_patterns(metadata: &PhoneMetadata) -> Result<(), MetadataError> {
    let check = |pattern: &str| -> Result<(), MetadataError> {
        if pattern.is_empty() {
            return Ok(());
        }
        Regex::new(pattern)
            .map(|_| ())
            .map_err(|err| MetadataError::InvalidPattern {
                region: metadata.id().to_owned(),
                pattern: pattern.to_owned(),
                source: InvalidRegexError::from(err),
            })
    };
    for desc in all_descs(metadata) {
        check(desc.national_number_pattern())?;
    }
    check(metadata.international_prefix())?;
    check(metadata.national_prefix_for_parsing())?;
    check(metadata.leading_digits())?;
    for format in metadata.number_format.iter().chain(metadata.intl_number_format.iter()) {
        check(format.pattern())?;
        for leading_digits in &format.leading_digits_pattern {
            check(leading_digits)?;
        }
    }
    Ok(())
}
