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

use std::{borrow::Cow, collections::HashSet, sync::Arc};

use log::{debug, error, trace, warn};
use regex::Regex;

use super::{
    classifier::Classifier,
    metadata_store::MetadataStore,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};
use crate::{
    i18n,
    macros::owned_from_cow_or,
    phonemetadata::{NumberFormat, PhoneMetadata},
    phonenumber::PhoneNumber,
    phonenumberutil::{
        CountryCodeSource, NumberLengthType, PhoneNumberFormat, PhoneNumberType,
        errors::{
            GetExampleNumberError, MalformedInputError, MetadataError, PossibleLengthError,
            UnknownRegionError, ValidationError,
        },
        helper_constants::{
            MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
            REGION_CODE_FOR_NON_GEO_ENTITY,
        },
        helper_functions::{
            get_number_desc_by_type, get_supported_types_for_metadata, normalize_digits_only,
            prefix_number_with_country_calling_code, specific_types, test_number_length,
            test_number_length_with_unknown_type,
        },
        helper_types::{ExampleNumberMismatch, ParsedNumber, ValidationResult},
    },
    regex_util::RegexConsume,
    shortnumberinfo::ShortNumberInfo,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Outcome of matching a national number against the regions sharing a
/// calling code.
enum RegionResolution<'a> {
    Resolved {
        region_code: &'a str,
        metadata: &'a PhoneMetadata,
        number_type: PhoneNumberType,
    },
    Ambiguous(Vec<&'a str>),
    Unmatched,
}

/// Types searched, in order, for an example of a non-geographical entity.
const NON_GEO_EXAMPLE_TYPES: [PhoneNumberType; 7] = [
    PhoneNumberType::Mobile,
    PhoneNumberType::TollFree,
    PhoneNumberType::SharedCost,
    PhoneNumberType::VoIP,
    PhoneNumberType::VoiceMail,
    PhoneNumberType::UAN,
    PhoneNumberType::PremiumRate,
];

pub struct PhoneNumberUtil {
    /// Numbering plan metadata, regular and short.
    metadata_store: MetadataStore,

    /// Number type decisions over the metadata descriptors.
    classifier: Classifier,

    /// Helper class holding useful regular expressions and character mappings.
    reg_exps: PhoneNumberRegExpsAndMappings,
}

impl PhoneNumberUtil {
    /// Builds an instance over the metadata bundled with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the bundled metadata cannot be loaded, which means the crate
    /// itself is broken. Use [`PhoneNumberUtil::try_new`] to get the error
    /// instead.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(instance) => instance,
            Err(err) => {
                let err_message = format!("Could not parse compiled-in metadata: {:?}", err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    pub fn try_new() -> std::result::Result<Self, MetadataError> {
        Ok(Self::new_for_metadata(MetadataStore::compiled()?))
    }

    pub fn new_for_metadata(metadata_store: MetadataStore) -> Self {
        let instance = Self {
            metadata_store,
            classifier: Classifier::new(),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
        };
        for mismatch in instance.check_example_numbers() {
            warn!(
                "Example number {} of {:?} in {} ({}) does not match its own description",
                mismatch.example_number,
                mismatch.number_type,
                mismatch.region_code,
                if mismatch.short { "short numbers" } else { "numbering plan" },
            );
        }
        instance
    }

    pub fn metadata_store(&self) -> &MetadataStore {
        &self.metadata_store
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn short_number_info(&self) -> ShortNumberInfo<'_> {
        ShortNumberInfo::new(&self.metadata_store, &self.classifier)
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.metadata_store.supported_regions()
    }

    pub fn get_supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.metadata_store.supported_global_network_calling_codes()
    }

    pub fn get_supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.metadata_store.supported_calling_codes()
    }

    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        match self.metadata_store.lookup(region_code) {
            Ok(metadata) => Some(get_supported_types_for_metadata(metadata)),
            Err(_) => {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            }
        }
    }

    pub fn get_supported_types_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.metadata_store
            .lookup_non_geographical(country_calling_code)
            .map(get_supported_types_for_metadata)
            .or_else(|| {
                warn!(
                    "Unknown country calling code for a non-geographical entity provided: {}",
                    country_calling_code
                );
                None
            })
    }

    /// Returns the region codes that match the specific country calling code,
    /// main country first. Empty for unknown codes.
    pub fn get_region_codes_for_country_calling_code(
        &self,
        country_calling_code: i32,
    ) -> impl Iterator<Item = &str> {
        self.metadata_store
            .region_codes_for_country_code(country_calling_code)
            .iter()
            .map(String::as_str)
    }

    /// Returns the region code that matches the specific country calling code. In
    /// the case of no region code being found, the unknown region code will be
    /// returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .next()
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    pub fn get_country_code_for_region(&self, region_code: &str) -> Option<i32> {
        match self.metadata_store.lookup(region_code) {
            Ok(metadata) => Some(metadata.country_code()),
            Err(_) => {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            }
        }
    }

    /// Keeps only the decimal digits of `phone_number`, as ASCII.
    pub fn normalize_digits_only(&self, phone_number: &str) -> String {
        normalize_digits_only(phone_number)
    }

    /// Normalizes `raw_number` and reads its calling code and national
    /// significant number, without checking it against the number types of
    /// its region.
    pub fn parse(&self, raw_number: &str, region_hint: Option<&str>) -> Result<PhoneNumber> {
        self.parse_helper(raw_number, region_hint)
            .map(|parsed| parsed.phone_number)
    }

    /// Validates and classifies `raw_number`.
    ///
    /// Numbers in international form (leading plus sign, or the international
    /// prefix of `region_hint`) are resolved against every region sharing
    /// their calling code. Numbers in national form are classified with the
    /// metadata of `region_hint`, falling back on its short number metadata.
    pub fn validate(
        &self,
        raw_number: &str,
        region_hint: Option<&str>,
    ) -> Result<ValidationResult> {
        let parsed = self.parse_helper(raw_number, region_hint)?;
        let country_code = parsed.phone_number.country_code();
        if parsed.country_code_source == CountryCodeSource::FromNumberWithoutPlusSign {
            debug!("Number '{raw_number}' was dialled with calling code {country_code} and no plus sign");
        }

        if let Some(region_code) = parsed.default_region {
            let metadata = self.metadata_store.lookup(region_code)?;
            let national_number = parsed.phone_number.national_number();
            let number_type = self.classifier.classify(metadata, national_number);
            if matches!(number_type, None | Some(PhoneNumberType::General)) {
                if let Some(short_result) = self.validate_short_number(region_code, &parsed) {
                    return Ok(short_result);
                }
            }
            let number_type = number_type.ok_or(ValidationError::NoMatch)?;
            return Ok(self.build_result(region_code, metadata, number_type, parsed.phone_number));
        }

        match self.resolve_region(country_code, parsed.phone_number.national_number()) {
            RegionResolution::Resolved { region_code, metadata, number_type } => {
                Ok(self.build_result(region_code, metadata, number_type, parsed.phone_number))
            }
            RegionResolution::Ambiguous(candidates) => Err(ValidationError::AmbiguousRegion {
                country_code,
                candidates: candidates.into_iter().map(str::to_owned).collect(),
            }),
            RegionResolution::Unmatched => Err(ValidationError::NoMatch),
        }
    }

    fn validate_short_number(
        &self,
        region_code: &str,
        parsed: &ParsedNumber,
    ) -> Option<ValidationResult> {
        let short_metadata = self.metadata_store.short_number_metadata(region_code)?;
        let number_type = self
            .classifier
            .classify_short(short_metadata, &parsed.dialled_digits)
            .filter(|number_type| number_type.is_specific())?;
        debug!(
            "Number '{}' is a {:?} short number of {}",
            parsed.dialled_digits, number_type, region_code
        );
        let mut phone_number = parsed.phone_number.clone();
        phone_number.set_national_number(parsed.dialled_digits.clone());
        Some(ValidationResult {
            is_valid: true,
            number_type,
            matched_types: self
                .classifier
                .matching_types(short_metadata, &parsed.dialled_digits),
            region_code: region_code.to_owned(),
            phone_number,
            is_short_number: true,
        })
    }

    fn build_result(
        &self,
        region_code: &str,
        metadata: &PhoneMetadata,
        number_type: PhoneNumberType,
        phone_number: PhoneNumber,
    ) -> ValidationResult {
        ValidationResult {
            is_valid: number_type.is_specific(),
            number_type,
            matched_types: self
                .classifier
                .matching_types(metadata, phone_number.national_number()),
            region_code: region_code.to_owned(),
            phone_number,
            is_short_number: false,
        }
    }

    fn parse_helper<'a>(
        &self,
        raw_number: &str,
        region_hint: Option<&'a str>,
    ) -> Result<ParsedNumber<'a>> {
        let (has_plus_sign, digits) = self.extract_digits(raw_number)?;

        let (country_code, country_code_source, national_number, default_region) = if has_plus_sign {
            let (country_code, rest) = self.extract_country_code(&digits)?;
            (country_code, CountryCodeSource::FromNumberWithPlusSign, rest.to_owned(), None)
        } else {
            let region_code = region_hint.ok_or(UnknownRegionError::MissingRegionHint)?;
            let metadata = self.metadata_store.lookup(region_code)?;
            if let Some(after_idd) = self.strip_international_prefix(&digits, metadata) {
                let (country_code, rest) = self.extract_country_code(after_idd)?;
                (country_code, CountryCodeSource::FromNumberWithIdd, rest.to_owned(), None)
            } else if let Some(rest) = self.strip_own_country_code(&digits, metadata) {
                (
                    metadata.country_code(),
                    CountryCodeSource::FromNumberWithoutPlusSign,
                    rest.to_owned(),
                    None,
                )
            } else {
                (
                    metadata.country_code(),
                    CountryCodeSource::FromDefaultCountry,
                    digits.clone(),
                    Some(region_code),
                )
            }
        };
        trace!("Number '{raw_number}' has calling code {country_code} ({country_code_source:?})");

        let dialled_digits = national_number.clone();
        let mut national_number = national_number;
        // The national prefix belongs to the hinted region unless the number
        // carries a different calling code.
        let region_metadata = region_hint
            .and_then(|region_code| self.metadata_store.lookup(region_code).ok())
            .filter(|metadata| metadata.country_code() == country_code)
            .or_else(|| self.metadata_store.metadata_for_country_code(country_code));
        if let Some(metadata) = region_metadata {
            let mut potential_national_number = national_number.clone();
            if self.maybe_strip_national_prefix(&mut potential_national_number, metadata) {
                // A number that was possible before must not become too short
                // or local only after stripping.
                match test_number_length_with_unknown_type(&potential_national_number, metadata) {
                    Ok(NumberLengthType::IsPossibleLocalOnly)
                    | Err(PossibleLengthError::TooShort | PossibleLengthError::InvalidLength) => {
                        trace!(
                            "Keeping national prefix of '{national_number}': \
                             '{potential_national_number}' has no possible length"
                        );
                    }
                    _ => national_number = potential_national_number,
                }
            }
        }

        if national_number.len() < MIN_LENGTH_FOR_NSN {
            return Err(MalformedInputError::TooShortNsn.into());
        }
        if national_number.len() > MAX_LENGTH_FOR_NSN {
            return Err(MalformedInputError::TooLongNsn.into());
        }

        let mut phone_number = PhoneNumber::new();
        phone_number.set_country_code(country_code);
        phone_number.set_national_number(national_number);
        Ok(ParsedNumber::new(phone_number, country_code_source, default_region, dialled_digits))
    }

    /// Drops formatting characters and returns the ASCII digits of
    /// `raw_number`, along with whether it started with a plus sign.
    fn extract_digits(
        &self,
        raw_number: &str,
    ) -> std::result::Result<(bool, String), MalformedInputError> {
        let normalized = dec_from_char::normalize_decimals(raw_number);
        let normalized: &str = &normalized;

        let mut digits = String::with_capacity(normalized.len());
        let mut has_plus_sign = false;
        // Only whitespace may come before the plus sign.
        let mut plus_sign_allowed = true;
        for (position, character) in normalized.chars().enumerate() {
            if character.is_ascii_digit() {
                digits.push(character);
                plus_sign_allowed = false;
            } else if self.reg_exps.is_plus_char(character) {
                if !plus_sign_allowed {
                    return Err(MalformedInputError::MisplacedPlusSign);
                }
                has_plus_sign = true;
                plus_sign_allowed = false;
            } else if self.reg_exps.is_formatting_char(character) {
                if !character.is_whitespace() {
                    plus_sign_allowed = false;
                }
            } else {
                return Err(MalformedInputError::InvalidCharacter { character, position });
            }
        }
        if digits.is_empty() {
            return Err(MalformedInputError::Empty);
        }
        Ok((has_plus_sign, digits))
    }

    /// Splits a number written after a plus sign or an international prefix
    /// into its calling code and the rest.
    fn extract_country_code<'b>(&self, digits: &'b str) -> Result<(i32, &'b str)> {
        if digits.len() <= 2 {
            return Err(MalformedInputError::TooShortAfterIdd.into());
        }
        let max_length = MAX_LENGTH_COUNTRY_CODE.min(digits.len());
        // Country codes do not begin with a '0'.
        if !digits.starts_with('0') {
            for length in 1..=max_length {
                let Ok(country_code) = digits[..length].parse::<i32>() else {
                    break;
                };
                if self.metadata_store.has_country_code(country_code) {
                    return Ok((country_code, &digits[length..]));
                }
            }
        }
        let country_code = digits[..max_length].parse::<i32>().unwrap_or_default();
        Err(UnknownRegionError::UnknownCountryCode(country_code).into())
    }

    /// Returns the rest of `digits` after the international prefix of the
    /// region, if it starts with one.
    fn strip_international_prefix<'b>(
        &self,
        digits: &'b str,
        metadata: &PhoneMetadata,
    ) -> Option<&'b str> {
        let international_prefix = metadata.international_prefix();
        if international_prefix.is_empty() {
            return None;
        }
        let rest = self.regex(international_prefix)?.consume_start(digits)?;
        if rest.len() == digits.len() {
            return None;
        }
        // Only strip this if the first digit after the match is not a 0, since
        // country calling codes cannot begin with 0.
        if rest.starts_with('0') {
            return None;
        }
        debug!("Stripped international prefix from '{digits}'");
        Some(rest)
    }

    /// Recognises numbers dialled with the calling code of the region but
    /// without a plus sign, e.g. "1 650 253 0000" in the US. The calling code
    /// is only taken off if the rest is a better candidate than the whole.
    fn strip_own_country_code<'b>(
        &self,
        digits: &'b str,
        metadata: &PhoneMetadata,
    ) -> Option<&'b str> {
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(metadata.country_code());
        let potential_national_number = digits.strip_prefix(country_code)?;

        let general_desc = &metadata.general_desc;
        let mut stripped = potential_national_number.to_owned();
        self.maybe_strip_national_prefix(&mut stripped, metadata);

        let matcher = self.classifier.matcher();
        // If the number was not valid before but is valid now, or if it was too
        // long before, we consider the number with the country calling code
        // stripped to be a better result and keep that instead.
        if (!matcher.match_national_number(digits, general_desc, false)
            && matcher.match_national_number(&stripped, general_desc, false))
            || test_number_length_with_unknown_type(digits, metadata)
                == Err(PossibleLengthError::TooLong)
        {
            debug!("Number '{digits}' starts with its own calling code {country_code}");
            return Some(potential_national_number);
        }
        None
    }

    /// Strips the national prefix of `metadata` from `number`, applying the
    /// transform rule if there is one. Returns `true` if the number changed.
    fn maybe_strip_national_prefix(&self, number: &mut String, metadata: &PhoneMetadata) -> bool {
        let possible_national_prefix = metadata.national_prefix_for_parsing();
        if number.is_empty() || possible_national_prefix.is_empty() {
            return false;
        }
        let Some(prefix_regex) = self.regex(possible_national_prefix) else {
            return false;
        };

        let stripped = {
            let Some(captures) = prefix_regex.captures_start(number) else {
                return false;
            };
            let Some(prefix_match) = captures.get(0) else {
                return false;
            };
            if prefix_match.end() == 0 {
                return false;
            }
            let transform_rule = metadata.national_prefix_transform_rule();
            let last_group = captures.len() - 1;
            // The transform rule only applies when the last group matched,
            // e.g. the area code of an Argentinian mobile number.
            if !transform_rule.is_empty() && last_group > 0 && captures.get(last_group).is_some() {
                let mut transformed = String::with_capacity(number.len() + transform_rule.len());
                captures.expand(transform_rule, &mut transformed);
                transformed.push_str(&number[prefix_match.end()..]);
                transformed
            } else {
                number[prefix_match.end()..].to_owned()
            }
        };

        // We require that the national significant number remaining after
        // stripping the national prefix still matches the general pattern, if
        // the number matched it before.
        let matcher = self.classifier.matcher();
        if matcher.match_national_number(number, &metadata.general_desc, false)
            && !matcher.match_national_number(&stripped, &metadata.general_desc, false)
        {
            trace!("Keeping national prefix of '{number}': the stripped number is not viable");
            return false;
        }
        debug!("Stripped national prefix: '{number}' -> '{stripped}'");
        *number = stripped;
        true
    }

    /// Finds which of the regions sharing `country_calling_code` the number
    /// belongs to.
    fn resolve_region(
        &self,
        country_calling_code: i32,
        national_number: &str,
    ) -> RegionResolution<'_> {
        let region_codes = self
            .metadata_store
            .region_codes_for_country_code(country_calling_code);
        if let [region_code] = region_codes {
            let Some(metadata) = self
                .metadata_store
                .metadata_for_region_or_calling_code(country_calling_code, region_code)
            else {
                return RegionResolution::Unmatched;
            };
            return match self.classifier.classify(metadata, national_number) {
                Some(number_type) => RegionResolution::Resolved {
                    region_code: region_code.as_str(),
                    metadata,
                    number_type,
                },
                None => RegionResolution::Unmatched,
            };
        }

        let mut specific_matches = Vec::new();
        let mut first_general_match = None;
        for region_code in region_codes {
            // Metadata cannot be None because the region codes come from the country
            // calling code map.
            let Some(metadata) = self
                .metadata_store
                .metadata_for_region_or_calling_code(country_calling_code, region_code)
            else {
                continue;
            };
            if !metadata.leading_digits().is_empty() {
                let hint_matches = self
                    .regex(metadata.leading_digits())
                    .is_some_and(|regex| regex.matches_start(national_number));
                if hint_matches {
                    if let Some(number_type) = self.classifier.classify(metadata, national_number) {
                        debug!("Number '{national_number}' resolved to {region_code} by leading digits");
                        return RegionResolution::Resolved {
                            region_code: region_code.as_str(),
                            metadata,
                            number_type,
                        };
                    }
                }
                continue;
            }
            match self.classifier.classify(metadata, national_number) {
                Some(PhoneNumberType::General) => {
                    first_general_match.get_or_insert((region_code.as_str(), metadata));
                }
                Some(number_type) => {
                    specific_matches.push((region_code.as_str(), metadata, number_type))
                }
                None => {}
            }
        }

        match specific_matches.as_slice() {
            [(region_code, metadata, number_type)] => RegionResolution::Resolved {
                region_code: *region_code,
                metadata: *metadata,
                number_type: *number_type,
            },
            [] => match first_general_match {
                Some((region_code, metadata)) => RegionResolution::Resolved {
                    region_code,
                    metadata,
                    number_type: PhoneNumberType::General,
                },
                None => RegionResolution::Unmatched,
            },
            candidates => {
                debug!(
                    "Number '{national_number}' matches {} regions of calling code {country_calling_code}",
                    candidates.len()
                );
                RegionResolution::Ambiguous(
                    candidates.iter().map(|(region_code, ..)| *region_code).collect(),
                )
            }
        }
    }

    /// Resolves `phone_number` to a region, taking the first candidate when
    /// several regions accept it.
    fn resolve_region_of_number(
        &self,
        phone_number: &PhoneNumber,
    ) -> Option<(&str, &PhoneMetadata, PhoneNumberType)> {
        let country_calling_code = phone_number.country_code();
        let national_number = phone_number.national_number();
        match self.resolve_region(country_calling_code, national_number) {
            RegionResolution::Resolved { region_code, metadata, number_type } => {
                Some((region_code, metadata, number_type))
            }
            RegionResolution::Ambiguous(candidates) => {
                let region_code = *candidates.first()?;
                let metadata = self
                    .metadata_store
                    .metadata_for_region_or_calling_code(country_calling_code, region_code)?;
                let number_type = self.classifier.classify(metadata, national_number)?;
                Some((region_code, metadata, number_type))
            }
            RegionResolution::Unmatched => None,
        }
    }

    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> Option<PhoneNumberType> {
        self.resolve_region_of_number(phone_number)
            .map(|(_, _, number_type)| number_type)
    }

    /// `true` if the number belongs to a specific number type of its region.
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        self.get_number_type(phone_number)
            .is_some_and(PhoneNumberType::is_specific)
    }

    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> Option<&str> {
        let region_code = self
            .resolve_region_of_number(phone_number)
            .map(|(region_code, ..)| region_code);
        if region_code.is_none() {
            trace!(
                "No region accepts number '{}' of calling code {}",
                phone_number.national_number(),
                phone_number.country_code()
            );
        }
        region_code
    }

    /// Checks the length of the national significant number against the
    /// possible lengths of its calling code.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> std::result::Result<NumberLengthType, PossibleLengthError> {
        self.is_possible_number_for_type_with_reason(phone_number, PhoneNumberType::General)
    }

    pub fn is_possible_number_for_type_with_reason(
        &self,
        phone_number: &PhoneNumber,
        phone_number_type: PhoneNumberType,
    ) -> std::result::Result<NumberLengthType, PossibleLengthError> {
        let country_calling_code = phone_number.country_code();
        let Some(metadata) = self
            .metadata_store
            .metadata_for_country_code(country_calling_code)
        else {
            return Err(PossibleLengthError::InvalidCountryCode);
        };
        test_number_length(phone_number.national_number(), metadata, phone_number_type)
    }

    pub fn can_be_internationally_dialled(&self, phone_number: &PhoneNumber) -> bool {
        let Some((region_code, metadata, _)) = self.resolve_region_of_number(phone_number) else {
            return true;
        };
        // Note numbers belonging to non-geographical entities (e.g. +800 numbers)
        // are always internationally diallable, and will be caught here.
        if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
            return true;
        }
        !self
            .classifier
            .is_number_matching_desc(phone_number.national_number(), &metadata.no_international_dialling)
    }

    /// Gets a valid fixed-line number for the specified region.
    pub fn get_example_number(
        &self,
        region_code: &str,
    ) -> std::result::Result<PhoneNumber, GetExampleNumberError> {
        self.get_example_number_for_type(region_code, PhoneNumberType::FixedLine)
    }

    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        phone_number_type: PhoneNumberType,
    ) -> std::result::Result<PhoneNumber, GetExampleNumberError> {
        let Ok(metadata) = self.metadata_store.lookup(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return Err(GetExampleNumberError::InvalidRegionCode(region_code.to_owned()));
        };
        let mut example_number = get_number_desc_by_type(metadata, phone_number_type).example_number();
        // The general description rarely carries an example of its own.
        if example_number.is_empty() && phone_number_type == PhoneNumberType::General {
            example_number = specific_types()
                .map(|number_type| get_number_desc_by_type(metadata, number_type).example_number())
                .find(|example| !example.is_empty())
                .unwrap_or_default();
        }
        if example_number.is_empty() {
            return Err(GetExampleNumberError::NoExampleNumber);
        }
        Ok(Self::phone_number_of(metadata.country_code(), example_number))
    }

    /// Gets a valid number for the specified non-geographical calling code.
    pub fn get_example_number_for_non_geo_entity(
        &self,
        country_calling_code: i32,
    ) -> std::result::Result<PhoneNumber, GetExampleNumberError> {
        let Some(metadata) = self.metadata_store.lookup_non_geographical(country_calling_code) else {
            warn!(
                "Invalid or unknown country calling code provided: {}",
                country_calling_code
            );
            return Err(GetExampleNumberError::InvalidCountryCode(country_calling_code));
        };
        NON_GEO_EXAMPLE_TYPES
            .into_iter()
            .map(|number_type| get_number_desc_by_type(metadata, number_type).example_number())
            .find(|example| !example.is_empty())
            .map(|example| Self::phone_number_of(country_calling_code, example))
            .ok_or(GetExampleNumberError::NoExampleNumber)
    }

    fn phone_number_of(country_calling_code: i32, national_number: &str) -> PhoneNumber {
        let mut phone_number = PhoneNumber::new();
        phone_number.set_country_code(country_calling_code);
        phone_number.set_national_number(national_number.to_owned());
        phone_number
    }

    /// Lists every example number that does not satisfy its own descriptor,
    /// for both the regular and the short number metadata.
    pub fn check_example_numbers(&self) -> Vec<ExampleNumberMismatch> {
        let mut mismatches = Vec::new();
        let metadata_sets = self
            .metadata_store
            .all_metadata()
            .map(|(region_code, metadata)| (region_code, metadata, false))
            .chain(
                self.metadata_store
                    .all_short_number_metadata()
                    .map(|(region_code, metadata)| (region_code, metadata, true)),
            );
        for (region_code, metadata, short) in metadata_sets {
            for number_type in specific_types().chain([PhoneNumberType::General]) {
                let desc = get_number_desc_by_type(metadata, number_type);
                let example_number = desc.example_number();
                if example_number.is_empty()
                    || self.classifier.is_number_matching_desc(example_number, desc)
                {
                    continue;
                }
                mismatches.push(ExampleNumberMismatch {
                    region_code: region_code.to_owned(),
                    number_type,
                    example_number: example_number.to_owned(),
                    short,
                });
            }
        }
        mismatches
    }

    /// Formats `phone_number` with the number formats of the main region of
    /// its calling code.
    pub fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        let country_calling_code = phone_number.country_code();
        let mut formatted_number = phone_number.national_number().to_owned();

        if matches!(number_format, PhoneNumberFormat::E164) {
            // Early exit for E164 case (even if the country calling code is invalid)
            // since no formatting of the national number needs to be applied.
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return formatted_number;
        }
        // Note here that all NANPA formatting rules are contained by US, so we use
        // that to format NANPA numbers. The same applies to Russian Fed regions -
        // rules are contained by Russia.
        let Some(metadata) = self
            .metadata_store
            .metadata_for_country_code(country_calling_code)
        else {
            return formatted_number;
        };
        formatted_number = owned_from_cow_or!(
            self.format_nsn(phone_number.national_number(), metadata, number_format),
            formatted_number
        );
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        formatted_number
    }

    fn format_nsn<'b>(
        &self,
        phone_number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        // When the intl_number_formats exists, we use that to format national number
        // for the INTERNATIONAL format instead of using the number_formats.
        let available_formats = if metadata.intl_number_format.is_empty()
            || number_format == PhoneNumberFormat::National
        {
            &metadata.number_format
        } else {
            &metadata.intl_number_format
        };
        match self.choose_formatting_pattern_for_number(available_formats, phone_number) {
            Some(formatting_pattern) => {
                self.format_nsn_using_pattern(phone_number, formatting_pattern, number_format)
            }
            None => Cow::Borrowed(phone_number),
        }
    }

    fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Option<&'b NumberFormat> {
        available_formats.iter().find(|format| {
            // We always use the last leading_digits_pattern, as it is the most
            // detailed.
            let leading_digits_match = format.leading_digits_pattern.last().is_none_or(|last| {
                self.regex(last)
                    .is_some_and(|regex| regex.matches_start(national_number))
            });
            leading_digits_match
                && self
                    .full_match_regex(format.pattern())
                    .is_some_and(|regex| regex.is_match(national_number))
        })
    }

    fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        let national_prefix_formatting_rule = formatting_pattern.national_prefix_formatting_rule();
        let number_format_rule = if matches!(number_format, PhoneNumberFormat::National)
            && !national_prefix_formatting_rule.is_empty()
        {
            // Apply the national_prefix_formatting_rule as the formatting_pattern
            // contains only information on how the national significant number
            // should be formatted at this point.
            self.reg_exps
                .first_group_capturing_pattern
                .replace(formatting_pattern.format(), national_prefix_formatting_rule)
        } else {
            Cow::Borrowed(formatting_pattern.format())
        };

        let Some(pattern_to_match) = self.full_match_regex(formatting_pattern.pattern()) else {
            return Cow::Borrowed(national_number);
        };
        let formatted_number = pattern_to_match.replace(national_number, &*number_format_rule);

        if matches!(number_format, PhoneNumberFormat::RFC3966) {
            // First consume any leading punctuation, if any was present.
            let trimmed = self
                .reg_exps
                .separator_pattern
                .consume_start(&formatted_number)
                .unwrap_or(&*formatted_number);
            // Then replace all separators with a "-".
            return Cow::Owned(
                self.reg_exps
                    .separator_pattern
                    .replace_all(trimmed, "-")
                    .into_owned(),
            );
        }
        formatted_number
    }

    fn regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        match self.reg_exps.regexp_cache.get_regex(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("Invalid regex {}: {}", pattern, err);
                None
            }
        }
    }

    fn full_match_regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        match self.reg_exps.regexp_cache.get_full_match_regex(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("Invalid regex {}: {}", pattern, err);
                None
            }
        }
    }
}
