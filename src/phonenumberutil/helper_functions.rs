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

use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::phonemetadata::{PhoneMetadata, PhoneNumberDesc};

use super::{
    NumberLengthType, PhoneNumberFormat, PhoneNumberType,
    errors::PossibleLengthError,
    helper_constants::{PLUS_SIGN, RFC3966_PREFIX},
};

/// Returns a pointer to the description inside the metadata of the appropriate
/// type.
pub(crate) fn get_number_desc_by_type(
    metadata: &PhoneMetadata,
    phone_number_type: PhoneNumberType,
) -> &PhoneNumberDesc {
    match phone_number_type {
        PhoneNumberType::PremiumRate => &metadata.premium_rate,
        PhoneNumberType::TollFree => &metadata.toll_free,
        PhoneNumberType::Mobile => &metadata.mobile,
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => &metadata.fixed_line,
        PhoneNumberType::SharedCost => &metadata.shared_cost,
        PhoneNumberType::VoIP => &metadata.voip,
        PhoneNumberType::PersonalNumber => &metadata.personal_number,
        PhoneNumberType::Pager => &metadata.pager,
        PhoneNumberType::UAN => &metadata.uan,
        PhoneNumberType::VoiceMail => &metadata.voicemail,
        PhoneNumberType::Emergency => &metadata.emergency,
        PhoneNumberType::ShortCode => &metadata.short_code,
        PhoneNumberType::StandardRate => &metadata.standard_rate,
        PhoneNumberType::CarrierSpecific => &metadata.carrier_specific,
        PhoneNumberType::SmsServices => &metadata.sms_services,
        PhoneNumberType::General => &metadata.general_desc,
    }
}

/// Types backed by a descriptor of their own, in declaration order.
pub(crate) fn specific_types() -> impl Iterator<Item = PhoneNumberType> {
    PhoneNumberType::iter().filter(|number_type| {
        !matches!(
            number_type,
            PhoneNumberType::FixedLineOrMobile | PhoneNumberType::General
        )
    })
}

/// A helper function that is used by Format.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    if let PhoneNumberFormat::National = number_format {
        return;
    }
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    match number_format {
        PhoneNumberFormat::E164 => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberFormat::International => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number);

            *formatted_number = new_str;
        }
        PhoneNumberFormat::RFC3966 => {
            let new_str = fast_cat::concat_str!(
                RFC3966_PREFIX,
                PLUS_SIGN,
                country_calling_code_str,
                "-",
                &formatted_number
            );

            *formatted_number = new_str;
        }
        // here code is already returned
        PhoneNumberFormat::National => {}
    }
}

/// Keeps the decimal digits of `phone_number`, converting non-ASCII decimal
/// digits to ASCII, and drops everything else.
pub(crate) fn normalize_digits_only(phone_number: &str) -> String {
    let normalized = dec_from_char::normalize_decimals(phone_number);
    let normalized: &str = &normalized;
    normalized.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` if there is any data set for a particular PhoneNumberDesc.
///
/// Descriptors are normalized when the metadata is loaded: a type without
/// numbers has no pattern or no possible lengths.
pub(crate) fn desc_has_data(desc: &PhoneNumberDesc) -> bool {
    !desc.national_number_pattern().is_empty() && !desc.possible_length.is_empty()
}

/// Returns the types we have metadata for based on the PhoneMetadata object
/// passed in.
pub(super) fn get_supported_types_for_metadata(
    metadata: &PhoneMetadata,
) -> HashSet<PhoneNumberType> {
    // Never return FIXED_LINE_OR_MOBILE (it is a convenience type, and
    // represents that a particular number type can't be determined) or
    // GENERAL (the non-type).
    specific_types()
        .filter(|number_type| desc_has_data(get_number_desc_by_type(metadata, *number_type)))
        .collect()
}

/// Helper method to check a number against possible lengths for this number
/// type, and determine whether it matches, or is too short or too long.
pub(super) fn test_number_length(
    phone_number: &str,
    phone_metadata: &PhoneMetadata,
    phone_number_type: PhoneNumberType,
) -> Result<NumberLengthType, PossibleLengthError> {
    let desc_for_type = get_number_desc_by_type(phone_metadata, phone_number_type);

    let mut possible_lengths = desc_for_type.possible_length.clone();
    let mut local_lengths = desc_for_type.possible_length_local_only.clone();
    if phone_number_type == PhoneNumberType::FixedLineOrMobile {
        let mobile_desc = get_number_desc_by_type(phone_metadata, PhoneNumberType::Mobile);
        if !desc_has_data(desc_for_type) {
            // The rare case has been encountered where no fixedLine data is available
            // (true for some non-geographical entities), so we just check mobile.
            return test_number_length(phone_number, phone_metadata, PhoneNumberType::Mobile);
        } else if desc_has_data(mobile_desc) {
            possible_lengths.extend_from_slice(&mobile_desc.possible_length);
            local_lengths.extend_from_slice(&mobile_desc.possible_length_local_only);
        }
    }
    possible_lengths.sort_unstable();
    possible_lengths.dedup();

    // If the type is not suported at all we return invalid length.
    let (Some(&minimum_length), Some(&maximum_length)) =
        (possible_lengths.first(), possible_lengths.last())
    else {
        return Err(PossibleLengthError::InvalidLength);
    };

    let actual_length = phone_number.len() as i32;
    // This is safe because there is never an overlap beween the possible lengths
    // and the local-only lengths.
    if local_lengths.contains(&actual_length) {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }

    if minimum_length > actual_length {
        Err(PossibleLengthError::TooShort)
    } else if maximum_length < actual_length {
        Err(PossibleLengthError::TooLong)
    } else if possible_lengths.contains(&actual_length) {
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(PossibleLengthError::InvalidLength)
    }
}

/// Helper method to check a number against possible lengths for this region,
/// based on the metadata being passed in, and determine whether it matches, or
/// is too short or too long.
pub(super) fn test_number_length_with_unknown_type(
    phone_number: &str,
    phone_metadata: &PhoneMetadata,
) -> Result<NumberLengthType, PossibleLengthError> {
    return test_number_length(phone_number, phone_metadata, PhoneNumberType::General);
}
