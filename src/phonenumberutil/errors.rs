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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Reasons for which [`PhoneNumberUtil::validate`](crate::PhoneNumberUtil::validate)
/// and [`PhoneNumberUtil::parse`](crate::PhoneNumberUtil::parse) reject an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    UnknownRegion(#[from] UnknownRegionError),
    #[error("{0}")]
    MalformedInput(#[from] MalformedInputError),
    /// The digits do not satisfy any descriptor of the resolved region,
    /// including its general description.
    #[error("The number does not match any number pattern of its region")]
    NoMatch,
    /// Several regions sharing the calling code accept the number as a
    /// specific number type and no leading-digit hint tells them apart.
    #[error("Calling code {country_code} is shared by regions {candidates:?} that all accept the number")]
    AmbiguousRegion {
        country_code: i32,
        candidates: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownRegionError {
    /// A national-form number was given without a region hint.
    #[error("A region hint is required for numbers without a leading plus sign")]
    MissingRegionHint,
    #[error("Invalid or unknown region code: {0}")]
    UnknownRegionCode(String),
    /// INVALID_COUNTRY_CODE in the java version.
    #[error("Invalid country calling code: {0}")]
    UnknownCountryCode(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInputError {
    #[error("The input contains no digits")]
    Empty,
    /// `position` counts characters, not bytes.
    #[error("Unexpected character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("A plus sign is only allowed at the start of the number")]
    MisplacedPlusSign,
    #[error("Too short after idd")]
    TooShortAfterIdd,
    #[error("Too short Nsn")]
    TooShortNsn,
    /// TOO_LONG in the java version.
    #[error("Too long nsn")]
    TooLongNsn,
}

/// Possible outcomes when testing if a PhoneNumber is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PossibleLengthError {
    /// The number has an invalid country calling code.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than the shortest valid numbers for this region,
    /// shorter than the longest valid numbers for this region, and does not
    /// itself have a number length that matches valid numbers for this region.
    /// This is also returned when there are no numbers of the asked type at
    /// all in the region.
    #[error("\
    The number is longer than the shortest valid numbers for this region, \
    shorter than the longest valid numbers for this region, and does not \
    itself have a number length that matches valid numbers for this region\
    ")]
    InvalidLength,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetExampleNumberError {
    #[error("Invalid region code provided: {0}")]
    InvalidRegionCode(String),
    #[error("Unknown calling code of a non-geographical entity: {0}")]
    InvalidCountryCode(i32),
    #[error("No example number")]
    NoExampleNumber,
}

/// Errors raised while building a [`MetadataStore`](crate::MetadataStore).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetadataError {
    #[error("Could not parse metadata text: {0}")]
    InvalidText(String),
    #[error("Region {region} has an invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        region: String,
        pattern: String,
        #[source]
        source: InvalidRegexError,
    },
    #[error("Metadata for {0} is defined twice")]
    DuplicateRegion(String),
}
