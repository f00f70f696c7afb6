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

mod shortnumberinfo;
mod interfaces;
mod generated;
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;

/// I decided to create this module because there are many 
/// boilerplate places in the code that can be replaced with macros, 
/// the name of which will describe what is happening more 
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

// Message types generated from /resources/*.proto by the build script.
include!(concat!(env!("OUT_DIR"), "/proto_gen/mod.rs"));

pub use interfaces::MatcherApi;
pub use regex_based_matcher::RegexBasedMatcher;
pub use regexp_cache::{InvalidRegexError, RegexCache};
pub use shortnumberinfo::ShortNumberInfo;
pub use phonenumberutil::{
    CountryCodeSource, ExampleNumberMismatch, NumberLengthType, PHONE_NUMBER_UTIL,
    PhoneNumberFormat, PhoneNumberType, ShortNumberCost, ValidationResult,
    classifier::Classifier,
    enums, errors,
    metadata_store::MetadataStore,
    phonenumberutil::PhoneNumberUtil,
};
pub use crate::phonenumber::PhoneNumber;
