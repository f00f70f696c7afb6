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

use strum::EnumIter;

/// Output forms of [`PhoneNumberUtil::format`](crate::PhoneNumberUtil::format).
///
/// For the London number 020 7031 3000:
/// - **INTERNATIONAL**: `+44 20 7031 3000`
/// - **NATIONAL**: `020 7031 3000`
/// - **E164**: `+442070313000`
/// - **RFC3966**: `tel:+44-20-7031-3000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// `+` and the calling code directly followed by the national
    /// significant number, no separators.
    E164,
    /// Calling code and the grouping of the number's region.
    International,
    /// Grouping of the number's region with its national prefix, if the
    /// region's formatting rule asks for one.
    National,
    /// `tel:` URI with hyphens as the only separators.
    RFC3966,
}

/// Categorizes phone numbers based on their primary use.
///
/// The declaration order is the order in which
/// [`ValidationResult::matched_types`](crate::ValidationResult) lists
/// overlapping types.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhoneNumberType {
    /// **Fixed-line numbers.**
    /// These are traditional landline telephone numbers tied to a specific geographic location.
    FixedLine,
    /// **Mobile numbers.**
    /// These numbers are assigned to wireless devices like mobile phones.
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in regions (e.g., the USA) where it's impossible to distinguish between
    /// fixed-line and mobile numbers by looking at the phone number itself.
    FixedLineOrMobile,
    /// **Toll-free numbers.**
    /// Calls to these numbers are free for the caller, with the cost being paid by the recipient.
    /// Examples include "800" or "888" numbers in the US.
    TollFree,
    /// **Premium-rate numbers.**
    /// These numbers charge a higher rate than normal calls, often used for services
    /// like horoscopes, adult chat lines, or tech support.
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient. These calls
    /// are typically cheaper than premium-rate numbers.
    SharedCost,
    /// **Voice over IP (VoIP) numbers.**
    /// These numbers are used for services that transmit voice calls over the internet.
    VoIP,
    /// **Personal numbers.**
    /// A number associated with a person, not a location or device. It can be routed
    /// to different destinations (mobile or fixed-line) as configured by the user.
    PersonalNumber,
    /// **Pagers.**
    /// Numbers used for sending messages to paging devices.
    Pager,
    /// **Universal Access Numbers (UAN).**
    /// A single number that a company can use to route calls to different offices or departments.
    UAN,
    /// **Voicemail access numbers.**
    /// Numbers used to directly access a voicemail service.
    VoiceMail,
    /// **Emergency numbers** such as 112 or 911.
    Emergency,
    /// **Short codes.**
    /// Short numbers reachable only from within their region.
    ShortCode,
    /// **Standard-rate short numbers.**
    StandardRate,
    /// **Carrier-specific short numbers.**
    /// Only reachable from some operators of the region.
    CarrierSpecific,
    /// **SMS-only short numbers.**
    SmsServices,
    /// **Valid shape, unknown category.**
    /// The number fits the general pattern and possible lengths of its region,
    /// but none of the specific number type descriptors.
    General,
}

impl PhoneNumberType {
    /// Returns `true` for every type naming an actual category, i.e. anything
    /// but [`PhoneNumberType::General`].
    pub fn is_specific(self) -> bool {
        self != PhoneNumberType::General
    }
}

/// Expected cost of dialling a short number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortNumberCost {
    TollFree,
    StandardRate,
    PremiumRate,
    UnknownCost,
}

/// Tells how the country calling code of a parsed number was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The number was written in international form with a leading plus sign.
    FromNumberWithPlusSign,
    /// The number started with the international dialling prefix of the
    /// region hint, e.g. "011" in the US.
    FromNumberWithIdd,
    /// The number started with the calling code of the region hint but had no
    /// plus sign or international prefix.
    FromNumberWithoutPlusSign,
    /// The calling code was taken from the region hint.
    FromDefaultCountry,
}

/// Successful outcomes of a possible-length check; the failed ones are
/// [`PossibleLengthError`](super::errors::PossibleLengthError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// **The length is valid for a dialable number.**
    /// The number's length matches the expected length for a complete, dialable
    /// number in its region.
    IsPossible,
    /// **The length is valid for a local-only number.**
    /// The number's length is too short for a full national number but matches a pattern
    /// for a number that can be dialed within a specific local area (e.g., without the area code).
    IsPossibleLocalOnly,
}