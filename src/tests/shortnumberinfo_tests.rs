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

use crate::{PhoneNumberType, ShortNumberCost};

use super::{get_phone_util, region_code::RegionCode};

#[test]
fn is_emergency_number() {
    let phone_util = get_phone_util();
    let short_info = phone_util.short_number_info();
    assert!(short_info.is_emergency_number("911", RegionCode::us()));
    assert!(short_info.is_emergency_number("112", RegionCode::us()));
    assert!(short_info.is_emergency_number("9-1-1", RegionCode::us()));
    assert!(!short_info.is_emergency_number("9111", RegionCode::us()));
    assert!(!short_info.is_emergency_number("999", RegionCode::us()));
    assert!(short_info.is_emergency_number("999", RegionCode::gb()));
    // Emergency numbers are never dialled with a plus sign.
    assert!(!short_info.is_emergency_number("+911", RegionCode::us()));
    assert!(!short_info.is_emergency_number("911", RegionCode::de()));
}

#[test]
fn connects_to_emergency_number() {
    let phone_util = get_phone_util();
    let short_info = phone_util.short_number_info();
    assert!(short_info.connects_to_emergency_number("911", RegionCode::us()));
    assert!(short_info.connects_to_emergency_number("9111", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("+911", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("1911", RegionCode::us()));

    // Extra digits break emergency numbers in Brazil.
    assert!(short_info.connects_to_emergency_number("190", RegionCode::br()));
    assert!(!short_info.connects_to_emergency_number("1900", RegionCode::br()));
}

#[test]
fn is_possible_short_number_for_region() {
    let phone_util = get_phone_util();
    let short_info = phone_util.short_number_info();
    assert!(short_info.is_possible_short_number_for_region("1234", RegionCode::us()));
    assert!(!short_info.is_possible_short_number_for_region("12", RegionCode::us()));
    assert!(!short_info.is_possible_short_number_for_region("1234567", RegionCode::us()));
    assert!(!short_info.is_possible_short_number_for_region("123", RegionCode::it()));
}

#[test]
fn is_valid_short_number_for_region() {
    let phone_util = get_phone_util();
    let short_info = phone_util.short_number_info();
    for short_number in ["211", "611", "24280"] {
        assert!(
            short_info.is_valid_short_number_for_region(short_number, RegionCode::us()),
            "{short_number}"
        );
    }
    assert!(!short_info.is_valid_short_number_for_region("123", RegionCode::us()));
    assert!(short_info.is_valid_short_number_for_region("100", RegionCode::gb()));
    assert!(!short_info.is_valid_short_number_for_region("200", RegionCode::gb()));
    assert!(!short_info.is_valid_short_number_for_region("211", RegionCode::de()));
}

#[test]
fn get_expected_cost_for_region() {
    let phone_util = get_phone_util();
    let short_info = phone_util.short_number_info();
    assert_eq!(
        short_info.get_expected_cost_for_region("24280", RegionCode::us()),
        ShortNumberCost::PremiumRate
    );
    assert_eq!(
        short_info.get_expected_cost_for_region("611", RegionCode::us()),
        ShortNumberCost::TollFree
    );
    assert_eq!(
        short_info.get_expected_cost_for_region("911", RegionCode::us()),
        ShortNumberCost::TollFree
    );
    assert_eq!(
        short_info.get_expected_cost_for_region("211", RegionCode::us()),
        ShortNumberCost::UnknownCost
    );
    assert_eq!(
        short_info.get_expected_cost_for_region("1234567", RegionCode::us()),
        ShortNumberCost::UnknownCost
    );
    assert_eq!(
        short_info.get_expected_cost_for_region("123", RegionCode::gb()),
        ShortNumberCost::StandardRate
    );
    // Emergency numbers are free even without a toll free descriptor.
    assert_eq!(
        short_info.get_expected_cost_for_region("190", RegionCode::br()),
        ShortNumberCost::TollFree
    );
    assert_eq!(
        short_info.get_expected_cost_for_region("190", RegionCode::de()),
        ShortNumberCost::UnknownCost
    );
}

#[test]
fn classify_for_region() {
    let phone_util = get_phone_util();
    let short_info = phone_util.short_number_info();
    assert_eq!(
        short_info.classify_for_region("911", RegionCode::us()),
        Some(PhoneNumberType::Emergency)
    );
    assert_eq!(
        short_info.classify_for_region("611", RegionCode::us()),
        Some(PhoneNumberType::TollFree)
    );
    assert_eq!(
        short_info.classify_for_region("24280", RegionCode::us()),
        Some(PhoneNumberType::PremiumRate)
    );
    assert_eq!(
        short_info.classify_for_region("211", RegionCode::us()),
        Some(PhoneNumberType::ShortCode)
    );
    assert_eq!(
        short_info.classify_for_region("123", RegionCode::us()),
        Some(PhoneNumberType::General)
    );
    assert_eq!(short_info.classify_for_region("12", RegionCode::us()), None);
    assert_eq!(short_info.classify_for_region("911", RegionCode::de()), None);
}

#[test]
fn formatted_short_numbers_are_read_as_digits() {
    let phone_util = get_phone_util();
    let short_info = phone_util.short_number_info();
    for short_number in ["1 12", "１１２"] {
        assert!(short_info.is_emergency_number(short_number, RegionCode::us()));
        assert!(short_info.is_possible_short_number_for_region(short_number, RegionCode::us()));
        assert_eq!(
            short_info.classify_for_region(short_number, RegionCode::us()),
            Some(PhoneNumberType::Emergency)
        );
    }
    assert!(short_info.is_valid_short_number_for_region("2-11", RegionCode::us()));
    assert!(short_info.is_valid_short_number_for_region("２１１", RegionCode::us()));
    assert_eq!(
        short_info.get_expected_cost_for_region("24 280", RegionCode::us()),
        ShortNumberCost::PremiumRate
    );
}
