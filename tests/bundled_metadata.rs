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

use phoneplan::{
    PHONE_NUMBER_UTIL, PhoneNumberFormat, PhoneNumberType, ShortNumberCost,
    errors::{UnknownRegionError, ValidationError},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn bundled_example_numbers_are_consistent() {
    init_logger();
    let mismatches = PHONE_NUMBER_UTIL.check_example_numbers();
    assert!(mismatches.is_empty(), "{mismatches:?}");
}

#[test]
fn bundled_examples_validate_in_national_form() {
    init_logger();
    for region_code in PHONE_NUMBER_UTIL.get_supported_regions() {
        let types = PHONE_NUMBER_UTIL
            .get_supported_types_for_region(region_code)
            .expect("supported regions have metadata");
        for number_type in types {
            let example = PHONE_NUMBER_UTIL
                .get_example_number_for_type(region_code, number_type)
                .expect("supported types have examples");
            let result = PHONE_NUMBER_UTIL
                .validate(example.national_number(), Some(region_code))
                .unwrap_or_else(|err| panic!("{example:?} of {region_code}: {err}"));
            assert!(result.is_valid);
            assert_eq!(result.region_code, region_code);
            assert!(
                result.matched_types.contains(&number_type),
                "{example:?} of {region_code} matched {:?}",
                result.matched_types
            );
        }
    }
}

#[test]
fn bundled_examples_validate_in_international_form() {
    init_logger();
    for region_code in PHONE_NUMBER_UTIL.get_supported_regions() {
        let example = PHONE_NUMBER_UTIL
            .get_example_number(region_code)
            .expect("every bundled region has a fixed line example");
        let international = PHONE_NUMBER_UTIL.format(&example, PhoneNumberFormat::International);
        let result = PHONE_NUMBER_UTIL
            .validate(&international, None)
            .unwrap_or_else(|err| panic!("{international}: {err}"));
        assert_eq!(result.region_code, region_code, "{international}");
        assert_eq!(result.phone_number, example);
    }
}

#[test]
fn german_numbers() {
    init_logger();
    let result = PHONE_NUMBER_UTIL.validate("030 123456", Some("DE")).unwrap();
    assert_eq!(result.number_type, PhoneNumberType::FixedLine);
    assert_eq!(result.normalized_digits(), "30123456");
    assert_eq!(
        PHONE_NUMBER_UTIL.format(&result.phone_number, PhoneNumberFormat::National),
        "030 123456"
    );
    assert_eq!(
        PHONE_NUMBER_UTIL.format(&result.phone_number, PhoneNumberFormat::International),
        "+49 30 123456"
    );

    let result = PHONE_NUMBER_UTIL.validate("+49 151 23456789", None).unwrap();
    assert_eq!(result.number_type, PhoneNumberType::Mobile);
    assert_eq!(
        PHONE_NUMBER_UTIL.format(&result.phone_number, PhoneNumberFormat::National),
        "0151 23456789"
    );
}

#[test]
fn zone_7_is_split_by_leading_digits() {
    init_logger();
    let result = PHONE_NUMBER_UTIL.validate("+7 771 000 9998", None).unwrap();
    assert_eq!(result.region_code, "KZ");
    assert_eq!(result.number_type, PhoneNumberType::Mobile);

    let result = PHONE_NUMBER_UTIL.validate("8 (912) 345-67-89", Some("RU")).unwrap();
    assert_eq!(result.region_code, "RU");
    assert_eq!(result.number_type, PhoneNumberType::Mobile);
    assert_eq!(
        PHONE_NUMBER_UTIL.format(&result.phone_number, PhoneNumberFormat::National),
        "8 (912) 345-67-89"
    );
}

#[test]
fn nanpa_toll_free_is_ambiguous() {
    init_logger();
    assert_eq!(
        PHONE_NUMBER_UTIL.validate("+1 800 234 5678", None),
        Err(ValidationError::AmbiguousRegion {
            country_code: 1,
            candidates: vec!["US".to_owned(), "CA".to_owned()],
        })
    );
}

#[test]
fn short_numbers_with_region_hint() {
    init_logger();
    for (short_number, region_code) in [("112", "RU"), ("01", "RU"), ("112", "DE"), ("999", "GB")] {
        let result = PHONE_NUMBER_UTIL
            .validate(short_number, Some(region_code))
            .unwrap_or_else(|err| panic!("{short_number} in {region_code}: {err}"));
        assert!(result.is_short_number);
        assert_eq!(result.number_type, PhoneNumberType::Emergency);
        assert_eq!(result.normalized_digits(), short_number);
    }

    let result = PHONE_NUMBER_UTIL.validate("116116", Some("DE")).unwrap();
    assert!(result.is_short_number);
    assert_eq!(result.number_type, PhoneNumberType::TollFree);

    // Brazil only has short number metadata.
    assert_eq!(
        PHONE_NUMBER_UTIL.validate("190", Some("BR")),
        Err(UnknownRegionError::UnknownRegionCode("BR".to_owned()).into())
    );
    let short_info = PHONE_NUMBER_UTIL.short_number_info();
    assert!(short_info.is_emergency_number("190", "BR"));
    assert_eq!(short_info.get_expected_cost_for_region("190", "BR"), ShortNumberCost::TollFree);
    assert!(short_info.connects_to_emergency_number("1120", "DE"));
    assert!(!short_info.connects_to_emergency_number("1900", "BR"));
}

#[test]
fn shared_instance_across_threads() {
    init_logger();
    let inputs = [
        ("+44 20 7031 3000", None, "GB"),
        ("(201) 555-0123", Some("US"), "US"),
        ("02 1234 5678", Some("IT"), "IT"),
        ("+800 1234 5678", None, "001"),
    ];
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (raw_number, region_hint, expected_region) in inputs {
                    let result = PHONE_NUMBER_UTIL.validate(raw_number, region_hint).unwrap();
                    assert_eq!(result.region_code, expected_region);
                    assert!(result.is_valid);
                }
            });
        }
    });
}
