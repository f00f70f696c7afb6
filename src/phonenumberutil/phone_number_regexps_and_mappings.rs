// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use regex::Regex;

use crate::{phonenumberutil::helper_constants::{PLUS_CHARS, VALID_PUNCTUATION}, regexp_cache::RegexCache};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Cache of the metadata patterns used outside of descriptor matching:
    /// international prefixes, national prefixes for parsing, leading digits
    /// and number formats.
    pub regexp_cache: RegexCache,

    /// Characters dropped from the input before matching, see
    /// `VALID_PUNCTUATION`.
    pub formatting_chars: HashSet<char>,

    /// Characters accepted as a leading plus sign.
    pub plus_chars: HashSet<char>,

    /// Regular expression of groups of valid punctuation characters.
    pub separator_pattern: Regex,

    /// The first_group_capturing_pattern was originally set to $1 but there
    /// are some countries for which the first group is not used in the
    /// national pattern (e.g. Argentina) so the $1 group does not match
    /// correctly. Therefore, we use \d, so that the first group actually
    /// used in the pattern will be matched.
    pub first_group_capturing_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    pub fn new() -> Self {
        Self {
            regexp_cache: RegexCache::with_capacity(128),
            formatting_chars: VALID_PUNCTUATION.chars().collect(),
            plus_chars: PLUS_CHARS.chars().collect(),
            // it'll be initialized only once, so we can use slow format!
            separator_pattern: Regex::new(&format!("[{}]+", regex::escape(VALID_PUNCTUATION))).unwrap(),
            first_group_capturing_pattern: Regex::new("(\\$\\d)").unwrap(),
        }
    }

    pub fn is_formatting_char(&self, character: char) -> bool {
        character.is_whitespace() || self.formatting_chars.contains(&character)
    }

    pub fn is_plus_char(&self, character: char) -> bool {
        self.plus_chars.contains(&character)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn check_regexps_are_compiling() {
        super::PhoneNumberRegExpsAndMappings::new();
    }

    #[test]
    fn separator_pattern_covers_punctuation() {
        let reg_exps = super::PhoneNumberRegExpsAndMappings::new();
        assert_eq!(
            reg_exps.separator_pattern.replace_all("(650) 253-0000 [x]", "-"),
            "-650-253-0000-x-"
        );
        assert!(reg_exps.is_formatting_char('\u{2013}'));
        assert!(reg_exps.is_formatting_char('\t'));
        assert!(!reg_exps.is_formatting_char('x'));
        assert!(reg_exps.is_plus_char('\u{FF0B}'));
    }
}
