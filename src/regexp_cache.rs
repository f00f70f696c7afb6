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

use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Concurrent cache of compiled metadata patterns.
///
/// Two flavours are kept per pattern: the pattern as written, used for
/// prefix checks and replacements, and an anchored `^(?:pattern)$` version
/// used for full matches. A plain `find` picks the leftmost-first
/// alternative and may stop short of the end of the input.
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>,
    full_match_cache: DashMap<String, Arc<Regex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
            full_match_cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
            full_match_cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self
                .cache
                .entry(pattern.to_string())
                .or_try_insert_with(|| Regex::new(pattern).map(Arc::new))?;
            Ok(entry.value().clone())
        }
    }

    /// Returns the regex matching only strings entirely covered by `pattern`.
    /// Capture group numbering is the same as for `get_regex`.
    pub fn get_full_match_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.full_match_cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self
                .full_match_cache
                .entry(pattern.to_string())
                .or_try_insert_with(|| {
                    Regex::new(&fast_cat::concat_str!("^(?:", pattern, ")$")).map(Arc::new)
                })?;
            Ok(entry.value().clone())
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len() + self.full_match_cache.len()
    }
}
