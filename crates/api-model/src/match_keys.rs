/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

/// The hardware attribute names used to correlate raw hardware facts with
/// node identity (server configuration key `match_nodes_on`).
///
/// Ordered, de-duplicated, and never empty: a registry with no match keys
/// could not resolve any node, so construction rejects the empty list.
/// Read-only once loaded; commands take a snapshot per call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MatchKeys(Vec<String>);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchKeyError {
    #[error("match_nodes_on must contain at least one key")]
    Empty,
}

impl MatchKeys {
    pub fn new(keys: Vec<String>) -> Result<Self, MatchKeyError> {
        if keys.is_empty() {
            return Err(MatchKeyError::Empty);
        }

        let mut deduplicated: Vec<String> = Vec::with_capacity(keys.len());
        for key in keys {
            if !deduplicated.contains(&key) {
                deduplicated.push(key);
            }
        }

        Ok(Self(deduplicated))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false // non-emptiness is a construction invariant
    }
}

impl TryFrom<Vec<String>> for MatchKeys {
    type Error = MatchKeyError;

    fn try_from(keys: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(keys)
    }
}

impl From<MatchKeys> for Vec<String> {
    fn from(keys: MatchKeys) -> Self {
        keys.0
    }
}

impl fmt::Display for MatchKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_list() {
        assert_eq!(MatchKeys::new(vec![]), Err(MatchKeyError::Empty));
    }

    #[test]
    fn test_preserves_order_and_deduplicates() {
        let keys = MatchKeys::new(vec![
            "serial".to_string(),
            "asset".to_string(),
            "serial".to_string(),
        ])
        .unwrap();

        assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["serial", "asset"]);
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_contains() {
        let keys = MatchKeys::new(vec!["serial".to_string(), "asset".to_string()]).unwrap();
        assert!(keys.contains("serial"));
        assert!(!keys.contains("uuid"));
        assert!(!keys.contains("net0"));
    }

    #[test]
    fn test_display_joins_for_diagnostics() {
        let keys = MatchKeys::new(vec!["serial".to_string(), "asset".to_string()]).unwrap();
        assert_eq!(keys.to_string(), "serial, asset");
    }

    #[test]
    fn test_deserialization_rejects_empty() {
        let result: Result<MatchKeys, _> = serde_json::from_value(serde_json::json!([]));
        assert!(result.is_err());

        let keys: MatchKeys = serde_json::from_value(serde_json::json!(["serial"])).unwrap();
        assert!(keys.contains("serial"));
    }
}
