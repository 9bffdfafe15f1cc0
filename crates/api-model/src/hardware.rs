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

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::match_keys::MatchKeys;

/// DMI attributes a node carries at most once each.
pub const FIXED_ATTRIBUTES: &[&str] = &["serial", "asset", "uuid"];

lazy_static! {
    /// NIC MAC address attributes: `net0`, `net1`, ... one per adapter.
    static ref NET_ATTRIBUTE: Regex = Regex::new("^net[0-9]+$").unwrap();
}

/// A node's hardware fingerprint: a mapping of attribute name to value.
///
/// The attributes here are what the discovery subsystem intersects with the
/// configured match keys to resolve an incoming boot request to a node, so a
/// record must always retain at least one configured match key. That invariant
/// is enforced by the command layer before any record is replaced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardwareInfo(BTreeMap<String, String>);

/// A hardware-info payload that does not fit the schema.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("hw-info must be an object")]
    NotAnObject,

    #[error("hw-info must contain at least one attribute")]
    Empty,

    #[error("hw-info attribute '{0}' is not recognized (expected serial, asset, uuid, or net<N>)")]
    UnknownAttribute(String),

    #[error("hw-info attribute '{0}' must be a string")]
    NonStringValue(String),
}

impl HardwareInfo {
    /// Parses a raw JSON payload into a hardware record, rejecting anything
    /// that is not a non-empty object of string-valued, known attributes.
    pub fn from_value(value: &Value) -> Result<Self, SchemaViolation> {
        let object = value.as_object().ok_or(SchemaViolation::NotAnObject)?;
        if object.is_empty() {
            return Err(SchemaViolation::Empty);
        }

        let mut attributes = BTreeMap::new();
        for (name, value) in object {
            if !FIXED_ATTRIBUTES.contains(&name.as_str()) && !NET_ATTRIBUTE.is_match(name) {
                return Err(SchemaViolation::UnknownAttribute(name.clone()));
            }
            let value = value
                .as_str()
                .ok_or_else(|| SchemaViolation::NonStringValue(name.clone()))?;
            attributes.insert(name.clone(), value.to_string());
        }

        Ok(Self(attributes))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The attributes of this record that are configured match keys.
    pub fn matching_keys<'a>(&'a self, match_keys: &MatchKeys) -> Vec<&'a str> {
        self.keys().filter(|key| match_keys.contains(key)).collect()
    }

    /// Whether the discovery subsystem can still resolve this record.
    pub fn satisfies(&self, match_keys: &MatchKeys) -> bool {
        self.keys().any(|key| match_keys.contains(key))
    }
}

impl FromIterator<(String, String)> for HardwareInfo {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn match_keys(keys: &[&str]) -> MatchKeys {
        MatchKeys::new(keys.iter().map(|k| k.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_parse_full_record() {
        let hw_info = HardwareInfo::from_value(&json!({
            "net0":   "78:31:c1:be:c8:00",
            "net1":   "72:00:01:f2:13:f0",
            "serial": "xxxxxxxxxxx",
            "asset":  "Asset-1234567890",
            "uuid":   "Not Settable",
        }))
        .unwrap();

        assert_eq!(hw_info.len(), 5);
        assert_eq!(hw_info.get("net0"), Some("78:31:c1:be:c8:00"));
        assert_eq!(hw_info.get("serial"), Some("xxxxxxxxxxx"));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert_eq!(
            HardwareInfo::from_value(&json!("serial")),
            Err(SchemaViolation::NotAnObject)
        );
        assert_eq!(
            HardwareInfo::from_value(&json!(["net0"])),
            Err(SchemaViolation::NotAnObject)
        );
    }

    #[test]
    fn test_parse_rejects_empty_object() {
        assert_eq!(
            HardwareInfo::from_value(&json!({})),
            Err(SchemaViolation::Empty)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_attribute() {
        assert_eq!(
            HardwareInfo::from_value(&json!({"serial": "abc", "vendor": "acme"})),
            Err(SchemaViolation::UnknownAttribute("vendor".to_string()))
        );
        // `net` requires a numeric suffix
        assert_eq!(
            HardwareInfo::from_value(&json!({"net": "aa:bb:cc:dd:ee:ff"})),
            Err(SchemaViolation::UnknownAttribute("net".to_string()))
        );
        assert_eq!(
            HardwareInfo::from_value(&json!({"net0x": "aa:bb:cc:dd:ee:ff"})),
            Err(SchemaViolation::UnknownAttribute("net0x".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_non_string_value() {
        assert_eq!(
            HardwareInfo::from_value(&json!({"serial": 42})),
            Err(SchemaViolation::NonStringValue("serial".to_string()))
        );
        assert_eq!(
            HardwareInfo::from_value(&json!({"net0": null})),
            Err(SchemaViolation::NonStringValue("net0".to_string()))
        );
    }

    #[test]
    fn test_parse_accepts_high_net_index() {
        let hw_info = HardwareInfo::from_value(&json!({"net12": "aa:bb:cc:dd:ee:ff"})).unwrap();
        assert_eq!(hw_info.get("net12"), Some("aa:bb:cc:dd:ee:ff"));
    }

    #[test]
    fn test_matching_keys() {
        let hw_info = HardwareInfo::from_value(&json!({
            "net0": "78:31:c1:be:c8:00",
            "serial": "abc",
        }))
        .unwrap();

        assert_eq!(
            hw_info.matching_keys(&match_keys(&["serial", "asset"])),
            vec!["serial"]
        );
        assert!(hw_info.satisfies(&match_keys(&["serial", "asset"])));

        assert!(
            hw_info
                .matching_keys(&match_keys(&["asset", "uuid"]))
                .is_empty()
        );
        assert!(!hw_info.satisfies(&match_keys(&["asset", "uuid"])));
    }

    #[test]
    fn test_serde_round_trip() {
        let hw_info = HardwareInfo::from_value(&json!({
            "net0": "78:31:c1:be:c8:00",
            "serial": "abc",
        }))
        .unwrap();

        let serialized = serde_json::to_value(&hw_info).unwrap();
        assert_eq!(
            serialized,
            json!({"net0": "78:31:c1:be:c8:00", "serial": "abc"})
        );

        let deserialized: HardwareInfo = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, hw_info);
    }
}
