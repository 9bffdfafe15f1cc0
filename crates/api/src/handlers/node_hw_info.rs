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

//! Node registration and hardware-identity updates.
//!
//! When hardware is changed in a node, such as a network card being
//! replaced, the registry must be informed so that it can still match the
//! new hardware with the existing node definition. `set-node-hw-info`
//! replaces the stored fingerprint wholesale; both commands refuse any
//! payload that shares no key with the configured match keys, since such a
//! record could never be resolved by discovery again.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use model::{HardwareInfo, MatchKeys};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::Api;
use crate::{ApiError, ApiResult};

const HW_INFO_KEY: &str = "hw-info";
const LEGACY_HW_INFO_KEY: &str = "hw_info";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeHwInfoRequest {
    node: String,
    #[serde(rename = "hw-info")]
    hw_info: Value,
}

#[derive(Debug, Serialize)]
pub struct CommandResult {
    pub result: String,
}

/// Older clients send the hardware payload under `hw_info`. Move it to the
/// canonical `hw-info` key when that key is absent; a no-op otherwise, so
/// running it again is always safe.
fn conform(payload: &mut Value) {
    if let Some(object) = payload.as_object_mut()
        && !object.contains_key(HW_INFO_KEY)
        && let Some(value) = object.remove(LEGACY_HW_INFO_KEY)
    {
        object.insert(HW_INFO_KEY.to_string(), value);
    }
}

fn parse_request(mut payload: Value) -> ApiResult<(String, HardwareInfo)> {
    conform(&mut payload);
    let request: NodeHwInfoRequest =
        serde_json::from_value(payload).map_err(|e| ApiError::MalformedRequest(e.to_string()))?;
    let hw_info = HardwareInfo::from_value(&request.hw_info)?;

    Ok((request.node, hw_info))
}

/// The payload must keep the node resolvable: at least one of its keys has
/// to be a configured match key. Strict membership; a payload of only
/// non-match hardware keys (e.g. `net7` when matching on `serial`) fails.
fn validate_match_keys(hw_info: &HardwareInfo, match_keys: &MatchKeys) -> ApiResult<()> {
    if !hw_info.satisfies(match_keys) {
        return Err(ApiError::ValidationFailure {
            match_keys: match_keys.clone(),
        });
    }

    Ok(())
}

/// Replace the hardware info of an existing node.
pub async fn set_node_hw_info(
    State(api): State<Arc<Api>>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<CommandResult>> {
    let (name, hw_info) = parse_request(payload)?;
    validate_match_keys(&hw_info, &api.match_keys)?;

    let node = api.node_store.replace_hw_info(&name, &hw_info).await?;
    tracing::info!(node = %node.name, attributes = hw_info.len(), "replaced node hw-info");

    Ok(Json(CommandResult {
        result: format!("updated hw-info for node {}", node.name),
    }))
}

/// Register a new node with its initial hardware info.
pub async fn register_node(
    State(api): State<Arc<Api>>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<CommandResult>> {
    let (name, hw_info) = parse_request(payload)?;
    validate_match_keys(&hw_info, &api.match_keys)?;

    let node = api.node_store.create_node(&name, &hw_info).await?;
    tracing::info!(node = %node.name, attributes = hw_info.len(), "registered node");

    Ok(Json(CommandResult {
        result: format!("registered node {}", node.name),
    }))
}
