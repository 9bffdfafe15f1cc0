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

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use model::HardwareInfo;
use serde::Serialize;

use crate::api::Api;
use crate::{ApiError, ApiResult};

#[derive(Debug, Serialize)]
pub struct NodeView {
    pub name: String,
    #[serde(rename = "hw-info")]
    pub hw_info: HardwareInfo,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl From<db::Node> for NodeView {
    fn from(node: db::Node) -> Self {
        Self {
            name: node.name,
            hw_info: node.hw_info.0,
            created: node.created,
            updated: node.updated,
        }
    }
}

/// Fetch a node record by name.
pub async fn get(
    State(api): State<Arc<Api>>,
    Path(name): Path<String>,
) -> ApiResult<Json<NodeView>> {
    let node = api
        .node_store
        .get_node(&name)
        .await?
        .ok_or(ApiError::NodeNotFound(name))?;

    Ok(Json(node.into()))
}
