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

use db::NodeStore;
use model::MatchKeys;

/// Shared state for the API handlers.
pub struct Api {
    pub node_store: Arc<dyn NodeStore>,
    /// Read-only snapshot of the configured match keys. Commands validate
    /// against this copy; there is no write path for it at runtime.
    pub match_keys: MatchKeys,
}

impl Api {
    pub fn new(node_store: Arc<dyn NodeStore>, match_keys: MatchKeys) -> Self {
        Self {
            node_store,
            match_keys,
        }
    }
}
