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

use axum::Router;
use axum::routing::{get, post};

use crate::api::Api;
use crate::handlers;

pub fn app(api: Arc<Api>) -> Router {
    Router::new()
        .route(
            "/api/commands/register-node",
            post(handlers::node_hw_info::register_node),
        )
        .route(
            "/api/commands/set-node-hw-info",
            post(handlers::node_hw_info::set_node_hw_info),
        )
        .route("/api/nodes/{name}", get(handlers::node::get))
        .route("/healthz", get(healthz))
        .with_state(api)
}

async fn healthz() -> &'static str {
    "OK"
}
