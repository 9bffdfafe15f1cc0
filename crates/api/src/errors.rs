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

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use model::{MatchKeys, SchemaViolation};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The hardware payload has no overlap with the configured match keys.
    /// Committing it would leave the node unreachable by discovery, so the
    /// request is rejected with the configured list for operator guidance.
    #[error("hw-info must contain at least one of the match keys: {match_keys}")]
    ValidationFailure { match_keys: MatchKeys },

    #[error("node '{0}' does not exist")]
    NodeNotFound(String),

    #[error("node '{0}' already exists")]
    NodeExists(String),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    #[error(transparent)]
    Database(db::DatabaseError),
}

impl From<db::DatabaseError> for ApiError {
    fn from(e: db::DatabaseError) -> Self {
        match e {
            db::DatabaseError::NodeNotFound(name) => Self::NodeNotFound(name),
            db::DatabaseError::NodeExists(name) => Self::NodeExists(name),
            other => Self::Database(other),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::ValidationFailure { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NodeNotFound(_) => StatusCode::NOT_FOUND,
            Self::NodeExists(_) => StatusCode::CONFLICT,
            Self::MalformedRequest(_) | Self::Schema(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
