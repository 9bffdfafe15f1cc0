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

//!
//! Persistence for the Crucible node registry.
//!

pub mod node;
pub mod store;

pub use node::Node;
pub use store::{MemoryNodeStore, NodeStore, PgNodeStore};

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("database error during {operation}: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("query failed ({query}): {source}")]
    Query {
        query: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("node '{0}' does not exist")]
    NodeNotFound(String),

    #[error("node '{0}' already exists")]
    NodeExists(String),
}

impl DatabaseError {
    pub fn new(operation: &str, source: sqlx::Error) -> Self {
        Self::Operation {
            operation: operation.to_string(),
            source,
        }
    }

    pub fn query(query: &str, source: sqlx::Error) -> Self {
        Self::Query {
            query: query.to_string(),
            source,
        }
    }
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Run the schema migrations for this crate against the given pool.
pub async fn migrate(pool: &sqlx::PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
