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

use chrono::{DateTime, Utc};
use model::HardwareInfo;
use serde::Serialize;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::{DatabaseError, DatabaseResult};

/// A registered node and its hardware fingerprint.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Node {
    pub id: Uuid,
    pub name: String,
    pub hw_info: sqlx::types::Json<HardwareInfo>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

pub async fn find_by_name(conn: &mut PgConnection, name: &str) -> DatabaseResult<Option<Node>> {
    let query = "SELECT * FROM nodes WHERE name = $1";
    sqlx::query_as(query)
        .bind(name)
        .fetch_optional(conn)
        .await
        .map_err(|e| DatabaseError::query(query, e))
}

pub async fn create(
    txn: &mut PgConnection,
    name: &str,
    hw_info: &HardwareInfo,
) -> DatabaseResult<Node> {
    let query = r#"INSERT INTO nodes (name, hw_info)
        VALUES ($1, $2)
        RETURNING *"#;
    sqlx::query_as(query)
        .bind(name)
        .bind(sqlx::types::Json(hw_info))
        .fetch_one(txn)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return DatabaseError::NodeExists(name.to_string());
            }
            DatabaseError::query(query, e)
        })
}

/// Replace the node's hardware fingerprint wholesale. A single statement, so
/// concurrent replacements serialize on the row and never interleave fields.
pub async fn set_hw_info(
    txn: &mut PgConnection,
    name: &str,
    hw_info: &HardwareInfo,
) -> DatabaseResult<Node> {
    let query = r#"UPDATE nodes
        SET hw_info = $2, updated = NOW()
        WHERE name = $1
        RETURNING *"#;
    sqlx::query_as(query)
        .bind(name)
        .bind(sqlx::types::Json(hw_info))
        .fetch_one(txn)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => DatabaseError::NodeNotFound(name.to_string()),
            _ => DatabaseError::query(query, e),
        })
}
