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

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use model::HardwareInfo;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{DatabaseError, DatabaseResult, Node, node};

/// Node lookup and mutation, as consumed by the command layer.
///
/// `replace_hw_info` is the commit half of "load by key, mutate, commit":
/// implementations must make the replacement atomic, so a reader observes
/// either the old record or the new one, never a mix of both.
#[async_trait]
pub trait NodeStore: Send + Sync {
    async fn get_node(&self, name: &str) -> DatabaseResult<Option<Node>>;

    async fn create_node(&self, name: &str, hw_info: &HardwareInfo) -> DatabaseResult<Node>;

    async fn replace_hw_info(&self, name: &str, hw_info: &HardwareInfo) -> DatabaseResult<Node>;
}

/// The production store, backed by Postgres.
pub struct PgNodeStore {
    pool: PgPool,
}

impl PgNodeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NodeStore for PgNodeStore {
    async fn get_node(&self, name: &str) -> DatabaseResult<Option<Node>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DatabaseError::new("acquire get_node", e))?;

        node::find_by_name(&mut conn, name).await
    }

    async fn create_node(&self, name: &str, hw_info: &HardwareInfo) -> DatabaseResult<Node> {
        let mut txn = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::new("begin create_node", e))?;

        let node = node::create(&mut txn, name, hw_info).await?;

        txn.commit()
            .await
            .map_err(|e| DatabaseError::new("commit create_node", e))?;

        Ok(node)
    }

    async fn replace_hw_info(&self, name: &str, hw_info: &HardwareInfo) -> DatabaseResult<Node> {
        let mut txn = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::new("begin replace_hw_info", e))?;

        let node = node::set_hw_info(&mut txn, name, hw_info).await?;

        txn.commit()
            .await
            .map_err(|e| DatabaseError::new("commit replace_hw_info", e))?;

        tracing::debug!(node = %node.name, "committed hw_info replacement");
        Ok(node)
    }
}

/// An in-process store for tests and local development, mirroring the
/// Postgres semantics (same not-found and already-exists behavior).
#[derive(Default)]
pub struct MemoryNodeStore {
    nodes: RwLock<HashMap<String, Node>>,
}

impl MemoryNodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NodeStore for MemoryNodeStore {
    async fn get_node(&self, name: &str) -> DatabaseResult<Option<Node>> {
        Ok(self.nodes.read().await.get(name).cloned())
    }

    async fn create_node(&self, name: &str, hw_info: &HardwareInfo) -> DatabaseResult<Node> {
        let mut nodes = self.nodes.write().await;
        if nodes.contains_key(name) {
            return Err(DatabaseError::NodeExists(name.to_string()));
        }

        let now = Utc::now();
        let node = Node {
            id: Uuid::new_v4(),
            name: name.to_string(),
            hw_info: sqlx::types::Json(hw_info.clone()),
            created: now,
            updated: now,
        };
        nodes.insert(name.to_string(), node.clone());

        Ok(node)
    }

    async fn replace_hw_info(&self, name: &str, hw_info: &HardwareInfo) -> DatabaseResult<Node> {
        // The write lock is held across the whole swap, matching the
        // single-statement atomicity of the Postgres path.
        let mut nodes = self.nodes.write().await;
        let node = nodes
            .get_mut(name)
            .ok_or_else(|| DatabaseError::NodeNotFound(name.to_string()))?;

        node.hw_info = sqlx::types::Json(hw_info.clone());
        node.updated = Utc::now();

        Ok(node.clone())
    }
}
