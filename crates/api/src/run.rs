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

use sqlx::postgres::PgPoolOptions;

use crate::api::Api;
use crate::cfg::{Config, Options};
use crate::{logging, web};

pub async fn run(options: Options) -> Result<(), eyre::Report> {
    logging::init();

    let config = Config::load(&options.config_file)?;
    tracing::info!(match_nodes_on = %config.match_nodes_on, "loaded registry configuration");

    let pool = PgPoolOptions::new()
        .max_connections(16)
        .connect(&config.database_url)
        .await?;
    db::migrate(&pool).await?;

    let api = Arc::new(Api::new(
        Arc::new(db::PgNodeStore::new(pool)),
        config.match_nodes_on,
    ));

    let listener = tokio::net::TcpListener::bind(config.listen_address).await?;
    tracing::info!(address = %config.listen_address, "crucible API listening");
    axum::serve(listener, web::app(api)).await?;

    Ok(())
}
