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

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use model::MatchKeys;
use serde::{Deserialize, Serialize};

/// Command line for the crucible-api server binary.
#[derive(Debug, Parser)]
#[command(name = "crucible-api", about = "Crucible managed-node registry API")]
pub struct Options {
    /// Path to the TOML configuration file.
    #[arg(long, env = "CRUCIBLE_CONFIG_FILE", default_value = "crucible.toml")]
    pub config_file: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub listen_address: SocketAddr,
    pub database_url: String,
    /// The hardware attribute names used to correlate raw hardware facts
    /// with node identity. Must not be empty; extraction fails otherwise.
    pub match_nodes_on: MatchKeys,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:8150".parse().expect("valid default address"),
            database_url: "postgres://postgres@localhost/crucible".to_string(),
            match_nodes_on: MatchKeys::new(vec![
                "serial".to_string(),
                "asset".to_string(),
                "uuid".to_string(),
            ])
            .expect("default match keys are non-empty"),
        }
    }
}

impl Config {
    /// Defaults, overridden by the TOML file, overridden by `CRUCIBLE_*`
    /// environment variables.
    pub fn load(config_file: &Path) -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("CRUCIBLE_"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = Config::load(Path::new("crucible.toml"))?;
            assert_eq!(config.listen_address, "0.0.0.0:8150".parse().unwrap());
            assert_eq!(
                config.match_nodes_on.iter().collect::<Vec<_>>(),
                vec!["serial", "asset", "uuid"]
            );
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "crucible.toml",
                r#"
                    listen_address = "127.0.0.1:9000"
                    match_nodes_on = ["serial"]
                "#,
            )?;

            let config = Config::load(Path::new("crucible.toml"))?;
            assert_eq!(config.listen_address, "127.0.0.1:9000".parse().unwrap());
            assert_eq!(
                config.match_nodes_on.iter().collect::<Vec<_>>(),
                vec!["serial"]
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("crucible.toml", r#"database_url = "postgres://from-toml""#)?;
            jail.set_env("CRUCIBLE_DATABASE_URL", "postgres://from-env");

            let config = Config::load(Path::new("crucible.toml"))?;
            assert_eq!(config.database_url, "postgres://from-env");
            Ok(())
        });
    }

    #[test]
    fn test_empty_match_keys_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("crucible.toml", "match_nodes_on = []")?;

            assert!(Config::load(Path::new("crucible.toml")).is_err());
            Ok(())
        });
    }
}
