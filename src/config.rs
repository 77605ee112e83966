/*
 * config.rs
 *
 * mvpboard - Product validation marketplace service
 * Copyright (C) 2019-2020 Ammon Smith
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use crate::{Error, Result};
use mvpboard_core::feed::FeedConfig;
use std::fs;
use std::path::Path;

/// Settings for building a [`Server`](crate::Server).
///
/// Usually read from a TOML file. Every field but the database URL
/// may be left out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,

    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    #[inline]
    pub fn new<S: Into<String>>(database_url: S) -> Self {
        Config {
            database_url: database_url.into(),
            feed: FeedConfig::default(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Reading configuration from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|error| {
            Error::InvalidConfig(format!("unable to read {}: {}", path.display(), error))
        })?;

        Self::from_str(&contents)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|error| Error::InvalidConfig(error.to_string()))
    }
}

#[test]
fn parse_config() {
    let config = Config::from_str(
        r#"
        database_url = "postgres://localhost/mvpboard"

        [feed]
        top_n = 3
        "#,
    )
    .expect("Unable to parse config");

    assert_eq!(config.database_url, "postgres://localhost/mvpboard");
    assert_eq!(config.feed.top_n, 3);

    let config = Config::from_str(r#"database_url = "postgres://db/mvp""#)
        .expect("Unable to parse minimal config");

    assert_eq!(config, Config::new("postgres://db/mvp"));
    assert_eq!(config.feed.top_n, 5);

    let config = Config::from_str("database_url = \"postgres://db/mvp\"\n[feed]\n")
        .expect("Unable to parse config with empty feed table");

    assert_eq!(config.feed.top_n, 5);

    assert!(Config::from_str("feed = 4").is_err());
    assert!(Config::from_str("database_url = 12").is_err());
}

#[test]
fn missing_config_file() {
    let result = Config::from_file(Path::new("/nonexistent/mvpboard.toml"));

    match result {
        Err(Error::InvalidConfig(message)) => assert!(message.contains("mvpboard.toml")),
        _ => panic!("Missing config file didn't error"),
    }
}
