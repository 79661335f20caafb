// Copyright © 2020, Elastiquill contributors.
//
// This file is part of elastiquill-setup,
//     the Elasticsearch provisioning tool of the Elastiquill blog engine.
//
// LICENCE: This program is free software; you can redistribute it
// and/or modify it under the terms of the GNU Affero General Public
// License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public
// License along with this program. If not, see
// <http://www.gnu.org/licenses/>.

//! Command line arguments, configuration file and resolved settings.
use config::{Config, ConfigError, File, FileFormat};
use serde::Serialize;
use slog_scope::{info, warn};
use std::env;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

use crate::Error;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Debug, StructOpt)]
#[structopt(
    name = "elastiquill-setup",
    about = "Create the Elastiquill indices, ingest pipeline and logs index template",
    version = VERSION,
    author = AUTHORS
)]
pub struct Opts {
    /// Path to config.yml file
    #[structopt(
        short = "c",
        long = "config",
        parse(from_os_str),
        default_value = "../config.yml"
    )]
    pub config: PathBuf,

    /// Directory holding blog-posts.json, blog-comments.json, request_log.json
    /// and blog-logs.json
    #[structopt(
        short = "d",
        long = "setup-dir",
        parse(from_os_str),
        default_value = ".",
        env = "SETUP_DIR"
    )]
    pub setup_dir: PathBuf,

    /// Print the resolved settings and exit without contacting Elasticsearch
    #[structopt(long = "print-settings")]
    pub print_settings: bool,
}

/// Where a setting is looked up: environment first, then the configuration
/// file, then a built-in default.
#[derive(Debug, Clone, Copy)]
pub struct Setting {
    pub key: &'static str,
    pub env: &'static str,
    pub default: &'static str,
}

pub const HOSTS: Setting = Setting {
    key: "elasticsearch.hosts",
    env: "ELASTICSEARCH_HOSTS",
    default: "localhost:9200",
};

pub const POSTS_INDEX: Setting = Setting {
    key: "elasticsearch.blog-index-name",
    env: "BLOG_POSTS_INDEX",
    default: "blog-posts",
};

pub const COMMENTS_INDEX: Setting = Setting {
    key: "elasticsearch.blog-comments-index-name",
    env: "BLOG_COMMENTS_INDEX",
    default: "blog-comments",
};

pub const LOGS_INDEX: Setting = Setting {
    key: "elasticsearch.blog-logs-index-name",
    env: "BLOG_LOGS_INDEX",
    default: "blog-logs",
};

impl Setting {
    /// Name printed when logging the resolved value, ie the key without its
    /// section.
    pub fn name(&self) -> &'static str {
        self.key.rsplit('.').next().unwrap_or(self.key)
    }

    pub fn resolve<E>(&self, config: &Config, lookup_env: E) -> Result<String, Error>
    where
        E: Fn(&str) -> Option<String>,
    {
        let value = match lookup_env(self.env).filter(|v| !v.is_empty()) {
            Some(value) => value,
            // a key left empty in the file counts as absent
            None => match config.get::<Option<String>>(self.key) {
                Ok(Some(value)) => value,
                Ok(None) | Err(ConfigError::NotFound(_)) => self.default.to_string(),
                Err(cause) => {
                    return Err(Error::InvalidSetting {
                        key: self.key.to_string(),
                        cause,
                    })
                }
            },
        };
        info!("{} == {}", self.name(), value);
        Ok(value)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub hosts: Vec<String>,
    pub posts_index: String,
    pub comments_index: String,
    pub logs_index: String,
    pub setup_dir: PathBuf,
}

impl Settings {
    pub fn new(opts: &Opts) -> Result<Self, Error> {
        let config = load_config(&opts.config)?;
        Settings::resolve(&config, &opts.setup_dir, |name| env::var(name).ok())
    }

    pub fn resolve<E>(config: &Config, setup_dir: &Path, lookup_env: E) -> Result<Self, Error>
    where
        E: Fn(&str) -> Option<String>,
    {
        let hosts = HOSTS.resolve(config, &lookup_env)?;
        Ok(Settings {
            hosts: split_hosts(&hosts)?,
            posts_index: POSTS_INDEX.resolve(config, &lookup_env)?,
            comments_index: COMMENTS_INDEX.resolve(config, &lookup_env)?,
            logs_index: LOGS_INDEX.resolve(config, &lookup_env)?,
            setup_dir: setup_dir.to_path_buf(),
        })
    }
}

/// Read the YAML configuration file. The file must exist.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let name = path.to_string_lossy();
    info!("using configuration from {}", name);
    let mut config = Config::new();
    config
        .merge(File::new(&name, FileFormat::Yaml).required(true))
        .map_err(|cause| Error::ConfigLoad {
            path: name.to_string(),
            cause,
        })?;
    Ok(config)
}

pub fn split_hosts(hosts: &str) -> Result<Vec<String>, Error> {
    let list: Vec<String> = hosts
        .split(',')
        .map(str::trim)
        .filter(|host| {
            if host.is_empty() {
                warn!("skipping empty entry in host list '{}'", hosts);
            }
            !host.is_empty()
        })
        .map(String::from)
        .collect();
    if list.is_empty() {
        return Err(Error::NoHosts {
            hosts: hosts.to_string(),
        });
    }
    Ok(list)
}
