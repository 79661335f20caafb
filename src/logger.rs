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

//! Global slog logger on stderr.
//!
//! stdout carries the Elasticsearch responses, so every record goes to
//! stderr. `RUST_LOG` filters records with the `env_logger` syntax,
//! `RUST_LOG_JSON` selects the output format.
use slog::{o, Drain, Logger, Never};
use std::env;

/// Filter applied when `RUST_LOG` is unset or empty.
pub const DEFAULT_FILTER: &str = "info";

const ASYNC_CHANNEL_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines, grouped by logger context.
    Compact,
    /// One JSON object per line.
    Json,
    /// Indented JSON objects.
    PrettyJson,
}

impl LogFormat {
    /// Format selected by the value of `RUST_LOG_JSON`: unset means compact
    /// text, `pretty` means indented JSON, anything else one line of JSON.
    pub fn from_env_value(value: Option<&str>) -> LogFormat {
        match value {
            None => LogFormat::Compact,
            Some("pretty") => LogFormat::PrettyJson,
            Some(_) => LogFormat::Json,
        }
    }
}

/// Install the global logger and bridge the `log` crate into it.
///
/// Keep the guard alive for the whole run: dropping it flushes the
/// asynchronous drain.
pub fn logger_init() -> Result<slog_scope::GlobalLoggerGuard, log::SetLoggerError> {
    let format = LogFormat::from_env_value(env::var("RUST_LOG_JSON").ok().as_deref());
    let filter = env::var("RUST_LOG")
        .ok()
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());

    let logger = match format {
        LogFormat::Compact => {
            let decorator = slog_term::PlainDecorator::new(std::io::stderr());
            root_logger(slog_term::CompactFormat::new(decorator).build().fuse(), &filter)
        }
        LogFormat::Json | LogFormat::PrettyJson => {
            let drain = slog_json::Json::new(std::io::stderr())
                .set_pretty(format == LogFormat::PrettyJson)
                .add_default_keys()
                .add_key_value(o!(
                    "module" => slog::FnValue(|record: &slog::Record<'_>| record.module())
                ))
                .build();
            root_logger(drain.fuse(), &filter)
        }
    };

    let guard = slog_scope::set_global_logger(logger);
    slog_stdlog::init()?;
    Ok(guard)
}

/// Wrap `drain` with the level filter and the async channel, tagging every
/// record with the tool name.
pub fn root_logger<D>(drain: D, filter: &str) -> Logger
where
    D: Drain<Ok = (), Err = Never> + Send + 'static,
{
    let filtered = slog_envlogger::LogBuilder::new(drain).parse(filter).build();
    let drain = slog_async::Async::new(filtered)
        .chan_size(ASYNC_CHANNEL_SIZE)
        .build()
        .fuse();
    Logger::root(drain, o!("app" => env!("CARGO_PKG_NAME")))
}
