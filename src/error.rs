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

use failure::Fail;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "could not load configuration from {}: {}", path, cause)]
    ConfigLoad {
        path: String,
        #[fail(cause)]
        cause: config::ConfigError,
    },

    #[fail(display = "invalid value for setting '{}': {}", key, cause)]
    InvalidSetting {
        key: String,
        #[fail(cause)]
        cause: config::ConfigError,
    },

    #[fail(display = "no elasticsearch host to provision in '{}'", hosts)]
    NoHosts { hosts: String },

    #[fail(display = "could not read artifact {}: {}", path, cause)]
    ArtifactRead {
        path: String,
        #[fail(cause)]
        cause: std::io::Error,
    },

    #[fail(display = "malformed artifact {}: {}", path, msg)]
    ArtifactFormat { path: String, msg: String },

    #[fail(display = "could not serialize settings: {}", msg)]
    Serialization { msg: String },

    #[fail(display = "could not build http client: {}", msg)]
    HttpClient { msg: String },

    #[fail(display = "PUT http://{} failed: {}", target, msg)]
    Transport { target: String, msg: String },
}

/// Flatten an error and all its sources into a single line.
pub(crate) fn chain_message(err: &(dyn std::error::Error + 'static)) -> String {
    std::iter::successors(Some(err), |e| e.source())
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}
