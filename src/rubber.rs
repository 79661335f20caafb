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

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use slog_scope::debug;

use crate::error::chain_message;
use crate::Error;

/// Something able to PUT a JSON document on an Elasticsearch host.
///
/// `target` is `host:port/path`, without scheme. The raw response body is
/// returned whatever the HTTP status; only network level failures are errors.
pub trait Transport {
    fn put(&self, target: &str, body: Vec<u8>) -> Result<String, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn put(&self, target: &str, body: Vec<u8>) -> Result<String, Error> {
        (**self).put(target, body)
    }
}

// Rubber is a wrapper around the elasticsearch HTTP API
pub struct Rubber {
    client: Client,
}

impl Rubber {
    pub fn new() -> Result<Rubber, Error> {
        // no timeout, a PUT waits as long as the host needs
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(|err| Error::HttpClient {
                msg: chain_message(&err),
            })?;
        Ok(Rubber { client })
    }
}

impl Transport for Rubber {
    fn put(&self, target: &str, body: Vec<u8>) -> Result<String, Error> {
        let url = format!("http://{}", target);
        let transport_err = |err: reqwest::Error| Error::Transport {
            target: target.to_string(),
            msg: chain_message(&err),
        };
        let res = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(transport_err)?;
        debug!("es response status for {}: {}", url, res.status());
        res.text().map_err(transport_err)
    }
}
