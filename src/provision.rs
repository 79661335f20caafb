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

use slog_scope::{info, warn};
use std::io::Write;

use crate::artifacts::Artifact;
use crate::rubber::Transport;
use crate::settings::Settings;
use crate::Error;

/// Uploads every artifact to every host, one request at a time.
///
/// Response bodies are written to `out` as they arrive; HTTP error statuses
/// are not inspected. The first error stops the whole run, so the hosts
/// after a failing one are never contacted.
pub struct Provisioner<'a, T, W> {
    transport: T,
    settings: &'a Settings,
    out: W,
}

impl<'a, T, W> Provisioner<'a, T, W>
where
    T: Transport,
    W: Write,
{
    pub fn new(transport: T, settings: &'a Settings, out: W) -> Self {
        Provisioner {
            transport,
            settings,
            out,
        }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        let settings = self.settings;
        for host in &settings.hosts {
            self.provision_host(host)?;
        }
        Ok(())
    }

    pub fn provision_host(&mut self, host: &str) -> Result<(), Error> {
        info!("Executing on {}", host);
        for artifact in Artifact::ALL.iter() {
            info!("{}", artifact.description());
            let target = format!("{}/{}", host, artifact.target(self.settings));
            let body = artifact.payload(self.settings)?;
            let response = self.transport.put(&target, body)?;
            if let Err(err) = writeln!(self.out, "{}", response) {
                warn!("could not print response from {}: {}", target, err);
            }
        }
        Ok(())
    }
}
