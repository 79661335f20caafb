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

use slog_scope::info;

use elastiquill_setup::provision::Provisioner;
use elastiquill_setup::rubber::Rubber;
use elastiquill_setup::settings::{Opts, Settings};
use elastiquill_setup::Error;

fn run(opts: Opts) -> Result<(), Error> {
    let settings = Settings::new(&opts).map_err(|err| {
        // configuration load errors go to stdout as well as to the log
        if let Error::ConfigLoad { .. } = err {
            println!("{}", err);
        }
        err
    })?;

    if opts.print_settings {
        let printed =
            serde_json::to_string_pretty(&settings).map_err(|err| Error::Serialization {
                msg: err.to_string(),
            })?;
        println!("{}", printed);
        return Ok(());
    }

    let rubber = Rubber::new()?;
    let stdout = std::io::stdout();
    Provisioner::new(rubber, &settings, stdout.lock()).run()?;
    info!("Elasticsearch setup done on {} host(s)", settings.hosts.len());
    Ok(())
}

fn main() {
    elastiquill_setup::utils::launch_run(run);
}
