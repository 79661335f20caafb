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

use slog_scope::error;
use std::process::exit;
use structopt::StructOpt;

use crate::logger::logger_init;
use crate::Error;

pub fn wrapped_launch_run<O, F>(run: F) -> Result<(), Error>
where
    F: FnOnce(O) -> Result<(), Error>,
    O: StructOpt,
{
    let opts = O::from_args();
    let _guard = match logger_init() {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("could not initialize logger: {}", err);
            exit(1);
        }
    };
    if let Err(err) = run(opts) {
        // causes are already part of the message
        error!("{}", err);
        Err(err)
    } else {
        Ok(())
    }
}

pub fn launch_run<O, F>(run: F)
where
    F: FnOnce(O) -> Result<(), Error>,
    O: StructOpt,
{
    if wrapped_launch_run(run).is_err() {
        // we wrap the real stuff in another method to std::exit after
        // the destruction of the logger (so we won't loose any messages)
        exit(1);
    }
}
