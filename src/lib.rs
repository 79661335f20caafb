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

//! Provision the Elasticsearch side of an Elastiquill blog.
//!
//! For every configured host, `elastiquill-setup` PUTs the posts index, the
//! comments index, the `request_log` ingest pipeline and the `blog-logs`
//! index template, in that order.

pub mod artifacts;
pub mod error;
pub mod logger;
pub mod provision;
pub mod rubber;
pub mod settings;
pub mod utils;

pub use crate::error::Error;
