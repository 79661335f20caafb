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

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::Settings;
use crate::Error;

pub const PIPELINE_NAME: &str = "request_log";
pub const LOGS_TEMPLATE_NAME: &str = "blog-logs";

/// The documents uploaded to every host, in upload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    PostsIndex,
    CommentsIndex,
    RequestLogPipeline,
    LogsTemplate,
}

impl Artifact {
    pub const ALL: [Artifact; 4] = [
        Artifact::PostsIndex,
        Artifact::CommentsIndex,
        Artifact::RequestLogPipeline,
        Artifact::LogsTemplate,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::PostsIndex => "blog-posts.json",
            Artifact::CommentsIndex => "blog-comments.json",
            Artifact::RequestLogPipeline => "request_log.json",
            Artifact::LogsTemplate => "blog-logs.json",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Artifact::PostsIndex => "Creating posts index",
            Artifact::CommentsIndex => "Creating comments index",
            Artifact::RequestLogPipeline => "Updating ingest pipeline",
            Artifact::LogsTemplate => "Updating blog-logs index template",
        }
    }

    pub fn source(self, setup_dir: &Path) -> PathBuf {
        setup_dir.join(self.file_name())
    }

    /// Path of the artifact on an Elasticsearch host, without the host.
    pub fn target(self, settings: &Settings) -> String {
        match self {
            Artifact::PostsIndex => settings.posts_index.clone(),
            Artifact::CommentsIndex => settings.comments_index.clone(),
            Artifact::RequestLogPipeline => format!("_ingest/pipeline/{}", PIPELINE_NAME),
            Artifact::LogsTemplate => format!("_template/{}", LOGS_TEMPLATE_NAME),
        }
    }

    /// Request body for this artifact, read from disk on every call.
    pub fn payload(self, settings: &Settings) -> Result<Vec<u8>, Error> {
        let path = self.source(&settings.setup_dir);
        match self {
            Artifact::LogsTemplate => logs_template(&path, &settings.logs_index),
            _ => read_raw(&path),
        }
    }
}

pub fn read_raw(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|cause| Error::ArtifactRead {
        path: path.display().to_string(),
        cause,
    })
}

/// Load the logs index template and point it at `<logs_index>*`.
///
/// `index_patterns` is written as a single string, not an array.
pub fn logs_template(path: &Path, logs_index: &str) -> Result<Vec<u8>, Error> {
    let raw = read_raw(path)?;
    let mut template: Value =
        serde_json::from_slice(&raw).map_err(|err| Error::ArtifactFormat {
            path: path.display().to_string(),
            msg: err.to_string(),
        })?;
    let object = template
        .as_object_mut()
        .ok_or_else(|| Error::ArtifactFormat {
            path: path.display().to_string(),
            msg: String::from("expected a JSON object"),
        })?;
    object.insert(
        String::from("index_patterns"),
        Value::String(format!("{}*", logs_index)),
    );
    serde_json::to_vec(&template).map_err(|err| Error::ArtifactFormat {
        path: path.display().to_string(),
        msg: err.to_string(),
    })
}
