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

use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use std::fs;
use std::net::TcpListener;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

pub const POSTS: &str = "{\n  \"mappings\": {\n    \"properties\": {\n      \"title\": { \"type\": \"text\" }\n    }\n  }\n}\n";
pub const COMMENTS: &str = "{\"mappings\":{\"properties\":{\"content\":{\"type\":\"text\"}}}}";
pub const PIPELINE: &str = "{\"description\":\"request log\",\"processors\":[]}";
pub const LOGS: &str = "{\"order\":0,\"index_patterns\":[\"blog-logs-*\"],\"mappings\":{}}";

pub fn write_setup_dir(dir: &Path) {
    fs::write(dir.join("blog-posts.json"), POSTS).unwrap();
    fs::write(dir.join("blog-comments.json"), COMMENTS).unwrap();
    fs::write(dir.join("request_log.json"), PIPELINE).unwrap();
    fs::write(dir.join("blog-logs.json"), LOGS).unwrap();
}

pub fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("config.yml");
    fs::write(&path, content).unwrap();
    path
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct Recorder {
    requests: Arc<Mutex<Vec<Request>>>,
    status: StatusCode,
    response: &'static str,
}

async fn record(req: HttpRequest, body: web::Bytes, recorder: web::Data<Recorder>) -> HttpResponse {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    recorder.requests.lock().unwrap().push(Request {
        method: req.method().to_string(),
        path: req.path().to_string(),
        content_type,
        body: body.to_vec(),
    });
    HttpResponse::build(recorder.status)
        .content_type("application/json")
        .body(recorder.response)
}

/// A fake elasticsearch recording every request it gets and always answering
/// with the given status and body.
pub struct FakeElasticsearch {
    pub host: String,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl FakeElasticsearch {
    pub fn start(status: StatusCode, response: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let host = listener.local_addr().unwrap().to_string();
        let recorder = Recorder {
            requests: Arc::new(Mutex::new(Vec::new())),
            status,
            response,
        };
        let requests = recorder.requests.clone();

        // the server lives until the test binary exits
        thread::spawn(move || {
            actix_web::rt::System::new().block_on(async move {
                HttpServer::new(move || {
                    App::new()
                        .app_data(web::Data::new(recorder.clone()))
                        .default_service(web::to(record))
                })
                .workers(1)
                .disable_signals()
                .listen(listener)
                .unwrap()
                .run()
                .await
                .unwrap()
            })
        });
        FakeElasticsearch { host, requests }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}
