#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use axum::Router;
use axum::http::{Uri, header};

/// A loopback axum server that answers every request with `handler(path)`,
/// where `path` includes the query string.
pub struct CannedServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    pub fn start<H>(handler: H) -> Self
    where
        H: Fn(&str) -> String + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let app = Router::new().fallback(move |uri: Uri| {
            let handler = Arc::clone(&handler);
            let seen = Arc::clone(&seen);
            async move {
                let path = uri
                    .path_and_query()
                    .map(|pq| pq.as_str().to_string())
                    .unwrap_or_else(|| uri.path().to_string());
                seen.lock().unwrap().push(path.clone());
                ([(header::CONTENT_TYPE, "application/json")], handler(&path))
            }
        });

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let listener = rt.block_on(tokio::net::TcpListener::bind("127.0.0.1:0")).unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        thread::spawn(move || {
            rt.block_on(async move { axum::serve(listener, app).await.unwrap() });
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Value of query parameter `name` in `path`.
pub fn param(path: &str, name: &str) -> Option<String> {
    let query = path.split_once('?')?.1;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == name).then(|| v.to_string())
    })
}

/// JSON for one log row.
pub fn row(id: usize, user: &str, type_code: i64) -> String {
    format!(
        r#"{{"id":{id},"created_at":{},"username":"{user}","type":{type_code},"target_user":"","content":"op {id}"}}"#,
        1_767_225_600 + id
    )
}

pub fn ok_envelope(rows: &[String]) -> String {
    format!(r#"{{"success":true,"message":"","data":[{}]}}"#, rows.join(","))
}

/// Serve `total` admin rows through the paginated endpoint.
pub fn paged_log(total: usize) -> impl Fn(&str) -> String + Send + Sync + 'static {
    move |path: &str| {
        let p: usize = param(path, "p").and_then(|v| v.parse().ok()).unwrap_or(0);
        let size: usize = param(path, "page_size")
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let start = (p * size).min(total);
        let end = (start + size).min(total);
        let rows: Vec<String> = (start..end).map(|i| row(i, "root", 1)).collect();
        ok_envelope(&rows)
    }
}

/// Run adminlog against `server_url` with config and preferences isolated in `home`.
pub fn adminlog(home: &std::path::Path, server_url: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("adminlog");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("ADMINLOG_CONFIG")
        .env_remove("ADMINLOG_TOKEN")
        .env_remove("RUST_LOG")
        .env("ADMINLOG_SERVER", server_url);
    cmd
}
