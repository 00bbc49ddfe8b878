//! The loader's `info` log line for each backend call.
//!
//! A thread-local subscriber writes into a shared buffer; `tokio::test`
//! runs on the current thread, so every event from the loader lands there.

use std::io;
use std::sync::{Arc, Mutex};

use serde_json::json;
use tracing::Level;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pageload::loader::PageLoader;

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_log() -> (CapturedLog, DefaultGuard) {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (log, guard)
}

async fn mount_users(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_login(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn loader_for(server: &MockServer) -> PageLoader {
    PageLoader::new(server.uri(), None).unwrap()
}

// ---------------------------------------------------------------------------
// user listing: raw body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_all_users_logs_raw_body() {
    let server = MockServer::start().await;
    let body = json!([{ "id": 7, "age": 40, "isPro": false, "mobile": "", "lastName": "Zed", "firstName": "Zoe" }]);
    mount_users(&server, ResponseTemplate::new(200).set_body_json(body.clone())).await;

    let (log, _guard) = capture_log();
    loader_for(&server).fetch_all_users().await.unwrap();

    let out = log.contents();
    assert!(out.contains("users response"), "log was: {out}");
    assert!(out.contains(&body.to_string()), "log was: {out}");
    assert!(out.contains("status=200"), "log was: {out}");
}

#[tokio::test]
async fn fetch_all_users_logs_body_before_rejecting() {
    let server = MockServer::start().await;
    mount_users(&server, ResponseTemplate::new(200).set_body_string("not json at all")).await;

    let (log, _guard) = capture_log();
    assert!(loader_for(&server).fetch_all_users().await.is_err());

    let out = log.contents();
    assert!(out.contains("not json at all"), "log was: {out}");
}

#[tokio::test]
async fn inspect_all_users_logs_raw_body() {
    let server = MockServer::start().await;
    mount_users(&server, ResponseTemplate::new(503).set_body_string("maintenance window")).await;

    let (log, _guard) = capture_log();
    loader_for(&server).inspect_all_users().await.unwrap();

    let out = log.contents();
    assert!(out.contains("maintenance window"), "log was: {out}");
    assert!(out.contains("status=503"), "log was: {out}");
}

// ---------------------------------------------------------------------------
// login: status only
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inspect_login_logs_status() {
    let server = MockServer::start().await;
    mount_login(&server, ResponseTemplate::new(401).set_body_string("secret-token-body")).await;

    let (log, _guard) = capture_log();
    loader_for(&server).inspect_login().await.unwrap();

    let out = log.contents();
    assert!(out.contains("login response"), "log was: {out}");
    assert!(out.contains("status=401"), "log was: {out}");
    assert!(!out.contains("secret-token-body"), "log was: {out}");
}

#[tokio::test]
async fn fetch_user_logs_status() {
    let server = MockServer::start().await;
    let alice = json!({ "id": 1, "age": 31, "isPro": true, "mobile": "", "lastName": "Liddell", "firstName": "Alice" });
    mount_login(&server, ResponseTemplate::new(200).set_body_json(alice)).await;

    let (log, _guard) = capture_log();
    loader_for(&server).fetch_user().await.unwrap();

    let out = log.contents();
    assert!(out.contains("login response"), "log was: {out}");
    assert!(out.contains("status=200"), "log was: {out}");
}
