//! Smoke-test binary for an attrkv store.
//!
//! Usage: `attrkv-smoke <host> <port>`
//!
//! Runs the multi-attribute scenario against a live store: a GET on a fresh
//! key must report NOTFOUND, partial PUTs must merge rather than replace,
//! and a partial GET must project only the requested fields. Exits 1 when
//! the store is unreachable, 0 when the scenario passes; an assertion
//! mismatch aborts the process.

use std::process::exit;

use attrkv::Attributes;
use attrkv::Client;
use attrkv::Status;
use tracing::error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (host, port) = match (args.next(), args.next().and_then(|p| p.parse::<u16>().ok())) {
        (Some(host), Some(port)) => (host, port),
        _ => {
            eprintln!("usage: attrkv-smoke <host> <port>");
            exit(2);
        }
    };

    let client = match Client::connect(host, port).await {
        Ok(client) => client,
        Err(e) => {
            error!("failed to connect: {e}");
            exit(1);
        }
    };
    info!("connected, server version {}", client.server_version());

    run_scenario(&client).await;

    info!("scenario passed");
    exit(0);
}

async fn run_scenario(client: &Client) {
    let space = client.space();

    // Fresh key reads back as NOTFOUND, an outcome rather than an error.
    let (_, status) = space.get("kv", "k").await.unwrap_or_else(die);
    assert_status(status, Status::NotFound, "initial get");

    // First write sets v1 only.
    let attrs: Attributes = [("v1", "ABC")].into_iter().collect();
    let status = space.put("kv", "k", attrs).await.unwrap_or_else(die);
    assert_status(status, Status::Success, "put v1");

    let (attrs, status) = space.get("kv", "k").await.unwrap_or_else(die);
    assert_status(status, Status::Success, "get after put v1");
    let expected: Attributes = [("v1", "ABC")].into_iter().collect();
    assert_sloppy(&attrs, &expected, "get after put v1");

    // Second write sets v2 only; v1 must survive (merge, not replace).
    let attrs: Attributes = [("v2", "123")].into_iter().collect();
    let status = space.put("kv", "k", attrs).await.unwrap_or_else(die);
    assert_status(status, Status::Success, "put v2");

    let (attrs, status) = space.get("kv", "k").await.unwrap_or_else(die);
    assert_status(status, Status::Success, "get after put v2");
    let expected: Attributes = [("v1", "ABC"), ("v2", "123")].into_iter().collect();
    assert_sloppy(&attrs, &expected, "get after put v2");

    // Partial read projects exactly the requested field.
    let (attrs, status) = space.get_partial("kv", "k", ["v1"]).await.unwrap_or_else(die);
    assert_status(status, Status::Success, "partial get");
    let expected: Attributes = [("v1", "ABC")].into_iter().collect();
    assert_sloppy(&attrs, &expected, "partial get");
    if attrs.contains("v2") {
        panic!("partial get leaked unrequested field v2: {attrs:?}");
    }
}

fn die<T>(e: attrkv::ClientApiError) -> T {
    error!("operation failed: {e}");
    exit(1);
}

fn assert_status(
    got: Status,
    want: Status,
    step: &str,
) {
    if got != want {
        panic!("{step}: bad status {got:?} (should be {want:?})");
    }
}

fn assert_sloppy(
    got: &Attributes,
    want: &Attributes,
    step: &str,
) {
    if !got.sloppy_eq(want) {
        panic!("{step}: objects not equal: {got:?} vs {want:?}");
    }
}
