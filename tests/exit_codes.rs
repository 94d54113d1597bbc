//! Process exit status of the `faucet-drip` binary against a mock CDP backend.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tokio::process::Command;

mod common;

const WALLET: &str = "0x000000000000000000000000000000000000dEaD";

/// Scratch directory holding a config that points the binary at `addr`.
fn workdir_for(addr: SocketAddr) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("faucet-drip-exit-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let config = format!(
        "[faucet]\napi_url = \"http://{}/platform\"\nrequests = 5\n\n[retries]\nbase_delay_ms = 10\n",
        addr
    );
    std::fs::write(dir.join("config.toml"), config).unwrap();
    dir
}

fn faucet_command(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_faucet-drip"));
    cmd.arg("--config")
        .arg(dir.join("config.toml"))
        .current_dir(dir)
        .env("EXTERNAL_WALLET_ADDRESS", WALLET)
        .env("CDP_API_KEY_ID", "organizations/test/apiKeys/test")
        .env("CDP_API_KEY_SECRET", STANDARD.encode([9u8; 64]))
        .env("RUST_LOG", "off")
        .kill_on_drop(true);
    for var in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Backend that succeeds until call `fail_at`, then answers with `status`/`body`.
async fn backend_failing_at(fail_at: u32, status: u16, body: &'static str) -> (SocketAddr, Arc<AtomicU32>) {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let addr = common::start_programmable_backend(move |_req| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            if n < fail_at {
                (200, common::tx_hash_json(n as u8))
            } else {
                (status, body.to_string())
            }
        }
    })
    .await;
    (addr, calls)
}

async fn run(cmd: &mut Command) -> Output {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_faucet_limit_exits_zero() {
    let (addr, calls) = backend_failing_at(
        3,
        429,
        r#"{"errorType":"faucet_limit_exceeded","errorMessage":"Faucet limit reached"}"#,
    )
    .await;
    let dir = workdir_for(addr);

    let output = run(&mut faucet_command(&dir)).await;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{}", stdout);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(stdout.contains("Completed 2 successful requests before limit reached"), "stdout:\n{}", stdout);

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_all_requests_complete_exits_zero() {
    let (addr, calls) = backend_failing_at(u32::MAX, 500, "").await;
    let dir = workdir_for(addr);

    let output = run(faucet_command(&dir).args(["--requests", "4"])).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert!(String::from_utf8_lossy(&output.stdout).contains("All requests completed successfully"));

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_unclassified_error_exits_one() {
    let (addr, calls) = backend_failing_at(
        3,
        500,
        r#"{"errorType":"internal_server_error","errorMessage":"backend exploded"}"#,
    )
    .await;
    let dir = workdir_for(addr);

    let output = run(&mut faucet_command(&dir)).await;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1), "stdout:\n{}", stdout);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(stdout.contains("ERROR OCCURRED"));
    assert!(stdout.contains("backend exploded"));

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_missing_wallet_exits_one_without_requests() {
    let (addr, calls) = backend_failing_at(u32::MAX, 500, "").await;
    let dir = workdir_for(addr);

    let output = run(faucet_command(&dir).env_remove("EXTERNAL_WALLET_ADDRESS")).await;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(String::from_utf8_lossy(&output.stdout).contains("EXTERNAL_WALLET_ADDRESS"));

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_setup_error_with_closed_stdout_exits_one() {
    let (addr, _calls) = backend_failing_at(u32::MAX, 500, "").await;
    let dir = workdir_for(addr);

    let mut child = faucet_command(&dir)
        .env_remove("EXTERNAL_WALLET_ADDRESS")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // Nobody reads the report: writing it fails with a broken pipe.
    drop(child.stdout.take());

    let status = child.wait().await.unwrap();
    assert_eq!(status.code(), Some(1));

    let _ = std::fs::remove_dir_all(dir);
}
