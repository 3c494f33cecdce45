// Each test binary compiles this module separately; not every binary uses
// every helper.
#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "hunter2";
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub base_url: String,
    child: Child,
}

impl TestServer {
    /// Spawn the API binary on a free port with test credentials configured.
    pub async fn spawn_api() -> Result<Self> {
        Self::spawn_api_with_env(&[]).await
    }

    /// Same as spawn_api, with extra environment on top of the credentials.
    pub async fn spawn_api_with_env(extra: &[(&str, &str)]) -> Result<Self> {
        let mut env = vec![
            ("AUTH_USERNAME", TEST_USERNAME),
            ("AUTH_PASSWORD", TEST_PASSWORD),
            ("JWT_SECRET", TEST_JWT_SECRET),
        ];
        env.extend_from_slice(extra);

        Self::spawn(env!("CARGO_BIN_EXE_formgate"), "FORMGATE_PORT", &env).await
    }

    /// Spawn the web binary on a free port. It needs no credentials.
    pub async fn spawn_web() -> Result<Self> {
        Self::spawn(env!("CARGO_BIN_EXE_formgate-web"), "FORMGATE_WEB_PORT", &[]).await
    }

    async fn spawn(binary: &str, port_var: &str, env: &[(&str, &str)]) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(binary);
        cmd.env(port_var, port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        for (key, value) in env {
            cmd.env(key, value);
        }

        let child = cmd.spawn().context("failed to spawn server binary")?;

        let server = Self { base_url, child };
        server.wait_ready(Duration::from_secs(10)).await?;

        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            // Any HTTP response means the listener is up; the API answers 401
            // on / without a token, the web server serves or redirects.
            if client.get(&self.base_url).send().await.is_ok() {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
