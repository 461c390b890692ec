#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn flatwrite_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_flatwrite"))
}

/// Command for the CLI with inherited catalogue/framework env cleared.
pub fn flatwrite_command() -> Command {
    let mut cmd = Command::new(flatwrite_binary());
    cmd.env_remove("FLATWRITE_CATALOG")
        .env_remove("FLATWRITE_FRAMEWORK")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd))?;
    if !output.status.success() {
        bail!(
            "command {:?} failed: {}\nstdout: {}\nstderr: {}",
            cmd,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

pub fn run_command_expect_failure(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd))?;
    if output.status.success() {
        bail!(
            "command {:?} unexpectedly succeeded\nstdout: {}",
            cmd,
            String::from_utf8_lossy(&output.stdout)
        );
    }
    Ok(output)
}
