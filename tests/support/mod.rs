use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `abi-query` binary for this test run.
pub fn abi_query_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_abi-query"))
}

/// `abi-query` with the file override cleared so tests see the embedded ABI.
pub fn abi_query() -> Command {
    let mut cmd = Command::new(abi_query_binary());
    cmd.env_remove("TRUEPASS_ABI_FILE");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
