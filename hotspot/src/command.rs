//! Bounded execution of external scan tools.
//!
//! Every invocation runs with a caller-supplied timeout and an optional
//! cancellation token. The child is spawned with `kill_on_drop`, so both
//! the timeout and cancellation paths reliably reap the process instead
//! of leaving it running.

use log::{debug, warn};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tokio::time::timeout;

use crate::Result;
use crate::detector::ScanOptions;
use crate::models::ScanError;

/// Combined output of one finished tool invocation.
#[derive(Debug)]
pub(crate) struct CommandOutput {
    /// stdout followed by stderr, lossily decoded. Scan tools interleave
    /// diagnostics freely between the two streams.
    pub text: String,
    pub status: ExitStatus,
}

/// Runs `tool args...` to completion within the configured timeout.
///
/// Launch failure maps to `CommandUnavailable`, an expired timeout to
/// `CommandTimeout`, and caller cancellation to `CommandFailed` with no
/// exit code.
pub(crate) async fn run(tool: &str, args: &[&str], opts: &ScanOptions) -> Result<CommandOutput> {
    debug!("running `{tool} {}`", args.join(" "));

    let child = Command::new(tool)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ScanError::CommandUnavailable {
            tool: tool.to_string(),
            source,
        })?;

    let output = tokio::select! {
        waited = timeout(opts.timeout, child.wait_with_output()) => match waited {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(ScanError::Io(e)),
            Err(_) => {
                warn!("`{tool}` timed out after {:?}", opts.timeout);
                return Err(ScanError::CommandTimeout {
                    tool: tool.to_string(),
                    timeout: opts.timeout,
                });
            }
        },
        _ = opts.cancel.cancelled() => {
            warn!("`{tool}` cancelled by caller");
            return Err(ScanError::CommandFailed {
                tool: tool.to_string(),
                code: None,
            });
        }
    };

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.stderr.is_empty() {
        text.push_str(&String::from_utf8_lossy(&output.stderr));
    }

    Ok(CommandOutput {
        text,
        status: output.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn missing_tool_is_command_unavailable() {
        let opts = ScanOptions::default();
        let err = run("definitely-not-a-real-tool-1234", &[], &opts)
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::CommandUnavailable { tool, .. } if tool.contains("1234")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_combined_output() {
        let opts = ScanOptions::default();
        let out = run("sh", &["-c", "echo out; echo err >&2"], &opts)
            .await
            .unwrap();
        assert!(out.status.success());
        assert!(out.text.contains("out"));
        assert!(out.text.contains("err"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_tool_times_out() {
        let opts = ScanOptions::new(Duration::from_millis(50));
        let err = run("sleep", &["5"], &opts).await.unwrap_err();
        assert!(matches!(err, ScanError::CommandTimeout { tool, .. } if tool == "sleep"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn cancellation_maps_to_command_failed() {
        let cancel = CancellationToken::new();
        let opts = ScanOptions::new(Duration::from_secs(30)).with_cancel(cancel.clone());
        cancel.cancel();
        let err = run("sleep", &["5"], &opts).await.unwrap_err();
        assert!(matches!(err, ScanError::CommandFailed { code: None, .. }));
    }
}
