//! Infrastructure implementation of the `ProcessReaper` port using psmisc
//! `fuser`.
//!
//! `fuser -k -M -m <path>` sends SIGKILL to every process with a file open
//! on the filesystem mounted at `path`. That includes processes that have
//! nothing to do with the cluster resource but happen to use the mount.
//! `-M` makes fuser refuse to act when `path` is not itself a mountpoint,
//! so a stale path never targets the filesystem that contains it.

use crate::application::ports::{CommandRunner, ProcessReaper};
use crate::infra::command_runner::TokioCommandRunner;

pub const FUSER: &str = "fuser";

/// `fuser`-backed reaper over a `CommandRunner`.
pub struct FuserReaper<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> FuserReaper<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl FuserReaper<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner() -> Self {
        Self::new(TokioCommandRunner)
    }
}

impl<R: CommandRunner> ProcessReaper for FuserReaper<R> {
    async fn release_handles(&self, mountpoint: &str) -> usize {
        let output = match self.runner.run(FUSER, &["-k", "-M", "-m", mountpoint]).await {
            Ok(o) => o,
            Err(e) => {
                tracing::warn!(%mountpoint, error = %e, "cannot run fuser, open handles left in place");
                return 0;
            }
        };
        // fuser prints PIDs on stdout and exits 1 when it found nothing or
        // the path is not a mountpoint.
        let pids = parse_pids(&String::from_utf8_lossy(&output.stdout));
        if pids.is_empty() {
            return 0;
        }
        let list = pids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("{mountpoint}: killed {list}");
        tracing::warn!(%mountpoint, pids = %list, "killed processes with open handles");
        pids.len()
    }
}

/// PIDs from `fuser` standard output. Each PID may carry access-type
/// suffix letters (`c`, `e`, `f`, `F`, `r`, `m`).
#[must_use]
pub fn parse_pids(stdout: &str) -> Vec<u32> {
    stdout
        .split_ascii_whitespace()
        .filter_map(|tok| {
            tok.trim_end_matches(|c: char| c.is_ascii_alphabetic())
                .parse()
                .ok()
        })
        .collect()
}
