//! Bounded invocation of the external TestDisk utility.
//!
//! TestDisk is an independently-installed black box; all this module owns
//! is the time bound and the three ways the call can come back.

use std::ffi::OsStr;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

pub const TESTDISK_TIMEOUT: Duration = Duration::from_secs(300);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum TestdiskOutcome {
    /// The tool ran to completion; captured stdout is returned verbatim.
    Completed { stdout: String },
    /// The executable is not installed or not on PATH.
    ToolMissing,
    /// The tool exceeded the time bound and was killed.
    TimedOut { limit: Duration },
}

/// Runs `testdisk /log <target>` under the fixed time bound.
pub fn run_testdisk(target: &Path) -> io::Result<TestdiskOutcome> {
    run_bounded(
        "testdisk",
        [OsStr::new("/log"), target.as_os_str()],
        TESTDISK_TIMEOUT,
    )
}

/// Spawns `program`, captures stdout, and kills the child if it outlives
/// `limit`. A missing executable is an outcome, not an error; any other
/// spawn failure propagates.
pub fn run_bounded<I, S>(program: &str, args: I, limit: Duration) -> io::Result<TestdiskOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(TestdiskOutcome::ToolMissing),
        Err(e) => return Err(e),
    };

    // Drain stdout on its own thread so the child can never stall on a
    // full pipe while we poll for exit.
    let mut stdout = child.stdout.take().expect("stdout was piped");
    let drain = thread::Builder::new()
        .name("testdisk-stdout".into())
        .spawn(move || {
            let mut captured = Vec::new();
            let _ = stdout.read_to_end(&mut captured);
            captured
        })?;

    let deadline = Instant::now() + limit;

    loop {
        match child.try_wait()? {
            Some(status) => {
                debug!(%program, ?status, "external tool finished");
                let captured = drain.join().unwrap_or_default();
                return Ok(TestdiskOutcome::Completed {
                    stdout: String::from_utf8_lossy(&captured).into_owned(),
                });
            }
            None if Instant::now() >= deadline => {
                warn!(%program, limit_secs = limit.as_secs(), "external tool timed out");
                let _ = child.kill();
                let _ = child.wait();
                let _ = drain.join();
                return Ok(TestdiskOutcome::TimedOut { limit });
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    }
}
