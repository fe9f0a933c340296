//! Process-count cap for exec mode

use std::io;

/// Default soft cap on simultaneously alive processes. The program itself
/// runs at most one child at a time, so the cap only matters if something
/// goes badly wrong; RLIMIT_NPROC counts all of the invoking user's
/// processes on Linux, so the default leaves normal headroom.
pub const DEFAULT_PROC_LIMIT: u64 = 256;

/// Lower the RLIMIT_NPROC soft limit to `max`, clamped to the hard limit.
/// Failure here is fatal to the run.
pub fn limit_processes(max: u64) -> io::Result<()> {
    unsafe {
        let mut rl: libc::rlimit = std::mem::zeroed();
        if libc::getrlimit(libc::RLIMIT_NPROC, &mut rl) != 0 {
            return Err(io::Error::last_os_error());
        }
        rl.rlim_cur = (max as libc::rlim_t).min(rl.rlim_max);
        if libc::setrlimit(libc::RLIMIT_NPROC, &rl) != 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}
