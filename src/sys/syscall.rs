use std::io;

use libc::c_int;

/// Fallback buffer size for lookups whose `sysconf` limit is indeterminate.
const DEFAULT_BUF_LEN: usize = 1024;

pub fn err_no() -> c_int {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

/// Reads a `sysconf` limit, using `fallback` when the limit is indeterminate.
pub fn sysconf_or(name: c_int, fallback: usize) -> usize {
    // SAFETY: sysconf has no memory safety requirements and reports failure via its return value.
    match unsafe { libc::sysconf(name) } {
        limit if limit > 0 => limit as usize,
        _ => fallback,
    }
}

/// The starting buffer size for the reentrant `get*_r` family.
pub fn lookup_buf_len(name: c_int) -> usize {
    sysconf_or(name, DEFAULT_BUF_LEN)
}
