use std::io;
use std::os::fd::{AsFd, AsRawFd};

/// Returns true if `fd` refers to a terminal.
///
/// Any failure (not a terminal, or not a valid descriptor at all) is reported as `false`.
pub fn is_tty<F: AsFd + ?Sized>(fd: &F) -> bool {
    // SAFETY: isatty only inspects the descriptor, which is borrowed and therefore open for the
    // duration of the call.
    unsafe { libc::isatty(fd.as_fd().as_raw_fd()) == 1 }
}

pub fn stdin_is_tty() -> bool {
    is_tty(&io::stdin())
}

pub fn stdout_is_tty() -> bool {
    is_tty(&io::stdout())
}

pub fn stderr_is_tty() -> bool {
    is_tty(&io::stderr())
}
