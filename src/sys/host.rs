use tracing::{debug, trace};

use super::{BadAddrPanic, EncodingError, HostnameError, NameLengthError, Panic, UnexpectedError};
use crate::sys;

/// Used when `_SC_HOST_NAME_MAX` is indeterminate. (POSIX guarantees at least 255.)
const FALLBACK_HOST_NAME_MAX: usize = 255;

/// Returns the hostname of the current machine.
///
/// The buffer is sized from `_SC_HOST_NAME_MAX`. If the name doesn't fit (some libcs truncate
/// silently, without a terminating nul) the call is retried once with double the space before
/// giving up with [`NameLengthError`].
///
/// # Panics
/// Panics if the kernel rejects the buffer address, which can't happen for the buffer allocated
/// here.
pub fn hostname() -> Result<String, HostnameError> {
    let mut buf_len = sys::sysconf_or(libc::_SC_HOST_NAME_MAX, FALLBACK_HOST_NAME_MAX) + 1;

    for attempt in 0..2 {
        let mut buf = vec![0_u8; buf_len];

        // SAFETY: buf is valid for writes of buf.len() bytes and outlives the call.
        if unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) } == -1 {
            match sys::err_no() {
                libc::ENAMETOOLONG => {},
                libc::EFAULT => BadAddrPanic.panic(),
                e => Err(UnexpectedError(e))?,
            }
        } else if let Some(len) = buf.iter().position(|&b| b == 0) {
            buf.truncate(len);
            let name = String::from_utf8(buf).map_err(|_| EncodingError)?;
            trace!(hostname = %name, "resolved hostname");
            return Ok(name);
        }

        debug!(attempt, buf_len, "hostname truncated, retrying with a larger buffer");
        buf_len *= 2;
    }

    Err(NameLengthError.into())
}
