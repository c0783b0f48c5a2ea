use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

#[derive(Debug, Display, Clone, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Error)]
#[display("name exceeds the maximum length")]
pub struct NameLengthError;

#[derive(Debug, Display, Clone, Error)]
#[display("name contains an interior nul byte")]
pub struct InvalidNameError;

#[derive(Debug, Display, Clone, Error)]
#[display("name is not valid UTF-8")]
pub struct EncodingError;

#[derive(Debug, Display, Clone, Error)]
#[display("no such user")]
pub struct NoSuchUserError;

#[derive(Debug, Display, Clone, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum HostnameError {
    // ENAMETOOLONG, or still truncated after growing the buffer
    NameLength(NameLengthError),
    Encoding(EncodingError),
    Unexpected(UnexpectedError),
}

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum UserGroupsError {
    InvalidName(InvalidNameError),
    // Lookup succeeded without an entry, or ENOENT / ESRCH / EBADF / EPERM
    NoSuchUser(NoSuchUserError),
    // EINTR
    Interrupt(InterruptError),
    // EIO
    IO(IOError),
    // EMFILE / ENFILE
    FileCount(FileCountError),
    // ENOMEM, or the entry needs an absurdly large buffer
    OOM(OOMError),
    Encoding(EncodingError),
    Unexpected(UnexpectedError),
}
