use std::ffi::{CStr, CString};
use std::mem::MaybeUninit;
use std::ptr;

use libc::{c_char, c_int, gid_t};
use tracing::{debug, trace};

use super::{
    EncodingError, FileCountError, IOError, InterruptError, InvalidNameError, NoSuchUserError,
    OOMError, UnexpectedError, UserGroupsError,
};
use crate::sys;

pub type Gid = gid_t;

/// The number of groups to make room for on the first `getgrouplist` call.
const INITIAL_GROUP_COUNT: usize = 32;

/// Lookup buffers are never grown past this many bytes.
const MAX_LOOKUP_BUF_LEN: usize = 1 << 20;

/// A group that a user belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Gid,
    /// The group's name, or [`None`] if the id has no entry in the group database.
    pub name: Option<String>,
}

/// Returns every group `user` belongs to, starting with their primary group.
///
/// After the primary group, groups appear in whatever order the group database yields them.
pub fn user_groups(user: &str) -> Result<Vec<Group>, UserGroupsError> {
    group_ids(user)?
        .into_iter()
        .map(|id| -> Result<Group, UserGroupsError> { Ok(Group { id, name: group_name(id)? }) })
        .collect()
}

/// Returns the ids of every group `user` belongs to, starting with their primary group.
pub fn group_ids(user: &str) -> Result<Vec<Gid>, UserGroupsError> {
    let name = CString::new(user).map_err(|_| InvalidNameError)?;
    let primary = primary_gid(&name)?;

    let mut capacity = INITIAL_GROUP_COUNT;
    loop {
        let mut groups: Vec<Gid> = vec![0; capacity];
        let mut count = c_int::try_from(capacity).map_err(|_| OOMError)?;

        // SAFETY: groups is valid for writes of `count` gids and name is a valid C string, both of
        // which outlive the call.
        let ret = unsafe {
            libc::getgrouplist(name.as_ptr(), primary, groups.as_mut_ptr(), &mut count)
        };

        if ret >= 0 {
            groups.truncate(count.max(0) as usize);
            put_first(&mut groups, primary);
            trace!(user, count = groups.len(), "resolved group list");
            return Ok(groups);
        }

        // glibc reports the required count on failure, other libcs may not.
        let required = count.max(0) as usize;
        capacity = if required > capacity { required } else { capacity * 2 };
        if capacity * size_of::<Gid>() > MAX_LOOKUP_BUF_LEN {
            Err(OOMError)?
        }
        debug!(user, capacity, "group list buffer too small, retrying");
    }
}

/// Moves `primary` to the front of `groups`, adding it if the database left it out.
pub(super) fn put_first(groups: &mut Vec<Gid>, primary: Gid) {
    match groups.iter().position(|&gid| gid == primary) {
        Some(index) => groups[..=index].rotate_right(1),
        None => groups.insert(0, primary),
    }
}

fn primary_gid(name: &CStr) -> Result<Gid, UserGroupsError> {
    let mut buf_len = sys::lookup_buf_len(libc::_SC_GETPW_R_SIZE_MAX);

    loop {
        let mut entry = MaybeUninit::<libc::passwd>::uninit();
        let mut buf = vec![0 as c_char; buf_len];
        let mut result: *mut libc::passwd = ptr::null_mut();

        // SAFETY: Every pointer refers to a live local that outlives the call, and buf is valid for
        // writes of buf.len() bytes.
        let ret = unsafe {
            libc::getpwnam_r(
                name.as_ptr(),
                entry.as_mut_ptr(),
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        match ret {
            0 if result.is_null() => Err(NoSuchUserError)?,
            // SAFETY: On success with a non-null result, result points to the initialised entry.
            0 => return Ok(unsafe { (*result).pw_gid }),
            libc::ERANGE => buf_len = grow_lookup_buf(buf_len)?,
            libc::ENOENT | libc::ESRCH | libc::EBADF | libc::EPERM => Err(NoSuchUserError)?,
            e => return Err(lookup_error(e)),
        }
    }
}

fn group_name(gid: Gid) -> Result<Option<String>, UserGroupsError> {
    let mut buf_len = sys::lookup_buf_len(libc::_SC_GETGR_R_SIZE_MAX);

    loop {
        let mut entry = MaybeUninit::<libc::group>::uninit();
        let mut buf = vec![0 as c_char; buf_len];
        let mut result: *mut libc::group = ptr::null_mut();

        // SAFETY: Every pointer refers to a live local that outlives the call, and buf is valid for
        // writes of buf.len() bytes.
        let ret = unsafe {
            libc::getgrgid_r(gid, entry.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &mut result)
        };

        match ret {
            0 if result.is_null() => return Ok(None),
            0 => {
                // SAFETY: On success with a non-null result, gr_name points to a nul-terminated
                // string stored in buf, which is still alive.
                let name = unsafe { CStr::from_ptr((*result).gr_name) };
                let name = name.to_str().map_err(|_| EncodingError)?;
                return Ok(Some(name.to_owned()));
            },
            libc::ERANGE => buf_len = grow_lookup_buf(buf_len)?,
            libc::ENOENT | libc::ESRCH | libc::EBADF | libc::EPERM => return Ok(None),
            e => return Err(lookup_error(e)),
        }
    }
}

fn grow_lookup_buf(buf_len: usize) -> Result<usize, OOMError> {
    let grown = buf_len * 2;
    if grown > MAX_LOOKUP_BUF_LEN {
        return Err(OOMError);
    }
    debug!(buf_len = grown, "lookup buffer too small, retrying");
    Ok(grown)
}

fn lookup_error(errno: c_int) -> UserGroupsError {
    match errno {
        libc::EINTR => InterruptError.into(),
        libc::EIO => IOError.into(),
        libc::EMFILE | libc::ENFILE => FileCountError.into(),
        libc::ENOMEM => OOMError.into(),
        e => UnexpectedError(e).into(),
    }
}
