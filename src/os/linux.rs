//! Kernel entropy on Linux.
//!
//! Random bytes come straight from the `getrandom(2)` system call, which
//! reads the kernel CSPRNG and blocks only until the pool is initialized
//! at boot.

use std::io;

use libc::{c_void, getrandom};

/// Fills `buf` with cryptographically secure random bytes from the kernel.
///
/// Partial reads are continued and `EINTR` is retried, so on return the
/// whole buffer has been written.
///
/// # Panics
/// Panics if `getrandom` fails for any other reason. A broken kernel
/// entropy source leaves no safe way to run a live draw.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            panic!("getrandom() failed: {err}");
        }

        filled += ret as usize;
    }
}
