//! Ctrl+C while a prompt is open.
//!
//! `dialoguer` reads keys through `console`, which answers Ctrl+C in a menu
//! by raising `SIGINT` instead of returning an error.  The masked password
//! prompt only turns echo off, so there the terminal itself sends `SIGINT`.
//! Left alone, the signal kills the process with the cursor hidden or echo
//! still off.
//!
//! [`install`] registers a handler that puts the terminal back the way
//! [`TerminalState::capture`] found it, shows the cursor again and exits
//! with [`CANCELLED_EXIT_STATUS`].
//!
//! This module uses `unsafe` only for the `termios` calls on Unix.

use console::Term;
use tracing::debug;

/// Exit status after an interrupted prompt: a cancellation, not a failure.
pub const CANCELLED_EXIT_STATUS: i32 = 0;

/// Terminal modes saved before any prompt changes them.
pub struct TerminalState {
    #[cfg(unix)]
    saved: Option<unix::Saved>,
}

impl TerminalState {
    /// Saves the modes of the controlling terminal: stdin if it is a
    /// terminal, `/dev/tty` otherwise.  Without a terminal nothing is saved.
    pub fn capture() -> Self {
        Self {
            #[cfg(unix)]
            saved: unix::Saved::controlling(),
        }
    }

    /// A state with nothing to restore.
    pub fn detached() -> Self {
        Self {
            #[cfg(unix)]
            saved: None,
        }
    }

    #[cfg(unix)]
    pub fn is_attached(&self) -> bool {
        self.saved.is_some()
    }

    #[cfg(not(unix))]
    pub fn is_attached(&self) -> bool {
        false
    }

    /// Writes the saved modes back.  No-op when detached.
    pub fn restore(&self) {
        #[cfg(unix)]
        {
            if let Some(saved) = &self.saved {
                saved.restore();
            }
        }
    }
}

/// Undoes what an interrupted prompt left behind on `term` and returns the
/// exit status to use.
pub fn cancel_prompt(state: &TerminalState, term: &Term) -> i32 {
    state.restore();
    // The process is about to exit; nothing useful to do on failure.
    let _ = term.show_cursor();
    if term.is_term() {
        let _ = term.write_line("");
    }
    CANCELLED_EXIT_STATUS
}

/// Installs the process-wide Ctrl+C handler.  Call once, before the first
/// prompt.
///
/// # Errors
///
/// Returns the `ctrlc` error if a handler is already registered or the
/// signal cannot be hooked.
pub fn install(state: TerminalState) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        debug!("interrupted, cancelling");
        let status = cancel_prompt(&state, &Term::stderr());
        std::process::exit(status);
    })
}

#[cfg(unix)]
mod unix {
    use std::fs::File;
    use std::os::unix::io::{AsRawFd, RawFd};

    pub(super) struct Saved {
        fd: RawFd,
        modes: libc::termios,
        // Keeps `fd` open when it was opened from /dev/tty.
        _tty: Option<File>,
    }

    impl Saved {
        pub(super) fn controlling() -> Option<Self> {
            // SAFETY: isatty only inspects the descriptor.
            if unsafe { libc::isatty(libc::STDIN_FILENO) } == 1 {
                return Self::of(libc::STDIN_FILENO, None);
            }
            let tty = std::fs::OpenOptions::new()
                .read(true)
                .write(true)
                .open("/dev/tty")
                .ok()?;
            Self::of(tty.as_raw_fd(), Some(tty))
        }

        pub(super) fn of(fd: RawFd, owner: Option<File>) -> Option<Self> {
            let mut modes = std::mem::MaybeUninit::<libc::termios>::uninit();
            // SAFETY: tcgetattr writes a full termios into `modes` on success.
            if unsafe { libc::tcgetattr(fd, modes.as_mut_ptr()) } != 0 {
                return None;
            }
            Some(Self {
                fd,
                // SAFETY: initialised by the successful tcgetattr above.
                modes: unsafe { modes.assume_init() },
                _tty: owner,
            })
        }

        pub(super) fn restore(&self) {
            // SAFETY: `modes` was read from this same descriptor.
            unsafe {
                libc::tcsetattr(self.fd, libc::TCSANOW, &self.modes);
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
