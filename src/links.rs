//! Opening outbound links with the platform launcher.

use std::cell::RefCell;
use std::process::{Command, Stdio};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::{FolioError, Result};

/// Something that can open a URL or path.
pub trait LinkOpener {
    fn open(&self, target: &str) -> Result<()>;
}

/// `xdg-open` on Linux, `open` on macOS, the URL protocol handler on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(target: &str) -> Command {
        #[cfg(target_os = "macos")]
        let mut command = {
            let mut c = Command::new("open");
            c.arg(target);
            c
        };
        #[cfg(target_os = "windows")]
        let mut command = {
            // No shell in between, so `&` and `^` in a URL stay literal.
            let mut c = Command::new("rundll32");
            c.args(["url.dll,FileProtocolHandler", target]);
            c
        };
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = {
            let mut c = Command::new("xdg-open");
            c.arg(target);
            c
        };
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        debug!(link = target, "opening link");
        Self::command(target)
            .spawn()
            .map(|_| ())
            .map_err(|e| FolioError::terminal(format!("cannot launch opener for {target}: {e}")))
    }
}

/// Records targets instead of opening them.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, target: &str) -> Result<()> {
        self.opened.borrow_mut().push(target.to_string());
        Ok(())
    }
}

/// Open `target`, logging instead of failing.
pub fn open_or_warn(opener: &dyn LinkOpener, target: &str) {
    if let Err(err) = opener.open(target) {
        warn!(%err, "link not opened");
    }
}
