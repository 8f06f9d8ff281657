//! Call-site capture
//!
//! The caller's file and line are captured where the emit call is written,
//! either by the logging macros (`file!()` / `line!()`) or through
//! `#[track_caller]` on the logger methods.

use std::fmt;
use std::panic::Location;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// A call site with no location information; renders as `unknown`.
    pub const fn unknown() -> Self {
        Self { file: "", line: 0 }
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Base name of the source file, if there is one.
    pub fn file_name(&self) -> Option<&'static str> {
        Path::new(self.file).file_name()?.to_str()
    }

    /// `<file name>:<line>`, or `None` when the file is unknown.
    pub fn describe(&self) -> Option<String> {
        self.file_name()
            .map(|name| format!("{}:{}", name, self.line))
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.describe() {
            Some(text) => f.write_str(&text),
            None => f.write_str("unknown"),
        }
    }
}
