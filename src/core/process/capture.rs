// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stderr capture through a single reusable temporary file.
//!
//! ```text
//! prepare()   truncate + rewind, hand a dup'd fd to the child
//! child       writes stderr through the shared offset
//! read_back() rewind, read everything the child wrote
//! ```
//!
//! The file is anonymous (`tempfile::tempfile`) and disappears when the
//! process exits. It is not safe to share between concurrent children.

use std::fs::File;
use std::io::{Read, Seek};
use std::process::Stdio;

/// Owner of the temporary file that receives a child's standard error.
#[derive(Debug)]
pub struct StderrCapture {
    file: File,
}

impl StderrCapture {
    /// Creates the backing temporary file.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            file: tempfile::tempfile()?,
        })
    }

    /// Empties the file and returns a handle for the next child's stderr.
    pub(super) fn prepare(&mut self) -> std::io::Result<Stdio> {
        self.file.set_len(0)?;
        self.file.rewind()?;
        Ok(Stdio::from(self.file.try_clone()?))
    }

    /// Reads back everything written since the last [`prepare`](Self::prepare).
    pub(super) fn read_back(&mut self) -> std::io::Result<String> {
        self.file.rewind()?;
        let mut bytes = Vec::new();
        self.file.read_to_end(&mut bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
