// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! copy:  copy_dir_contents_async()  recursive tokio::fs copy
//! ```

pub mod copy;
