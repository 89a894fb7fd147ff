// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process infrastructure.
//!
//! Child processes (the component build commands) are spawned through
//! [`process::ProcessBuilder`], which owns PATH resolution, working
//! directory handling and cancellation-aware waiting.

pub mod process;
