// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          all / doc / dist / clean
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            |
//!                            v
//!                 component (registry, builders)
//!                            |
//!                            v
//!                  pipeline (ordered stages)
//!           clean -> build -> collect -> rename -> archive
//!
//!   +-----------------------------------------+
//!   |  core        process spawning, exit     |
//!   |  foundation  error, logging, utility    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod component;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod utility;
