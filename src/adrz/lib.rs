//! # Adrz Architecture
//!
//! Adrz manages a directory of architectural decision records: `create`
//! adds a numbered markdown record from a template, `regen` rebuilds the
//! directory skeleton and the README index. The crate is a library with a
//! thin CLI binary on top.
//!
//! ## Layering
//!
//! ```text
//! CLI layer (main.rs, args.rs)
//!   the only place that prints or chooses exit codes
//!           │
//! API layer (api.rs)
//!   thin facade, returns structured Result types
//!           │
//! Command layer (commands/*.rs)
//!   business logic, returns CmdResult, no I/O assumptions beyond the
//!   record directory itself
//!           │
//! Leaf modules
//!   paths    — path resolution and directory conventions
//!   template — override-then-default template loading, placeholder render
//!   store    — locked writes, directory scanning, core-file skeleton
//!   record   — sequence formatting, name sanitization, record generation
//!   readme   — index generation
//! ```
//!
//! ## Conventions
//!
//! Records live in `./adr` as `{NNNNN}-{name}.md`, numbered by the count of
//! records present at creation time. `README.md`, `assets/` and
//! `templates/` inside that directory are reserved and never treated as
//! records. Project templates in `adr/templates/` override the defaults
//! shipped next to the executable.
//!
//! There is no state beyond the filesystem: every invocation re-derives
//! everything from the directory contents and its arguments.

pub mod api;
pub mod commands;
pub mod error;
pub mod paths;
pub mod readme;
pub mod record;
pub mod store;
pub mod template;
