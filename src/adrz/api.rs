//! API facade.
//!
//! A thin entry point over the command layer. The facade owns the resolved
//! paths and template set; UI clients hand it plain arguments and get back
//! structured `Result<CmdResult>` values. No printing, no exit codes.

use crate::commands;
use crate::error::Result;
use crate::paths::AdrPaths;
use crate::template::TemplateSet;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct AdrzApi {
    paths: AdrPaths,
    templates: TemplateSet,
}

impl AdrzApi {
    pub fn new(paths: AdrPaths) -> Self {
        let templates = TemplateSet::new(
            paths.override_templates_dir(),
            paths.default_templates_dir(),
        );
        Self { paths, templates }
    }

    /// Create a new record and rebuild the index.
    pub fn create_record(&self, name: &str) -> Result<CmdResult> {
        commands::create::run(&self.paths, &self.templates, name)
    }

    /// Establish core files and rebuild the index.
    pub fn regen(&self) -> Result<CmdResult> {
        commands::regen::run(&self.paths, &self.templates)
    }

    /// The bundled usage text. Reads only the shipped assets, never the
    /// record directory.
    pub fn help_text(&self) -> Result<String> {
        self.templates.help_text()
    }

    pub fn paths(&self) -> &AdrPaths {
        &self.paths
    }
}
