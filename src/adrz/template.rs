//! Template loading and placeholder rendering.
//!
//! Every document this tool writes starts from a template. A project can
//! override a template by dropping a file into `adr/templates/`; otherwise
//! the bundled default shipped next to the executable is used. A missing
//! override is an explicit, checked fallback — only other I/O failures
//! propagate. A missing default is fatal: the tool cannot function without
//! its shipped assets.

use crate::error::{AdrzError, Result};
use std::fs;
use std::path::PathBuf;

/// Override filename for the record template, under `adr/templates/`.
pub const ADR_OVERRIDE: &str = "template_adr.md";
/// Override filename for the README template, under `adr/templates/`.
pub const README_OVERRIDE: &str = "template_readme.md";
/// Bundled default record template.
pub const ADR_DEFAULT: &str = "adr_template.md";
/// Bundled default README template.
pub const README_DEFAULT: &str = "readme_template.md";
/// Bundled usage text, shown on unknown commands.
pub const HELP_FILE: &str = "help.txt";

/// Placeholder in the record template, replaced with the record heading.
pub const NAME_TOKEN: &str = "{{name}}";
/// Placeholder in the README template, replaced with the generation time.
pub const TIMESTAMP_TOKEN: &str = "{{timestamp}}";
/// Placeholder in the README template, replaced with the record listing.
pub const CONTENTS_TOKEN: &str = "{{contents}}";

/// Resolves named templates against an override directory and the bundled
/// default directory.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    override_dir: PathBuf,
    default_dir: PathBuf,
}

impl TemplateSet {
    pub fn new(override_dir: PathBuf, default_dir: PathBuf) -> Self {
        Self {
            override_dir,
            default_dir,
        }
    }

    /// Template for new records.
    pub fn adr_template(&self) -> Result<String> {
        self.load_with_fallback(ADR_OVERRIDE, ADR_DEFAULT)
    }

    /// Template for the generated README index.
    pub fn readme_template(&self) -> Result<String> {
        self.load_with_fallback(README_OVERRIDE, README_DEFAULT)
    }

    /// The bundled README template, ignoring any project override. Used to
    /// seed `adr/README.md` verbatim on first run.
    pub fn default_readme_template(&self) -> Result<String> {
        self.load_default(README_DEFAULT)
    }

    /// The bundled usage text.
    pub fn help_text(&self) -> Result<String> {
        self.load_default(HELP_FILE)
    }

    fn load_with_fallback(&self, override_name: &str, default_name: &str) -> Result<String> {
        let override_path = self.override_dir.join(override_name);
        if override_path.exists() {
            return Ok(fs::read_to_string(&override_path)?);
        }
        self.load_default(default_name)
    }

    fn load_default(&self, name: &str) -> Result<String> {
        let path = self.default_dir.join(name);
        if !path.exists() {
            return Err(AdrzError::MissingAsset(path));
        }
        Ok(fs::read_to_string(&path)?)
    }
}

/// Substitute each `(token, value)` pair into `template`, replacing every
/// occurrence. Tokens are literal substrings, not a pattern language.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(template.to_string(), |doc, (token, value)| {
            doc.replace(token, value)
        })
}
