//! Record-directory file operations.
//!
//! Three concerns live here: writing documents under an exclusive advisory
//! lock, scanning the record directory for entries, and establishing the
//! core files (`assets/`, `templates/`, `README.md`) a record directory
//! must contain.

use crate::error::Result;
use crate::paths::AdrPaths;
use crate::template::TemplateSet;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Entries inside the record directory that are never records.
pub const RESERVED_NAMES: [&str; 3] = ["README.md", "assets", "templates"];

/// Write `content` to `path`, truncating any existing file, under an
/// exclusive advisory lock.
///
/// The lock serializes concurrent writers to the same file. It is released
/// on every exit path: the write result is captured before unlocking so an
/// I/O failure mid-write still unlocks and closes the file.
pub fn write_locked(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.lock_exclusive()?;
    let written = file.write_all(content.as_bytes());
    let unlocked = FileExt::unlock(&file);
    written?;
    unlocked?;
    Ok(())
}

/// List record entries directly inside `adr_dir`, excluding the reserved
/// names. Order is filesystem-dependent; callers sort when they need a
/// stable order.
pub fn list_adr_entries(adr_dir: &Path) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(adr_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !RESERVED_NAMES.contains(&name.as_str()) {
            entries.push(name);
        }
    }
    Ok(entries)
}

/// Number of existing records, which is also the sequence number the next
/// record gets.
pub fn count_adr_entries(adr_dir: &Path) -> Result<usize> {
    Ok(list_adr_entries(adr_dir)?.len())
}

/// Create the record directory skeleton: `assets/` and `templates/`
/// subdirectories, and `README.md` seeded verbatim from the bundled README
/// template when absent. Idempotent; an existing README is left alone.
pub fn establish_core_files(paths: &AdrPaths, templates: &TemplateSet) -> Result<()> {
    fs::create_dir_all(paths.assets_dir())?;
    fs::create_dir_all(paths.override_templates_dir())?;

    let readme = paths.readme_path();
    if !readme.exists() {
        write_locked(&readme, &templates.default_readme_template()?)?;
    }
    Ok(())
}
