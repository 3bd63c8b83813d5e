use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AdrzError, Result};
use crate::paths::AdrPaths;
use crate::template::TemplateSet;
use crate::{readme, record, store};

/// Create a new record named `name` and rebuild the index.
///
/// The sequence number is the count of records present at creation time,
/// so the Nth record created gets number N. An empty name is a usage error
/// and nothing is written.
pub fn run(paths: &AdrPaths, templates: &TemplateSet, name: &str) -> Result<CmdResult> {
    if name.is_empty() {
        return Err(AdrzError::Usage(
            "A record needs a name: adrz create <words...>".to_string(),
        ));
    }

    store::establish_core_files(paths, templates)?;
    let sequence = store::count_adr_entries(paths.adr_dir())?;
    let path = record::generate(sequence, name, paths, templates)?;
    readme::rebuild(paths, templates)?;

    let mut result = CmdResult::default().with_created(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Created {}",
        path.display()
    )));
    result.add_message(CmdMessage::info("Index regenerated."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn setup(root: &Path) -> (AdrPaths, TemplateSet) {
        let paths = AdrPaths::with_roots(
            root.join("adr"),
            Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf(),
        );
        let templates = TemplateSet::new(
            paths.override_templates_dir(),
            paths.default_templates_dir(),
        );
        (paths, templates)
    }

    #[test]
    fn first_record_gets_sequence_zero() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = setup(dir.path());

        let result = run(&paths, &templates, "First").unwrap();

        let created = result.created.unwrap();
        assert_eq!(created, paths.adr_dir().join("00000-First.md"));
        assert!(created.exists());
        assert_eq!(store::count_adr_entries(paths.adr_dir()).unwrap(), 1);
    }

    #[test]
    fn sequence_numbers_count_existing_records() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = setup(dir.path());

        run(&paths, &templates, "a").unwrap();
        run(&paths, &templates, "b").unwrap();
        let result = run(&paths, &templates, "c").unwrap();

        assert_eq!(result.created.unwrap(), paths.adr_dir().join("00002-c.md"));
        assert_eq!(store::count_adr_entries(paths.adr_dir()).unwrap(), 3);
    }

    #[test]
    fn reserved_entries_do_not_inflate_the_sequence() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = setup(dir.path());

        // README.md, assets/ and templates/ exist after the first create.
        run(&paths, &templates, "a").unwrap();
        let result = run(&paths, &templates, "b").unwrap();

        assert_eq!(result.created.unwrap(), paths.adr_dir().join("00001-b.md"));
    }

    #[test]
    fn unsafe_characters_are_sanitized_in_the_filename() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = setup(dir.path());

        let result = run(&paths, &templates, "A/B:C").unwrap();

        assert_eq!(
            result.created.unwrap(),
            paths.adr_dir().join("00000-A B C.md")
        );
    }

    #[test]
    fn empty_name_is_a_usage_error_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = setup(dir.path());

        let err = run(&paths, &templates, "").unwrap_err();

        assert!(matches!(err, AdrzError::Usage(_)));
        assert!(!paths.adr_dir().exists());
    }

    #[test]
    fn create_rebuilds_the_index() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = setup(dir.path());

        run(&paths, &templates, "Indexed").unwrap();

        let readme = fs::read_to_string(paths.readme_path()).unwrap();
        assert!(readme.contains(" - [00000-Indexed.md](./00000-Indexed.md)"));
    }
}
