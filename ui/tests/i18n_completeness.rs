use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file per locale.
const FTL_FILENAME: &str = "ignition-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Comments, terms (`-` prefix) and
/// blank lines are ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every `t!("...")` literal under `src/`.
///
/// Only direct literal first arguments are found; `fl!` calls and computed
/// IDs are out of reach, which is fine for this guard.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for chunk in content.split("t!(\"").skip(1) {
            if let Some(end) = chunk.find('"') {
                let key = &chunk[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn every_referenced_key_exists_in_every_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {fallback_file:?}"
    );

    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(
        referenced_keys.contains("welcome-button"),
        "source scan found no t!() keys; did the macro name change?"
    );

    let mut report = Vec::new();
    for locale in collect_locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Locale {locale} missing {path:?}: {err}"));
        let keys = parse_ftl_keys(&content);

        let mut missing: Vec<_> = referenced_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            missing.sort();
            report.push(format!("  {locale}: {}", missing.join(", ")));
        }
    }

    if !report.is_empty() {
        panic!(
            "Referenced translation keys missing per locale:\n{}",
            report.join("\n")
        );
    }
}

#[test]
fn fallback_has_no_unused_keys() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback_content =
        fs::read_to_string(crate_root.join(I18N_DIR).join("en-US").join(FTL_FILENAME))
            .expect("Failed to read fallback FTL file");
    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"));

    let unused: Vec<_> = parse_ftl_keys(&fallback_content)
        .into_iter()
        .filter(|k| !referenced_keys.contains(k))
        .collect();
    assert!(
        unused.is_empty(),
        "Fallback keys never referenced from src/: {}",
        unused.join(", ")
    );
}
