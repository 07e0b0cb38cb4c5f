use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Filename -> pet label.
pub type LabelMap = BTreeMap<String, String>;

const HIDDEN_PREFIX: char = '.';
const TOKEN_SEPARATOR: char = '_';

/// Result of one pass over a directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelExtraction {
    pub labels: LabelMap,
    pub entries_seen: usize,
    pub hidden_skipped: usize,
    /// Keys that were seen more than once; the first value was kept.
    pub duplicates: Vec<String>,
}

/// Reads `directory` and maps every non-hidden entry name to its pet label.
///
/// Files and subdirectories are treated alike. Any failure to enumerate the
/// directory is returned as [`PetLabelsError::Io`](crate::PetLabelsError::Io)
/// carrying the platform error.
pub fn extract_labels<P: AsRef<Path>>(directory: P) -> Result<LabelMap> {
    Ok(extract_from_directory(directory)?.labels)
}

/// Like [`extract_labels`], but keeps the counters used for statistics.
pub fn extract_from_directory<P: AsRef<Path>>(directory: P) -> Result<LabelExtraction> {
    let directory = directory.as_ref();

    let names = fs::read_dir(directory)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<String>>>()?;

    let extraction = build_label_map(names);

    tracing::debug!(
        directory = %directory.display(),
        entries = extraction.entries_seen,
        labeled = extraction.labels.len(),
        hidden = extraction.hidden_skipped,
        "extracted pet labels"
    );

    Ok(extraction)
}

/// Builds the label map from an already-enumerated listing.
pub fn build_label_map<I, S>(names: I) -> LabelExtraction
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut extraction = LabelExtraction::default();

    for name in names {
        let name = name.into();
        extraction.entries_seen += 1;

        if is_hidden(&name) {
            extraction.hidden_skipped += 1;
            continue;
        }

        let label = derive_label(&name);

        // Names in one listing are unique, but lossy UTF-8 conversion can collapse two.
        if let Some(existing) = extraction.labels.get(&name) {
            tracing::warn!(
                key = %name,
                existing = %existing,
                "duplicate image filename, keeping the first label"
            );
            extraction.duplicates.push(name);
            continue;
        }

        extraction.labels.insert(name, label);
    }

    extraction
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX)
}

/// Lower-cases `filename`, splits it on `_` and keeps the tokens made only of
/// letters (general category `L*`), joined by single spaces.
///
/// `Boston_terrier_02259.jpg` becomes `boston terrier`; a name with no
/// alphabetic token yields an empty label.
pub fn derive_label(filename: &str) -> String {
    filename
        .to_lowercase()
        .split(TOKEN_SEPARATOR)
        .filter(|token| is_alphabetic_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

// Letter numbers (Nl) and combining marks are not letters.
fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.general_category_group() == GeneralCategoryGroup::Letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PetLabelsError;
    use std::fs;
    use std::io::{self, ErrorKind, Write};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_captured_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    fn directory_with(files: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for file in files {
            fs::write(temp_dir.path().join(file), b"").unwrap();
        }
        temp_dir
    }

    #[test]
    fn test_multi_word_label() {
        assert_eq!(derive_label("Boston_terrier_02259.jpg"), "boston terrier");
        assert_eq!(
            derive_label("German_shorthaired_pointer_04986.jpg"),
            "german shorthaired pointer"
        );
    }

    #[test]
    fn test_single_word_label() {
        assert_eq!(derive_label("Basenji_01.jpg"), "basenji");
        assert_eq!(derive_label("cat_07.jpg"), "cat");
    }

    #[test]
    fn test_no_alphabetic_tokens() {
        assert_eq!(derive_label("123456.jpg"), "");
        assert_eq!(derive_label("___"), "");
        assert_eq!(derive_label(""), "");
    }

    #[test]
    fn test_tokens_with_extension_are_dropped() {
        // "dog.jpg" contains a dot, so it is not an alphabetic token
        assert_eq!(derive_label("great_dog.jpg"), "great");
        assert_eq!(derive_label("poodle"), "poodle");
    }

    #[test]
    fn test_empty_tokens_do_not_add_spaces() {
        assert_eq!(derive_label("Great__Dane_05320.jpg"), "great dane");
        assert_eq!(derive_label("_beagle_"), "beagle");
    }

    #[test]
    fn test_case_invariance() {
        let names = ["Boston_terrier_02259.jpg", "Basenji_01.jpg", "golden_retriever_05195.jpg"];
        for name in &names {
            assert_eq!(derive_label(name), derive_label(&name.to_uppercase()));
            assert_eq!(derive_label(name), derive_label(name).to_lowercase());
        }
    }

    #[test]
    fn test_non_ascii_letters_are_alphabetic() {
        assert_eq!(derive_label("Chihuahua_Ñandú_01.jpg"), "chihuahua ñandú");
    }

    #[test]
    fn test_letter_numbers_and_marks_are_not_alphabetic() {
        assert_eq!(derive_label("Ⅻ_01.jpg"), "");
        assert_eq!(derive_label("का_01.jpg"), "");
        assert_eq!(derive_label("Akita_Ⅻ_01.jpg"), "akita");
        assert_eq!(derive_label("Shiba_犬_01.jpg"), "shiba 犬");
    }

    #[test]
    fn test_hidden_detection() {
        assert!(is_hidden(".hidden_file.jpg"));
        assert!(is_hidden(".DS_Store"));
        assert!(!is_hidden("Basenji_01.jpg"));
        assert!(!is_hidden("file.with.dots.jpg"));
    }

    #[test]
    fn test_build_label_map_skips_hidden() {
        let extraction = build_label_map(["Basenji_01.jpg", ".hidden_file.jpg", "123456.jpg"]);

        assert_eq!(extraction.entries_seen, 3);
        assert_eq!(extraction.hidden_skipped, 1);
        assert_eq!(extraction.labels.len(), 2);
        assert_eq!(extraction.labels["Basenji_01.jpg"], "basenji");
        assert_eq!(extraction.labels["123456.jpg"], "");
        assert!(!extraction.labels.contains_key(".hidden_file.jpg"));
        assert!(extraction.duplicates.is_empty());
    }

    #[test]
    fn test_duplicate_key_keeps_first_value() {
        let (extraction, logs) = with_captured_warnings(|| {
            build_label_map(["Beagle_01.jpg", "Beagle_01.jpg", "Pug_02.jpg"])
        });

        assert!(logs.contains("WARN"));
        assert!(logs.contains("duplicate image filename"));
        assert!(logs.contains("key=Beagle_01.jpg"));
        assert!(logs.contains("existing=beagle"));

        assert_eq!(extraction.labels.len(), 2);
        assert_eq!(extraction.labels["Beagle_01.jpg"], "beagle");
        assert_eq!(extraction.duplicates, vec!["Beagle_01.jpg".to_string()]);
        assert_eq!(extraction.entries_seen, 3);
    }

    #[test]
    fn test_same_label_for_distinct_keys_is_not_a_duplicate() {
        let (extraction, logs) =
            with_captured_warnings(|| build_label_map(["Poodle_07.jpg", "poodle_07.jpg"]));

        assert!(logs.is_empty());

        assert_eq!(extraction.labels.len(), 2);
        assert_eq!(extraction.labels["Poodle_07.jpg"], "poodle");
        assert_eq!(extraction.labels["poodle_07.jpg"], "poodle");
        assert!(extraction.duplicates.is_empty());
    }

    #[test]
    fn test_extract_labels_from_directory() {
        let temp_dir = directory_with(&[
            "Boston_terrier_02259.jpg",
            "Basenji_01.jpg",
            ".hidden_file.jpg",
            "123456.jpg",
        ]);
        fs::create_dir(temp_dir.path().join("Dalmatian_subdir")).unwrap();

        let labels = extract_labels(temp_dir.path()).unwrap();

        assert_eq!(labels.len(), 4);
        assert_eq!(labels["Boston_terrier_02259.jpg"], "boston terrier");
        assert_eq!(labels["Basenji_01.jpg"], "basenji");
        assert_eq!(labels["123456.jpg"], "");
        assert_eq!(labels["Dalmatian_subdir"], "dalmatian");
        assert!(!labels.contains_key(".hidden_file.jpg"));
    }

    #[test]
    fn test_extract_labels_is_idempotent() {
        let temp_dir = directory_with(&["Poodle_07.jpg", "poodle_07.jpg", "Collie_03797.jpg"]);

        let first = extract_labels(temp_dir.path()).unwrap();
        let second = extract_labels(temp_dir.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first["Poodle_07.jpg"], "poodle");
        assert_eq!(first["poodle_07.jpg"], "poodle");
    }

    #[test]
    fn test_extraction_counters() {
        let temp_dir = directory_with(&["Pug_01.jpg", ".DS_Store", ".hidden_file.jpg"]);

        let extraction = extract_from_directory(temp_dir.path()).unwrap();

        assert_eq!(extraction.entries_seen, 3);
        assert_eq!(extraction.hidden_skipped, 2);
        assert_eq!(extraction.labels.len(), 1);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let labels = extract_labels(temp_dir.path()).unwrap();
        assert!(labels.is_empty());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("pet_images");

        match extract_labels(&missing) {
            Err(PetLabelsError::Io(err)) => assert_eq!(err.kind(), ErrorKind::NotFound),
            other => panic!("expected NotFound io error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_path_is_io_error() {
        let temp_dir = directory_with(&["Basenji_01.jpg"]);
        let result = extract_labels(temp_dir.path().join("Basenji_01.jpg"));
        assert!(matches!(result, Err(PetLabelsError::Io(_))));
    }
}
