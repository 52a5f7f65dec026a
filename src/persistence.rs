// File: src/persistence.rs
use crate::core::index::WordIndex;
use crate::errors::{IndexError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Bumped whenever the on-disk layout changes.
pub const FORMAT_VERSION: u32 = 1;

/// The serializable state of an index.
/// Fingerprints are not stored; they are recomputed from the words on load.
#[derive(serde::Serialize, serde::Deserialize)]
struct SerializableState {
    format_version: u32,
    words: Vec<String>,
}

pub fn save_to_disk(index: &WordIndex, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut words: Vec<String> = index.words().map(str::to_string).collect();
    words.sort_unstable();
    let state = SerializableState { format_version: FORMAT_VERSION, words };

    // Write next to the target, then rename over it.
    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    bincode::serialize_into(&mut writer, &state)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path)?;
    info!(path = %path.display(), words = state.words.len(), "index saved");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<WordIndex> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;

    if state.format_version != FORMAT_VERSION {
        return Err(IndexError::IncompatibleFormat {
            found: state.format_version,
            expected: FORMAT_VERSION,
        });
    }

    let mut index = WordIndex::new();
    for word in &state.words {
        index.insert(word)?;
    }

    info!(path = %path.display(), words = index.len(), "index loaded");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_keeps_first_writers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("index.bin");

        let mut index = WordIndex::new();
        for w in ["stop", "pots", "men", "women", "Zebra"] {
            index.insert(w).unwrap();
        }
        save_to_disk(&index, &path).unwrap();

        let loaded = load_from_disk(&path).unwrap();
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded.get("tops").unwrap(), Some("stop"));
        assert!(loaded.contains("arbeZ").unwrap());
        let mut found = loaded.query("women").unwrap();
        found.sort_unstable();
        assert_eq!(found, vec!["men", "women"]);
    }

    #[test]
    fn test_overwrite_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.bin");

        let mut index = WordIndex::new();
        index.insert("one").unwrap();
        save_to_disk(&index, &path).unwrap();
        index.insert("two").unwrap();
        save_to_disk(&index, &path).unwrap();

        assert_eq!(load_from_disk(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_rejects_other_format_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.bin");
        let state = SerializableState { format_version: FORMAT_VERSION + 1, words: vec![] };
        fs::write(&path, bincode::serialize(&state).unwrap()).unwrap();

        assert!(matches!(
            load_from_disk(&path),
            Err(IndexError::IncompatibleFormat { found: 2, expected: 1 })
        ));
    }

    #[test]
    fn test_rejects_tampered_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.bin");
        let state = SerializableState { format_version: FORMAT_VERSION, words: vec!["a-b".into()] };
        fs::write(&path, bincode::serialize(&state).unwrap()).unwrap();

        assert!(matches!(load_from_disk(&path), Err(IndexError::InvalidSymbol('-'))));
    }

    #[test]
    fn test_truncated_file_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.bin");
        fs::write(&path, [1u8, 0]).unwrap();
        assert!(matches!(load_from_disk(&path), Err(IndexError::Encode(_))));
    }
}
