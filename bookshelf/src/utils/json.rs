use std::fs;
use std::io;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::core::library::LibraryResult;

// Writes `data` as one pretty-printed JSON document, replacing whatever was at `path`.
pub fn serialize_to_file<T: Serialize + ?Sized>(data: &T, path: &Path) -> LibraryResult<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

// Reads and parses the document at `path`, None if the file does not exist.
pub fn deserialize_from_file<T: DeserializeOwned>(path: &Path) -> LibraryResult<Option<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&json)?))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::collections::BTreeMap;
    use tempfile::tempdir;
    use crate::core::library::LibraryError;
    use crate::utils::json::{deserialize_from_file, serialize_to_file};

    #[test]
    fn test_should_write_and_read_document() {
        let dir = tempdir().expect("should create temp dir");
        let path = dir.path().join("doc.json");
        let data = BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
        serialize_to_file(&data, &path).expect("should write document");

        let loaded: Option<BTreeMap<String, i32>> = deserialize_from_file(&path).expect("should read document");
        assert_eq!(Some(data), loaded);
    }

    #[test]
    fn test_should_pretty_print_document() {
        let dir = tempdir().expect("should create temp dir");
        let path = dir.path().join("doc.json");
        serialize_to_file(&vec!["x", "y"], &path).expect("should write document");
        let text = fs::read_to_string(&path).expect("should read text");
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_should_return_none_for_missing_document() {
        let dir = tempdir().expect("should create temp dir");
        let loaded: Option<Vec<String>> = deserialize_from_file(&dir.path().join("missing.json"))
            .expect("missing file is not an error");
        assert_eq!(None, loaded);
    }

    #[test]
    fn test_should_fail_on_malformed_document() {
        let dir = tempdir().expect("should create temp dir");
        let path = dir.path().join("doc.json");
        fs::write(&path, "{ not json").expect("should write text");
        let res = deserialize_from_file::<Vec<String>>(&path);
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
    }

    #[test]
    fn test_should_fail_writing_into_missing_directory() {
        let dir = tempdir().expect("should create temp dir");
        let path = dir.path().join("no-such-dir").join("doc.json");
        let res = serialize_to_file(&vec!["x"], &path);
        assert!(matches!(res, Err(LibraryError::Database { .. })));
    }
}
