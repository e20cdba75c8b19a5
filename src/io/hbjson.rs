//! HBJSON file I/O.
//!
//! HBJSON is the JSON interchange format the energy model is exported
//! to. Files always carry the `.hbjson` extension and are written with
//! 4-space indentation.

use crate::energy::model::Model;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Writes a model to an HBJSON file and returns the path actually
/// written.
///
/// The `.hbjson` extension is appended when the path does not already
/// end with it (case-insensitive). With `overwrite` false, an existing
/// file at the target is an error naming the path; with `overwrite`
/// true it is replaced.
pub fn write_hbjson(path: &Path, model: &Model, overwrite: bool) -> Result<PathBuf> {
    let path = force_hbjson_extension(path);
    let file = if overwrite {
        File::create(&path)
    } else {
        OpenOptions::new().write(true).create_new(true).open(&path)
    };
    let file =
        file.with_context(|| format!("Could not create a new file at: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    model
        .serialize(&mut ser)
        .with_context(|| format!("Failed to serialize model to: {}", path.display()))?;
    writer.flush()?;

    Ok(path)
}

/// Reads a model back from an HBJSON file.
pub fn read_hbjson(path: &Path) -> Result<Model> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let model: Model = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize model from: {}", path.display()))?;

    Ok(model)
}

/// Serializes a model to an HBJSON string (4-space indentation).
pub fn to_hbjson_string(model: &Model) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    model
        .serialize(&mut ser)
        .context("Failed to serialize model to string")?;
    Ok(String::from_utf8(buf)?)
}

/// Appends the `.hbjson` extension unless the path already carries it.
fn force_hbjson_extension(path: &Path) -> PathBuf {
    let has_ext = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("hbjson"));
    if has_ext {
        path.to_path_buf()
    } else {
        let mut os = path.as_os_str().to_os_string();
        os.push(".hbjson");
        PathBuf::from(os)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{ConvertOptions, convert};
    use crate::topo::{Cell, CellComplex, Dictionary};
    use tempfile::tempdir;

    fn sample_model() -> Result<Model> {
        let mut dict = Dictionary::new();
        dict.insert("Name", "Kitchen");
        let a = Cell::from_box(2., 2., 3., None, Some(dict))?;
        let b = Cell::from_box(2., 2., 3., Some((2., 0., 0.)), None)?;
        let complex = CellComplex::new("house", vec![a, b])?;
        convert(&complex, None, &ConvertOptions::default())
    }

    #[test]
    fn test_write_and_read_hbjson() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("model.hbjson");

        let original = sample_model()?;
        write_hbjson(&path, &original, false)?;

        let loaded = read_hbjson(&path)?;
        assert_eq!(loaded.name, original.name);
        assert_eq!(loaded.rooms().len(), original.rooms().len());
        assert_eq!(loaded.uid, original.uid);
        loaded.validate()?;
        Ok(())
    }

    #[test]
    fn test_extension_is_appended() -> Result<()> {
        let dir = tempdir()?;
        let model = sample_model()?;

        let written = write_hbjson(&dir.path().join("model"), &model, false)?;
        assert_eq!(written.file_name().unwrap(), "model.hbjson");

        // A different extension is kept and `.hbjson` appended after it.
        let written = write_hbjson(&dir.path().join("model.json"), &model, false)?;
        assert_eq!(written.file_name().unwrap(), "model.json.hbjson");
        Ok(())
    }

    #[test]
    fn test_extension_match_is_case_insensitive() -> Result<()> {
        let dir = tempdir()?;
        let model = sample_model()?;
        let written = write_hbjson(&dir.path().join("model.HBJSON"), &model, false)?;
        assert_eq!(written.file_name().unwrap(), "model.HBJSON");
        Ok(())
    }

    #[test]
    fn test_existing_file_without_overwrite_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("model.hbjson");
        let model = sample_model()?;

        write_hbjson(&path, &model, false)?;
        let err = write_hbjson(&path, &model, false).unwrap_err();
        assert!(err.to_string().contains("model.hbjson"));

        // With overwrite the second write succeeds.
        write_hbjson(&path, &model, true)?;
        Ok(())
    }

    #[test]
    fn test_four_space_indentation() -> Result<()> {
        let model = sample_model()?;
        let json = to_hbjson_string(&model)?;
        assert!(json.contains("\n    \"name\""));
        assert!(!json.contains("\n  \"name\""));
        Ok(())
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = read_hbjson(Path::new("/nonexistent/path/model.hbjson"));
        assert!(result.is_err());
    }
}
