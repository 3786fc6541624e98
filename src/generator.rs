//! The serializer boundary: turns a finished document into JSON or YAML
//! text and optionally writes it to disk.
//!
//! The model carries the whole emission contract (field order, omission
//! of unset options, insertion-ordered maps), so these helpers stay thin
//! wrappers over the serde encoders.

use log::debug;
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};
use thiserror::Error;

use crate::models::Openapi;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("failed to encode spec as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode spec as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to write spec file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}

/// Compact JSON, the canonical comparison format: absent optionals are
/// omitted, keys appear in declaration/insertion order.
pub fn to_json(doc: &Openapi) -> Result<String, GeneratorError> {
    Ok(serde_json::to_string(doc)?)
}

/// Pretty-printed JSON with the same ordering/omission guarantees.
pub fn to_json_pretty(doc: &Openapi) -> Result<String, GeneratorError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

pub fn to_yaml(doc: &Openapi) -> Result<String, GeneratorError> {
    Ok(serde_yaml::to_string(doc)?)
}

/// Writes the document into `output_dir` as `openapi.<ext>` for each
/// requested format (`"json"` and/or `"yaml"`), creating the directory
/// when needed.
pub fn write_spec(
    doc: &Openapi,
    output_dir: impl AsRef<Path>,
    formats: &[&str],
) -> Result<(), GeneratorError> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    for format in formats {
        let (file_name, text) = match *format {
            "json" => ("openapi.json", to_json_pretty(doc)?),
            "yaml" => ("openapi.yaml", to_yaml(doc)?),
            other => return Err(GeneratorError::UnknownFormat(other.to_string())),
        };

        let path = output_dir.join(file_name);
        debug!("writing spec to {}", path.display());
        let mut file = File::create(&path)?;
        file.write_all(text.as_bytes())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::object;
    use crate::primitives::UUID;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_doc() -> Openapi {
        Openapi::default()
            .title("Example API")
            .version("0.0.1")
            .schema("profile", |_| object([("id", UUID.clone())]))
    }

    #[test]
    fn compact_json_matches_the_model_contract() {
        let json = to_json(&sample_doc()).unwrap();
        assert_eq!(
            json,
            r#"{"openapi":"3.0.0","info":{"title":"Example API","version":"0.0.1"},"servers":[],"paths":{},"components":{"schemas":{"profile":{"type":"object","properties":{"id":{"type":"string","format":"uuid"}}}}}}"#
        );
    }

    #[test]
    fn write_spec_emits_requested_formats() {
        let dir = tempdir().unwrap();
        write_spec(&sample_doc(), dir.path(), &["json", "yaml"]).unwrap();

        let json = fs::read_to_string(dir.path().join("openapi.json")).unwrap();
        assert!(json.contains("\"openapi\": \"3.0.0\""));

        let yaml = fs::read_to_string(dir.path().join("openapi.yaml")).unwrap();
        assert!(yaml.contains("openapi: 3.0.0"));
    }

    #[test]
    fn unknown_format_is_an_error() {
        let dir = tempdir().unwrap();
        let err = write_spec(&sample_doc(), dir.path(), &["toml"]).unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownFormat(f) if f == "toml"));
    }
}
