//! Request body construction
//!
//! A filtered parameter list becomes either a JSON object or, when any
//! parameter carries local file content, a multipart form. The multipart path
//! reads every file up front so an unreadable path aborts the operation
//! before anything reaches the wire.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ClientError, Result};
use crate::params::{ParamValue, Params};

/// Prefixes that mark a WDL-like value as a pointer to remote content rather
/// than a local file to upload. The decision is a pure prefix match on the
/// string value; the filesystem is never probed.
const REMOTE_PREFIXES: [&str; 3] = ["http://", "https://", "gs://"];

/// Whether a WDL-like value references remote content.
pub(crate) fn is_remote_uri(value: &str) -> bool {
    REMOTE_PREFIXES.iter().any(|prefix| value.starts_with(prefix))
}

/// Classify a WDL location: remote URIs (and the unset sentinel) stay inline
/// text parameters, anything else is a local file to upload under the given
/// fixed filename.
pub(crate) fn wdl_value(value: String, filename: &'static str) -> ParamValue {
    if value.is_empty() || is_remote_uri(&value) {
        ParamValue::Text(value)
    } else {
        ParamValue::File {
            path: value.into(),
            filename,
        }
    }
}

/// Classify a dependencies archive: always a local file to upload when set.
pub(crate) fn archive_value(value: String, filename: &'static str) -> ParamValue {
    if value.is_empty() {
        ParamValue::Text(value)
    } else {
        ParamValue::File {
            path: value.into(),
            filename,
        }
    }
}

/// A single part of a multipart form
#[derive(Debug, PartialEq)]
pub(crate) struct FormPart {
    pub name: String,
    pub data: PartData,
}

#[derive(Debug, PartialEq)]
pub(crate) enum PartData {
    Text(String),
    File {
        bytes: Vec<u8>,
        filename: &'static str,
    },
}

/// A serialized request body
#[derive(Debug, PartialEq)]
pub(crate) enum RequestBody {
    Json(Map<String, Value>),
    Multipart(Vec<FormPart>),
}

/// Build a request body from an already-filtered parameter list. JSON unless
/// any parameter is a file upload; file parts are named `{param}_file`.
pub(crate) fn build(params: Params) -> Result<RequestBody> {
    let uploads = params
        .iter()
        .any(|(_, value)| matches!(value, ParamValue::File { .. }));
    if uploads {
        build_multipart(params)
    } else {
        Ok(RequestBody::Json(build_json(params)))
    }
}

fn build_json(params: Params) -> Map<String, Value> {
    let mut body = Map::new();
    for (name, value) in params.into_entries() {
        let value = match value {
            ParamValue::Text(text) => Value::String(text),
            ParamValue::Number(n) => Value::from(n),
            ParamValue::Bool(b) => Value::Bool(b),
            ParamValue::Json(value) => value,
            // Unreachable on this path; render the path so nothing is lost
            ParamValue::File { path, .. } => Value::String(path.display().to_string()),
        };
        body.insert(name.to_string(), value);
    }
    body
}

fn build_multipart(params: Params) -> Result<RequestBody> {
    let mut parts = Vec::new();
    for (name, value) in params.into_entries() {
        let part = match value {
            ParamValue::File { path, filename } => FormPart {
                name: format!("{name}_file"),
                data: PartData::File {
                    bytes: read_file(name, &path)?,
                    filename,
                },
            },
            other => FormPart {
                name: name.to_string(),
                data: PartData::Text(other.render()),
            },
        };
        parts.push(part);
    }
    Ok(RequestBody::Multipart(parts))
}

fn read_file(param: &str, path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| {
        tracing::debug!(param, path = %path.display(), error = %source, "failed to read upload");
        ClientError::FileRead {
            param: param.to_string(),
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_remote_uri_detection() {
        assert!(is_remote_uri("http://example.com/test.wdl"));
        assert!(is_remote_uri("https://example.com/test.wdl"));
        assert!(is_remote_uri("gs://bucket/test.wdl"));
        assert!(!is_remote_uri("/local/path/test.wdl"));
        assert!(!is_remote_uri("relative/test.wdl"));
        assert!(!is_remote_uri("ftp://example.com/test.wdl"));
    }

    #[test]
    fn test_wdl_value_classification() {
        assert_eq!(
            wdl_value("http://example.com/x.wdl".to_string(), "test.wdl"),
            ParamValue::Text("http://example.com/x.wdl".to_string())
        );
        assert_eq!(
            wdl_value(String::new(), "test.wdl"),
            ParamValue::Text(String::new())
        );
        assert!(matches!(
            wdl_value("/local/path/x.wdl".to_string(), "test.wdl"),
            ParamValue::File { filename: "test.wdl", .. }
        ));
    }

    #[test]
    fn test_json_body_when_no_uploads() {
        let params = Params::new()
            .text("name", "Catra template")
            .value("test_wdl", wdl_value("gs://bucket/x.wdl".to_string(), "test.wdl"))
            .number("position", 0)
            .filtered();

        match build(params).unwrap() {
            RequestBody::Json(body) => {
                assert_eq!(body["name"], "Catra template");
                assert_eq!(body["test_wdl"], "gs://bucket/x.wdl");
                assert_eq!(body["position"], 0);
            }
            RequestBody::Multipart(_) => panic!("expected a JSON body"),
        }
    }

    #[test]
    fn test_multipart_body_for_local_wdl() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"workflow x {}").unwrap();
        let path = file.path().display().to_string();

        let params = Params::new()
            .text("name", "Catra template")
            .value("test_wdl", wdl_value(path, "test.wdl"))
            .filtered();

        match build(params).unwrap() {
            RequestBody::Multipart(parts) => {
                assert_eq!(parts[0].name, "name");
                assert_eq!(parts[0].data, PartData::Text("Catra template".to_string()));
                assert_eq!(parts[1].name, "test_wdl_file");
                assert_eq!(
                    parts[1].data,
                    PartData::File {
                        bytes: b"workflow x {}".to_vec(),
                        filename: "test.wdl",
                    }
                );
            }
            RequestBody::Json(_) => panic!("expected a multipart body"),
        }
    }

    #[test]
    fn test_dependencies_force_multipart() {
        let mut archive = tempfile::NamedTempFile::new().unwrap();
        archive.write_all(b"PK").unwrap();
        let path = archive.path().display().to_string();

        let params = Params::new()
            .value(
                "test_wdl",
                wdl_value("https://example.com/x.wdl".to_string(), "test.wdl"),
            )
            .value(
                "test_wdl_dependencies",
                archive_value(path, "test_dependencies.zip"),
            )
            .filtered();

        match build(params).unwrap() {
            RequestBody::Multipart(parts) => {
                // The remote WDL stays an inline field next to the file part
                assert_eq!(parts[0].name, "test_wdl");
                assert_eq!(
                    parts[0].data,
                    PartData::Text("https://example.com/x.wdl".to_string())
                );
                assert_eq!(parts[1].name, "test_wdl_dependencies_file");
                assert!(matches!(
                    parts[1].data,
                    PartData::File { filename: "test_dependencies.zip", .. }
                ));
            }
            RequestBody::Json(_) => panic!("expected a multipart body"),
        }
    }

    #[test]
    fn test_missing_upload_names_param_and_path() {
        let params = Params::new()
            .value(
                "eval_wdl",
                wdl_value("/nonexistent/eval.wdl".to_string(), "eval.wdl"),
            )
            .filtered();

        let err = build(params).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("eval_wdl"));
        assert!(message.contains("/nonexistent/eval.wdl"));
    }

    #[test]
    fn test_empty_params_build_empty_json_object() {
        match build(Params::new()).unwrap() {
            RequestBody::Json(body) => assert!(body.is_empty()),
            RequestBody::Multipart(_) => panic!("expected a JSON body"),
        }
    }
}
