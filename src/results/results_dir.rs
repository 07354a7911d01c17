use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use super::MetricsDocument;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to read {document} metrics from {}: {source}", path.display())]
    Read {
        document: MetricsDocument,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {document} metrics at {}: {source}", path.display())]
    Parse {
        document: MetricsDocument,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ResultsError {
    pub fn document(&self) -> MetricsDocument {
        match self {
            ResultsError::Read { document, .. } | ResultsError::Parse { document, .. } => *document,
        }
    }
}

/// The value served in place of a document that has not been produced yet.
pub fn empty_document() -> Value {
    Value::Object(Map::new())
}

/// Parses a whole document with no nesting limit.
///
/// Deep nesting grows the stack on the heap instead of overflowing it. Numbers
/// keep their original digits.
fn parse_document(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    let mut json = serde_json::Deserializer::from_slice(bytes);
    json.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}

/// Read-only handle on the directory the metric files live in.
#[derive(Debug, Clone)]
pub struct ResultsDir {
    root: PathBuf,
}

impl ResultsDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ResultsDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, document: MetricsDocument) -> PathBuf {
        self.root.join(document.file_name())
    }

    /// Reads and parses `document`, returning `None` when the file does not exist.
    ///
    /// Any other I/O failure and any parse failure is an error; malformed JSON is
    /// never mistaken for a missing file.
    pub async fn read(&self, document: MetricsDocument) -> Result<Option<Value>, ResultsError> {
        let path = self.path_of(document);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    document = document.label(),
                    path = %path.display(),
                    "metrics file not present"
                );
                return Ok(None);
            }
            Err(source) => {
                return Err(ResultsError::Read {
                    document,
                    path,
                    source,
                })
            }
        };

        parse_document(&bytes)
            .map(Some)
            .map_err(|source| ResultsError::Parse {
                document,
                path,
                source,
            })
    }

    /// Like [`ResultsDir::read`], substituting `{}` for a missing file.
    pub async fn load(&self, document: MetricsDocument) -> Result<Value, ResultsError> {
        Ok(self.read(document).await?.unwrap_or_else(empty_document))
    }
}
