//! Class-name tables indexed by class id.
//!
//! A `LabelSet` is loaded once and shared read-only across calls. Two
//! resource formats are understood: plain text with one label per line, and
//! exporter metadata JSON with a `names` object keyed by stringified class id
//! (the latter requires the `metadata` feature).

use crate::util::{PostError, PostResult};
use std::path::Path;

#[cfg(feature = "metadata")]
use crate::trace::trace_warn;

/// Ordered, immutable list of class names; index = class id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSet {
    names: Vec<String>,
}

impl LabelSet {
    /// Creates a label set from an ordered list of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses one label per line, trimming whitespace and skipping blank lines.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Parses exporter metadata of the form `{"names": {"0": "cat", ...}}`.
    ///
    /// Keys `"0"` through `"{len-1}"` are read in order. A missing key is
    /// skipped with a warning rather than failing the whole load. Number and
    /// boolean values are taken in their JSON text form; null, array and
    /// object values are a `LabelParse` error.
    #[cfg(feature = "metadata")]
    pub fn from_metadata_json(text: &str) -> PostResult<Self> {
        let root: serde_json::Value =
            serde_json::from_str(text).map_err(|err| PostError::LabelParse {
                reason: err.to_string(),
            })?;
        let names = root
            .get("names")
            .and_then(serde_json::Value::as_object)
            .ok_or_else(|| PostError::LabelParse {
                reason: "metadata has no `names` object".to_string(),
            })?;

        let mut labels = Vec::with_capacity(names.len());
        for idx in 0..names.len() {
            match names.get(&idx.to_string()) {
                Some(serde_json::Value::String(name)) => labels.push(name.clone()),
                Some(value @ (serde_json::Value::Number(_) | serde_json::Value::Bool(_))) => {
                    labels.push(value.to_string())
                }
                Some(_) => {
                    return Err(PostError::LabelParse {
                        reason: format!("label for class {idx} is not a scalar"),
                    })
                }
                None => {
                    trace_warn!("missing_label_key", class_id = idx);
                }
            }
        }
        Ok(Self { names: labels })
    }

    /// Loads labels from disk, choosing the parser by file extension.
    ///
    /// `.json` files are parsed as metadata, everything else as plain lines.
    pub fn load<P: AsRef<Path>>(path: P) -> PostResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&text)
        } else {
            Ok(Self::from_lines(&text))
        }
    }

    #[cfg(feature = "metadata")]
    fn parse_json(text: &str) -> PostResult<Self> {
        Self::from_metadata_json(text)
    }

    #[cfg(not(feature = "metadata"))]
    fn parse_json(_text: &str) -> PostResult<Self> {
        Err(PostError::InvalidInput(
            "JSON label metadata requires the `metadata` feature",
        ))
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when no labels are present.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the label for `class_id`.
    pub fn get(&self, class_id: usize) -> PostResult<&str> {
        self.names
            .get(class_id)
            .map(String::as_str)
            .ok_or(PostError::IndexOutOfBounds {
                index: class_id,
                len: self.names.len(),
                context: "label",
            })
    }

    /// Fails with `LabelsTooShort` unless at least `num_classes` labels exist.
    pub fn ensure_covers(&self, num_classes: usize) -> PostResult<()> {
        if self.names.len() < num_classes {
            return Err(PostError::LabelsTooShort {
                needed: num_classes,
                got: self.names.len(),
            });
        }
        Ok(())
    }

    /// Iterates over the labels in class-id order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
