//! JSON problem parser.

use crate::problem::Problem;
use permpack::d3::{Box3D, BoxItem, Dimension, OrientationConstraint};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when parsing problems.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid problem format: {0}")]
    InvalidFormat(String),
}

/// Parser for JSON problem files.
#[derive(Debug, Default)]
pub struct ProblemParser;

impl ProblemParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a problem from a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Problem, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_json(&content)
    }

    /// Parses a problem from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<Problem, ParseError> {
        let raw: RawProblem = serde_json::from_str(json)?;
        self.convert_raw_problem(raw)
    }

    fn convert_raw_problem(&self, raw: RawProblem) -> Result<Problem, ParseError> {
        let container = Dimension::from(raw.container);
        container
            .validate()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let items: Result<Vec<BoxItem>, ParseError> = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(index, raw_item)| self.convert_raw_item(index, raw_item))
            .collect();

        Ok(Problem {
            name: raw.name,
            container,
            items: items?,
        })
    }

    fn convert_raw_item(&self, index: usize, raw: RawItem) -> Result<BoxItem, ParseError> {
        let [width, depth, height] = raw.size;
        let mut template = Box3D::new(width, depth, height).with_orientation(raw.orientation);
        if let Some(id) = raw.id {
            template = template.with_id(id);
        }

        let item = BoxItem::new(template, raw.count);
        item.validate()
            .map_err(|e| ParseError::InvalidFormat(format!("item {}: {}", index, e)))?;
        Ok(item)
    }
}

fn default_count() -> usize {
    1
}

/// Raw problem as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawProblem {
    #[serde(default)]
    name: String,
    container: [u32; 3],
    items: Vec<RawItem>,
}

/// Raw item as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    id: Option<String>,
    size: [u32; 3],
    #[serde(default = "default_count")]
    count: usize,
    #[serde(default)]
    orientation: OrientationConstraint,
}
