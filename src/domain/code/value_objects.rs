// src/domain/code/value_objects.rs
//
// Outcomes of code extraction. Pure values, created per image and dropped
// once the group code is resolved.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::candidate::TextCandidate;
use crate::domain::marker::ColorMarker;

/// Best (candidate, pattern) pair found among a candidate list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedCode {
    /// Trimmed candidate text
    pub code: String,

    /// Confidence of the winning candidate
    pub confidence: f64,

    /// Name of the winning pattern
    pub method: String,

    /// Combined score that won the selection
    pub score: f64,
}

/// Everything learned about a single image while resolving its group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    pub code: String,
    pub confidence: f64,
    pub color_marker: ColorMarker,
    pub image_path: PathBuf,
    pub candidates: Vec<TextCandidate>,
    pub method: String,
}

impl ProductInfo {
    pub fn new(
        extracted: ExtractedCode,
        color_marker: ColorMarker,
        image_path: PathBuf,
        candidates: Vec<TextCandidate>,
    ) -> Self {
        Self {
            code: extracted.code,
            confidence: extracted.confidence,
            color_marker,
            image_path,
            candidates,
            method: extracted.method,
        }
    }
}

/// Where a group's final code came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSource {
    /// Read from one of the member images
    Extracted,

    /// No member yielded a code, the group name is used instead
    Fallback,

    /// Extracted, but already claimed by an earlier group and suffixed
    Disambiguated,
}

impl std::fmt::Display for CodeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeSource::Extracted => write!(f, "extracted"),
            CodeSource::Fallback => write!(f, "fallback"),
            CodeSource::Disambiguated => write!(f, "disambiguated"),
        }
    }
}

/// The single code chosen for a product group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGroupCode {
    pub group_name: String,
    pub code: String,

    /// 0.0 when the code is the fallback group name
    pub confidence: f64,

    pub source: CodeSource,

    /// Image the code was read from
    pub image_path: Option<PathBuf>,
}

impl ResolvedGroupCode {
    pub fn extracted(group_name: &str, info: &ProductInfo) -> Self {
        Self {
            group_name: group_name.to_string(),
            code: info.code.clone(),
            confidence: info.confidence,
            source: CodeSource::Extracted,
            image_path: Some(info.image_path.clone()),
        }
    }

    pub fn fallback(group_name: &str) -> Self {
        Self {
            group_name: group_name.to_string(),
            code: group_name.to_string(),
            confidence: 0.0,
            source: CodeSource::Fallback,
            image_path: None,
        }
    }

    /// Suffixes the code with the group name so it no longer collides
    pub fn disambiguate(self) -> Self {
        Self {
            code: format!("{}-{}", self.code, self.group_name),
            source: CodeSource::Disambiguated,
            ..self
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == CodeSource::Fallback
    }
}
