// src/integrations/tesseract/client.rs
//
// Tesseract OCR integration
//
// Runs the `tesseract` command line tool once per recognition pass:
//   tesseract <image> stdout -l <langs> --psm <mode> tsv
//
// Fast pass: sparse text mode (psm 11). Accurate pass: full page
// segmentation (psm 3). The TSV word rows are folded back into lines; each
// line becomes one candidate whose confidence is the mean word confidence.
//
// Tesseract reports a single reading per region, so `max_candidates` is
// only an upper bound here.

use std::collections::BTreeMap;
use std::process::Command;

use crate::domain::{BoundingBox, ImageHandle, RecognitionLevel, RecognitionRequest, TextCandidate};
use crate::error::{AppError, AppResult};
use crate::integrations::ports::TextRecognizer;

const FAST_PAGE_SEGMENTATION: u8 = 11;
const ACCURATE_PAGE_SEGMENTATION: u8 = 3;

/// TSV level of a single word row
const WORD_LEVEL: u32 = 5;

pub struct TesseractRecognizer {
    binary: String,
}

impl TesseractRecognizer {
    pub fn new() -> Self {
        Self::with_binary("tesseract")
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn page_segmentation(level: RecognitionLevel) -> u8 {
        match level {
            RecognitionLevel::Fast => FAST_PAGE_SEGMENTATION,
            RecognitionLevel::Accurate => ACCURATE_PAGE_SEGMENTATION,
        }
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(
        &self,
        image: &ImageHandle,
        request: &RecognitionRequest,
    ) -> AppResult<Vec<TextCandidate>> {
        let output = Command::new(&self.binary)
            .arg(&image.path)
            .arg("stdout")
            .arg("-l")
            .arg(tesseract_languages(&request.languages))
            .arg("--psm")
            .arg(Self::page_segmentation(request.level).to_string())
            .arg("tsv")
            .output()
            .map_err(|e| AppError::Recognition(format!("Failed to run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Recognition(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let tsv = String::from_utf8_lossy(&output.stdout);
        Ok(parse_tsv(&tsv, image, request))
    }
}

/// Maps BCP-47 style tags to tesseract traineddata names, joined with `+`
pub fn tesseract_languages(languages: &[String]) -> String {
    let mut mapped: Vec<&str> = Vec::new();
    for language in languages {
        let name = match language.as_str() {
            "en-US" | "en-GB" | "en" => "eng",
            "zh-Hans" | "zh-CN" => "chi_sim",
            "zh-Hant" | "zh-TW" => "chi_tra",
            "ja" | "ja-JP" => "jpn",
            other => other,
        };
        if !mapped.contains(&name) {
            mapped.push(name);
        }
    }

    if mapped.is_empty() {
        "eng".to_string()
    } else {
        mapped.join("+")
    }
}

#[derive(Debug, Default)]
struct LineAccumulator {
    words: Vec<String>,
    confidence_sum: f64,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl LineAccumulator {
    fn add(&mut self, text: &str, confidence: f64, left: u32, top: u32, width: u32, height: u32) {
        if self.words.is_empty() {
            self.left = left;
            self.top = top;
            self.right = left + width;
            self.bottom = top + height;
        } else {
            self.left = self.left.min(left);
            self.top = self.top.min(top);
            self.right = self.right.max(left + width);
            self.bottom = self.bottom.max(top + height);
        }
        self.words.push(text.to_string());
        self.confidence_sum += confidence;
    }

    fn text(&self) -> String {
        let mut line = String::new();
        for word in &self.words {
            if needs_space(&line, word) {
                line.push(' ');
            }
            line.push_str(word);
        }
        line
    }
}

/// CJK text is segmented per character by tesseract; only latin words get spaces back
fn needs_space(line: &str, next: &str) -> bool {
    match (line.chars().last(), next.chars().next()) {
        (Some(prev), Some(first)) => prev.is_ascii() && first.is_ascii(),
        _ => false,
    }
}

/// Folds tesseract TSV output into one candidate per text line
pub fn parse_tsv(tsv: &str, image: &ImageHandle, request: &RecognitionRequest) -> Vec<TextCandidate> {
    let mut lines: BTreeMap<(u32, u32, u32, u32), LineAccumulator> = BTreeMap::new();

    for row in tsv.lines().skip(1) {
        let columns: Vec<&str> = row.split('\t').collect();
        if columns.len() < 12 {
            continue;
        }

        let numbers: Vec<u32> = columns[..10]
            .iter()
            .filter_map(|value| value.trim().parse().ok())
            .collect();
        if numbers.len() != 10 || numbers[0] != WORD_LEVEL {
            continue;
        }

        let confidence: f64 = match columns[10].trim().parse() {
            Ok(value) if value >= 0.0 => value,
            _ => continue,
        };
        let text = columns[11].trim();
        if text.is_empty() {
            continue;
        }

        let key = (numbers[1], numbers[2], numbers[3], numbers[4]);
        lines
            .entry(key)
            .or_default()
            .add(text, confidence, numbers[6], numbers[7], numbers[8], numbers[9]);
    }

    let width = image.width.max(1) as f64;
    let height = image.height.max(1) as f64;

    lines
        .values()
        .filter_map(|line| {
            let box_height = (line.bottom - line.top) as f64 / height;
            if box_height < request.minimum_text_height {
                return None;
            }

            let confidence = line.confidence_sum / line.words.len() as f64 / 100.0;
            let bounding_box = BoundingBox::new(
                line.left as f64 / width,
                line.top as f64 / height,
                (line.right - line.left) as f64 / width,
                box_height,
            );

            Some(TextCandidate::new(line.text(), confidence, bounding_box, request.level))
        })
        .collect()
}
