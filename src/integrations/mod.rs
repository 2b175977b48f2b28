// src/integrations/mod.rs
//
// External Integrations Module
//
// Ports the services depend on, plus the concrete collaborators:
// - tesseract: OCR through the tesseract command line tool
// - finder: macOS color labels from Finder metadata
// - manifest: canned OCR candidates and labels from a JSON file
// - image_loader: image header decoding

pub mod finder;
pub mod image_loader;
pub mod manifest;
pub mod ports;
pub mod tesseract;

pub use finder::client::FinderLabelReader;
pub use image_loader::ImageCrateLoader;
pub use manifest::client::{ManifestBackend, ManifestEntry};
pub use ports::{ColorLabelReader, ImageLoader, TextRecognizer};
pub use tesseract::client::TesseractRecognizer;

#[cfg(test)]
pub use ports::{MockColorLabelReader, MockImageLoader, MockTextRecognizer};
