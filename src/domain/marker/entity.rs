use serde::{Deserialize, Serialize};

/// Color tag attached to an image. A present marker opens a new product group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMarker {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
    #[default]
    None,
}

/// Keyword scan order. Colors earlier in this list win when a text
/// contains keywords of several colors.
const KEYWORD_TABLE: &[(ColorMarker, &[&str])] = &[
    (ColorMarker::Red, &["红", "red", "赤", "朱", "红色", "红标"]),
    (ColorMarker::Orange, &["橙", "orange", "橘", "橙色", "橙标", "橘色"]),
    (ColorMarker::Yellow, &["黄", "yellow", "金", "黄色", "黄标", "金色"]),
    (ColorMarker::Green, &["绿", "green", "青", "翠", "绿色", "绿标"]),
    (ColorMarker::Blue, &["蓝", "blue", "蔚", "靛", "蓝色", "蓝标"]),
    (ColorMarker::Purple, &["紫", "purple", "紫色", "紫标"]),
    (ColorMarker::Gray, &["灰", "gray", "灰色", "灰标"]),
];

impl ColorMarker {
    /// All present colors, in keyword scan order
    pub const COLORS: [ColorMarker; 7] = [
        ColorMarker::Red,
        ColorMarker::Orange,
        ColorMarker::Yellow,
        ColorMarker::Green,
        ColorMarker::Blue,
        ColorMarker::Purple,
        ColorMarker::Gray,
    ];

    /// Maps the Finder label number (0..=7) to a marker.
    /// Out-of-range values are treated as no label.
    pub fn from_label_value(value: u8) -> Self {
        match value {
            1 => ColorMarker::Gray,
            2 => ColorMarker::Green,
            3 => ColorMarker::Purple,
            4 => ColorMarker::Blue,
            5 => ColorMarker::Yellow,
            6 => ColorMarker::Red,
            7 => ColorMarker::Orange,
            _ => ColorMarker::None,
        }
    }

    /// Inverse of [`ColorMarker::from_label_value`]
    pub fn label_value(&self) -> u8 {
        match self {
            ColorMarker::None => 0,
            ColorMarker::Gray => 1,
            ColorMarker::Green => 2,
            ColorMarker::Purple => 3,
            ColorMarker::Blue => 4,
            ColorMarker::Yellow => 5,
            ColorMarker::Red => 6,
            ColorMarker::Orange => 7,
        }
    }

    pub fn is_present(&self) -> bool {
        *self != ColorMarker::None
    }

    /// Scans recognized texts for color keywords.
    ///
    /// Texts are visited in order. For each text an exact (case-insensitive,
    /// trimmed) keyword match is tried across all colors before falling back
    /// to substring containment. The first hit wins.
    pub fn detect<S: AsRef<str>>(texts: &[S]) -> Self {
        detect_in(texts, KEYWORD_TABLE)
    }
}

type KeywordTable<'a> = &'a [(ColorMarker, &'a [&'a str])];

fn detect_in<S: AsRef<str>>(texts: &[S], table: KeywordTable<'_>) -> ColorMarker {
    for text in texts {
        let normalized = text.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }

        let exact = table
            .iter()
            .find(|(_, words)| words.iter().any(|word| normalized == word.to_lowercase()));
        if let Some((color, _)) = exact {
            return *color;
        }

        let contained = table.iter().find(|(_, words)| {
            words.iter().any(|word| normalized.contains(&word.to_lowercase()))
        });
        if let Some((color, _)) = contained {
            return *color;
        }
    }

    ColorMarker::None
}

impl std::fmt::Display for ColorMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMarker::Red => write!(f, "red"),
            ColorMarker::Orange => write!(f, "orange"),
            ColorMarker::Yellow => write!(f, "yellow"),
            ColorMarker::Green => write!(f, "green"),
            ColorMarker::Blue => write!(f, "blue"),
            ColorMarker::Purple => write!(f, "purple"),
            ColorMarker::Gray => write!(f, "gray"),
            ColorMarker::None => write!(f, "none"),
        }
    }
}
