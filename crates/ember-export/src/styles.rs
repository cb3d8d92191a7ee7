use serde::{Deserialize, Serialize};

/// Fonts, sizes and colours for the assessment report. Sizes are points,
/// colours are `RRGGBB` hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStyles {
    pub body_font: String,
    pub heading_font: String,
    pub body_size: usize,
    /// Title, section and sub-section heading sizes.
    pub heading_sizes: [usize; 3],
    pub heading_color: String,
    /// Colour of the filled part of an impact bar.
    pub bar_color: String,
    /// Colour of centered notes such as the footer.
    pub muted_color: String,
}

impl ReportStyles {
    /// Size for a heading level, 1 being the document title. Levels past
    /// the last configured size reuse it.
    pub fn heading_size(&self, level: usize) -> usize {
        let index = level.clamp(1, self.heading_sizes.len()) - 1;
        self.heading_sizes[index]
    }
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Georgia".to_string(),
            body_size: 11,
            heading_sizes: [20, 16, 13],
            heading_color: "9A3412".to_string(),
            bar_color: "EA580C".to_string(),
            muted_color: "6B7280".to_string(),
        }
    }
}
