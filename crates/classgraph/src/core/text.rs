//! Label measurement
//!
//! Node boxes are sized from their label. There is no font rasterizer here, so
//! the width is estimated from the label's display width in terminal columns
//! (wide CJK characters count twice) times an average glyph advance.

use unicode_width::UnicodeWidthStr;

/// Approximate font metrics used to size node boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Average advance of one display column, in pixels
    pub char_width: i32,
    /// Horizontal padding added around the label (both sides together)
    pub padding: i32,
    /// Height of every node box
    pub node_height: i32,
}

impl Default for TextMetrics {
    /// Roughly a 12pt Helvetica push button
    fn default() -> Self {
        Self {
            char_width: 7,
            padding: 14,
            node_height: 21,
        }
    }
}

impl TextMetrics {
    pub fn new(char_width: i32, padding: i32, node_height: i32) -> Self {
        Self {
            char_width,
            padding,
            node_height,
        }
    }

    /// Preferred box size for a label, before any layout clamping
    ///
    /// # Example
    /// ```
    /// use classgraph::core::TextMetrics;
    ///
    /// let metrics = TextMetrics::new(7, 14, 21);
    /// assert_eq!(metrics.measure("Shape"), (49, 21));
    /// ```
    pub fn measure(&self, label: &str) -> (i32, i32) {
        let columns = UnicodeWidthStr::width(label) as i32;
        (columns * self.char_width + self.padding, self.node_height)
    }
}
