// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for legend layout.
//!
//! Shaping happens downstream of the chart layer, so legend sizing goes through a measurer
//! callback. Hosts with a real text stack plug it in here.

/// A minimal text measurement interface used by the legend and view layout.
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the marks.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A heuristic measurer: glyphs are `glyph_width` em wide and 1em tall.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicTextMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub glyph_width: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self { glyph_width: 0.6 }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = self.glyph_width * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
