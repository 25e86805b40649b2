// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordinal color assignment for categorical domains.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

/// Named categorical palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ColorScheme {
    /// Saturated blues, greens and oranges.
    #[default]
    Vivid,
    /// Muted earth tones.
    Natural,
    /// Pinks, purples and blues.
    Cool,
    /// Named CSS colors.
    Css,
}

// The ordinal schemes below carry the same names and colors as the host charting library's
// built-in `vivid`, `natural` and `cool` sets, so existing dashboards keep their colors.
// Colors repeat when a domain outgrows them.
const VIVID: [Color; 10] = [
    Color::from_rgba8(0x64, 0x7c, 0x8a, 0xff),
    Color::from_rgba8(0x3f, 0x51, 0xb5, 0xff),
    Color::from_rgba8(0x21, 0x96, 0xf3, 0xff),
    Color::from_rgba8(0x00, 0xb8, 0x62, 0xff),
    Color::from_rgba8(0xaf, 0xdf, 0x0a, 0xff),
    Color::from_rgba8(0xa7, 0xb6, 0x1a, 0xff),
    Color::from_rgba8(0xf3, 0xe5, 0x62, 0xff),
    Color::from_rgba8(0xff, 0x98, 0x00, 0xff),
    Color::from_rgba8(0xff, 0x57, 0x22, 0xff),
    Color::from_rgba8(0xff, 0x45, 0x14, 0xff),
];

const NATURAL: [Color; 10] = [
    Color::from_rgba8(0xbf, 0x9d, 0x76, 0xff),
    Color::from_rgba8(0xe9, 0x94, 0x50, 0xff),
    Color::from_rgba8(0xd8, 0x9f, 0x59, 0xff),
    Color::from_rgba8(0xf2, 0xdf, 0xa7, 0xff),
    Color::from_rgba8(0xa5, 0xd7, 0xc6, 0xff),
    Color::from_rgba8(0x77, 0x94, 0xb1, 0xff),
    Color::from_rgba8(0xaf, 0xaf, 0xaf, 0xff),
    Color::from_rgba8(0x70, 0x71, 0x60, 0xff),
    Color::from_rgba8(0xba, 0x93, 0x83, 0xff),
    Color::from_rgba8(0xd9, 0xd5, 0xc3, 0xff),
];

const COOL: [Color; 10] = [
    Color::from_rgba8(0xa8, 0x38, 0x5d, 0xff),
    Color::from_rgba8(0x7a, 0xa3, 0xe5, 0xff),
    Color::from_rgba8(0xa2, 0x7e, 0xa8, 0xff),
    Color::from_rgba8(0xaa, 0xe3, 0xf5, 0xff),
    Color::from_rgba8(0xad, 0xcd, 0xed, 0xff),
    Color::from_rgba8(0xa9, 0x59, 0x63, 0xff),
    Color::from_rgba8(0x87, 0x96, 0xc0, 0xff),
    Color::from_rgba8(0x7e, 0xd3, 0xed, 0xff),
    Color::from_rgba8(0x50, 0xab, 0xcc, 0xff),
    Color::from_rgba8(0xad, 0x68, 0x86, 0xff),
];

// Named CSS colors.
const CSS: [Color; 8] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
    css::SLATE_BLUE,
    css::DARK_CYAN,
    css::HOT_PINK,
];

impl ColorScheme {
    /// The palette colors, in assignment order.
    pub fn palette(self) -> &'static [Color] {
        match self {
            Self::Vivid => &VIVID,
            Self::Natural => &NATURAL,
            Self::Cool => &COOL,
            Self::Css => &CSS,
        }
    }
}

/// Maps domain labels to colors by position, cycling through the palette.
///
/// Custom colors take precedence over palette colors. Labels outside the domain get the
/// `unknown` color.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalColorScale {
    domain: Vec<String>,
    scheme: ColorScheme,
    custom: Vec<(String, Color)>,
    unknown: Color,
}

impl Default for OrdinalColorScale {
    fn default() -> Self {
        Self::new(ColorScheme::default(), Vec::new())
    }
}

impl OrdinalColorScale {
    /// Creates a scale over `domain`.
    pub fn new(scheme: ColorScheme, domain: Vec<String>) -> Self {
        Self {
            domain,
            scheme,
            custom: Vec::new(),
            unknown: css::GRAY,
        }
    }

    /// Sets per-label overrides.
    pub fn with_custom_colors(mut self, custom: Vec<(String, Color)>) -> Self {
        self.custom = custom;
        self
    }

    /// Sets the color for labels outside the domain.
    pub fn with_unknown(mut self, unknown: Color) -> Self {
        self.unknown = unknown;
        self
    }

    /// The domain, in assignment order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Returns the color for `label`.
    pub fn color(&self, label: &str) -> Color {
        if let Some((_, c)) = self.custom.iter().find(|(name, _)| name == label) {
            return *c;
        }
        let palette = self.scheme.palette();
        self.domain
            .iter()
            .position(|d| d == label)
            .map_or(self.unknown, |i| palette[i % palette.len()])
    }
}
