use rand::Rng;

use crate::foundation::core::Rgba8;

/// Light grey-whites.
const LIGHT_GREY: &[[u8; 3]] = &[
    [0xe5, 0xe5, 0xe5],
    [0xed, 0xee, 0xe9],
    [0xec, 0xef, 0xee],
    [0xe9, 0xeb, 0xf6],
    [0xe6, 0xe9, 0xea],
    [0xef, 0xeb, 0xe6],
    [0xe9, 0xea, 0xe5],
    [0xf6, 0xf3, 0xe8],
    [0xeb, 0xe5, 0xe3],
    [0xf4, 0xed, 0xe3],
    [0xf7, 0xf3, 0xe1],
    [0xeb, 0xef, 0xe9],
    [0xe6, 0xea, 0xe4],
    [0xe8, 0xe8, 0xe8],
];

/// Blue-greens.
const BLUE_GREEN: &[[u8; 3]] = &[
    [0x66, 0x79, 0x8c],
    [0x80, 0x95, 0x96],
    [0xae, 0xc1, 0xc8],
    [0x27, 0x51, 0x7a],
    [0x2d, 0x6a, 0x85],
    [0x3e, 0x93, 0x8b],
    [0x69, 0xa0, 0xad],
    [0x95, 0xb6, 0xa4],
    [0x17, 0x2e, 0x59],
    [0x44, 0x52, 0x9a],
    [0x4f, 0xab, 0xc0],
    [0x72, 0xc2, 0xd1],
    [0x59, 0xab, 0xcb],
    [0x66, 0xa0, 0xc1],
];

/// Dark grey-blacks.
const DARK_GREY: &[[u8; 3]] = &[
    [0x56, 0x55, 0x5b],
    [0x4d, 0x4f, 0x5f],
    [0x42, 0x44, 0x5c],
    [0x38, 0x39, 0x4b],
    [0x34, 0x34, 0x3d],
    [0x32, 0x3a, 0x39],
    [0x27, 0x2a, 0x2b],
    [0x3b, 0x39, 0x2d],
    [0x2e, 0x32, 0x2c],
    [0x2c, 0x26, 0x2d],
    [0x21, 0x23, 0x2e],
    [0x2d, 0x32, 0x32],
    [0x10, 0x1b, 0x27],
    [0x16, 0x06, 0x07],
];

/// Red-browns.
const RED_BROWN: &[[u8; 3]] = &[
    [0xca, 0x75, 0x66],
    [0xc8, 0x5d, 0x4e],
    [0xc6, 0x4b, 0x34],
    [0x95, 0x36, 0x30],
    [0x7b, 0x28, 0x26],
    [0x61, 0x20, 0x28],
    [0xae, 0x56, 0x60],
    [0xc9, 0x4d, 0x2a],
    [0xc0, 0x54, 0x39],
    [0xb6, 0x33, 0x28],
    [0x8e, 0x2c, 0x35],
    [0x95, 0x2d, 0x2b],
    [0x5f, 0x1e, 0x20],
];

/// Golds.
const GOLD: &[[u8; 3]] = &[
    [0xf2, 0xe7, 0xc6],
    [0xe2, 0xca, 0x79],
    [0xe4, 0xc6, 0x51],
    [0xde, 0xba, 0x49],
    [0xdb, 0xb4, 0x5e],
    [0xdf, 0xb0, 0x47],
    [0xdf, 0x9c, 0x41],
    [0xe2, 0xc8, 0x73],
    [0xe2, 0xc9, 0x79],
    [0xe1, 0xd5, 0x80],
    [0xe3, 0xc6, 0x51],
    [0xdf, 0xba, 0x4c],
    [0xdd, 0xaf, 0x51],
    [0xde, 0x9d, 0x41],
];

/// Stroke alpha choices, as fractions of full opacity.
pub const ALPHA_VALUES: &[f64] = &[0.6, 0.65, 0.7, 0.75, 0.8];

/// Color groups strokes draw from in color mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub groups: &'static [&'static [[u8; 3]]],
    pub alphas: &'static [f64],
}

impl Default for Palette {
    fn default() -> Self {
        Self::BUILTIN
    }
}

/// One stroke's pick: the group it came from and the resulting color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPick {
    pub group: usize,
    pub color: Rgba8,
}

impl Palette {
    pub const BUILTIN: Self = Self {
        groups: &[LIGHT_GREY, BLUE_GREEN, DARK_GREY, RED_BROWN, GOLD],
        alphas: ALPHA_VALUES,
    };

    /// Pick colors for `count` strokes.
    ///
    /// Groups are shuffled so the first strokes each get a distinct group; strokes past the
    /// number of groups pick a group at random. Empty groups are never picked; a palette with
    /// no colors or no alphas yields no picks.
    pub fn assign<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<ColorPick> {
        let usable: Vec<usize> = (0..self.groups.len())
            .filter(|&g| !self.groups[g].is_empty())
            .collect();
        let n = usable.len();
        if n == 0 || self.alphas.is_empty() {
            return Vec::new();
        }

        let mut order = usable.clone();
        for i in (1..n).rev() {
            let j = rng.random_range(0..=i);
            order.swap(i, j);
        }

        let mut picks = Vec::with_capacity(count);
        for i in 0..count {
            let group = if i < n {
                order[i]
            } else {
                usable[rng.random_range(0..n)]
            };
            let colors = self.groups[group];
            let rgb = colors[rng.random_range(0..colors.len())];
            let alpha = self.alphas[rng.random_range(0..self.alphas.len())];
            picks.push(ColorPick {
                group,
                color: Rgba8::from_rgb_alpha(rgb, alpha),
            });
        }
        picks
    }

    pub fn contains(&self, color: Rgba8) -> bool {
        let rgb = [color.r, color.g, color.b];
        self.groups.iter().any(|g| g.contains(&rgb))
            && self
                .alphas
                .iter()
                .any(|a| Rgba8::from_rgb_alpha(rgb, *a).a == color.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/palette.rs"]
mod tests;
