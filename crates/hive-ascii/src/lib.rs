//! ASCII-art rendering of hives.
//!
//! A read-only consumer of the [`Hive`] API: it walks the base row and each
//! ring through [`Hive::ring_range`] and draws one flat-topped hexagon per
//! populated slot. Empty slots are left blank.
//!
//! ```text
//!   ____
//!  /    \
//! /  a   \
//! \      /
//!  \____/
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use hive_core::RingAxis;
use hive_space::{Hive, Slot};
use std::fmt::Display;
use std::ops::Range;

/// Width of a hexagon's top and bottom edge.
const BASE: usize = 4;
/// Horizontal reach of each slanted side.
const WING: usize = 2;
/// Longest label drawn, in characters.
const TEXT: usize = 12;
/// Longest label line.
const HALF: usize = TEXT / 2;

/// Render every populated slot of `hive`, labelled with its payload.
///
/// The base row is drawn as a vertical column, y rings as columns to its
/// left and z rings to its right. Labels longer than six characters wrap
/// onto two lines, at whitespace when possible.
///
/// ```
/// use hive_space::{Hexagon, Hive};
///
/// let hive = Hive::new(&Hexagon::new(1).unwrap(), [Some("a")]).unwrap();
/// assert_eq!(
///     hive_ascii::render(&hive),
///     "  ____\n /    \\\n/  a   \\\n\\      /\n \\____/"
/// );
/// ```
pub fn render<T: Display>(hive: &Hive<T>) -> String {
    let yspan = hive.yspan();
    let zspan = hive.zspan();
    let step = BASE + WING;
    let mut canvas = Canvas::new(BASE + 2 * WING + (yspan + zspan - 2) * step);

    canvas.column(hive, 0..hive.x0(), step * yspan - BASE, 0);
    for j in 1..yspan {
        if let Some(ring) = hive.ring_range(RingAxis::Y, j) {
            canvas.column(hive, ring, step * (yspan - j) - BASE, WING * j);
        }
    }
    for j in 1..zspan {
        if let Some(ring) = hive.ring_range(RingAxis::Z, j) {
            canvas.column(hive, ring, step * (yspan + j) - BASE, WING * j);
        }
    }
    canvas.finish()
}

/// Single-line form of a payload, cut to [`TEXT`] characters.
fn label<T: Display>(data: &T) -> String {
    data.to_string()
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .chars()
        .take(TEXT)
        .collect()
}

/// Growable character grid.
struct Canvas {
    width: usize,
    lines: Vec<Vec<char>>,
}

impl Canvas {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    fn put(&mut self, x: usize, y: usize, ch: char) {
        if self.lines.len() <= y {
            let width = self.width;
            self.lines.resize_with(y + 1, || vec![' '; width]);
        }
        let line = &mut self.lines[y];
        if line.len() <= x {
            line.resize(x + 1, ' ');
        }
        line[x] = ch;
    }

    /// Draw slots `ring` top to bottom starting at `(x, y)`.
    fn column<T: Display>(&mut self, hive: &Hive<T>, ring: Range<usize>, x: usize, mut y: usize) {
        for i in ring {
            if let Some(Slot::Node(node)) = hive.nodes(i) {
                self.hexagon(x, y, &label(node.data()));
            }
            y += 2 * WING;
        }
    }

    /// One hexagon whose top edge starts at `(x, y)`.
    fn hexagon(&mut self, x: usize, y: usize, text: &str) {
        for i in 0..BASE {
            self.put(x + i, y, '_');
        }
        self.put(x - 1, y + 1, '/');
        self.put(x + BASE, y + 1, '\\');
        self.put(x - 2, y + 2, '/');
        self.put(x + BASE + 1, y + 2, '\\');
        self.text(x - 1, y + 2, text);
        self.put(x - 2, y + 3, '\\');
        self.put(x + BASE + 1, y + 3, '/');
        self.put(x - 1, y + 4, '\\');
        self.put(x + BASE, y + 4, '/');
        for i in 0..BASE {
            self.put(x + i, y + 4, '_');
        }
    }

    /// Label of at most [`TEXT`] characters, wrapped onto two lines if needed.
    fn text(&mut self, x: usize, y: usize, text: &str) {
        let len = text.chars().count();
        if len <= HALF {
            self.centered(x, y, text);
            return;
        }
        let parts: Vec<&str> = text.split(char::is_whitespace).collect();
        for i in 1..parts.len() {
            let top = parts[..i].join(" ");
            let bottom = parts[i..].join(" ");
            if top.chars().count() <= HALF && bottom.chars().count() <= HALF {
                self.centered(x, y, &top);
                self.centered(x, y + 1, &bottom);
                return;
            }
        }
        let mid = text
            .char_indices()
            .nth(len / 2)
            .map_or(text.len(), |(i, _)| i);
        let (top, bottom) = text.split_at(mid);
        self.centered(x, y, top);
        self.centered(x, y + 1, bottom);
    }

    fn centered(&mut self, x: usize, y: usize, text: &str) {
        let offset = x + HALF.saturating_sub(text.chars().count()) / 2;
        for (i, ch) in text.chars().enumerate() {
            self.put(offset + i, y, ch);
        }
    }

    fn finish(self) -> String {
        self.lines
            .into_iter()
            .map(|line| line.into_iter().collect::<String>().trim_end().to_owned())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hive_space::Hexagon;

    fn hexagon<T>(radius: u32, values: impl IntoIterator<Item = Option<T>>) -> Hive<T> {
        Hive::new(&Hexagon::new(radius).unwrap(), values).unwrap()
    }

    #[test]
    fn single_cell() {
        let hive = hexagon(1, [Some('a')]);
        let expected = ["  ____", " /    \\", "/  a   \\", "\\      /", " \\____/"].join("\n");
        assert_eq!(render(&hive), expected);
    }

    #[test]
    fn long_label_without_spaces_splits_at_midpoint() {
        let hive = hexagon(1, [Some("abcdefghij")]);
        let out = render(&hive);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[2], "/abcde \\");
        assert_eq!(lines[3], "\\fghij /");
    }

    #[test]
    fn long_label_wraps_at_whitespace() {
        let hive = hexagon(1, [Some("north west 3")]);
        let out = render(&hive);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[2], "/north \\");
        assert_eq!(lines[3], "\\west 3/");
    }

    #[test]
    fn labels_are_truncated_and_flattened() {
        assert_eq!(label(&"line\r\nbreak"), "line break");
        assert_eq!(label(&"a\nb\rc"), "a b c");
        assert_eq!(label(&"0123456789abcdef"), "0123456789ab");
    }

    #[test]
    fn empty_slots_are_blank() {
        let hive = hexagon::<u8>(1, [None]);
        assert_eq!(render(&hive), "");
    }

    #[test]
    fn radius_two_layout() {
        let hive = hexagon(2, (0..7).map(Some));
        let out = render(&hive);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "        ____");
        // y ring on the left, base row in the middle, z ring on the right.
        assert_eq!(lines[4], "/  3   \\____/  5   \\");
        for label in 0..7 {
            assert!(out.contains(&label.to_string()), "missing label {label}");
        }
    }
}
