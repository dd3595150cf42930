use std::fmt::{self, Write};

use clap::ValueEnum;
use tilesweep_core::{Canvas, Coord2, Rect, Sprite};

/// Which character set the board is drawn with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DisplayStyle {
    #[default]
    Ascii,
    Unicode,
}

impl DisplayStyle {
    pub fn glyph(self, sprite: Sprite) -> char {
        use DisplayStyle::*;
        use Sprite::*;

        match (self, sprite) {
            (_, Open(count @ 1..=8)) => char::from(b'0' + count),
            (Ascii, Covered) => '#',
            (Ascii, Flagged) => 'F',
            (Ascii, Open(_)) => '.',
            (Ascii, Bomb) => '*',
            (Ascii, TriggeredBomb) => 'X',
            (Ascii, Misflagged) => 'x',
            (Unicode, Covered) => '■',
            (Unicode, Flagged) => '⚑',
            (Unicode, Open(_)) => '·',
            (Unicode, Bomb) => '✱',
            (Unicode, TriggeredBomb) => '✸',
            (Unicode, Misflagged) => '✗',
        }
    }
}

/// Character buffer the renderer draws into, one glyph per cell.
pub struct TextCanvas {
    style: DisplayStyle,
    width: usize,
    glyphs: Vec<char>,
}

impl TextCanvas {
    pub fn new((width, height): Coord2, style: DisplayStyle) -> Self {
        let (width, height) = (usize::from(width), usize::from(height));
        Self {
            style,
            width,
            glyphs: vec![' '; width * height],
        }
    }

    fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.glyphs.chunks(self.width)
    }
}

impl Canvas for TextCanvas {
    fn draw(&mut self, _rect: Rect, (x, y): Coord2, sprite: Sprite) {
        let index = usize::from(y) * self.width + usize::from(x);
        if let Some(glyph) = self.glyphs.get_mut(index) {
            *glyph = self.style.glyph(sprite);
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("    ")?;
        for x in 0..self.width {
            write!(f, "{:>2}", x % 100)?;
        }
        for (y, row) in self.rows().enumerate() {
            write!(f, "\n{y:>3} ")?;
            for &glyph in row {
                f.write_char(' ')?;
                f.write_char(glyph)?;
            }
        }
        Ok(())
    }
}
