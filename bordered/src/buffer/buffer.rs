use unicode_width::UnicodeWidthChar;

use super::Cell;
use crate::layout::Rect;
use crate::types::Rgb;

/// A grid of cells that surfaces and labels can be rasterized into.
///
/// One cell covers one unit of surface space.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Paint the background of every cell the rectangle touches.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgb) {
        if rect.is_empty() {
            return;
        }
        let (x0, x1) = Self::span(rect.left(), rect.right(), self.width);
        let (y0, y1) = Self::span(rect.top(), rect.bottom(), self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.bg = bg;
                }
            }
        }
    }

    /// Write a string starting at `(x, y)`, clipped to `max_width` columns.
    ///
    /// Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, max_width: u16) -> u16 {
        let mut col = 0u16;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if col.saturating_add(w) > max_width {
                break;
            }
            if let Some(cell) = self.get_mut(x.saturating_add(col), y) {
                cell.char = ch;
                cell.fg = fg;
                cell.wide_continuation = false;
            }
            for extra in 1..w {
                if let Some(cell) = self.get_mut(x.saturating_add(col + extra), y) {
                    cell.char = ' ';
                    cell.fg = fg;
                    cell.wide_continuation = true;
                }
            }
            col += w;
        }
        col
    }

    /// Plain-text rows, for logging and assertions.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .filter_map(|x| self.get(x, y))
                    .filter(|cell| !cell.wide_continuation)
                    .map(|cell| cell.char)
                    .collect()
            })
            .collect()
    }

    fn span(start: f32, end: f32, limit: u16) -> (u16, u16) {
        let lo = start.floor().clamp(0.0, limit as f32) as u16;
        let hi = end.ceil().clamp(0.0, limit as f32) as u16;
        (lo, hi)
    }
}
