use std::io::{self, Write};

use lifeline::{pos, Pos};

/// a character grid the size of the terminal, drawn in one go.
pub struct Canvas {
    lines: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// a canvas covering the terminal minus the status line.
    pub fn from_screen() -> io::Result<Self> {
        let (width, height) = termion::terminal_size()?;
        Ok(Self::new(width as usize, height.saturating_sub(1) as usize))
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            lines: vec![vec![' '; width]; height],
            width,
            height,
        }
    }

    /// paints every screen position for which `f` returns a character.
    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<char>) {
        for (row, line) in self.lines.iter_mut().enumerate() {
            for (col, slot) in line.iter_mut().enumerate() {
                if let Some(char) = f(pos!(row as i64, col as i64)) {
                    *slot = char;
                }
            }
        }
    }

    pub fn display(&self, out: &mut impl Write, status: &str) -> io::Result<()> {
        write!(out, "{}", termion::clear::All)?;
        for (index, line) in self.lines.iter().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            let line: String = line.iter().collect();
            write!(out, "{goto}{line}")?;
        }
        let goto = termion::cursor::Goto(1, self.height as u16 + 1);
        let status: String = status.chars().take(self.width).collect();
        write!(out, "{goto}{status}")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_stack() {
        let mut canvas = Canvas::new(4, 2);
        canvas.layer(|p| (p.row == 0).then_some('#'));
        canvas.layer(|p| (p.col == 3).then_some('|'));
        assert_eq!(canvas.lines[0], ['#', '#', '#', '|']);
        assert_eq!(canvas.lines[1], [' ', ' ', ' ', '|']);
    }
}
