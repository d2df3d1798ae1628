pub mod options;

use std::io::{self, BufRead, Write};

use colored::{Color as TermColor, Colorize};

pub use options::ReplOptions;

use crate::prelude::*;

/// The interactive terminal loop (§6). Prints the suggested cell, reads one
/// line of a reply, and feeds it back into the engine until standard input
/// is exhausted.
pub struct Repl {
    engine: Engine,
}

impl Repl {
    pub fn new(options: &ReplOptions) -> Result<Repl> {
        let engine = Engine::new(options.rows, options.cols, options.aircraft)
            .context("failed to construct engine from the given options")?;
        Ok(Repl { engine })
    }

    /// Runs the loop until EOF on standard input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            let (row, col) = self.engine.get_cell_to_bomb()?;
            if self.engine.last_call_was_contradiction() == Some(true) {
                log::warn!("the known cells are mutually inconsistent; no placement satisfies them all");
            }
            self.render_matrix(row, col);

            print!("({}, {}) > ", row + 1, column_letter(col));
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            match parse_reply(&line, row, col) {
                Ok((row, col, color)) => {
                    if let Err(err) = self.engine.set_color(row, col, color) {
                        log::warn!("rejecting reply: {err}");
                    }
                }
                Err(err) => log::warn!("unrecognized reply {line:?}: {err}"),
            }
        }
        Ok(())
    }

    /// Renders the per-cell entropy (scaled by 100) colored by the
    /// outcome currently most probable at that cell, bolding the suggested
    /// cell and dimming cells whose color is already known.
    fn render_matrix(&self, top_row: usize, top_col: usize) {
        print!("  ");
        for col in 0..self.engine.cols() {
            print!("{:>6}", column_letter(col));
        }
        println!();

        for row in 0..self.engine.rows() {
            print!("{:>2}: ", row + 1);
            for col in 0..self.engine.cols() {
                let prob = self
                    .engine
                    .probability_at(row, col)
                    .unwrap_or(Probability {
                        red: 0.0,
                        blue: 0.0,
                        white: 0.0,
                    });
                let is_known = !self
                    .engine
                    .color_at(row, col)
                    .map(|c| c.is_gray())
                    .unwrap_or(true);
                let is_top = (row, col) == (top_row, top_col);
                print!("{}", render_cell(prob, is_top, is_known));
            }
            println!();
        }
    }
}

fn render_cell(prob: Probability, is_top: bool, is_known: bool) -> colored::ColoredString {
    let text = format!("{:5.1} ", prob.entropy() * 100.0);
    let max = prob.red.max(prob.blue).max(prob.white);
    let color = if prob.red == max {
        TermColor::Red
    } else if prob.blue == max {
        TermColor::Blue
    } else {
        TermColor::Black
    };
    let styled = text.color(color);
    if is_top {
        styled.bold()
    } else if is_known {
        styled.dimmed()
    } else {
        styled.normal()
    }
}

fn column_letter(col: usize) -> char {
    (b'A' + (col % 26) as u8) as char
}

/// Parses one reply line: either a bare color character, meaning "paint the
/// previously suggested cell", or a `row letter color` triple overriding the
/// cell. Columns may be given in either case.
fn parse_reply(line: &str, previous_row: usize, previous_col: usize) -> Result<(usize, usize, Color)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [color] => {
            let color = color.parse::<Color>()?;
            Ok((previous_row, previous_col, color))
        }
        [row, letter, color] => {
            let row: usize = row.parse::<usize>().context("row must be a positive integer")?;
            if row == 0 {
                return Err(anyhow!("row must be 1-based"));
            }
            let letter = letter
                .chars()
                .next()
                .ok_or_else(|| anyhow!("missing column letter"))?;
            let col = (letter.to_ascii_uppercase() as u8).wrapping_sub(b'A') as usize;
            let color = color.parse::<Color>()?;
            Ok((row - 1, col, color))
        }
        _ => Err(anyhow!("expected a color, or \"row letter color\"")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_color_against_the_previous_cell() {
        let (row, col, color) = parse_reply("r", 3, 4).unwrap();
        assert_eq!((row, col, color), (3, 4, Color::Red));
    }

    #[test]
    fn parses_a_row_letter_color_triple() {
        let (row, col, color) = parse_reply("2 c b", 0, 0).unwrap();
        assert_eq!((row, col, color), (1, 2, Color::Blue));
    }

    #[test]
    fn column_letters_are_case_insensitive() {
        let (_, col_upper, _) = parse_reply("2 C b", 0, 0).unwrap();
        let (_, col_lower, _) = parse_reply("2 c b", 0, 0).unwrap();
        assert_eq!(col_upper, col_lower);
    }

    #[test]
    fn rejects_a_zero_row() {
        assert!(parse_reply("0 a w", 0, 0).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_reply("nonsense here today", 0, 0).is_err());
    }

    #[test]
    fn column_letter_wraps_past_z() {
        assert_eq!(column_letter(0), 'A');
        assert_eq!(column_letter(25), 'Z');
    }
}
