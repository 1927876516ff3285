//! Lexical well-formedness check for generated scene source.
//!
//! This is not a parser. It tracks brackets outside of strings and comments
//! and makes sure every string literal is terminated, which catches the
//! defects a hand-edited payload most often introduces.

use scene_forge_core::SyntaxIssue;

/// Check that `source` has balanced brackets and terminated strings.
pub fn check(source: &str) -> Result<(), SyntaxIssue> {
    let chars: Vec<char> = source.chars().collect();
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\n' => line += 1,
            '#' => {
                while i + 1 < chars.len() && chars[i + 1] != '\n' {
                    i += 1;
                }
            }
            quote @ ('\'' | '"') => {
                let (end, end_line) = skip_string(&chars, i, quote, line)?;
                i = end;
                line = end_line;
            }
            open @ ('(' | '[' | '{') => stack.push((open, line)),
            close @ (')' | ']' | '}') => match stack.pop() {
                None => return Err(SyntaxIssue::Unexpected { close, line }),
                Some((open, open_line)) if closer(open) != close => {
                    return Err(SyntaxIssue::Mismatched {
                        open,
                        open_line,
                        close,
                        line,
                    });
                }
                Some(_) => {}
            },
            _ => {}
        }
        i += 1;
    }

    match stack.pop() {
        Some((open, line)) => Err(SyntaxIssue::Unclosed { open, line }),
        None => Ok(()),
    }
}

fn closer(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Skip a string literal opening at `start`. Returns the index of its last
/// character and the line it ends on.
fn skip_string(
    chars: &[char],
    start: usize,
    quote: char,
    line: usize,
) -> Result<(usize, usize), SyntaxIssue> {
    let start_line = line;
    let mut line = line;
    let triple = chars.get(start + 1) == Some(&quote) && chars.get(start + 2) == Some(&quote);
    let mut i = if triple { start + 3 } else { start + 1 };

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                if chars.get(i + 1) == Some(&'\n') {
                    line += 1;
                }
                i += 1;
            }
            '\n' if !triple => {
                return Err(SyntaxIssue::UnterminatedString { line: start_line });
            }
            '\n' => line += 1,
            c if c == quote => {
                if !triple {
                    return Ok((i, line));
                }
                if chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote) {
                    return Ok((i + 2, line));
                }
            }
            _ => {}
        }
        i += 1;
    }

    Err(SyntaxIssue::UnterminatedString { line: start_line })
}
