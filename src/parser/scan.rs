//! Comment scanner for Rust sources.
//!
//! A small lexer that understands just enough Rust to find comments safely:
//! string, raw-string and char literals are skipped so that `"// fn X: ..."`
//! inside a literal is not picked up, and bracket balance is checked so a
//! truncated or mangled file is rejected instead of half-documented.
//!
//! Comments are grouped the way doc tools usually do it: consecutive comments
//! stay together until a blank line or a code token separates them. A comment
//! trailing code on the same line only groups with other comments on that line.

use crate::error::SyntaxError;
use crate::model::{CommentGroup, CommentLine};

/// Scan source text into comment groups, in file order.
pub fn scan(input: &str) -> Result<Vec<CommentGroup>, SyntaxError> {
    let mut scanner = Scanner::new(input);
    scanner.run()?;
    Ok(scanner.finish())
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,

    groups: Vec<CommentGroup>,
    current: CommentGroup,
    /// Current group began after code on the same line
    current_trailing: bool,
    /// Line on which the last comment ended
    last_comment_end: usize,
    code_since_comment: bool,
    last_code_line: usize,

    /// Open delimiters with the line they were opened on
    delims: Vec<(char, usize)>,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            groups: Vec::new(),
            current: CommentGroup::default(),
            current_trailing: false,
            last_comment_end: 0,
            code_since_comment: false,
            last_code_line: 0,
            delims: Vec::new(),
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Advance one char, keeping the line count current.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn run(&mut self) -> Result<(), SyntaxError> {
        while let Some(c) = self.peek(0) {
            match c {
                '/' if self.peek(1) == Some('/') => self.line_comment(),
                '/' if self.peek(1) == Some('*') => self.block_comment()?,
                '"' => {
                    self.mark_code();
                    self.string()?;
                }
                '\'' => {
                    self.mark_code();
                    self.quote()?;
                }
                '(' | '[' | '{' => {
                    self.mark_code();
                    self.delims.push((c, self.line));
                    self.bump();
                }
                ')' | ']' | '}' => {
                    self.mark_code();
                    self.close_delim(c)?;
                    self.bump();
                }
                c if c.is_whitespace() => {
                    self.bump();
                }
                c if is_ident_start(c) => {
                    self.mark_code();
                    self.ident_or_prefixed_literal()?;
                }
                _ => {
                    self.mark_code();
                    self.bump();
                }
            }
        }

        if let Some(&(open, line)) = self.delims.last() {
            return Err(SyntaxError::new(line, format!("unclosed `{}`", open)));
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<CommentGroup> {
        self.flush();
        self.groups
    }

    fn mark_code(&mut self) {
        self.code_since_comment = true;
        self.last_code_line = self.line;
    }

    fn flush(&mut self) {
        if !self.current.lines.is_empty() {
            self.groups.push(std::mem::take(&mut self.current));
        }
    }

    fn push_comment(&mut self, text: String, start: usize, end: usize) {
        let breaks_group = self.code_since_comment
            || start > self.last_comment_end + 1
            || (self.current_trailing && start > self.last_comment_end);

        if self.current.lines.is_empty() || breaks_group {
            self.flush();
            self.current_trailing = self.last_code_line == start;
        }

        self.current.lines.push(CommentLine { text, line: start });
        self.last_comment_end = end;
        self.code_since_comment = false;
    }

    fn line_comment(&mut self) {
        let start = self.line;
        let begin = self.pos;
        while let Some(c) = self.peek(0) {
            if c == '\n' {
                break;
            }
            self.bump();
        }
        let text: String = self.chars[begin..self.pos].iter().collect();
        let text = text.trim_end_matches('\r').to_string();
        self.push_comment(text, start, start);
    }

    fn block_comment(&mut self) -> Result<(), SyntaxError> {
        let start = self.line;
        let begin = self.pos;
        self.bump();
        self.bump();
        let mut depth = 1;

        while depth > 0 {
            match (self.peek(0), self.peek(1)) {
                (Some('/'), Some('*')) => {
                    depth += 1;
                    self.bump();
                    self.bump();
                }
                (Some('*'), Some('/')) => {
                    depth -= 1;
                    self.bump();
                    self.bump();
                }
                (Some(_), _) => {
                    self.bump();
                }
                (None, _) => {
                    return Err(SyntaxError::new(start, "unterminated block comment"));
                }
            }
        }

        let text: String = self.chars[begin..self.pos].iter().collect();
        let end = self.line;
        self.push_comment(text, start, end);
        Ok(())
    }

    /// `"..."` with backslash escapes; the cursor is on the opening quote.
    fn string(&mut self) -> Result<(), SyntaxError> {
        let start = self.line;
        self.bump();
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('"') => return Ok(()),
                Some(_) => {}
                None => return Err(SyntaxError::new(start, "unterminated string literal")),
            }
        }
    }

    /// `r"..."`, `r#"..."#`, ...; the cursor is on the `r`.
    fn raw_string(&mut self) -> Result<(), SyntaxError> {
        let start = self.line;
        self.bump();
        let mut hashes = 0;
        while self.peek(0) == Some('#') {
            hashes += 1;
            self.bump();
        }
        // opening quote
        self.bump();

        loop {
            match self.bump() {
                Some('"') => {
                    let closing = (0..hashes).all(|i| self.peek(i) == Some('#'));
                    if closing {
                        for _ in 0..hashes {
                            self.bump();
                        }
                        return Ok(());
                    }
                }
                Some(_) => {}
                None => return Err(SyntaxError::new(start, "unterminated raw string literal")),
            }
        }
    }

    /// A `'` starts either a char literal or a lifetime/label.
    fn quote(&mut self) -> Result<(), SyntaxError> {
        let start = self.line;
        match (self.peek(1), self.peek(2)) {
            (Some('\\'), _) => {
                self.bump();
                self.bump();
                self.bump();
                loop {
                    match self.bump() {
                        Some('\'') => return Ok(()),
                        Some('\n') | None => {
                            return Err(SyntaxError::new(
                                start,
                                "unterminated character literal",
                            ))
                        }
                        Some(_) => {}
                    }
                }
            }
            (Some(c), Some('\'')) if c != '\n' => {
                self.bump();
                self.bump();
                self.bump();
                Ok(())
            }
            (Some(c), _) if is_ident_start(c) => {
                // lifetime; the identifier is consumed on the next iteration
                self.bump();
                Ok(())
            }
            _ => Err(SyntaxError::new(start, "unterminated character literal")),
        }
    }

    /// Identifiers, plus the literal prefixes `r"`, `r#"`, `b"`, `b'`, `br"`, `c"`, `cr"`.
    fn ident_or_prefixed_literal(&mut self) -> Result<(), SyntaxError> {
        let c = self.peek(0);
        let next = self.peek(1);

        match (c, next) {
            (Some('r'), Some('"')) => return self.raw_string(),
            (Some('r'), Some('#')) if self.raw_hashes_lead_to_quote(1) => {
                return self.raw_string();
            }
            (Some('b') | Some('c'), Some('"')) => {
                self.bump();
                return self.string();
            }
            (Some('b'), Some('\'')) => {
                self.bump();
                return self.quote();
            }
            (Some('b') | Some('c'), Some('r'))
                if matches!(self.peek(2), Some('"'))
                    || (self.peek(2) == Some('#') && self.raw_hashes_lead_to_quote(2)) =>
            {
                self.bump();
                return self.raw_string();
            }
            _ => {}
        }

        while let Some(c) = self.peek(0) {
            if !is_ident_continue(c) {
                break;
            }
            self.bump();
        }
        Ok(())
    }

    /// `#`s starting at `offset` are followed by a `"`.
    fn raw_hashes_lead_to_quote(&self, offset: usize) -> bool {
        let mut i = offset;
        while self.peek(i) == Some('#') {
            i += 1;
        }
        i > offset && self.peek(i) == Some('"')
    }

    fn close_delim(&mut self, close: char) -> Result<(), SyntaxError> {
        let expected = match close {
            ')' => '(',
            ']' => '[',
            _ => '{',
        };
        match self.delims.pop() {
            Some((open, _)) if open == expected => Ok(()),
            Some((open, line)) => Err(SyntaxError::new(
                self.line,
                format!("mismatched `{}` closing `{}` opened on line {}", close, open, line),
            )),
            None => Err(SyntaxError::new(self.line, format!("unexpected `{}`", close))),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
