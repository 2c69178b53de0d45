//! Tokenizer for the path-data mini-language.
//!
//! The rules here define how existing region outlines are read and must
//! not drift: letters are standalone tokens, whitespace and commas
//! separate, a `-` always begins a new number, and a second `.` within a
//! number begins a new one with an implicit leading zero (so `1.5.5`
//! reads as `1.5` then `0.5`).

/// Split `data` into command-letter and numeric tokens.
///
/// Every alphabetic character is emitted as its own token, so letters
/// outside the supported command set still act as command boundaries.
pub fn tokenize(data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in data.chars() {
        if ch.is_alphabetic() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            tokens.push(ch.to_string());
        } else if ch == ',' || ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else if ch == '-' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            current.push('-');
        } else if ch == '.' {
            if current.contains('.') {
                tokens.push(std::mem::replace(&mut current, "0.".to_string()));
            } else {
                current.push('.');
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// True if the token is a command letter (supported or not).
pub fn is_command_token(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_alphabetic)
}

/// Cursor over a token list.
///
/// Operand reads are all-or-nothing: a group of numbers is consumed only
/// if every member is present and parses, otherwise the cursor is left
/// where it was.
#[derive(Debug, Clone)]
pub(crate) struct TokenCursor {
    tokens: Vec<String>,
    index: usize,
}

impl TokenCursor {
    pub fn new(data: &str) -> Self {
        Self {
            tokens: tokenize(data),
            index: 0,
        }
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&str> {
        self.tokens.get(self.index).map(String::as_str)
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }

    pub fn at_command(&self) -> bool {
        self.current().is_some_and(is_command_token)
    }

    /// Consume and return the command letter at the cursor, if any.
    pub fn read_command(&mut self) -> Option<char> {
        if self.at_command() {
            let c = self.current().and_then(|t| t.chars().next());
            self.advance();
            c
        } else {
            None
        }
    }

    fn number_at(&self, index: usize) -> Option<f64> {
        let token = self.tokens.get(index)?;
        if is_command_token(token) {
            return None;
        }
        token.parse().ok()
    }

    /// Read `count` numbers, or nothing.
    pub fn read_numbers(&mut self, count: usize) -> Option<Vec<f64>> {
        let values = (self.index..self.index + count)
            .map(|i| self.number_at(i))
            .collect::<Option<Vec<f64>>>()?;
        self.index += count;
        Some(values)
    }

    /// Read `count` numbers, taking any token which is not a number as 0.
    ///
    /// A command letter or the end of input still ends the read, and then
    /// nothing is consumed.
    pub fn read_numbers_or_zero(&mut self, count: usize) -> Option<Vec<f64>> {
        let values = (self.index..self.index + count)
            .map(|i| {
                let token = self.tokens.get(i)?;
                if is_command_token(token) {
                    return None;
                }
                Some(token.parse().unwrap_or(0.))
            })
            .collect::<Option<Vec<f64>>>()?;
        self.index += count;
        Some(values)
    }

    /// Skip tokens up to the next command letter, returning how many were
    /// skipped.
    pub fn skip_operands(&mut self) -> usize {
        let start = self.index;
        while !self.at_end() && !self.at_command() {
            self.advance();
        }
        self.index - start
    }
}
