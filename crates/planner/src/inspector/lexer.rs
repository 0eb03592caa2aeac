/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Tokenizer for HCL native syntax. Only as much of the language as is needed
 * to find block structure and literal string attributes.
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Ident(String),
    /// Quoted string. `None` when the string contains template sequences.
    Str(Option<String>),
    Heredoc,
    OpenBrace,
    CloseBrace,
    /// `(` or `[`
    Open,
    /// `)` or `]`
    Close,
    Equals,
    Newline,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LexError {
    pub line: usize,
    pub message: String,
}

pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer {
        chars: source.chars().collect(),
        pos: 0,
        line: 1,
        tokens: Vec::new(),
    }
    .run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.peek(0) {
            let line = self.line;
            match c {
                '\n' => {
                    self.bump();
                    self.push(TokenKind::Newline, line);
                }
                ' ' | '\t' | '\r' => {
                    self.bump();
                }
                '#' => self.skip_line_comment(),
                '/' if self.peek(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek(1) == Some('*') => self.skip_block_comment()?,
                '"' => {
                    self.bump();
                    let value = self.quoted_string(line)?;
                    self.push(TokenKind::Str(value), line);
                }
                '<' if self.peek(1) == Some('<') && self.starts_heredoc() => {
                    self.heredoc(line)?;
                    self.push(TokenKind::Heredoc, line);
                }
                '{' => self.single(TokenKind::OpenBrace, line),
                '}' => self.single(TokenKind::CloseBrace, line),
                '(' | '[' => self.single(TokenKind::Open, line),
                ')' | ']' => self.single(TokenKind::Close, line),
                '=' if matches!(self.peek(1), Some('=') | Some('>')) => {
                    self.pos += 2;
                    self.push(TokenKind::Other, line);
                }
                '=' => self.single(TokenKind::Equals, line),
                '!' | '<' | '>' if self.peek(1) == Some('=') => {
                    self.pos += 2;
                    self.push(TokenKind::Other, line);
                }
                c if c.is_alphabetic() || c == '_' => {
                    let start = self.pos;
                    while matches!(self.peek(0), Some(c) if c.is_alphanumeric() || c == '_' || c == '-')
                    {
                        self.bump();
                    }
                    let ident: String = self.chars[start..self.pos].iter().collect();
                    self.push(TokenKind::Ident(ident), line);
                }
                _ => self.single(TokenKind::Other, line),
            }
        }
        Ok(self.tokens)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn push(&mut self, kind: TokenKind, line: usize) {
        self.tokens.push(Token { kind, line });
    }

    fn single(&mut self, kind: TokenKind, line: usize) {
        self.bump();
        self.push(kind, line);
    }

    fn error(&self, line: usize, message: &str) -> LexError {
        LexError {
            line,
            message: message.to_string(),
        }
    }

    fn skip_line_comment(&mut self) {
        while matches!(self.peek(0), Some(c) if c != '\n') {
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let line = self.line;
        self.pos += 2;
        loop {
            match self.bump() {
                Some('*') if self.peek(0) == Some('/') => {
                    self.bump();
                    return Ok(());
                }
                Some(_) => {}
                None => return Err(self.error(line, "unterminated block comment")),
            }
        }
    }

    /// Reads a quoted string after its opening quote.
    fn quoted_string(&mut self, line: usize) -> Result<Option<String>, LexError> {
        let mut value = String::new();
        let mut templated = false;

        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error(line, "unterminated string")),
                Some('"') => break,
                Some('\\') => match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some(c) => value.push(c),
                    None => return Err(self.error(line, "unterminated string")),
                },
                Some(c @ ('$' | '%')) if self.peek(0) == Some(c) && self.peek(1) == Some('{') => {
                    // `$${` and `%%{` escape a literal template opener
                    self.pos += 2;
                    value.push(c);
                    value.push('{');
                }
                Some('$' | '%') if self.peek(0) == Some('{') => {
                    self.bump();
                    self.skip_template(line)?;
                    templated = true;
                }
                Some(c) => value.push(c),
            }
        }

        Ok(if templated { None } else { Some(value) })
    }

    /// Skips a template sequence after its opening `${` or `%{`.
    fn skip_template(&mut self, line: usize) -> Result<(), LexError> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.bump() {
                None => return Err(self.error(line, "unterminated template sequence")),
                Some('{') => depth += 1,
                Some('}') => depth -= 1,
                Some('"') => {
                    self.quoted_string(self.line)?;
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    fn starts_heredoc(&self) -> bool {
        let offset = if self.peek(2) == Some('-') { 3 } else { 2 };
        matches!(self.peek(offset), Some(c) if c.is_alphabetic() || c == '_')
    }

    fn heredoc(&mut self, line: usize) -> Result<(), LexError> {
        self.pos += 2;
        if self.peek(0) == Some('-') {
            self.bump();
        }

        let start = self.pos;
        while matches!(self.peek(0), Some(c) if c.is_alphanumeric() || c == '_' || c == '-') {
            self.bump();
        }
        let marker: String = self.chars[start..self.pos].iter().collect();

        // The opener must end its line
        while matches!(self.peek(0), Some(' ' | '\t' | '\r')) {
            self.bump();
        }
        if self.bump() != Some('\n') {
            return Err(self.error(line, "expected newline after heredoc marker"));
        }

        loop {
            if self.peek(0).is_none() {
                return Err(self.error(line, "unterminated heredoc"));
            }
            let start = self.pos;
            while matches!(self.peek(0), Some(c) if c != '\n') {
                self.bump();
            }
            let text: String = self.chars[start..self.pos].iter().collect();
            if text.trim() == marker {
                return Ok(());
            }
            self.bump();
        }
    }
}
