use std::iter::Peekable;
use std::str::CharIndices;

use super::ast::*;
use super::error::ParseError;

/// How the parser treats unbalanced delimiters and bad repeat counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Missing `)`/`}` are tolerated and the scan simply moves on.
    Lenient,
    Strict,
}

pub struct Parser<'a> {
    stream: Peekable<CharIndices<'a>>,
    len: usize,
    mode: Mode,
}

impl<'a> Parser<'a> {
    fn with_mode(pattern: &'a str, mode: Mode) -> Parser<'a> {
        Parser {
            stream: pattern.char_indices().peekable(),
            len: pattern.len(),
            mode,
        }
    }

    /// Parses any input. Malformed patterns yield the partial structure the
    /// scan reached; a stray top-level `)` ends the scan.
    pub fn parse(pattern: &str) -> Ast {
        let mut parser = Parser::with_mode(pattern, Mode::Lenient);
        match parser.parse_root() {
            Ok(ast) => ast,
            // lenient mode never reports
            Err(_) => Ast::concat(vec![]),
        }
    }

    pub fn parse_strict(pattern: &str) -> Result<Ast, ParseError> {
        Parser::with_mode(pattern, Mode::Strict).parse_root()
    }

    fn parse_root(&mut self) -> Result<Ast, ParseError> {
        let ast = self.parse_expression()?;
        if let Some((pos, _)) = self.stream.peek() {
            // only a ')' can stop the top-level expression early
            let pos = *pos;
            self.report(ParseError::UnmatchedClose(pos))?;
        }
        Ok(ast)
    }

    fn parse_expression(&mut self) -> Result<Ast, ParseError> {
        let mut children = Vec::new();

        while let Some(&(_, c)) = self.stream.peek() {
            match c {
                ')' => break,
                '|' => {
                    self.stream.next();

                    let lhs = Self::collapse(children);
                    let rhs = self.parse_expression()?;
                    return Ok(Ast::union(lhs, rhs));
                }
                _ => children.push(self.parse_term()?),
            }
        }

        Ok(Self::collapse(children))
    }

    fn collapse(mut children: Vec<Ast>) -> Ast {
        match children.len() {
            1 => children.pop().unwrap_or_else(|| Ast::concat(vec![])),
            _ => Ast::concat(children),
        }
    }

    fn parse_term(&mut self) -> Result<Ast, ParseError> {
        let ast = self.parse_atom()?;

        let (min, max) = match self.stream.peek() {
            Some((_, '+')) => {
                self.stream.next();
                (1, RepeatKind::Infinity)
            }
            Some((_, '*')) => {
                self.stream.next();
                (0, RepeatKind::Infinity)
            }
            Some((_, '?')) => {
                self.stream.next();
                (0, RepeatKind::Num(1))
            }
            Some((_, '{')) => self.parse_repeat_range()?,
            _ => {
                return Ok(ast);
            }
        };

        Ok(Ast::repeat(ast, min, max))
    }

    fn parse_atom(&mut self) -> Result<Ast, ParseError> {
        match self.stream.next() {
            Some((pos, '(')) => {
                let ast = self.parse_expression()?;
                if self.stream.next_if(|&(_, c)| c == ')').is_none() {
                    self.report(ParseError::UnclosedGroup(pos))?;
                }
                Ok(ast)
            }
            Some((_, c)) => Ok(Ast::literal(c)),
            // parse_expression only asks for a term when input remains
            None => Ok(Ast::concat(vec![])),
        }
    }

    fn parse_repeat_range(&mut self) -> Result<(u32, RepeatKind), ParseError> {
        let open = self.position();
        self.stream.next(); // consume '{'

        let min = match self.parse_number()? {
            Some(n) => n,
            None => {
                let pos = self.position();
                self.report(ParseError::MissingRepeatCount(pos))?;
                0
            }
        };

        let max = match self.stream.next_if(|&(_, c)| c == ',') {
            Some(_) => match self.parse_number()? {
                Some(n) => RepeatKind::Num(n),
                None => RepeatKind::Infinity,
            },
            None => RepeatKind::Num(min),
        };

        if let RepeatKind::Num(max) = max {
            if max < min {
                self.report(ParseError::RepeatOutOfOrder { at: open, min, max })?;
            }
        }

        if self.stream.next_if(|&(_, c)| c == '}').is_none() {
            self.report(ParseError::UnclosedRepeat(open))?;
        }

        Ok((min, max))
    }

    fn parse_number(&mut self) -> Result<Option<u32>, ParseError> {
        let start = self.position();
        let mut num: Option<u32> = None;
        let mut overflow = false;

        while let Some((_, c)) = self.stream.next_if(|(_, c)| c.is_ascii_digit()) {
            let digit = c.to_digit(10).unwrap_or(0);
            num = match num.unwrap_or(0).checked_mul(10).and_then(|n| n.checked_add(digit)) {
                Some(n) => Some(n),
                None => {
                    overflow = true;
                    Some(u32::MAX)
                }
            };
        }

        if overflow {
            self.report(ParseError::RepeatCountOverflow(start))?;
        }
        Ok(num)
    }

    fn position(&mut self) -> usize {
        match self.stream.peek() {
            Some((pos, _)) => *pos,
            None => self.len,
        }
    }

    fn report(&self, error: ParseError) -> Result<(), ParseError> {
        match self.mode {
            Mode::Lenient => Ok(()),
            Mode::Strict => Err(error),
        }
    }
}
