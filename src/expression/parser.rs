//! Small recursive-descent parser for rendered expressions, used by tests to
//! re-evaluate node text under standard precedence.

#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    Num(f64),
    Bin(char, Box<Ast>, Box<Ast>),
    Call(String, Box<Ast>),
    Pow(Box<Ast>, i32),
}

impl Ast {
    pub fn eval(&self) -> f64 {
        match self {
            Ast::Num(n) => *n,
            Ast::Bin(op, l, r) => {
                let (l, r) = (l.eval(), r.eval());
                match op {
                    '+' => l + r,
                    '-' => l - r,
                    '*' => l * r,
                    _ => l / r,
                }
            }
            Ast::Call(name, arg) => {
                let v = arg.eval();
                match name.as_str() {
                    "sqrt" => v.sqrt(),
                    "exp" => v.exp(),
                    _ => v.ln(),
                }
            }
            Ast::Pow(base, exp) => base.eval().powi(*exp),
        }
    }

    fn is_unary_or_power(&self) -> bool {
        matches!(self, Ast::Call(_, _) | Ast::Pow(_, _))
    }

    /// True when a function or power is applied directly to another one.
    pub fn has_unary_chain(&self) -> bool {
        match self {
            Ast::Num(_) => false,
            Ast::Bin(_, l, r) => l.has_unary_chain() || r.has_unary_chain(),
            Ast::Call(_, inner) | Ast::Pow(inner, _) => {
                inner.is_unary_or_power() || inner.has_unary_chain()
            }
        }
    }
}

struct Parser<'a> {
    chars: Vec<char>,
    pos: usize,
    source: &'a str,
}

pub fn parse(source: &str) -> Result<Ast, String> {
    let mut p = Parser {
        chars: source.chars().collect(),
        pos: 0,
        source,
    };
    let ast = p.expr()?;
    if p.pos != p.chars.len() {
        return Err(format!("trailing input at {} in '{}'", p.pos, p.source));
    }
    Ok(ast)
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn expect(&mut self, c: char) -> Result<(), String> {
        if self.peek() == Some(c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(format!("expected '{}' at {} in '{}'", c, self.pos, self.source))
        }
    }

    fn expr(&mut self) -> Result<Ast, String> {
        let mut lhs = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Ast::Bin(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Ast, String> {
        let mut lhs = self.factor()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            lhs = Ast::Bin(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Ast, String> {
        let base = self.primary()?;
        if self.peek() == Some('^') {
            self.pos += 1;
            let exp = if self.peek() == Some('(') {
                self.pos += 1;
                let e = self.integer()?;
                self.expect(')')?;
                e
            } else {
                self.integer()?
            };
            return Ok(Ast::Pow(Box::new(base), exp));
        }
        Ok(base)
    }

    fn integer(&mut self) -> Result<i32, String> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse()
            .map_err(|_| format!("bad exponent '{}' in '{}'", text, self.source))
    }

    fn primary(&mut self) -> Result<Ast, String> {
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let inner = self.expr()?;
                self.expect(')')?;
                Ok(inner)
            }
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += 1;
                }
                let text: String = self.chars[start..self.pos].iter().collect();
                text.parse()
                    .map(Ast::Num)
                    .map_err(|_| format!("bad number '{}'", text))
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
                    self.pos += 1;
                }
                let name: String = self.chars[start..self.pos].iter().collect();
                self.expect('(')?;
                let arg = self.expr()?;
                self.expect(')')?;
                Ok(Ast::Call(name, Box::new(arg)))
            }
            other => Err(format!(
                "unexpected {:?} at {} in '{}'",
                other, self.pos, self.source
            )),
        }
    }
}

/// Byte ranges of grouping parenthesis pairs, skipping function-call and
/// negative-exponent parentheses.
pub fn grouping_pairs(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut stack = Vec::new();
    let mut pairs = Vec::new();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => {
                let prev = i.checked_sub(1).and_then(|j| bytes.get(j)).copied();
                let grouping = !matches!(prev, Some(p) if p.is_ascii_alphabetic() || p == b'^');
                stack.push((i, grouping));
            }
            b')' => {
                if let Some((open, true)) = stack.pop() {
                    pairs.push((open, i));
                }
            }
            _ => {}
        }
    }
    pairs
}

/// The text with the pair at `(open, close)` removed.
pub fn without_pair(text: &str, (open, close): (usize, usize)) -> String {
    text.char_indices()
        .filter(|&(i, _)| i != open && i != close)
        .map(|(_, c)| c)
        .collect()
}
