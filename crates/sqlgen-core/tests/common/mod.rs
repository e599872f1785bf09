#![allow(dead_code)]

use sqlgen_core::ast::{Expr, ExprKind};
use sqlgen_core::{Table, ValueKind};

pub fn users() -> Table {
    Table::builder("Users")
        .column("name", ValueKind::String)
        .column("age", ValueKind::Int)
        .column("addr", ValueKind::String)
        .column("score", ValueKind::Int)
        .column("tag", ValueKind::String)
        .build()
}

pub fn class() -> Table {
    Table::builder("Class")
        .column("name", ValueKind::String)
        .column("age", ValueKind::Int)
        .build()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Word(String),
    Text(String),
    Op(String),
    LeftParen,
    RightParen,
    Comma,
}

/// Splits rendered SQL into tokens. Quoted text is kept verbatim.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let chars: Vec<char> = sql.chars().collect();
    let mut tokens = vec![];
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' => i += 1,
            '(' => {
                tokens.push(Token::LeftParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RightParen);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            '\'' => {
                let end = chars[i + 1..]
                    .iter()
                    .position(|&c| c == '\'')
                    .map(|p| i + 1 + p)
                    .unwrap_or_else(|| panic!("unterminated string in {sql}"));
                tokens.push(Token::Text(chars[i..=end].iter().collect()));
                i = end + 1;
            }
            '<' | '>' => {
                let mut op = String::from(c);
                if matches!(chars.get(i + 1), Some('=' | '>')) {
                    op.push(chars[i + 1]);
                    i += 1;
                }
                tokens.push(Token::Op(op));
                i += 1;
            }
            '=' | '+' | '-' | '*' | '/' | '%' => {
                tokens.push(Token::Op(String::from(c)));
                i += 1;
            }
            _ => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || matches!(chars[i], '_' | '.'))
                {
                    i += 1;
                }
                assert!(i > start, "unexpected character {c:?} in {sql}");
                let word: String = chars[start..i].iter().collect();
                match word.as_str() {
                    "AND" | "OR" | "LIKE" => tokens.push(Token::Op(word)),
                    _ => tokens.push(Token::Word(word)),
                }
            }
        }
    }
    tokens
}

/// Standard SQL binding powers, `(left, right)`, left associative.
fn infix_binding_power(op: &str) -> (u8, u8) {
    match op {
        "OR" => (1, 2),
        "AND" => (3, 4),
        "=" | "<>" | "<" | ">" | "<=" | ">=" | "LIKE" => (5, 6),
        "+" | "-" => (7, 8),
        "*" | "/" | "%" => (9, 10),
        _ => panic!("unknown operator {op}"),
    }
}

/// Parses an expression with standard precedence and returns its tree shape
/// as an S-expression: `(op left right)`.
pub fn parse_shape(sql: &str) -> String {
    let tokens = tokenize(sql);
    let mut pos = 0;
    let shape = parse_expr(&tokens, &mut pos, 0);
    assert_eq!(pos, tokens.len(), "trailing tokens in {sql}");
    shape
}

fn parse_expr(tokens: &[Token], pos: &mut usize, min_bp: u8) -> String {
    let mut left = match tokens.get(*pos) {
        Some(Token::LeftParen) => {
            *pos += 1;
            let inner = parse_expr(tokens, pos, 0);
            assert_eq!(tokens.get(*pos), Some(&Token::RightParen));
            *pos += 1;
            inner
        }
        Some(Token::Word(w) | Token::Text(w)) => {
            *pos += 1;
            w.clone()
        }
        other => panic!("unexpected token {other:?}"),
    };

    while let Some(Token::Op(op)) = tokens.get(*pos) {
        let (l_bp, r_bp) = infix_binding_power(op);
        if l_bp < min_bp {
            break;
        }
        *pos += 1;
        let right = parse_expr(tokens, pos, r_bp);
        left = format!("({op} {left} {right})");
    }
    left
}

/// Shape of an expression tree built from columns, literals and binary nodes.
pub fn tree_shape(expr: &Expr) -> String {
    match expr.node() {
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.as_str(), tree_shape(left), tree_shape(right))
        }
        ExprKind::Column(col) => String::from(col.name()),
        ExprKind::Literal(lit) => lit.to_sql(),
        other => panic!("no shape for {other:?}"),
    }
}

/// Bare words in `sql` equal to one of `columns`, i.e. unqualified references.
pub fn unqualified(sql: &str, columns: &[&str]) -> Vec<String> {
    tokenize(sql)
        .into_iter()
        .filter_map(|t| match t {
            Token::Word(w) if columns.contains(&w.as_str()) => Some(w),
            _ => None,
        })
        .collect()
}

/// Deterministic generator for expression trees.
pub struct Lcg(u64);

impl Lcg {
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        usize::try_from(self.0 >> 33).unwrap() % bound
    }
}
