//! Type expression parser
//!
//! Grammar:
//!
//! ```text
//! type  := base ("[" "]")*
//! base  := ident ("<" type ("," type)* ">")?
//! ident := [A-Za-z_][A-Za-z0-9_.]*
//! ```
//!
//! Unboxed primitives are spelled `i8 i16 i32 i64 f32 f64 bool`, boxed ones
//! `Int8 Int16 Int32 Int64 Float32 Float64 Boolean Decimal`. An identifier
//! listed in `scope` is a type variable.

use super::types::TypeExpr;
use crate::error::{Error, Result};
use crate::types::PrimitiveKind;

/// Parse a type expression
pub fn parse_type_expr(input: &str, scope: &[String]) -> Result<TypeExpr> {
    let mut parser = Parser {
        input,
        pos: 0,
        scope,
    };
    let expr = parser.parse_type()?;
    parser.skip_whitespace();
    if parser.pos != input.len() {
        return Err(parser.error(format!(
            "unexpected trailing input '{}'",
            &input[parser.pos..]
        )));
    }
    Ok(expr)
}

/// Whether `name` is a reserved primitive spelling
pub fn is_reserved_name(name: &str) -> bool {
    PrimitiveKind::from_unboxed_name(name).is_some()
        || PrimitiveKind::from_boxed_name(name).is_some()
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    scope: &'a [String],
}

impl Parser<'_> {
    fn parse_type(&mut self) -> Result<TypeExpr> {
        let mut expr = self.parse_base()?;
        loop {
            self.skip_whitespace();
            if !self.eat('[') {
                break;
            }
            self.skip_whitespace();
            if !self.eat(']') {
                return Err(self.error("expected ']'"));
            }
            expr = expr.array_of();
        }
        Ok(expr)
    }

    fn parse_base(&mut self) -> Result<TypeExpr> {
        self.skip_whitespace();
        let ident = self.parse_ident()?;
        self.skip_whitespace();

        let args = if self.eat('<') {
            let mut args = vec![self.parse_type()?];
            loop {
                self.skip_whitespace();
                if self.eat(',') {
                    args.push(self.parse_type()?);
                } else if self.eat('>') {
                    break;
                } else {
                    return Err(self.error("expected ',' or '>'"));
                }
            }
            Some(args)
        } else {
            None
        };

        if let Some(kind) = PrimitiveKind::from_unboxed_name(&ident) {
            self.reject_args(&ident, args.as_ref())?;
            return Ok(TypeExpr::Primitive(kind));
        }
        if let Some(kind) = PrimitiveKind::from_boxed_name(&ident) {
            self.reject_args(&ident, args.as_ref())?;
            return Ok(TypeExpr::Boxed(kind));
        }
        if self.scope.contains(&ident) {
            self.reject_args(&ident, args.as_ref())?;
            return Ok(TypeExpr::Variable(ident));
        }

        Ok(TypeExpr::Named { name: ident, args })
    }

    fn parse_ident(&mut self) -> Result<String> {
        let rest = &self.input[self.pos..];
        let len = rest
            .char_indices()
            .take_while(|(i, c)| {
                if *i == 0 {
                    c.is_ascii_alphabetic() || *c == '_'
                } else {
                    c.is_ascii_alphanumeric() || *c == '_' || *c == '.'
                }
            })
            .count();
        if len == 0 {
            return Err(self.error("expected a type name"));
        }
        self.pos += len;
        Ok(rest[..len].to_string())
    }

    fn reject_args(&self, ident: &str, args: Option<&Vec<TypeExpr>>) -> Result<()> {
        if args.is_some() {
            return Err(self.error(format!("'{ident}' does not take type arguments")));
        }
        Ok(())
    }

    fn eat(&mut self, c: char) -> bool {
        if self.input[self.pos..].starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::type_parse(self.input, message)
    }
}
