//! Single-pass render state.

use tracing::warn;

use crate::ast::Expr;
use crate::config::{RenderConfig, ValidationPolicy};
use crate::error::{Result, SqlGenError};

/// Mutable state threaded through one statement render.
///
/// Carries the output buffer, the two contextual flags read by expression
/// nodes, and the configuration that decides what a validation failure does.
#[derive(Debug)]
pub struct RenderContext<'a> {
    out: String,
    qualify: bool,
    parenthesize: bool,
    config: &'a RenderConfig,
}

impl<'a> RenderContext<'a> {
    /// Creates an empty context.
    #[must_use]
    pub const fn new(config: &'a RenderConfig) -> Self {
        Self {
            out: String::new(),
            qualify: false,
            parenthesize: false,
            config,
        }
    }

    /// Appends raw SQL text.
    pub fn push_str(&mut self, sql: &str) {
        self.out.push_str(sql);
    }

    /// Returns the output buffer for in-place writers.
    pub fn buffer(&mut self) -> &mut String {
        &mut self.out
    }

    /// Returns true if columns render as `table.column`.
    #[must_use]
    pub const fn qualify(&self) -> bool {
        self.qualify
    }

    /// Turns column qualification on or off.
    pub fn set_qualify(&mut self, qualify: bool) {
        self.qualify = qualify;
    }

    /// Returns true if the next binary operation must wrap itself in parentheses.
    #[must_use]
    pub const fn parenthesize(&self) -> bool {
        self.parenthesize
    }

    /// Sets the flag read by the next binary operation.
    pub fn set_parenthesize(&mut self, parenthesize: bool) {
        self.parenthesize = parenthesize;
    }

    /// Renders an expression that sits directly in a clause, never wrapped.
    ///
    /// # Errors
    ///
    /// Returns the first violation found in the expression tree.
    pub fn render_top(&mut self, expr: &Expr) -> Result<()> {
        self.parenthesize = false;
        expr.render(self)
    }

    /// Applies the validation policy to a check.
    ///
    /// The violation is only built when the check fails.
    ///
    /// # Errors
    ///
    /// Returns the violation under [`ValidationPolicy::Strict`].
    pub fn check(&self, ok: bool, violation: impl FnOnce() -> SqlGenError) -> Result<()> {
        if ok {
            return Ok(());
        }
        match self.config.validation {
            ValidationPolicy::Strict => Err(violation()),
            ValidationPolicy::Warn => {
                let err = violation();
                warn!(kind = ?err.kind(), "rendering invalid SQL: {err}");
                Ok(())
            }
            ValidationPolicy::Trusted => Ok(()),
        }
    }

    /// Consumes the context and returns the rendered SQL.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}
