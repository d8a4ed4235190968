//! Context queries: short-circuit resolution of key-binding conditions
//!
//! A context query asks whether a named condition currently holds for a
//! view, e.g. whether a setting is on or how many selections are active.
//! Handlers are consulted in registration order and the first one that
//! commits to an answer wins, so handlers must return [`QueryResult::Unknown`]
//! for every key they do not govern.

use crate::core::hook::CallbackList;
use crate::core::subject::View;
use std::sync::Arc;
use tracing::trace;

/// The answer a context-query handler gives for one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryResult {
    /// The condition holds.
    Match,
    /// The condition does not hold.
    NoMatch,
    /// The handler does not govern this key; the next handler is consulted.
    Unknown,
}

impl QueryResult {
    /// Decisive answer from a boolean comparison outcome.
    pub fn from_match(matched: bool) -> Self {
        if matched {
            Self::Match
        } else {
            Self::NoMatch
        }
    }

    /// Whether this answer ends the resolution walk.
    pub fn is_decisive(self) -> bool {
        self != Self::Unknown
    }
}

/// Comparison operators a key binding can attach to a context condition.
/// This core's built-in handlers interpret only `Equal` and `NotEqual`;
/// the rest are carried through for handlers that understand them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Equal,
    NotEqual,
    RegexMatch,
    NotRegexMatch,
    RegexContains,
    NotRegexContains,
}

/// Comparison value attached to a context condition by a key binding.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Bool(bool),
    Str(String),
}

impl Operand {
    /// Integer coercion used by counting handlers. Numbers truncate;
    /// non-numeric operands coerce to 0 rather than failing, matching the
    /// tolerance key bindings rely on.
    pub fn as_int(&self) -> i64 {
        match self {
            Self::Number(n) => *n as i64,
            Self::Bool(_) | Self::Str(_) => 0,
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Callback signature for context-query handlers.
pub type QueryCallback =
    dyn Fn(&dyn View, &str, Op, &Operand, bool) -> QueryResult + Send + Sync;

/// The context-query hook. Unlike the multicast hooks, resolving walks the
/// handlers only until one returns a decisive answer.
pub struct QueryHook {
    name: Option<&'static str>,
    callbacks: CallbackList<QueryCallback>,
}

impl QueryHook {
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            callbacks: CallbackList::new(),
        }
    }

    pub fn register<F>(&self, callback: F)
    where
        F: Fn(&dyn View, &str, Op, &Operand, bool) -> QueryResult + Send + Sync + 'static,
    {
        self.callbacks.push(Arc::new(callback));
    }

    /// Consult handlers in registration order and return the first decisive
    /// answer, or `Unknown` once the sequence is exhausted. `match_all` is
    /// handed through to handlers untouched; compound-binding semantics live
    /// with the caller.
    pub fn resolve(
        &self,
        view: &dyn View,
        key: &str,
        op: Op,
        operand: &Operand,
        match_all: bool,
    ) -> QueryResult {
        trace!(hook = self.name(), key, ?op, ?operand, match_all, "query context");
        for callback in self.callbacks.snapshot() {
            let result = callback(view, key, op, operand, match_all);
            if result.is_decisive() {
                return result;
            }
        }
        trace!(hook = self.name(), key, "unknown context");
        QueryResult::Unknown
    }

    pub fn name(&self) -> &'static str {
        self.name.unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.len() == 0
    }
}

impl Default for QueryHook {
    fn default() -> Self {
        Self {
            name: None,
            callbacks: CallbackList::new(),
        }
    }
}
