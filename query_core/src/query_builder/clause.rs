//! Clause kinds and per-builder clause storage

use config::EmptyClausePolicy;
use std::fmt;

/// One named segment of a SELECT statement.
///
/// Declaration order is the canonical serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClauseKind {
    Select,
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Offset,
}

impl ClauseKind {
    pub const COUNT: usize = 8;

    /// Every clause in canonical order
    pub const ALL: [ClauseKind; Self::COUNT] = [
        ClauseKind::Select,
        ClauseKind::From,
        ClauseKind::Where,
        ClauseKind::GroupBy,
        ClauseKind::Having,
        ClauseKind::OrderBy,
        ClauseKind::Limit,
        ClauseKind::Offset,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            ClauseKind::Select => "SELECT",
            ClauseKind::From => "FROM",
            ClauseKind::Where => "WHERE",
            ClauseKind::GroupBy => "GROUP BY",
            ClauseKind::Having => "HAVING",
            ClauseKind::OrderBy => "ORDER BY",
            ClauseKind::Limit => "LIMIT",
            ClauseKind::Offset => "OFFSET",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Fragment operands of one builder, one slot per [`ClauseKind`].
///
/// A slot holds the operand text without its keyword; `None` means the
/// clause was never set. `Some("")` is a keyword-only fragment, produced by
/// an empty argument list, whose meaning depends on [`EmptyClausePolicy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    slots: [Option<String>; ClauseKind::COUNT],
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the operand for `kind`, replacing any previous one
    pub fn set(&mut self, kind: ClauseKind, operand: impl Into<String>) {
        self.slots[kind.slot()] = Some(operand.into());
    }

    pub fn operand(&self, kind: ClauseKind) -> Option<&str> {
        self.slots[kind.slot()].as_deref()
    }

    /// Formatted fragment for `kind`, keyword included
    pub fn fragment(&self, kind: ClauseKind) -> Option<String> {
        self.operand(kind)
            .map(|operand| Self::render(kind, operand))
    }

    /// Whether `kind` counts as set under `policy`
    pub fn is_set(&self, kind: ClauseKind, policy: EmptyClausePolicy) -> bool {
        match (self.operand(kind), policy) {
            (None, _) => false,
            (Some(_), EmptyClausePolicy::KeywordOnlyIsSet) => true,
            (Some(operand), EmptyClausePolicy::KeywordOnlyIsUnset) => !operand.is_empty(),
        }
    }

    /// Fragments that count as set under `policy`, in canonical order
    pub fn fragments(
        &self,
        policy: EmptyClausePolicy,
    ) -> impl Iterator<Item = (ClauseKind, String)> + '_ {
        ClauseKind::ALL
            .into_iter()
            .filter(move |kind| self.is_set(*kind, policy))
            .filter_map(move |kind| self.fragment(kind).map(|fragment| (kind, fragment)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Reset every slot to unset
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn render(kind: ClauseKind, operand: &str) -> String {
        if operand.is_empty() {
            kind.keyword().to_string()
        } else {
            format!("{} {}", kind.keyword(), operand)
        }
    }
}
