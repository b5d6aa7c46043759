//! FROM list entries: literal table references and nested builders

use crate::traits::SimpleQueryBuilder;

/// One entry of a FROM list.
///
/// A sub-query is only borrowed. It is built once while the FROM fragment is
/// assembled, which also resets it, and is never stored by the parent.
#[derive(Debug)]
pub enum TableRef<'a> {
    Literal(String),
    SubQuery(&'a mut dyn SimpleQueryBuilder),
}

impl<'a> TableRef<'a> {
    pub fn literal(name: impl Into<String>) -> Self {
        Self::Literal(name.into())
    }

    pub fn sub_query(builder: &'a mut dyn SimpleQueryBuilder) -> Self {
        Self::SubQuery(builder)
    }

    pub fn is_sub_query(&self) -> bool {
        matches!(self, Self::SubQuery(_))
    }
}

impl From<&str> for TableRef<'_> {
    fn from(name: &str) -> Self {
        Self::Literal(name.to_string())
    }
}

impl From<String> for TableRef<'_> {
    fn from(name: String) -> Self {
        Self::Literal(name)
    }
}

/// Ordered FROM list; literals and sub-queries may be freely intermixed
#[derive(Debug, Default)]
pub struct Tables<'a>(Vec<TableRef<'a>>);

impl<'a> Tables<'a> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(mut self, table: impl Into<TableRef<'a>>) -> Self {
        self.0.push(table.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sub_query_count(&self) -> usize {
        self.0.iter().filter(|table| table.is_sub_query()).count()
    }
}

impl<'a> IntoIterator for Tables<'a> {
    type Item = TableRef<'a>;
    type IntoIter = std::vec::IntoIter<TableRef<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> FromIterator<TableRef<'a>> for Tables<'a> {
    fn from_iter<I: IntoIterator<Item = TableRef<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> From<TableRef<'a>> for Tables<'a> {
    fn from(table: TableRef<'a>) -> Self {
        Self(vec![table])
    }
}

impl From<&str> for Tables<'_> {
    fn from(name: &str) -> Self {
        Self(vec![TableRef::from(name)])
    }
}

impl From<String> for Tables<'_> {
    fn from(name: String) -> Self {
        Self(vec![TableRef::from(name)])
    }
}

impl<'a> From<Vec<TableRef<'a>>> for Tables<'a> {
    fn from(tables: Vec<TableRef<'a>>) -> Self {
        Self(tables)
    }
}

impl From<Vec<&str>> for Tables<'_> {
    fn from(names: Vec<&str>) -> Self {
        names.into_iter().map(TableRef::from).collect()
    }
}
