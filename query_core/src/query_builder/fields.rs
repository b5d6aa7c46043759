//! Expression lists accepted by the list-valued clauses

/// Ordered list of expressions (field names, conditions, sort keys).
///
/// Converts from a single string or from any sequence of strings, so both
/// `"user".into()` and `["user", "last_name"].into()` work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<String>);

/// Conditions for WHERE and HAVING, joined with ` AND `
pub type Conditions = Fields;

impl Fields {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(mut self, expression: impl Into<String>) -> Self {
        self.0.push(expression.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl From<&str> for Fields {
    fn from(expression: &str) -> Self {
        Self(vec![expression.to_string()])
    }
}

impl From<String> for Fields {
    fn from(expression: String) -> Self {
        Self(vec![expression])
    }
}

impl<S: Into<String>> From<Vec<S>> for Fields {
    fn from(expressions: Vec<S>) -> Self {
        expressions.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Fields {
    fn from(expressions: [S; N]) -> Self {
        expressions.into_iter().collect()
    }
}

impl From<&[&str]> for Fields {
    fn from(expressions: &[&str]) -> Self {
        expressions.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Fields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_expression() {
        let fields = Fields::from("user");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.join(", "), "user");
    }

    #[test]
    fn test_sequence_keeps_order() {
        let fields: Fields = vec!["b", "a", "c"].into();
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);

        let fields: Fields = ["x", "y"].into();
        assert_eq!(fields.join(" AND "), "x AND y");

        let names = vec!["one".to_string(), "two".to_string()];
        let fields = Fields::from(names);
        assert_eq!(fields.join(", "), "one, two");
    }

    #[test]
    fn test_empty_sequence() {
        let fields = Fields::from(Vec::<&str>::new());
        assert!(fields.is_empty());
        assert_eq!(fields.join(", "), "");
    }

    #[test]
    fn test_push_chain() {
        let fields = Fields::new().push("id").push("name");
        assert_eq!(fields.join(", "), "id, name");
    }
}
