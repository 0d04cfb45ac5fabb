//! Strongly-typed snippet name wrapper.

use crate::newtype_string::define_name;

define_name! {
    /// Name of a stored snippet.
    ///
    /// Case-sensitive and never empty. Prevents accidental mixing of snippet
    /// names with table names or raw SQL text.
    pub struct SnippetName => "snippet name";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_empty_name_rejected() {
        assert!(SnippetName::try_new("").is_none());
        assert!(matches!(
            SnippetName::parse(""),
            Err(CoreError::EmptyName { .. })
        ));
    }

    #[test]
    fn test_case_sensitive() {
        let lower = SnippetName::parse("orders").unwrap();
        let upper = SnippetName::parse("Orders").unwrap();
        assert_ne!(lower, upper);
        assert_eq!(lower, "orders");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<SnippetName, _> = serde_yaml::from_str("''");
        assert!(result.is_err());
        let name: SnippetName = serde_yaml::from_str("author_sub").unwrap();
        assert_eq!(name.as_str(), "author_sub");
    }
}
