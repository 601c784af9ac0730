use glob::Pattern;
use indexmap::IndexSet;

/// Append-only set of logical names issued by one engine.
///
/// Names are kept in issue order. There is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    names: IndexSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count issued names matching a glob pattern
    pub fn count_matching(&self, pattern: &Pattern) -> usize {
        self.names.iter().filter(|n| pattern.matches(n)).count()
    }

    /// Issue the next name under `prefix`, of the form `{prefix}-{seq:03}`.
    ///
    /// The sequence is one more than the number of names already matching
    /// `{prefix}-*`, so numbers under one prefix only ever grow.
    pub fn issue(&mut self, prefix: &str) -> String {
        let pattern = sequence_pattern(prefix);
        let sequence = self.count_matching(&pattern) + 1;
        let name = format!("{}-{:03}", prefix, sequence);
        self.names.insert(name.clone());
        name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// `{prefix}-*`, with the prefix matched literally.
///
/// An escaped literal followed by `-*` always compiles.
fn sequence_pattern(prefix: &str) -> Pattern {
    Pattern::new(&format!("{}-*", Pattern::escape(prefix)))
        .expect("escaped prefix is a valid glob")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_sequences_per_prefix() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.issue("app-p-ec2"), "app-p-ec2-001");
        assert_eq!(registry.issue("app-p-ec2"), "app-p-ec2-002");
        assert_eq!(registry.issue("app-p-asg"), "app-p-asg-001");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_issue_order_preserved() {
        let mut registry = NameRegistry::new();
        registry.issue("x-d-b");
        registry.issue("x-d-a");
        let names: Vec<&str> = registry.iter().collect();
        assert_eq!(names, vec!["x-d-b-001", "x-d-a-001"]);
    }

    #[test]
    fn test_prefix_is_matched_literally() {
        let mut registry = NameRegistry::new();
        registry.issue("a?-p-b");
        registry.issue("[ab]-p-b");
        // `a?` must not match `ab`, `[ab]` must not match `a`
        assert_eq!(registry.issue("ab-p-b"), "ab-p-b-001");
        assert_eq!(registry.issue("a-p-b"), "a-p-b-001");
        assert_eq!(registry.issue("a?-p-b"), "a?-p-b-002");
    }

    #[test]
    fn test_metacharacter_prefixes_issue_names() {
        let mut registry = NameRegistry::new();
        for prefix in ["*-p-b", "a]-p-b", "[-p-b", "a\\b-p-b"] {
            assert_eq!(registry.issue(prefix), format!("{}-001", prefix));
        }
    }

    #[test]
    fn test_sequence_grows_past_three_digits() {
        let mut registry = NameRegistry::new();
        let last = (0..1000)
            .map(|_| registry.issue("p-e-r"))
            .last()
            .unwrap();
        assert_eq!(last, "p-e-r-1000");
        assert!(registry.contains("p-e-r-999"));
    }
}
