use crate::models::Issue;

/// Ordered in-memory collection of issues.
///
/// Insertion order is preserved. Id uniqueness is the caller's concern:
/// duplicates are stored as-is and lookups return the first match.
#[derive(Debug, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
}

impl IssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Read-only view of the stored sequence, in insertion order.
    pub fn find_all(&self) -> &[Issue] {
        &self.issues
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: i64) -> Option<&mut Issue> {
        self.issues.iter_mut().find(|issue| issue.id == id)
    }

    /// Removes every issue with the given id, not just the first.
    pub fn remove_by_id(&mut self, id: i64) {
        self.issues.retain(|issue| issue.id != id);
    }

    pub fn save_all(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    /// Removes every stored issue that is equal, field for field, to any
    /// issue in the given slice.
    pub fn remove_all(&mut self, issues: &[Issue]) {
        self.issues.retain(|issue| !issues.contains(issue));
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: i64, name: &str, age_days: i64, open: bool) -> Issue {
        Issue {
            id,
            name: name.to_string(),
            age_days,
            author: "A1".to_string(),
            labels: ["L1".to_string()].into_iter().collect(),
            project: "P1".to_string(),
            milestone: "M1".to_string(),
            assignee: "As1".to_string(),
            open,
        }
    }

    #[test]
    fn test_save_preserves_insertion_order() {
        let mut store = IssueStore::new();
        store.save(issue(3, "c", 30, true));
        store.save(issue(1, "a", 10, true));
        store.save(issue(2, "b", 20, false));

        let ids: Vec<i64> = store.find_all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        // Duplicate ids are allowed; the first one wins.
        let mut store = IssueStore::new();
        store.save(issue(1, "first", 10, true));
        store.save(issue(1, "second", 20, true));

        assert_eq!(store.find_by_id(1).unwrap().name, "first");
    }

    #[test]
    fn test_find_by_id_absent_is_none() {
        let mut store = IssueStore::new();
        store.save(issue(1, "a", 10, true));

        assert!(store.find_by_id(2).is_none());
    }

    #[test]
    fn test_find_by_id_mut_allows_flag_edit() {
        let mut store = IssueStore::new();
        store.save(issue(1, "a", 10, true));

        store.find_by_id_mut(1).unwrap().open = false;
        assert!(!store.find_by_id(1).unwrap().open);
    }

    #[test]
    fn test_remove_by_id_removes_all_matches() {
        let mut store = IssueStore::new();
        store.save(issue(1, "a", 10, true));
        store.save(issue(2, "b", 20, true));
        store.save(issue(1, "c", 30, false));

        store.remove_by_id(1);

        let ids: Vec<i64> = store.find_all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_remove_by_id_unknown_is_noop() {
        let mut store = IssueStore::new();
        store.save(issue(1, "a", 10, true));

        store.remove_by_id(99);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_all_appends_in_order() {
        let mut store = IssueStore::new();
        store.save(issue(1, "a", 10, true));
        store.save_all(vec![issue(2, "b", 20, true), issue(3, "c", 30, false)]);

        let ids: Vec<i64> = store.find_all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_all_uses_full_field_equality() {
        let mut store = IssueStore::new();
        store.save(issue(1, "a", 10, true));
        store.save(issue(2, "b", 20, true));

        // An equal-valued copy removes the stored record.
        store.remove_all(&[issue(1, "a", 10, true)]);
        assert_eq!(store.len(), 1);

        // A record differing in a single field does not match.
        store.remove_all(&[issue(2, "b", 20, false)]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_all()[0].id, 2);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut store = IssueStore::new();
        assert!(store.is_empty());

        store.save(issue(1, "a", 10, true));
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
