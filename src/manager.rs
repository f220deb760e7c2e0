use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::Issue;
use crate::store::IssueStore;

/// Query and state-transition facade over an [`IssueStore`].
///
/// All queries are linear scans that preserve insertion order. The wrapped
/// store is constructor-injected and owned.
#[derive(Debug, Default)]
pub struct IssueManager {
    store: IssueStore,
}

impl IssueManager {
    pub fn new(store: IssueStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &IssueStore {
        &self.store
    }

    pub fn add(&mut self, issue: Issue) {
        self.store.save(issue);
    }

    pub fn get_all(&self) -> &[Issue] {
        self.store.find_all()
    }

    pub fn opened_issues(&self) -> Vec<Issue> {
        self.filter(|issue| issue.open)
    }

    pub fn closed_issues(&self) -> Vec<Issue> {
        self.filter(|issue| !issue.open)
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<Issue>
    where
        P: Fn(&Issue) -> bool,
    {
        self.store
            .find_all()
            .iter()
            .filter(|issue| predicate(issue))
            .cloned()
            .collect()
    }

    pub fn filter_by_label(&self, label: &str) -> Vec<Issue> {
        self.filter(|issue| issue.labels.contains(label))
    }

    pub fn search_by(&self, text: &str) -> Vec<Issue> {
        self.filter(|issue| matches(issue, text))
    }

    /// All issues ordered by descending age, most stale first. Stable:
    /// equal ages keep insertion order.
    pub fn sort_by_date(&self) -> Vec<Issue> {
        let mut result = self.store.find_all().to_vec();
        result.sort_by(|a, b| b.age_days.cmp(&a.age_days));
        result
    }

    /// Ascending age, stable.
    pub fn sort_by_date_reverse(&self) -> Vec<Issue> {
        let mut result = self.store.find_all().to_vec();
        result.sort_by(|a, b| a.age_days.cmp(&b.age_days));
        result
    }

    /// Unknown ids delete nothing.
    pub fn remove_by_id(&mut self, id: i64) {
        self.store.remove_by_id(id);
    }

    pub fn open_issue(&mut self, id: i64) -> Result<()> {
        let issue = self
            .store
            .find_by_id_mut(id)
            .ok_or(TrackerError::NotFound(id))?;
        if !issue.open {
            issue.open = true;
            debug!(id, "opened issue");
        }
        Ok(())
    }

    pub fn close_issue(&mut self, id: i64) -> Result<()> {
        let issue = self
            .store
            .find_by_id_mut(id)
            .ok_or(TrackerError::NotFound(id))?;
        if issue.open {
            issue.open = false;
            debug!(id, "closed issue");
        }
        Ok(())
    }
}

/// Case-insensitive exact match against the issue's text fields: name,
/// author, project, milestone, assignee. First hit wins.
pub fn matches(issue: &Issue, text: &str) -> bool {
    issue.name.eq_ignore_ascii_case(text)
        || issue.author.eq_ignore_ascii_case(text)
        || issue.project.eq_ignore_ascii_case(text)
        || issue.milestone.eq_ignore_ascii_case(text)
        || issue.assignee.eq_ignore_ascii_case(text)
}
