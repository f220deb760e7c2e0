use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub name: String,
    /// Days since the issue was last updated.
    pub age_days: i64,
    pub author: String,
    pub labels: BTreeSet<String>,
    pub project: String,
    pub milestone: String,
    pub assignee: String,
    pub open: bool,
}
