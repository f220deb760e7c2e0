use anyhow::Result;

use snag::{Issue, IssueManager};

#[allow(clippy::too_many_arguments)]
pub fn run(
    manager: &mut IssueManager,
    name: &str,
    age_days: i64,
    author: &str,
    labels: Vec<String>,
    project: &str,
    milestone: &str,
    assignee: &str,
    open: bool,
) -> Result<()> {
    let id = next_id(manager);
    manager.add(Issue {
        id,
        name: name.to_string(),
        age_days,
        author: author.to_string(),
        labels: labels.into_iter().collect(),
        project: project.to_string(),
        milestone: milestone.to_string(),
        assignee: assignee.to_string(),
        open,
    });

    println!("Added issue #{}", id);
    Ok(())
}

// The store does not assign ids; the CLI picks the next free one.
fn next_id(manager: &IssueManager) -> i64 {
    manager
        .get_all()
        .iter()
        .map(|issue| issue.id)
        .max()
        .unwrap_or(0)
        + 1
}
