use anyhow::{bail, Result};

use snag::IssueManager;

pub fn run(manager: &IssueManager, id: i64) -> Result<()> {
    let issue = match manager.store().find_by_id(id) {
        Some(issue) => issue,
        None => bail!("Issue #{} not found", id),
    };

    let state = if issue.open { "open" } else { "closed" };
    println!("Issue #{}: {}", issue.id, issue.name);
    println!("State:     {}", state);
    println!("Author:    {}", issue.author);
    println!("Project:   {}", issue.project);
    println!("Milestone: {}", issue.milestone);
    println!("Assignee:  {}", issue.assignee);
    println!("Updated:   {}d ago", issue.age_days);
    if !issue.labels.is_empty() {
        let labels: Vec<&str> = issue.labels.iter().map(String::as_str).collect();
        println!("Labels:    {}", labels.join(", "));
    }

    Ok(())
}
