use anyhow::{bail, Result};

use snag::{Issue, IssueManager};

pub fn run(manager: &IssueManager, state: &str, label: Option<&str>, json: bool) -> Result<()> {
    let mut issues = match state {
        "open" => manager.opened_issues(),
        "closed" => manager.closed_issues(),
        "all" => manager.get_all().to_vec(),
        other => bail!("Invalid state '{}'. Must be one of: open, closed, all", other),
    };

    if let Some(label) = label {
        let matching = manager.filter_by_label(label);
        issues.retain(|issue| matching.contains(issue));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    print_table(&issues);
    Ok(())
}

pub(crate) fn print_table(issues: &[Issue]) {
    if issues.is_empty() {
        println!("No issues found.");
        return;
    }

    for issue in issues {
        let state = if issue.open { "[open]" } else { "[closed]" };
        println!(
            "#{:<4} {:8} {:<30} {:<12} {:>4}d",
            issue.id,
            state,
            truncate(&issue.name, 30),
            truncate(&issue.author, 12),
            issue.age_days
        );
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", truncated)
    }
}
