use anyhow::Result;

use snag::IssueManager;

use crate::commands::list::print_table;

pub fn run(manager: &IssueManager, reverse: bool) -> Result<()> {
    let issues = if reverse {
        manager.sort_by_date_reverse()
    } else {
        manager.sort_by_date()
    };
    print_table(&issues);
    Ok(())
}
