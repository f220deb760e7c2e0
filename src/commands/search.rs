use anyhow::Result;

use snag::IssueManager;

use crate::commands::list::print_table;

pub fn run(manager: &IssueManager, text: &str) -> Result<()> {
    print_table(&manager.search_by(text));
    Ok(())
}
