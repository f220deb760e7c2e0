use anyhow::Result;

use snag::IssueManager;

pub fn open(manager: &mut IssueManager, id: i64) -> Result<()> {
    manager.open_issue(id)?;
    println!("Opened issue #{}", id);
    Ok(())
}

pub fn close(manager: &mut IssueManager, id: i64) -> Result<()> {
    manager.close_issue(id)?;
    println!("Closed issue #{}", id);
    Ok(())
}
