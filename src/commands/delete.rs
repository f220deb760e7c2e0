use anyhow::Result;

use snag::IssueManager;

pub fn run(manager: &mut IssueManager, id: i64) -> Result<()> {
    let before = manager.get_all().len();
    manager.remove_by_id(id);
    let removed = before - manager.get_all().len();

    if removed == 0 {
        println!("No issue #{} found, nothing removed", id);
    } else {
        println!("Removed issue #{}", id);
    }
    Ok(())
}
