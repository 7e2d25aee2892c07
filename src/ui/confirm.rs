//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Ask the user to confirm a destructive action.
///
/// `yes` skips the prompt. In batch mode without `yes` the action is declined
/// (fails safe) since nobody can answer.
pub fn confirm_action(prompt: &str, yes: bool, batch: bool) -> Result<bool, dialoguer::Error> {
    if yes {
        return Ok(true);
    }
    if batch {
        eprintln!("Refusing to continue in batch mode without --yes: {}", prompt);
        return Ok(false);
    }
    Confirm::new().with_prompt(prompt).default(false).interact()
}
