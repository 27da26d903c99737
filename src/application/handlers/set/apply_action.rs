//! ApplyActionHandler - Command handler for recording one action in a live set.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::SetId;
use crate::domain::set::{Set, SetError};
use crate::domain::statistics::ActionCode;
use crate::ports::SetRepository;

/// Command to record an action code against a set.
#[derive(Debug, Clone)]
pub struct ApplyActionCommand {
    pub set_id: SetId,
    pub action_code: String,
}

/// Result of a recorded action.
#[derive(Debug, Clone)]
pub struct ApplyActionResult {
    pub set: Set,
    pub action: ActionCode,
}

/// Handler for recording actions.
pub struct ApplyActionHandler {
    repository: Arc<dyn SetRepository>,
}

impl ApplyActionHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ApplyActionCommand) -> Result<ApplyActionResult, SetError> {
        // 1. Load
        let mut set = self
            .repository
            .find_by_id(&cmd.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(cmd.set_id))?;
        let read_at = *set.last_update();

        // 2. Apply
        let action = set.apply_action(&cmd.action_code)?;

        // 3. Persist against the state we read
        if let Err(err) = self.repository.update(&set, &read_at).await {
            warn!(set_id = %cmd.set_id, action = %action, error = %err, "action write rejected");
            return Err(err.into());
        }

        let (team, opponent) = set.score();
        debug!(set_id = %cmd.set_id, action = %action, team, opponent, "action recorded");
        Ok(ApplyActionResult { set, action })
    }
}
