use tracing::info;

use crate::{EntityControls, Result, VoteOutcome, VoteRequest, VoteView};

/// Reflect a validated reply on the page.
///
/// `Error` outcomes are not handled here: they carry no page change and the
/// caller decides how to notify.
pub fn apply_outcome<V: VoteView>(
    view: &V,
    request: &VoteRequest,
    outcome: &VoteOutcome,
) -> Result<()> {
    let (clear_both, votes) = match *outcome {
        VoteOutcome::Add { votes } | VoteOutcome::Update { votes } => (true, votes),
        VoteOutcome::Delete { votes } => (false, votes),
        VoteOutcome::Error => return Ok(()),
    };

    let mut controls = view.locate(&request.key)?;
    let current = request.direction;

    if clear_both {
        controls.set_active(current.opposite(), false);
        controls.set_active(current, true);
    } else {
        controls.set_active(current, false);
    }
    controls.set_votes(votes);

    info!(
        entity = %request.key,
        direction = %current,
        result = outcome.result().as_str(),
        votes,
        "Vote applied"
    );
    Ok(())
}
