use super::*;

/// Tombstone every conflicting revision, leaving the server's chosen winner
/// as the sole survivor.
pub fn unsupervised_plan(revisions: &DocumentRevisions) -> Vec<Tombstone> {
    revisions
        .conflicts
        .iter()
        .map(|rev| Tombstone::new(&revisions.id, rev))
        .collect()
}

/// Tombstone every conflicting revision except the nominated one, plus the
/// current winner when it differs, so the nominee ends up as the only
/// remaining revision. The nominee must be a listed conflict.
pub fn supervised_plan(
    revisions: &DocumentRevisions,
    winner: &str,
) -> Result<Vec<Tombstone>, CommandError> {
    if !revisions.conflicts.iter().any(|rev| rev == winner) {
        return Err(CommandError::InvalidInput(format!(
            "The revision {} does not exist in the document.",
            winner
        )));
    }
    let mut plan: Vec<Tombstone> = revisions
        .conflicts
        .iter()
        .filter(|rev| rev.as_str() != winner)
        .map(|rev| Tombstone::new(&revisions.id, rev))
        .collect();
    if revisions.rev != winner {
        plan.push(Tombstone::new(&revisions.id, &revisions.rev));
    }
    Ok(plan)
}

#[cfg(test)]
#[path = "../tests/shell/repair_tests.rs"]
mod tests;
