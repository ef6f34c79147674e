use super::*;

/// Merge history and conflicts into one set and group it by generation.
/// Descriptors without a leading number are dropped.
pub fn revision_groups(revisions: &DocumentRevisions) -> BTreeMap<u64, Vec<String>> {
    let mut revs: Vec<String> = revisions
        .revs_info
        .iter()
        .map(|info| info.rev.clone())
        .chain(revisions.conflicts.iter().cloned())
        .collect();
    // Lexicographic: descriptors only order numerically while generation
    // digit counts are equal (10-x sorts before 2-x).
    revs.sort();
    revs.dedup();

    let mut groups: BTreeMap<u64, Vec<String>> = BTreeMap::new();
    for rev in revs {
        if let Some(generation) = revision_generation(&rev) {
            groups.entry(generation).or_default().push(rev);
        }
    }
    groups
}

/// Render the generation groups as an outline: one line per sole occupant,
/// and for forks a generation line followed by one indented child per
/// descriptor. The winning revision is starred.
pub fn render_revision_tree(revisions: &DocumentRevisions) -> String {
    let mut lines = vec![format!("#id = {}", revisions.id)];
    for (generation, revs) in revision_groups(revisions) {
        if let [rev] = revs.as_slice() {
            lines.push(format!("##{}{}", rev, winner_mark(rev, &revisions.rev)));
        } else {
            lines.push(format!("##{}", generation));
            for rev in &revs {
                lines.push(format!("###{}{}", rev, winner_mark(rev, &revisions.rev)));
            }
        }
    }
    lines.join("\n")
}

fn winner_mark(rev: &str, winner: &str) -> &'static str {
    if rev == winner { " *" } else { "" }
}

#[cfg(test)]
#[path = "../tests/shell/revtree_tests.rs"]
mod tests;
