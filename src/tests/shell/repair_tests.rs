use super::*;

use crate::model::RevInfo;

fn conflicted(winner: &str, conflicts: &[&str]) -> DocumentRevisions {
    DocumentRevisions {
        id: "doc1".to_string(),
        rev: winner.to_string(),
        revs_info: vec![RevInfo {
            rev: winner.to_string(),
            status: "available".to_string(),
        }],
        conflicts: conflicts.iter().map(|rev| rev.to_string()).collect(),
    }
}

fn planned_revs(plan: &[Tombstone]) -> Vec<&str> {
    plan.iter().map(|t| t.rev.as_str()).collect()
}

#[test]
fn unsupervised_plan_tombstones_every_conflict() {
    let doc = conflicted("3-a", &["3-b", "3-c"]);
    let plan = unsupervised_plan(&doc);
    assert_eq!(planned_revs(&plan), vec!["3-b", "3-c"]);
    assert!(plan.iter().all(|t| t.deleted && t.id == "doc1"));
}

#[test]
fn unsupervised_plan_never_touches_the_winner() {
    let doc = conflicted("3-a", &["3-b", "3-c"]);
    let plan = unsupervised_plan(&doc);
    assert!(plan.iter().all(|t| t.rev != "3-a"));
}

#[test]
fn supervised_plan_spares_the_nominee_and_removes_the_old_winner() {
    let doc = conflicted("3-a", &["3-b", "3-c"]);
    let plan = supervised_plan(&doc, "3-b").expect("nominee is a listed conflict");
    assert_eq!(planned_revs(&plan), vec!["3-c", "3-a"]);
}

#[test]
fn supervised_plan_skips_the_winner_when_it_is_the_nominee_already() {
    // The store cannot nominate its own winner as a conflict, but the plan
    // rule holds regardless: nothing tombstones the revision that stays.
    let doc = conflicted("3-b", &["3-b", "3-c"]);
    let plan = supervised_plan(&doc, "3-b").expect("nominee is a listed conflict");
    assert_eq!(planned_revs(&plan), vec!["3-c"]);
}

#[test]
fn an_unlisted_nominee_is_invalid_input() {
    let doc = conflicted("3-a", &["3-b", "3-c"]);
    match supervised_plan(&doc, "9-nope") {
        Err(CommandError::InvalidInput(message)) => {
            assert!(message.contains("9-nope"));
        }
        other => panic!("expected InvalidInput, got {:?}", other.map(|p| p.len())),
    }
}
