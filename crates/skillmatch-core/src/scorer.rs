//! Candidate/project compatibility scoring.
//!
//! For every candidate and project that each carry at least one degree-1
//! skill and at least one degree-2 neighbor, computes how well the
//! candidate's reachable skills cover the project's required skills.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{EntitySkills, GraphSnapshot};

/// One scored (candidate, project) pair.
///
/// `first_degree_compatibility` is the unrounded fraction of the project's
/// degree-1 skills the candidate shares. `second_degree_compatibility` is
/// the same ratio over the degree-2 sets, rounded half-to-even to 0 or 1.
/// The asymmetry is deliberate and part of the scoring contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityRecord {
    pub candidate: String,
    pub project: String,
    pub first_degree_compatibility: f64,
    pub second_degree_compatibility: u8,
    pub match_skills1: BTreeSet<String>,
    pub match_skills2: BTreeSet<String>,
}

/// Score every eligible (candidate, project) pair in the snapshot.
///
/// A pair is eligible only when both sides have non-empty `skills1` and
/// `skills2`; anything else is silently excluded so the project-side
/// denominators are never zero. Pure and deterministic: records come out
/// in snapshot order, candidates outermost.
pub fn score_snapshot(snapshot: &GraphSnapshot) -> Vec<CompatibilityRecord> {
    let mut records = Vec::new();

    for candidate in &snapshot.candidates {
        if candidate.skills1.is_empty() || candidate.skills2.is_empty() {
            continue;
        }
        for project in &snapshot.projects {
            if project.skills1.is_empty() || project.skills2.is_empty() {
                continue;
            }
            records.push(score_pair(candidate, project));
        }
    }

    records
}

fn score_pair(candidate: &EntitySkills, project: &EntitySkills) -> CompatibilityRecord {
    let match_skills1: BTreeSet<String> = candidate
        .skills1
        .intersection(&project.skills1)
        .cloned()
        .collect();
    let match_skills2: BTreeSet<String> = candidate
        .skills2
        .intersection(&project.skills2)
        .cloned()
        .collect();

    let first_degree = match_skills1.len() as f64 / project.skills1.len() as f64;
    let second_degree = round_ratio_half_even(match_skills2.len(), project.skills2.len());

    CompatibilityRecord {
        candidate: candidate.name.clone(),
        project: project.name.clone(),
        first_degree_compatibility: first_degree,
        second_degree_compatibility: second_degree,
        match_skills1,
        match_skills2,
    }
}

/// Round `num / den` to the nearest integer, ties to even, on the exact
/// rational. `num <= den` and `den > 0` hold for intersection ratios, so
/// the result is always 0 or 1.
fn round_ratio_half_even(num: usize, den: usize) -> u8 {
    match (2 * num).cmp(&den) {
        Ordering::Less => 0,
        Ordering::Greater => 1,
        // Exactly one half: the nearest even integer in [0, 1] is 0.
        Ordering::Equal => 0,
    }
}
