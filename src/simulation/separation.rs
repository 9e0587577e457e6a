//! Pairwise displacement vectors between particle sets

use crate::simulation::states::NVec3;

/// All pairwise displacements between a query set and a reference set,
/// flattened row-major:
/// `deltas[i * reference.len() + j] = query[i] - reference[j]`
///
/// Defined for distinct sets (field sampling) and for a set against
/// itself (self-interaction, zero diagonal).
pub fn pairwise_deltas(query: &[NVec3], reference: &[NVec3]) -> Vec<NVec3> {
    let mut deltas = Vec::with_capacity(query.len() * reference.len());
    for qi in query {
        for rj in reference {
            deltas.push(qi - rj);
        }
    }
    deltas
}
