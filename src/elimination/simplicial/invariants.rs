use crate::debug_invariants::DebugInvariants;
use crate::elim_error::ElimError;
use crate::elimination::classifier::Classification;
use crate::elimination::counters::count_triangles;
use crate::graph::UndirectedGraph;

use super::{SimplicialSet, modality};

const WEIGHT_TOLERANCE: f64 = 1e-9;

impl<G: UndirectedGraph> DebugInvariants for SimplicialSet<'_, G> {
    /// Recount everything from the graph and compare with the incremental
    /// state. `O(V + E + triangles)`.
    fn validate_invariants(&self) -> Result<(), ElimError> {
        let fail = |msg: String| Err(ElimError::InvariantViolation(msg));

        let (triangles, adjacency) = count_triangles(&*self.graph);
        if triangles.len() != self.triangles.len() {
            return fail(format!(
                "{} triangle entries for {} edges",
                self.triangles.len(),
                triangles.len()
            ));
        }
        for (edge, want) in triangles.iter() {
            let got = self.triangles.get(edge);
            if got != Some(want) {
                return fail(format!("edge {edge}: triangle count {got:?}, expected {want}"));
            }
        }
        if adjacency.len() != self.adjacency.len() {
            return fail(format!(
                "{} adjacency entries for {} nodes",
                self.adjacency.len(),
                adjacency.len()
            ));
        }
        for (n, want) in adjacency.iter() {
            let got = self.adjacency.get(n);
            if got != Some(want) {
                return fail(format!("node {n}: adjacent pairs {got:?}, expected {want}"));
            }
        }

        let mods = self.log_modalities;
        for n in self.graph.nodes() {
            let want = modality(mods, n)
                + self.graph.neighbours(n).map(|y| modality(mods, y)).sum::<f64>();
            let got = self.weight(n);
            if (got - want).abs() > WEIGHT_TOLERANCE * want.abs().max(1.0) {
                return fail(format!("node {n}: log-weight {got}, expected {want}"));
            }
        }

        if self.classifier.len() != self.graph.node_count() {
            return fail(format!(
                "{} classified nodes for {} graph nodes",
                self.classifier.len(),
                self.graph.node_count()
            ));
        }
        for (n, class) in self.classifier.iter() {
            if !self.graph.exists(n) {
                return fail(format!("classified node {n} is not in the graph"));
            }
            for other in [
                Classification::Simplicial,
                Classification::AlmostSimplicial,
                Classification::QuasiSimplicial,
            ] {
                let queued = self.classifier.queue(other).is_some_and(|q| q.contains(n));
                if queued != (class == other) {
                    return fail(format!("node {n} tagged {class} but queued={queued} as {other}"));
                }
            }
            if self.changed.contains(n) {
                continue;
            }
            let fresh = self.compute_class(n);
            if fresh != class {
                return fail(format!("up-to-date node {n} tagged {class}, computed {fresh}"));
            }
            if let Some(p) = self.classifier.queue(class).and_then(|q| q.priority(n)) {
                if p != self.weight(n) {
                    return fail(format!("node {n}: priority {p} differs from log-weight"));
                }
            }
        }
        for n in self.changed.snapshot() {
            if !self.graph.exists(n) {
                return fail(format!("stale node {n} is not in the graph"));
            }
        }
        Ok(())
    }
}
