//! Path reconstruction from discovery chains

use crate::graph::types::NodeId;
use std::collections::HashMap;

/// Walk `predecessors` back from `goal` to `start`.
///
/// Returns `None` if the chain breaks before reaching `start`.
pub(crate) fn reconstruct_path(
    start: &NodeId,
    goal: &NodeId,
    predecessors: &HashMap<NodeId, NodeId>,
) -> Option<Vec<NodeId>> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    while current != start {
        let pred = predecessors.get(current)?;
        // A chain longer than the map means a cycle.
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(pred.clone());
        current = pred;
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preds(pairs: &[(&str, &str)]) -> HashMap<NodeId, NodeId> {
        pairs
            .iter()
            .map(|(node, pred)| (NodeId::from(*node), NodeId::from(*pred)))
            .collect()
    }

    #[test]
    fn test_trivial_path() {
        let a = NodeId::from("A");
        let path = reconstruct_path(&a, &a, &HashMap::new()).unwrap();
        assert_eq!(path, vec![a]);
    }

    #[test]
    fn test_chain() {
        let map = preds(&[("B", "A"), ("E", "B"), ("H", "E")]);
        let path = reconstruct_path(&NodeId::from("A"), &NodeId::from("H"), &map).unwrap();
        let names: Vec<&str> = path.iter().map(NodeId::as_str).collect();
        assert_eq!(names, vec!["A", "B", "E", "H"]);
    }

    #[test]
    fn test_broken_chain() {
        let map = preds(&[("H", "E")]);
        assert!(reconstruct_path(&NodeId::from("A"), &NodeId::from("H"), &map).is_none());
    }

    #[test]
    fn test_cyclic_chain_terminates() {
        let map = preds(&[("B", "C"), ("C", "B")]);
        assert!(reconstruct_path(&NodeId::from("A"), &NodeId::from("B"), &map).is_none());
    }
}
