use std::collections::BTreeSet;

use plexus_core::errors::{ErrorInfo, PlexusError};
use plexus_core::{DigraphSink, EdgeId, HypergraphView, NodeId, SimpleGraph};

struct PairView {
    edge: BTreeSet<NodeId>,
}

impl HypergraphView for PairView {
    type Node = NodeId;
    type Edge = EdgeId;

    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new(self.edge.clone().into_iter().collect::<Vec<_>>().into_iter())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_> {
        Box::new(vec![EdgeId::from_raw(0)].into_iter())
    }

    fn members(&self, edge: &EdgeId) -> Result<&BTreeSet<NodeId>, PlexusError> {
        if edge.as_raw() == 0 {
            Ok(&self.edge)
        } else {
            Err(PlexusError::Graph(ErrorInfo::new("unknown-edge", "edge does not exist")))
        }
    }
}

struct PathGraph;

impl SimpleGraph for PathGraph {
    type Node = u8;

    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = u8> + '_> {
        Box::new(vec![0, 1, 2].into_iter())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (u8, u8)> + '_> {
        Box::new(vec![(0, 1), (1, 2)].into_iter())
    }

    fn neighbors(&self, node: &u8) -> Result<Vec<u8>, PlexusError> {
        Ok(match node {
            0 => vec![1],
            1 => vec![0, 2],
            _ => vec![1],
        })
    }
}

#[derive(Default)]
struct ArcLog(Vec<(char, char)>, Vec<char>);

impl DigraphSink<char> for ArcLog {
    fn add_node(&mut self, node: char) {
        self.1.push(node);
    }

    fn add_edge(&mut self, source: char, target: char) {
        self.0.push((source, target));
    }
}

#[test]
fn views_are_usable_through_traits() {
    let view = PairView {
        edge: [NodeId::from_raw(0), NodeId::from_raw(1)].into_iter().collect(),
    };
    assert_eq!(view.nodes().len(), 2);
    assert_eq!(view.members(&EdgeId::from_raw(0)).unwrap().len(), 2);
    assert!(view.members(&EdgeId::from_raw(1)).is_err());

    let graph = PathGraph;
    assert_eq!(graph.edges().count(), 2);
    assert_eq!(graph.neighbors(&1).unwrap(), vec![0, 2]);

    let mut sink = ArcLog::default();
    sink.add_node('a');
    sink.add_edge('a', 'b');
    assert_eq!(sink.0, vec![('a', 'b')]);
}
