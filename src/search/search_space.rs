use crate::search::{Plan, State, Task};
use segvec::{Linear, SegVec};

/// Identifier of a node in a [`SearchSpace`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    fn index(&self) -> usize {
        self.0
    }
}

/// Sentinel parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// Sentinel operator index of the root node.
pub const NO_OPERATOR: usize = usize::MAX;

/// A [`SearchNode`] records how a state was reached: the incoming operator,
/// the parent node, and the depth `g`. Nodes are immutable after creation;
/// whether a node is open, closed, or dead lives in the per-lookahead visited
/// sets and the driver's caches, not on the node itself.
#[derive(Debug, Clone)]
pub struct SearchNode {
    state: State,
    parent: NodeId,
    operator: usize,
    g: u32,
}

impl SearchNode {
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn operator(&self) -> usize {
        self.operator
    }

    pub fn g(&self) -> u32 {
        self.g
    }
}

/// Arena of parent-linked search nodes. The parent-only links make the node
/// graph a tree rooted at the initial state, so plan extraction is a walk to
/// the root. Nodes are deliberately not deduplicated by state: a lookahead
/// that revisits a state builds a fresh node whose parent chain leads back to
/// the anchor the lookahead started from, which is what makes the extracted
/// plan match the improvement chain the driver actually followed.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut nodes = SegVec::new();
        nodes.push(SearchNode {
            state: initial_state,
            parent: NO_NODE,
            operator: NO_OPERATOR,
            g: 0,
        });
        Self { nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn make_child(&mut self, parent: NodeId, operator: usize, state: State) -> NodeId {
        let g = self.node(parent).g() + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            state,
            parent,
            operator,
            g,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.nodes.get(id.index()).expect("Invalid node id")
    }

    pub fn state(&self, id: NodeId) -> &State {
        &self.node(id).state
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `goal_node` to the root, collecting the
    /// operator names along the way in execution order.
    pub fn extract_plan(&self, goal_node: NodeId, task: &Task) -> Plan {
        let mut steps = vec![];
        let mut current = self.node(goal_node);
        while current.parent() != NO_NODE {
            steps.push(task.operator(current.operator()).name().to_owned());
            current = self.node(current.parent());
        }
        steps.reverse();
        Plan::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn root_has_no_parent_and_zero_depth() {
        let space = SearchSpace::new(state(&["at room-0"]));
        let root = space.root();
        assert_eq!(space.node(root).parent(), NO_NODE);
        assert_eq!(space.node(root).operator(), NO_OPERATOR);
        assert_eq!(space.node(root).g(), 0);
    }

    #[test]
    fn children_increment_depth() {
        let task = corridor_task(2);
        let mut space = SearchSpace::new(task.initial_state().clone());
        let first = space.make_child(space.root(), 0, state(&["at room-1"]));
        let second = space.make_child(first, 1, state(&["at room-2"]));
        assert_eq!(space.node(first).g(), 1);
        assert_eq!(space.node(second).g(), 2);
        assert_eq!(space.node(second).parent(), first);
    }

    #[test]
    fn extract_plan_reverses_the_parent_walk() {
        let task = corridor_task(2);
        let mut space = SearchSpace::new(task.initial_state().clone());
        let first = space.make_child(space.root(), 0, state(&["at room-1"]));
        let second = space.make_child(first, 1, state(&["at room-2"]));

        let plan = space.extract_plan(second, &task);
        assert_eq!(plan.steps(), &["move-0-1".to_owned(), "move-1-2".to_owned()]);

        assert!(space.extract_plan(space.root(), &task).is_empty());
    }
}
