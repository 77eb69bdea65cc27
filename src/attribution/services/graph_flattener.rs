use crate::attribution::domain::DependencyNode;
use std::collections::HashSet;

/// GraphFlattener reduces dependency forests to a deduplicated node list
///
/// Pure algorithm with no I/O. Identity is `group:name:version`: each
/// coordinate is emitted once, at its first occurrence, but the children of
/// every occurrence are walked. A module listed without children in one
/// configuration and with runtime-only children in another therefore
/// contributes both. Nodes own their children, so the walk always ends.
pub struct GraphFlattener;

impl GraphFlattener {
    /// All distinct nodes reachable from `roots`, in depth-first pre-order
    pub fn flatten<'a, I>(roots: I) -> Vec<&'a DependencyNode>
    where
        I: IntoIterator<Item = &'a DependencyNode>,
    {
        let mut roots: Vec<&DependencyNode> = roots.into_iter().collect();
        roots.reverse();
        Self::walk(roots, None)
    }

    /// Coordinates of every transitive child of `node` (not `node` itself)
    pub fn transitive_children(node: &DependencyNode) -> Vec<String> {
        let worklist: Vec<&DependencyNode> = node.children().iter().rev().collect();
        Self::walk(worklist, Some(node.coordinate()))
            .into_iter()
            .map(DependencyNode::coordinate)
            .collect()
    }

    /// Transitive children of `coordinate` merged over all of its
    /// occurrences in `roots`, in first-seen order
    pub fn transitive_children_in<'a, I>(roots: I, coordinate: &str) -> Vec<String>
    where
        I: IntoIterator<Item = &'a DependencyNode>,
    {
        let mut worklist: Vec<&DependencyNode> = roots.into_iter().collect();
        worklist.reverse();

        let mut occurrences = Vec::new();
        while let Some(node) = worklist.pop() {
            if node.coordinate() == coordinate {
                occurrences.push(node);
            }
            worklist.extend(node.children().iter().rev());
        }

        let children: Vec<&DependencyNode> = occurrences
            .iter()
            .rev()
            .flat_map(|node| node.children().iter().rev())
            .collect();
        Self::walk(children, Some(coordinate.to_string()))
            .into_iter()
            .map(DependencyNode::coordinate)
            .collect()
    }

    fn walk<'a>(mut worklist: Vec<&'a DependencyNode>, exclude: Option<String>) -> Vec<&'a DependencyNode> {
        let mut emitted: HashSet<String> = exclude.into_iter().collect();
        let mut flattened = Vec::new();

        while let Some(node) = worklist.pop() {
            if emitted.insert(node.coordinate()) {
                flattened.push(node);
            }
            worklist.extend(node.children().iter().rev());
        }

        flattened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> DependencyNode {
        DependencyNode::new("g", name, "1.0")
    }

    #[test]
    fn test_flatten_first_seen_order() {
        let roots = vec![
            node("a").with_child(node("b").with_child(node("c"))),
            node("d").with_child(node("b")),
        ];

        let names: Vec<&str> = GraphFlattener::flatten(&roots)
            .iter()
            .map(|n| n.name())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_flatten_across_configurations() {
        let compile = vec![node("a"), node("b")];
        let runtime = vec![node("b"), node("c")];

        let flattened = GraphFlattener::flatten(compile.iter().chain(runtime.iter()));
        let names: Vec<&str> = flattened.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_flatten_self_nested_coordinate() {
        let roots = vec![node("a").with_child(node("a").with_child(node("b")))];
        let names: Vec<&str> = GraphFlattener::flatten(&roots)
            .iter()
            .map(|n| n.name())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_flatten_walks_children_of_repeated_coordinate() {
        let compile = vec![node("b")];
        let runtime = vec![node("b").with_child(node("c").with_child(node("d")))];

        let flattened = GraphFlattener::flatten(compile.iter().chain(runtime.iter()));
        let names: Vec<&str> = flattened.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["b", "c", "d"]);
        // the first occurrence is the one emitted
        assert!(std::ptr::eq(flattened[0], &compile[0]));
    }

    #[test]
    fn test_transitive_children_in_merges_occurrences() {
        let roots = vec![
            node("a").with_child(node("x")),
            node("b").with_child(node("a").with_child(node("y")).with_child(node("x"))),
        ];

        assert_eq!(
            GraphFlattener::transitive_children_in(&roots, "g:a:1.0"),
            vec!["g:x:1.0", "g:y:1.0"]
        );
        assert!(GraphFlattener::transitive_children_in(&roots, "g:x:1.0").is_empty());
    }

    #[test]
    fn test_versions_are_distinct_nodes() {
        let roots = vec![
            DependencyNode::new("g", "a", "1.0"),
            DependencyNode::new("g", "a", "2.0"),
        ];
        assert_eq!(GraphFlattener::flatten(&roots).len(), 2);
    }

    #[test]
    fn test_transitive_children() {
        let parent = node("a")
            .with_child(node("b").with_child(node("c")))
            .with_child(node("d"));

        assert_eq!(
            GraphFlattener::transitive_children(&parent),
            vec!["g:b:1.0", "g:c:1.0", "g:d:1.0"]
        );
        assert!(GraphFlattener::transitive_children(&node("leaf")).is_empty());
    }
}
