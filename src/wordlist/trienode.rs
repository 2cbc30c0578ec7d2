use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// One position in the trie. The path from the root to a node spells the
/// prefix it stands for.
#[derive(Default)]
pub struct TrieNode {
    pub(crate) children: BTreeMap<char, TrieNode>,
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    pub fn new() -> TrieNode {
        Default::default()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Children in ascending character order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// A node that is neither a word nor on the way to one.
    pub fn is_dead_weight(&self) -> bool {
        self.children.is_empty() && !self.is_terminal
    }

    /// Unmarks `word` below this node and cuts off the branch only it was
    /// using. Returns whether the word was present.
    ///
    /// The cut point is the deepest node on the path that is the start node,
    /// a word itself, or a fork; everything past it becomes dead weight.
    pub(crate) fn remove<I>(&mut self, word: I) -> bool
        where I: IntoIterator<Item=char> {
        let path: Vec<char> = word.into_iter().collect();

        let mut cut = 0;
        let mut node: &TrieNode = self;
        for (depth, c) in path.iter().enumerate() {
            if depth == 0 || node.is_terminal || node.children.len() > 1 {
                cut = depth;
            }
            node = match node.children.get(c) {
                Some(child) => child,
                None => return false,
            };
        }
        if !node.is_terminal {
            return false;
        }
        let prune = !path.is_empty() && node.children.is_empty();

        let stop = if prune { cut } else { path.len() };
        let mut node: &mut TrieNode = self;
        for c in &path[..stop] {
            node = match node.children.get_mut(c) {
                Some(child) => child,
                None => return false,
            };
        }
        if prune {
            tracing::trace!(depth = cut, letter = %path[cut], "pruning dead branch");
            node.children.remove(&path[cut]);
        } else {
            node.is_terminal = false;
        }
        true
    }

    pub(crate) fn traverse_prefix<F>(&self, f: &mut F)
        where F: FnMut(&TrieNode) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            f(node);
            stack.extend(node.children.values());
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trienode::TrieNode;

    fn insert(root: &mut TrieNode, word: &str) {
        word.chars()
            .fold(root, |node, c| node.get_or_create_child(c))
            .is_terminal = true;
    }

    #[test]
    fn fresh_node_is_dead_weight() {
        let node = TrieNode::new();
        assert!(node.is_dead_weight());
        assert!(!node.is_terminal());
    }

    #[test]
    fn remove_keeps_nodes_shared_with_longer_word() {
        let mut root = TrieNode::new();
        insert(&mut root, "AB");
        insert(&mut root, "ABC");

        assert!(root.remove("AB".chars()));

        let b = root.get_child('A').and_then(|a| a.get_child('B')).unwrap();
        assert!(!b.is_terminal());
        assert!(b.get_child('C').unwrap().is_terminal());
    }

    #[test]
    fn remove_of_missing_path_changes_nothing() {
        let mut root = TrieNode::new();
        insert(&mut root, "AB");

        assert!(!root.remove("AC".chars()));
        assert!(!root.remove("A".chars()));
        assert!(!root.remove("ABC".chars()));

        let b = root.get_child('A').and_then(|a| a.get_child('B')).unwrap();
        assert!(b.is_terminal());
        assert_eq!(root.children().count(), 1);
    }

    #[test]
    fn remove_cuts_below_fork() {
        let mut root = TrieNode::new();
        insert(&mut root, "ABCD");
        insert(&mut root, "ABX");

        assert!(root.remove("ABCD".chars()));

        let b = root.get_child('A').and_then(|a| a.get_child('B')).unwrap();
        assert!(b.get_child('C').is_none());
        assert!(b.get_child('X').unwrap().is_terminal());
    }

    #[test]
    fn deep_chain_drops_without_recursion() {
        let mut root = TrieNode::new();
        insert(&mut root, &"z".repeat(100_000));
        drop(root);
    }

    #[test]
    fn traverse_prefix_visits_every_node() {
        let mut root = TrieNode::new();
        insert(&mut root, "AB");
        insert(&mut root, "AC");
        let mut count = 0;
        root.traverse_prefix(&mut |_| count += 1);
        assert_eq!(count, 4);
    }
}
