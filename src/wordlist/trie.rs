use std::fmt::{Debug, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::iterators::Words;
use crate::wordlist::trienode::TrieNode;

/// A set of words stored as a prefix tree.
///
/// The trie owns its root and every node below it; dropping the trie drops
/// the whole tree. Nodes are created on insert and pruned on remove, so no
/// reachable node is ever both childless and unmarked.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: Default::default(),
            len: 0,
        }
    }

    /// Adds `word`, creating any missing nodes along its path.
    ///
    /// The empty string is a valid word: it marks the root. Returns `false`
    /// if the word was already present, in which case nothing changes.
    pub fn insert(&mut self, word: &str) -> bool {
        let end = word.chars()
            .fold(&mut self.root, |node, c| node.get_or_create_child(c));
        let added = !end.is_terminal;
        end.is_terminal = true;
        if added {
            self.len += 1;
        }
        added
    }

    /// Whether `word` itself was inserted. A word that only exists as the
    /// prefix of a longer one is not contained.
    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word).map(|x| x.is_terminal()).unwrap_or(false)
    }

    /// Whether any inserted word begins with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }

    /// All words beginning with `prefix`, each word ahead of its own
    /// extensions and siblings in ascending character order. An unknown
    /// prefix gives an empty list.
    pub fn starts_with(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix).collect()
    }

    /// Lazy form of [`Trie::starts_with`].
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        Words::new(self.get_node(prefix), prefix)
    }

    pub fn iter(&self) -> Words<'_> {
        self.words_with_prefix("")
    }

    /// Removes `word` and prunes the nodes only it was using. Removing a
    /// word that is not present is a no-op returning `false`.
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = self.root.remove(word.chars());
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of reachable nodes, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.traverse_prefix(&mut |_| count += 1);
        count
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        word.chars().try_fold(&self.root, |node, c| node.get_child(c))
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> bool {
        self.insert(word)
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn remove(&mut self, word: &str) -> bool {
        Trie::remove(self, word)
    }

    fn complete(&self, prefix: &str) -> Vec<String> {
        self.starts_with(prefix)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        iter.into_iter().for_each(|x| { self.insert(x.as_ref()); });
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl Clone for Trie {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Trie {}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
