use std::collections::btree_map;

use crate::wordlist::trienode::TrieNode;

/// Depth-first, pre-order walk over the words below one node.
///
/// Each stack frame is the remaining children of one node on the current
/// path; `path` always holds the prefix plus one letter per frame above the
/// first, so backing out of a frame pops exactly one letter.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<btree_map::Iter<'a, char, TrieNode>>,
    path: String,
    pending: Option<String>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(node: Option<&'a TrieNode>, prefix: &str) -> Words<'a> {
        match node {
            None => Words { stack: vec![], path: String::new(), pending: None },
            Some(node) => Words {
                stack: vec![node.children.iter()],
                path: prefix.to_string(),
                pending: node.is_terminal.then(|| prefix.to_string()),
            },
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some((c, child)) => {
                    self.path.push(*c);
                    self.stack.push(child.children.iter());
                    if child.is_terminal {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
        None
    }
}
