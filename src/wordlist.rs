pub mod trie;
pub mod trienode;
pub mod index;
pub mod iterators;
pub mod wordlist;
