//! A prefix tree over `char` sequences with exact lookup, prefix
//! enumeration and pruning deletion, plus a loader that fills one from a
//! plain-text word list.
//!
//! ```
//! use wordtrie::wordlist::trie::Trie;
//!
//! let mut trie: Trie = ["ab", "abs", "act"].into_iter().collect();
//! assert_eq!(trie.starts_with("ab"), vec!["ab", "abs"]);
//! trie.remove("abs");
//! assert!(!trie.contains("abs"));
//! ```

pub mod error;
pub mod wordlist;
