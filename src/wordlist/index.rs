/// A mutable set of words that can be queried by prefix.
pub trait Index {
    /// Returns whether the word was newly added.
    fn add(&mut self, word: &str) -> bool;
    fn contains(&self, word: &str) -> bool;
    /// Returns whether the word was present.
    fn remove(&mut self, word: &str) -> bool;
    /// Every word beginning with `prefix`.
    fn complete(&self, prefix: &str) -> Vec<String>;

    /// Adds every item, returning how many were new.
    fn add_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item = &'a str> {
        items.into_iter().filter(|x| self.add(x)).count()
    }
}
