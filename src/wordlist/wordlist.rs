use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::error::WordlistError;
use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

pub struct Wordlist {
    trie: Trie,
}

/// How to pull one word out of each line of a word list.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    /// Column separator. Without one, the whole line is the word.
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default = 0)]
    word_column: usize,
    #[builder(default = true)]
    skip_blank: bool,
    /// Strip surrounding whitespace, including the `\r` of CRLF files.
    #[builder(default = true)]
    trim: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str, WordlistError> {
        let word = match self.delimiter {
            None => line,
            Some(delimiter) => line.split(delimiter)
                .nth(self.word_column)
                .ok_or_else(|| WordlistError::InvalidArgument {
                    line: line_no,
                    reason: format!("no column {} after splitting on {:?}",
                                    self.word_column, delimiter),
                })?,
        };
        Ok(if self.trim { word.trim() } else { word })
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new() }
    }

    pub fn from_file<P: AsRef<Path>>(filename: P, format: &FileFormat) -> Result<Wordlist, WordlistError> {
        info!("Reading words from {:?}", filename.as_ref());
        let file = File::open(filename)?;
        Self::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Result<Wordlist, WordlistError> {
        let mut wordlist = Wordlist::new();
        wordlist.load(reader, format)?;
        Ok(wordlist)
    }

    /// Adds every word in `reader`. On a malformed line the words before it
    /// stay loaded.
    pub fn load<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<usize, WordlistError> {
        let start = Instant::now();
        let mut count: usize = 0;
        let mut duplicates: usize = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let word = format.parse_line(&line, idx + 1)?;
            if word.is_empty() && format.skip_blank {
                debug!(line = idx + 1, "skipping blank line");
                continue;
            }
            if self.trie.add(word) {
                count += 1;
            } else {
                duplicates += 1;
            }
        }

        let elapsed = start.elapsed();
        info!("Read {} words in {}s [{} duplicates]",
              count, (elapsed.as_millis() as f64) / 1000.0, duplicates);
        Ok(count)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.trie.starts_with(prefix)
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn trie_mut(&mut self) -> &mut Trie {
        &mut self.trie
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Wordlist::new()
    }
}
