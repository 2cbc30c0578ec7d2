use std::io::{stdin, BufReader};
use std::time::Instant;

use serde::Serialize;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use wordtrie::error::WordlistError;
use wordtrie::wordlist::wordlist::{FileFormat, Wordlist};


/// Load a word list into a trie and list the words starting with each prefix.
#[derive(StructOpt)]
struct Cli {
    /// The word list to read, one word per line ("-" for stdin)
    #[structopt(parse(from_os_str))]
    path: std::path::PathBuf,
    /// Prefixes to complete
    #[structopt(required = true)]
    prefixes: Vec<String>,
    /// Column separator for multi-column lists
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word (needs --delimiter)
    #[structopt(short, long, requires = "delimiter")]
    column: Option<usize>,
    /// Print at most this many words per prefix
    #[structopt(short, long)]
    limit: Option<usize>,
    /// Print one JSON object per prefix instead of plain text
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    prefix: &'a str,
    count: usize,
    words: &'a [String],
    elapsed_ms: f64,
}

fn main() -> Result<(), WordlistError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::from_args();

    let format = match args.delimiter {
        Some(delimiter) => FileFormat::builder()
            .delimiter(delimiter)
            .word_column(args.column.unwrap_or(0))
            .build(),
        None => FileFormat::builder().build(),
    };

    let wl = if args.path.as_os_str() == "-" {
        Wordlist::from_reader(BufReader::new(stdin()), &format)?
    } else {
        Wordlist::from_file(&args.path, &format)?
    };

    for prefix in &args.prefixes {
        let start = Instant::now();
        let words = wl.complete(prefix);
        let elapsed_ms = start.elapsed().as_micros() as f64 / 1000.0;
        let shown = &words[..args.limit.unwrap_or(words.len()).min(words.len())];

        if args.json {
            let report = Report { prefix, count: words.len(), words: shown, elapsed_ms };
            match serde_json::to_string(&report) {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::error!("Could not encode report for {:?}: {}", prefix, e),
            }
        } else {
            println!("Words starting with '{}':", prefix);
            shown.iter().for_each(|w| println!("{}", w));
            println!("{} words in {}ms", words.len(), elapsed_ms);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;

    use crate::Cli;

    #[test]
    fn column_needs_delimiter() {
        assert!(Cli::from_iter_safe(["wordtrie", "words.txt", "ab", "-c", "2"]).is_err());

        let args = Cli::from_iter_safe(["wordtrie", "words.txt", "ab", "-d", ",", "-c", "2"]).unwrap();
        assert_eq!(args.delimiter, Some(','));
        assert_eq!(args.column, Some(2));
    }

    #[test]
    fn column_defaults_to_none() {
        let args = Cli::from_iter_safe(["wordtrie", "-", "ab", "acc"]).unwrap();
        assert_eq!(args.column, None);
        assert_eq!(args.prefixes, vec!["ab", "acc"]);
    }
}
