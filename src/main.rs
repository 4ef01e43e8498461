use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;

use wordsearch_builder::{
    config::Options, render, source, word, DropRejected, Error, Rejection, RejectionPolicy,
    Verdict, WordSearch, WordSearchConfig,
};

/// Builds a word search puzzle from a list of words, one per line, and writes it as an HTML page.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sets the source file
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Sets the destination directory
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Sets the maximum number of rows
    #[arg(short, long)]
    rows: Option<usize>,

    /// Sets the maximum number of columns
    #[arg(short, long)]
    columns: Option<usize>,

    /// Sets the title of the document
    #[arg(short, long)]
    title: Option<String>,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Drop unusable words without asking
    #[arg(short, long)]
    yes: bool,

    /// Log every placement
    #[arg(short, long)]
    verbose: bool,
}

/// Asks on the terminal whether a rejected word should be dropped.
struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> RejectionPolicy for Prompt<R, W> {
    fn decide(&mut self, word: &str, rejection: &Rejection) -> Verdict {
        let question = match rejection {
            Rejection::TooLong { .. } => format!("'{}' is too long.", word),
            Rejection::IllegalCharacters => format!(
                "'{}' contains illegal characters. Only letters are allowed.",
                word
            ),
        };

        loop {
            let asked = writeln!(
                self.output,
                "{}\nRemove word and continue? [Y]es/[N]o",
                question
            )
            .and_then(|()| self.output.flush());

            if let Err(e) = asked {
                log::error!("Couldn't ask about '{}': {}", word, e);
                return Verdict::Abort;
            }

            let mut answer = String::new();
            match self.input.read_line(&mut answer) {
                Ok(0) | Err(_) => return Verdict::Abort,
                Ok(_) => {}
            }

            match answer.trim_start().chars().next().map(|ch| ch.to_ascii_lowercase()) {
                Some('y') => return Verdict::Drop,
                Some('n') => return Verdict::Abort,
                _ => continue,
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    wordsearch_builder::logging::init_logger(cli.verbose);

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, Error::WordRejected { .. }) {
                eprintln!("Exiting...");
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), Error> {
    let settings = Options {
        source: cli.source,
        dest: cli.dest,
        num_columns: cli.columns,
        num_rows: cli.rows,
        title: cli.title,
    }
    .validate()?;

    let raw_words = source::read_words(&settings.source)?;

    let words = if cli.yes {
        word::check_words(
            &raw_words,
            settings.num_columns,
            settings.num_rows,
            &mut DropRejected,
        )?
    } else {
        let mut prompt = Prompt {
            input: io::stdin().lock(),
            output: io::stdout(),
        };
        word::check_words(
            &raw_words,
            settings.num_columns,
            settings.num_rows,
            &mut prompt,
        )?
    };

    let config = WordSearchConfig {
        num_rows: settings.num_rows,
        num_columns: settings.num_columns,
        words: &words,
        max_attempts: None,
    };

    let word_search = match cli.seed {
        Some(seed) => WordSearch::with_seed(&config, seed)?,
        None => WordSearch::new(&config)?,
    };

    log::debug!("\n{}", word_search);

    let path = render::write_html(&settings.dest, &word_search, &settings.title)?;
    let path = path.canonicalize().unwrap_or(path);

    println!("Word search created at: file://{}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    fn answer(input: &str) -> Verdict {
        let mut prompt = Prompt {
            input: input.as_bytes(),
            output: Vec::new(),
        };
        prompt.decide("tyrannosaurus", &Rejection::TooLong { length: 13, max: 12 })
    }

    #[test]
    fn prompt_answers() {
        assert_eq!(answer("y\n"), Verdict::Drop);
        assert_eq!(answer("Yes please\n"), Verdict::Drop);
        assert_eq!(answer("no\n"), Verdict::Abort);
        assert_eq!(answer("maybe\n\nN\n"), Verdict::Abort);
        assert_eq!(answer("what\ny\n"), Verdict::Drop);
        assert_eq!(answer(""), Verdict::Abort);
    }

    #[test]
    fn prompt_asks_until_answered() {
        let mut prompt = Prompt {
            input: "what\nn\n".as_bytes(),
            output: Vec::new(),
        };
        let verdict = prompt.decide("r2d2", &Rejection::IllegalCharacters);
        let asked = String::from_utf8(prompt.output).unwrap();

        assert_eq!(verdict, Verdict::Abort);
        assert_eq!(asked.matches("Remove word and continue? [Y]es/[N]o").count(), 2);
        assert!(asked.starts_with("'r2d2' contains illegal characters."));
    }

    #[test]
    fn prompt_aborts_when_it_cannot_ask() {
        let mut prompt = Prompt {
            input: "y\n".as_bytes(),
            output: ClosedOutput,
        };

        assert_eq!(
            prompt.decide("tyrannosaurus", &Rejection::TooLong { length: 13, max: 12 }),
            Verdict::Abort
        );
    }
}
