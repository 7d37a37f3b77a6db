//! Contains [`parse_instance_file`], the loader for the whitespace-separated instance file format.
use std::fs;
use std::path::Path;

use crate::domain::{Job, ProblemInstance};

use super::error::InstanceError;

/// The parsed result of [`parse_instance_file`]. An alias for [`ProblemInstance`]: the parser's
/// only job is turning the on-disk format into the domain type the solver already understands,
/// so no separate intermediate representation is warranted.
pub type ParsedInstance = ProblemInstance;

struct Token {
    text: String,
    line: usize,
}

/// Flattens the file into `(token, 1-based originating line)` pairs. Blank lines contribute no
/// tokens and are otherwise ignored — the format's "section boundaries are blank lines" rule is
/// purely a human-readability convention; like the reference parser (which reads with `ifstream
/// >>`, which itself skips all whitespace including newlines), token order is all that matters.
fn tokenize(content: &str) -> Vec<Token> {
    content
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            line.split_whitespace().map(move |text| Token {
                text: text.to_string(),
                line: idx + 1,
            })
        })
        .collect()
}

struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    fn next(&mut self, field: &'static str) -> Result<&Token, InstanceError> {
        let token = self.tokens.get(self.pos).ok_or_else(|| InstanceError::Malformed {
            line: self.tokens.last().map_or(0, |t| t.line),
            reason: format!("unexpected end of file while reading {field}"),
        })?;
        self.pos += 1;
        Ok(token)
    }

    fn next_i64(&mut self, field: &'static str) -> Result<i64, InstanceError> {
        let token = self.next(field)?;
        token.text.parse::<i64>().map_err(|_| InstanceError::Malformed {
            line: token.line,
            reason: format!("expected an integer for {field}, found `{}`", token.text),
        })
    }

    fn next_f64(&mut self, field: &'static str) -> Result<f64, InstanceError> {
        let token = self.next(field)?;
        token.text.parse::<f64>().map_err(|_| InstanceError::Malformed {
            line: token.line,
            reason: format!("expected a number for {field}, found `{}`", token.text),
        })
    }
}

fn warn_clamped(field: &str, index: usize, value: i64) {
    eprintln!("\x1b[31mwarning:\x1b[0m negative {field} ({value}) at index {index}, clamping to 0");
}

/// Parses an instance file at `path` into a [`ParsedInstance`]. See the crate's input file format
/// documentation for the exact section layout. Negative setup times and penalty rates are
/// clamped to `0` with a warning printed to stderr; every other malformed input is an `Err`, and
/// the solver is never invoked on it.
pub fn parse_instance_file(path: impl AsRef<Path>) -> Result<ParsedInstance, InstanceError> {
    let content = fs::read_to_string(path)?;
    let mut stream = TokenStream {
        tokens: tokenize(&content),
        pos: 0,
    };

    let n = stream.next_i64("job count")?;
    if n <= 0 {
        return Err(InstanceError::InvalidJobCount(n));
    }
    let n = n as usize;

    let mut processing_times = Vec::with_capacity(n);
    for i in 0..n {
        let value = stream.next_i64("processing times")?;
        if value <= 0 {
            return Err(InstanceError::Malformed {
                line: 0,
                reason: format!("processing time for job {i} must be positive, found {value}"),
            });
        }
        processing_times.push(value as u64);
    }

    let mut due_times = Vec::with_capacity(n);
    for _ in 0..n {
        let value = stream.next_i64("due times")?;
        due_times.push(value.max(0) as u64);
    }

    let mut penalty_rates = Vec::with_capacity(n);
    for i in 0..n {
        let value = stream.next_f64("penalty rates")?;
        if value < 0.0 {
            warn_clamped("penalty rate", i, value as i64);
            penalty_rates.push(0.0);
        } else {
            penalty_rates.push(value);
        }
    }

    let mut initial_setup_times = Vec::with_capacity(n);
    for i in 0..n {
        let value = stream.next_i64("initial setup times")?;
        if value < 0 {
            warn_clamped("initial setup time", i, value);
            initial_setup_times.push(0);
        } else {
            initial_setup_times.push(value as u64);
        }
    }

    let mut setup_times = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            let value = stream.next_i64("setup matrix entry")?;
            if value < 0 {
                warn_clamped(&format!("setup time [{i}][{j}]"), i * n + j, value);
                row.push(0);
            } else {
                row.push(value as u64);
            }
        }
        setup_times.push(row);
    }

    let jobs = (0..n)
        .map(|id| Job::new(id, processing_times[id], due_times[id], penalty_rates[id]))
        .collect();

    Ok(ProblemInstance::new(jobs, setup_times, initial_setup_times))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_file(content: &str) -> tempfile_path::TempFile {
        tempfile_path::TempFile::with_content(content)
    }

    // Minimal ad-hoc temp-file helper: avoids pulling in a `tempfile` dependency the teacher
    // doesn't have, mirroring the reference parser's direct filesystem use.
    mod tempfile_path {
        use std::fs;
        use std::io::Write;
        use std::path::PathBuf;

        pub struct TempFile {
            path: PathBuf,
        }

        impl TempFile {
            pub fn with_content(content: &str) -> TempFile {
                let mut path = std::env::temp_dir();
                path.push(format!(
                    "smsp_parser_test_{}_{:?}.txt",
                    std::process::id(),
                    std::thread::current().id()
                ));
                let mut file = fs::File::create(&path).expect("create temp file");
                file.write_all(content.as_bytes()).expect("write temp file");
                TempFile { path }
            }

            pub fn path(&self) -> &std::path::Path {
                &self.path
            }
        }

        impl Drop for TempFile {
            fn drop(&mut self) {
                let _ = fs::remove_file(&self.path);
            }
        }
    }

    #[test]
    fn parses_well_formed_instance() {
        let content = "3\n\n2 3 1\n10 10 10\n1 1 1\n\n1 1 1\n0 1 1\n1 0 1\n1 1 0\n";
        let file = write_temp_file(content);
        let instance = parse_instance_file(file.path()).unwrap();
        assert_eq!(instance.number_of_jobs(), 3);
        assert_eq!(instance.job(1).processing_time(), 3);
        assert_eq!(instance.setup_time(0, 1), 1);
        assert_eq!(instance.initial_setup_time(2), 1);
    }

    #[test]
    fn rejects_non_positive_job_count() {
        let file = write_temp_file("0\n\n\n\n\n\n");
        let err = parse_instance_file(file.path()).unwrap_err();
        assert!(matches!(err, InstanceError::InvalidJobCount(0)));
    }

    #[test]
    fn rejects_truncated_file() {
        let file = write_temp_file("3\n\n2 3\n");
        let err = parse_instance_file(file.path()).unwrap_err();
        assert!(matches!(err, InstanceError::Malformed { .. }));
    }

    #[test]
    fn clamps_negative_penalty_rate_to_zero() {
        let content = "1\n\n5\n10\n-2\n\n0\n0\n";
        let file = write_temp_file(content);
        let instance = parse_instance_file(file.path()).unwrap();
        assert_eq!(instance.job(0).penalty_rate(), 0.0);
    }

    #[test]
    fn clamps_negative_setup_time_to_zero() {
        let content = "1\n\n5\n10\n1\n\n-3\n0\n";
        let file = write_temp_file(content);
        let instance = parse_instance_file(file.path()).unwrap();
        assert_eq!(instance.initial_setup_time(0), 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_instance_file("/nonexistent/path/to/instance.txt").unwrap_err();
        assert!(matches!(err, InstanceError::Io(_)));
    }
}
