use anyhow::Context;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum NormalizeError {
    #[error("line {line}: expected at least two '/' separators: {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// Drops the first two "/"-delimited segments of `line` and trims any
/// trailing line terminator. `docs/site/foo/bar.md` becomes `foo/bar.md`.
pub fn normalize(line: &str, line_no: usize) -> Result<String, NormalizeError> {
    let malformed = || NormalizeError::MalformedLine {
        line: line_no,
        content: line.trim_end().to_string(),
    };
    let after_first = line.split_once('/').ok_or_else(malformed)?.1;
    let after_second = after_first.split_once('/').ok_or_else(malformed)?.1;
    Ok(after_second.trim_end().to_string())
}

/// Reads every line of the deleted-paths file and collects the distinct
/// normalized suffixes. The first malformed line aborts the whole run;
/// skip-and-continue would silently shrink the output set.
pub fn collect_suffixes(path: &Path) -> anyhow::Result<HashSet<String>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    collect_from(BufReader::new(file))
}

pub fn collect_from(reader: impl BufRead) -> anyhow::Result<HashSet<String>> {
    let mut seen = HashSet::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        seen.insert(normalize(&line, idx + 1)?);
    }
    Ok(seen)
}

pub fn into_sorted(suffixes: HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = suffixes.into_iter().collect();
    sorted.sort();
    sorted
}
