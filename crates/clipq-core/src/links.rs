//! Collecting user-entered links into an ordered, de-duplicated list.
//!
//! Entries that are empty after trimming are dropped, as are repeats of a
//! link already seen. The first occurrence keeps its position.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Normalized links ready to be submitted, in insertion order.
///
/// Stored links are the trimmed entries, so `" a "` is submitted as `"a"`
/// and counts as a repeat of `"a"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkList {
    links: Vec<String>,
    seen: HashSet<String>,
}

impl LinkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry. Returns false if it was blank or a duplicate.
    pub fn push(&mut self, raw: &str) -> bool {
        let link = raw.trim();
        if link.is_empty() || self.seen.contains(link) {
            return false;
        }
        self.seen.insert(link.to_string());
        self.links.push(link.to_string());
        true
    }

    pub fn extend<I, S>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for input in inputs {
            self.push(input.as_ref());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.links
    }

    pub fn into_vec(self) -> Vec<String> {
        self.links
    }
}

impl<S: AsRef<str>> FromIterator<S> for LinkList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = LinkList::new();
        list.extend(iter);
        list
    }
}

/// Reads link lines from a reader. Blank lines and `#` comments are skipped.
pub fn read_link_lines<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line.context("read link line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.push(trimmed.to_string());
    }
    Ok(out)
}

/// Reads link lines from `path`, or from stdin when `path` is `-`.
pub fn read_link_file(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        return read_link_lines(io::stdin().lock());
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("open link file {}", path.display()))?;
    read_link_lines(file)
}
