//! `clipq submit <link>...` – queue links on the backend.

use anyhow::Result;
use clipq_core::form::Outcome;
use clipq_core::links;
use std::path::Path;

use super::Session;

/// Positional links first, then file links, in order.
pub fn gather_inputs(mut inputs: Vec<String>, from_file: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = from_file {
        inputs.extend(links::read_link_file(path)?);
    }
    Ok(inputs)
}

pub async fn run_submit(
    session: Session,
    inputs: Vec<String>,
    from_file: Option<&Path>,
) -> Result<Outcome> {
    let inputs = gather_inputs(inputs, from_file)?;
    session.run(move |h| h.submit_links(inputs)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_links_follow_positional_links() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# queued").unwrap();
        writeln!(file, "https://a.example/2").unwrap();
        let all = gather_inputs(vec!["https://a.example/1".to_string()], Some(file.path())).unwrap();
        assert_eq!(all, vec!["https://a.example/1", "https://a.example/2"]);
    }

    #[test]
    fn no_file_keeps_positional() {
        let all = gather_inputs(vec!["x".to_string()], None).unwrap();
        assert_eq!(all, vec!["x"]);
    }
}
