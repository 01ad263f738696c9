use std::fmt;
use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use pathlabel::Limit;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::pathfmt;

/// A path next to the short label it is displayed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledPath {
    pub label: String,
    pub path: String,
}

impl fmt::Display for LabeledPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = pathfmt::elide_head(&self.path, 64);
        write!(f, "{:<32}  {}", self.label, path)
    }
}

/// Labels `paths` with the shortener, limited to the leading `limit` entries.
pub fn label_paths(paths: &[String], limit: Limit) -> Vec<LabeledPath> {
    let window = limit.window(paths);
    pathlabel::shorten(window)
        .into_iter()
        .zip(window)
        .map(|(label, path)| LabeledPath {
            label,
            path: path.clone(),
        })
        .collect()
}

/// The saved list as display strings, newest first.
pub fn saved_paths(cfg: &Config) -> Vec<String> {
    let mut seen = Vec::<&PathBuf>::new();
    let mut out = Vec::new();
    for p in cfg.files.paths.iter().rev() {
        if seen.contains(&p) {
            continue;
        }
        seen.push(p);
        if cfg.files.skip_missing && !p.exists() {
            debug!(path = %p.display(), "skipping missing file");
            continue;
        }
        out.push(pathfmt::display_path(p, cfg.output.tilde));
    }
    out
}

/// One path per non-blank line, surrounding whitespace removed.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if !line.is_empty() {
            out.push(line.to_string());
        }
    }
    Ok(out)
}
