use anyhow::Result;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::files::LabeledPath;
use crate::ui;

/// How far ahead the best match must score to be taken without asking.
const CLEAR_LEAD: i64 = 25;

/// Finds the saved file best matching `query`, asking when the top matches are close.
pub fn find_by_query(items: Vec<LabeledPath>, query: &str, interactive: bool) -> Result<LabeledPath> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("empty file query");
    }

    let scored = score(items, query);
    if scored.is_empty() {
        anyhow::bail!("no file matches for: {query}");
    }
    choose(scored, interactive)
}

fn score(items: Vec<LabeledPath>, query: &str) -> Vec<(i64, LabeledPath)> {
    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored = items
        .into_iter()
        .filter_map(|item| {
            let hay = format!("{} {}", item.label, item.path);
            matcher.fuzzy_match(&hay, query).map(|score| (score, item))
        })
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
}

fn choose(mut scored: Vec<(i64, LabeledPath)>, interactive: bool) -> Result<LabeledPath> {
    if scored.len() == 1 || !interactive {
        return Ok(scored.remove(0).1);
    }
    if scored[0].0 >= scored[1].0 + CLEAR_LEAD {
        return Ok(scored.remove(0).1);
    }
    let options = scored
        .into_iter()
        .take(12)
        .map(|(_, item)| item)
        .collect::<Vec<_>>();
    ui::pick_file(&options)
}
