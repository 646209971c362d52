//! Input highlighting for the REPL.
//!
//! Catalog words are painted in their card colour, so a learner sees the
//! sentence structure while typing it.

use std::borrow::Cow;

use tereo_lexicon::Catalog;

const CYAN: &str = "\x1b[36m";
const MAGENTA: &str = "\x1b[35m";
const RESET: &str = "\x1b[0m";

/// Longest multi-word surface tried when matching, e.g. `Tāmaki Makaurau`.
const MAX_SURFACE_WORDS: usize = 3;

/// Highlighter for commands and Māori sentences.
pub struct TereoHighlighter {
    catalog: &'static Catalog,
}

impl TereoHighlighter {
    /// Creates a highlighter over the standard catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Catalog::standard())
    }

    /// Creates a highlighter over the given catalog.
    #[must_use]
    pub const fn with_catalog(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    /// Highlight a line of input.
    ///
    /// A leading `:command` is cyan, numbers are magenta, and runs of words
    /// naming a catalog surface take that card's colour. Whitespace is kept
    /// as typed.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let spans = word_spans(line);
        if spans.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut painted = false;
        let mut last_end = 0;
        let mut i = 0;

        while i < spans.len() {
            let (start, end) = spans[i];
            result.push_str(&line[last_end..start]);
            let word = &line[start..end];

            if i == 0 && word.starts_with(':') {
                paint(&mut result, CYAN, word);
                painted = true;
                last_end = end;
                i += 1;
                continue;
            }

            if word.chars().all(|c| c.is_ascii_digit()) {
                paint(&mut result, MAGENTA, word);
                painted = true;
                last_end = end;
                i += 1;
                continue;
            }

            let max = MAX_SURFACE_WORDS.min(spans.len() - i);
            let found = (1..=max).rev().find_map(|n| {
                let run_end = spans[i + n - 1].1;
                let run = line[start..run_end].trim_end_matches(['.', ',', '!', '?']);
                self.catalog
                    .by_surface(run)
                    .map(|w| (n, run_end, w.color.ansi()))
            });

            match found {
                Some((n, run_end, color)) => {
                    paint(&mut result, color, &line[start..run_end]);
                    painted = true;
                    last_end = run_end;
                    i += n;
                }
                None => {
                    result.push_str(word);
                    last_end = end;
                    i += 1;
                }
            }
        }
        result.push_str(&line[last_end..]);

        if painted {
            Cow::Owned(result)
        } else {
            Cow::Borrowed(line)
        }
    }
}

impl Default for TereoHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn paint(out: &mut String, color: &str, text: &str) {
    out.push_str(color);
    out.push_str(text);
    out.push_str(RESET);
}

/// Byte ranges of whitespace-separated words.
fn word_spans(line: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, line.len()));
    }
    spans
}
