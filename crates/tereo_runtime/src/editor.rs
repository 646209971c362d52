//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while tests drive it with scripted input.

use crate::highlight::TereoHighlighter;
use crate::repl::COMMANDS;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use std::borrow::Cow;
use tereo_foundation::{Error, ErrorKind, PatternKind, Result};
use tereo_lexicon::{Catalog, Curriculum};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Commands, pattern names, lesson ids and every catalog surface.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    let mut keywords: Vec<String> = COMMANDS.iter().map(ToString::to_string).collect();
    keywords.extend(PatternKind::ALL.iter().map(|k| k.name().to_string()));
    keywords.extend(Curriculum::standard().lessons().map(|l| l.id.clone()));
    keywords.extend(Catalog::standard().words().iter().map(|w| w.maori.clone()));
    keywords
}

/// Helper for rustyline that provides completion, hints and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct TereoHelper {
    #[rustyline(Completer)]
    completer: TereoCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: TereoHighlighter,
}

impl Highlighter for TereoHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for commands and words, with paths after `:save` and `:load`.
struct TereoCompleter {
    file_completer: FilenameCompleter,
    keywords: Vec<String>,
}

impl TereoCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
            keywords: default_keywords(),
        }
    }
}

impl Completer for TereoCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if line.starts_with(":save ") || line.starts_with(":load ") {
            return self.file_completer.complete(line, pos, ctx);
        }

        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = line[start..pos].to_lowercase();

        let candidates: Vec<Pair> = self
            .keywords
            .iter()
            .filter(|kw| kw.to_lowercase().starts_with(&word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<TereoHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = TereoHelper {
            completer: TereoCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: TereoHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}
