//! The main REPL implementation.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::serialize::{load_from_file, save_to_file};
use crate::session::Session;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tereo_foundation::{Card, Error, ErrorContext, ErrorKind, PatternKind, Result};
use tereo_grammar::{FeedbackKind, ValidationResult};

/// Every REPL command, for completion and help.
pub const COMMANDS: &[&str] = &[
    ":help", ":lessons", ":lesson", ":free", ":hand", ":place", ":take", ":hint", ":submit",
    ":next", ":reset", ":say", ":trace", ":save", ":load", ":quit",
];

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Trace records shown by `:trace show`.
const TRACE_SHOW_COUNT: usize = 20;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (lesson, hand, slots, attempt log).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::default(),
            show_banner: true,
            prompt: "tereo> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("\nKa kite anō!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        if is_quit(trimmed) {
            return Ok(false);
        }

        match self.eval(trimmed) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(e) => {
                self.print_error(&e);
            }
        }

        Ok(true)
    }

    /// Evaluates one line and returns the text to show.
    ///
    /// Lines not starting with `:` are treated as `:say`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, bad arguments, or a failing
    /// session operation.
    pub fn eval(&mut self, input: &str) -> Result<String> {
        let input = input.trim();
        if !input.starts_with(':') {
            return self.say(input);
        }

        let (command, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
        let rest = rest.trim();

        match command {
            ":help" | ":h" => Ok(help_text()),
            ":lessons" => Ok(self.lessons()),
            ":lesson" => {
                let id = required(rest, ":lesson ID")?;
                self.session.start_lesson(id)?;
                Ok(self.challenge_view())
            }
            ":free" => {
                let kind: PatternKind = required(rest, ":free PATTERN")?.parse()?;
                self.session.start_free_build(kind);
                Ok(self.challenge_view())
            }
            ":hand" => {
                self.session
                    .challenge()
                    .ok_or_else(Error::no_active_challenge)?;
                Ok(self.challenge_view())
            }
            ":place" => {
                let mut args = rest.split_whitespace();
                let hand_index = index_arg(args.next(), ":place N SLOT")?;
                let slot = index_arg(args.next(), ":place N SLOT")?;
                self.session.place(hand_index, slot)?;
                Ok(self.challenge_view())
            }
            ":take" => {
                let slot = index_arg(rest.split_whitespace().next(), ":take SLOT")?;
                let word = self.session.take(slot)?.maori.clone();
                Ok(format!("Returned {word} to the hand.\n{}", self.challenge_view()))
            }
            ":hint" => Ok(match self.session.hint()? {
                Some(hint) => format!("Hint: {hint}"),
                None => "No hint for this arrangement.".to_string(),
            }),
            ":submit" => self.submit(),
            ":next" => self.next(),
            ":reset" => {
                self.session.reset();
                Ok(self.challenge_view())
            }
            ":say" => self.say(required(rest, ":say SENTENCE")?),
            ":trace" => self.trace(rest),
            ":save" => {
                let path = required(rest, ":save PATH")?;
                save_to_file(self.session.log(), path)?;
                Ok(format!(
                    "Saved {} attempts to {path}",
                    self.session.log().attempts().len()
                ))
            }
            ":load" => {
                let path = required(rest, ":load PATH")?;
                let log = load_from_file(path)?;
                let count = log.attempts().len();
                self.session.set_log(log);
                Ok(format!("Loaded {count} attempts from {path}"))
            }
            other => Err(Error::new(ErrorKind::Internal(format!(
                "unknown command: {other} (try :help)"
            )))),
        }
    }

    /// Evaluates a script of REPL lines, stopping at `:quit` or the first error.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;

        for (number, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if is_quit(line) {
                break;
            }
            let output = self.eval(line).map_err(|e| {
                e.with_context(
                    ErrorContext::new()
                        .with_source(format!("{}:{}", path.display(), number + 1))
                        .with_frame(line),
                )
            })?;
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Ok(())
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn say(&mut self, sentence: &str) -> Result<String> {
        let (kind, result) = self.session.say(sentence)?;
        Ok(format!("[{}] {}", kind.name(), format_result(&result)))
    }

    fn submit(&mut self) -> Result<String> {
        let submission = self.session.submit()?;
        let mut out = format_result(&submission.result);

        if submission.points > 0 {
            let _ = write!(
                out,
                "\n+{} points (score {})",
                submission.points,
                self.session.score()
            );
        }
        if submission.lesson_complete {
            out.push_str("\nLesson complete!");
        } else if submission.result.correct && self.session.lesson_id().is_some() {
            out.push_str("\nType :next for the next challenge.");
        }
        Ok(out)
    }

    fn next(&mut self) -> Result<String> {
        if self.session.next_challenge()?.is_some() {
            return Ok(self.challenge_view());
        }

        let mut out = "No more challenges here.".to_string();
        if let Some(next) = self
            .session
            .lesson_id()
            .and_then(|id| self.session.curriculum().next_lesson(id))
        {
            let _ = write!(out, " Next up: :lesson {} ({})", next.id, next.title);
        }
        Ok(out)
    }

    fn trace(&mut self, arg: &str) -> Result<String> {
        let tracer = self.session.tracer_mut();
        match arg {
            "on" => {
                tracer.enable();
                Ok("Tracing on.".to_string())
            }
            "off" => {
                tracer.disable();
                Ok("Tracing off.".to_string())
            }
            "" | "show" => {
                if tracer.buffer().is_empty() {
                    return Ok("(no trace records)".to_string());
                }
                Ok(tracer.format_recent(TRACE_SHOW_COUNT))
            }
            "clear" => {
                tracer.clear();
                Ok("Trace cleared.".to_string())
            }
            "json" | "human" => {
                tracer.set_json_format(arg == "json");
                Ok(format!("Trace format: {arg}."))
            }
            other => Err(Error::new(ErrorKind::Internal(format!(
                "usage: :trace on|off|show|clear|json|human (got {other})"
            )))),
        }
    }

    fn lessons(&self) -> String {
        let log = self.session.log();
        let mut out = String::new();
        for module in self.session.curriculum().modules() {
            let _ = writeln!(out, "{BOLD}{}{RESET} {}", module.id, module.title);
            for lesson in &module.lessons {
                let status = log.progress(&lesson.id).map_or_else(String::new, |p| {
                    format!(" [{} {}]", status_name(p.status), p.score)
                });
                let _ = writeln!(out, "  {:<12} {}{status}", lesson.id, lesson.title);
            }
        }
        out.trim_end().to_string()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The active challenge, the sentence so far, and the hand.
    fn challenge_view(&self) -> String {
        let Some(challenge) = self.session.challenge() else {
            return "No active challenge. Try :lessons or :free PATTERN".to_string();
        };

        let mut out = String::new();
        let (index, total) = self.session.progress();
        if challenge.is_free_build() {
            let _ = writeln!(out, "{BOLD}Free build{RESET} ({})", challenge.pattern.name());
        } else {
            let _ = writeln!(
                out,
                "{BOLD}Challenge {}/{total}{RESET} ({}) {}",
                index + 1,
                challenge.pattern.name(),
                challenge.instruction
            );
        }

        let slots: Vec<String> = self
            .session
            .slots()
            .iter()
            .map(|slot| slot.map_or_else(|| "_".to_string(), paint_card))
            .collect();
        let _ = writeln!(out, "Sentence: [ {} ]", slots.join(" | "));

        out.push_str("Hand:");
        for (i, card) in self.session.hand().iter().enumerate() {
            let _ = write!(out, "\n  {i:>2}  {}  {DIM}{}{RESET}", paint_card(card), card.english);
        }
        out
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!("  _____       ____            ");
        println!(" |_   _|__   |  _ \\ ___  ___  ");
        println!("   | |/ _ \\  | |_) / _ \\/ _ \\ ");
        println!("   | |  __/  |  _ <  __/ (_) |");
        println!("   |_|\\___|  |_| \\_\\___|\\___/ ");
        println!("\x1b[0m");
        println!("Kia ora! tereo v{}", env!("CARGO_PKG_VERSION"));
        println!("Type :lessons to begin, :help for commands. Use Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line, ":quit" | ":q" | ":exit")
}

fn usage(text: &str) -> Error {
    Error::new(ErrorKind::Internal(format!("usage: {text}")))
}

fn required<'a>(arg: &'a str, text: &str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(usage(text))
    } else {
        Ok(arg)
    }
}

fn index_arg(arg: Option<&str>, text: &str) -> Result<usize> {
    arg.and_then(|a| a.parse().ok()).ok_or_else(|| usage(text))
}

fn paint_card(card: &Card) -> String {
    format!("{}{}{RESET}", card.color.ansi(), card.maori)
}

fn status_name(status: crate::attempts::LessonStatus) -> &'static str {
    match status {
        crate::attempts::LessonStatus::InProgress => "in progress",
        crate::attempts::LessonStatus::Completed => "completed",
    }
}

/// Feedback headline, translation, guidance and breakdown.
fn format_result(result: &ValidationResult) -> String {
    let color = match result.feedback.kind {
        FeedbackKind::Success => "\x1b[32m",
        FeedbackKind::Warning => "\x1b[33m",
        FeedbackKind::Error => "\x1b[31m",
    };
    let mut out = format!("{color}{}{RESET}", result.feedback.message);

    if !result.translation.is_empty() {
        let _ = write!(out, "\n  Translation: {}", result.translation);
    }
    if let Some(hint) = &result.feedback.hint {
        let _ = write!(out, "\n  Hint: {hint}");
    }
    if let Some(explanation) = &result.feedback.explanation {
        let _ = write!(out, "\n  Why: {explanation}");
    }
    for entry in &result.breakdown {
        let _ = write!(
            out,
            "\n    {:<16} {DIM}{:<20}{RESET} {}",
            entry.word, entry.role, entry.meaning
        );
    }
    out
}

fn help_text() -> String {
    format!(
        "{BOLD}Lessons{RESET}
  :lessons              List modules and lessons with progress
  :lesson ID            Start a lesson (e.g. :lesson lesson_1_1)
  :free PATTERN         Free build: ko, he, equative or kei_te
  :next                 Move to the next challenge

{BOLD}Building{RESET}
  :hand                 Show the challenge, sentence and hand
  :place N SLOT         Put hand card N into slot SLOT
  :take SLOT            Return a slot's card to the hand
  :reset                Return every placed card
  :hint                 Guidance for the sentence so far
  :submit               Check the sentence

{BOLD}Other{RESET}
  :say SENTENCE         Check a typed sentence (or just type it)
  :trace on|off|show|clear
                        Validation tracing
  :trace json|human     Trace display format
  :save PATH            Save the attempt log
  :load PATH            Load an attempt log
  :quit                 Exit"
    )
}
