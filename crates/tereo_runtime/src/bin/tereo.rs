//! tereo CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tereo_debug::TracerConfig;
use tereo_foundation::PatternKind;
use tereo_grammar::{GrammarOptions, KoPlural};
use tereo_runtime::{Repl, Session, SessionConfig, load_from_file};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    lesson: Option<String>,
    free: Option<PatternKind>,
    seed: Option<u64>,
    decoys: Option<usize>,
    load: Option<PathBuf>,
    batch: Option<PathBuf>,
    pluralize_ko: bool,
    // Debug flags
    trace: bool,
    trace_json: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Returns the value following flag `args[*i]`, advancing `i`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, Box<dyn std::error::Error>> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--trace" => config.trace = true,
            "--trace-json" => {
                config.trace = true;
                config.trace_json = true;
            }
            "--pluralize-ko" => config.pluralize_ko = true,
            "-l" | "--lesson" => config.lesson = Some(value(&args, &mut i)?.to_string()),
            "--free" => config.free = Some(value(&args, &mut i)?.parse()?),
            "--seed" => {
                let raw = value(&args, &mut i)?;
                config.seed =
                    Some(raw.parse().map_err(|_| format!("invalid --seed value: {raw}"))?);
            }
            "--decoys" => {
                let raw = value(&args, &mut i)?;
                config.decoys =
                    Some(raw.parse().map_err(|_| format!("invalid --decoys value: {raw}"))?);
            }
            "--load" => config.load = Some(PathBuf::from(value(&args, &mut i)?)),
            "-b" | "--batch" => config.batch = Some(PathBuf::from(value(&args, &mut i)?)),
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    if config.lesson.is_some() && config.free.is_some() {
        return Err("--lesson and --free cannot be combined".into());
    }

    Ok(config)
}

fn session_config(config: &CliConfig) -> SessionConfig {
    let mut session = SessionConfig::new();
    if let Some(seed) = config.seed {
        session = session.with_seed(seed);
    }
    if let Some(decoys) = config.decoys {
        session = session.with_decoys(decoys);
    }
    if config.trace {
        let mut tracer = TracerConfig::new().enabled().to_stderr();
        if config.trace_json {
            tracer = tracer.json();
        }
        session = session.with_tracer(tracer);
    }
    if config.pluralize_ko {
        session = session.with_grammar(GrammarOptions::new().with_ko_plural(KoPlural::Pluralize));
    }
    session
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tereo {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.trace {
        eprintln!("\x1b[33mDebug flags enabled:\x1b[0m");
        eprintln!(
            "  - Validation tracing to stderr ({})",
            if config.trace_json { "json" } else { "human" }
        );
        eprintln!();
    }

    let mut session = Session::new(session_config(&config));
    if let Some(path) = &config.load {
        session.set_log(load_from_file(path)?);
    }
    if let Some(lesson) = &config.lesson {
        session.start_lesson(lesson)?;
    }
    if let Some(kind) = config.free {
        session.start_free_build(kind);
    }

    if let Some(script) = &config.batch {
        let mut repl = Repl::with_editor(NoEditor)
            .with_session(session)
            .without_banner();
        repl.eval_file(script)?;
        return Ok(());
    }

    let mut repl = Repl::new()?.with_session(session);
    if config.lesson.is_some() || config.free.is_some() {
        repl = repl.without_banner();
        println!("{}", repl.eval(":hand")?);
    }

    repl.run()?;
    Ok(())
}

/// Editor for batch mode, where input comes from the script only.
struct NoEditor;

impl tereo_runtime::LineEditor for NoEditor {
    fn read_line(&mut self, _prompt: &str) -> tereo_foundation::Result<tereo_runtime::ReadResult> {
        Ok(tereo_runtime::ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn print_help() {
    println!(
        "\x1b[1mtereo\x1b[0m - Sentence-building practice for te reo Māori

\x1b[1mUSAGE:\x1b[0m
    tereo [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -l, --lesson ID      Start at a lesson (e.g. lesson_1_1)
    --free PATTERN       Start a free build (ko, he, equative, kei_te)
    --seed N             Seed for dealing hands (default 0)
    --decoys N           Decoy cards per hand (default 2)
    --pluralize-ko       Render plural Ko nouns in English plural
    --load PATH          Load an attempt log before starting
    -b, --batch FILE     Run REPL commands from FILE and exit

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace              Trace validation to stderr
    --trace-json         Trace validation to stderr as JSON lines

\x1b[1mEXAMPLES:\x1b[0m
    tereo                          Start interactive REPL
    tereo -l lesson_2_1            Start at the Kei te lesson
    tereo --free he --decoys 0     Free-build He sentences
    tereo --trace -b drills.txt    Run a drill script with tracing

\x1b[1mREPL COMMANDS:\x1b[0m
    :lessons, :lesson ID, :free PATTERN, :next
    :hand, :place N SLOT, :take SLOT, :reset, :hint, :submit
    :say SENTENCE (or type a sentence), :trace on|off|show|clear|json|human
    :save PATH, :load PATH, :help, :quit
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
