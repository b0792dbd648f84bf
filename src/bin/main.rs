use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use embassy_executor::Spawner;
use embassy_sync::channel::Channel;
use log::{error, info};
use sposa_core::{app::ReaderConfig, scheduler::Scheduler};
use static_cell::StaticCell;

use keys::CommandChannel;
use loading::Source;
use terminal::TerminalView;

#[path = "main/clipboard.rs"]
mod clipboard;
#[path = "main/keys.rs"]
mod keys;
#[path = "main/loading.rs"]
mod loading;
#[path = "main/runtime.rs"]
mod runtime;
#[path = "main/terminal.rs"]
mod terminal;

static COMMANDS: StaticCell<CommandChannel> = StaticCell::new();

/// Speed-read text one word at a time.
#[derive(Parser, Debug)]
#[command(name = "sposa", version)]
struct Args {
    /// Text file to read, or `:clipboard:` to read the clipboard
    source: Option<String>,

    /// Read the clipboard instead of a file
    #[arg(long)]
    clipboard: bool,

    /// Words per minute at 1.0x
    #[arg(long, env = "SPOSA_WPM")]
    wpm: Option<u16>,

    /// Multiplier change per speed key press
    #[arg(long, env = "SPOSA_SPEED_STEP")]
    speed_step: Option<f32>,

    /// Slowest allowed multiplier
    #[arg(long, env = "SPOSA_MIN_SPEED")]
    min_speed: Option<f32>,

    /// Fastest allowed multiplier
    #[arg(long, env = "SPOSA_MAX_SPEED")]
    max_speed: Option<f32>,

    /// Delay factor for words ending a sentence
    #[arg(long, env = "SPOSA_SENTENCE_FACTOR")]
    sentence_factor: Option<f32>,

    /// Delay factor for words ending a clause
    #[arg(long, env = "SPOSA_CLAUSE_FACTOR")]
    clause_factor: Option<f32>,

    /// Minimum time the first word stays up, in milliseconds
    #[arg(long, env = "SPOSA_LEAD_IN_MS", default_value_t = 1_000)]
    lead_in_ms: u64,

    /// Keep the original letter case instead of lowercasing
    #[arg(long)]
    keep_case: bool,

    /// Start reading immediately instead of paused
    #[arg(long, env = "SPOSA_AUTOPLAY")]
    autoplay: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "SPOSA_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn reader_config(&self) -> ReaderConfig {
        let defaults = ReaderConfig::default();
        ReaderConfig {
            base_wpm: self.wpm.unwrap_or(defaults.base_wpm),
            speed_step: self.speed_step.unwrap_or(defaults.speed_step),
            min_speed: self.min_speed.unwrap_or(defaults.min_speed),
            max_speed: self.max_speed.unwrap_or(defaults.max_speed),
            sentence_end_factor: self.sentence_factor.unwrap_or(defaults.sentence_end_factor),
            clause_factor: self.clause_factor.unwrap_or(defaults.clause_factor),
            lead_in_ms: self.lead_in_ms,
            ..defaults
        }
    }
}

fn init_logging(log_file: Option<&std::path::Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("logger already initialized")
}

async fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let Some(source) = Source::resolve(args.source.as_deref(), args.clipboard) else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = args.reader_config();
    let document = loading::load_document(&source, args.keep_case)
        .with_context(|| format!("cannot load {source:?}"))?;
    let mut scheduler =
        Scheduler::from_document(document, config).context("invalid reading settings")?;
    runtime::probe_timer().await?;
    info!(
        "boot: words={} base_wpm={} autoplay={}",
        scheduler.player().total(),
        config.base_wpm,
        args.autoplay
    );

    let commands: &'static CommandChannel = COMMANDS.init(Channel::new());
    let mut view = TerminalView::enter(config.base_wpm).context("cannot enter raw terminal mode")?;
    keys::spawn_key_reader(commands).context("cannot start key reader")?;

    runtime::drive(&mut scheduler, commands, &mut view, args.autoplay)
        .await
        .context("terminal output failed")
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let code = match run().await {
        Ok(()) => 0,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("sposa: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn no_source_resolves_to_nothing() {
        let args = parse(&["sposa"]);
        assert_eq!(Source::resolve(args.source.as_deref(), args.clipboard), None);
    }

    #[test]
    fn clipboard_flag_and_keyword_both_select_clipboard() {
        for argv in [
            &["sposa", "--clipboard"][..],
            &["sposa", ":CLIPBOARD:"][..],
            &["sposa", "--clipboard", ":clipboard:"][..],
        ] {
            let args = parse(argv);
            assert_eq!(
                Source::resolve(args.source.as_deref(), args.clipboard),
                Some(Source::Clipboard)
            );
        }
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let args = parse(&["sposa", "book.txt", "--wpm", "300", "--max-speed", "2.0"]);
        let config = args.reader_config();
        assert_eq!(config.base_wpm, 300);
        assert_eq!(config.max_speed, 2.0);
        assert_eq!(config.min_speed, ReaderConfig::default().min_speed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn first_word_is_held_for_a_second_unless_overridden() {
        assert_eq!(parse(&["sposa", "book.txt"]).reader_config().lead_in_ms, 1_000);
        let config = parse(&["sposa", "book.txt", "--lead-in-ms", "0"]).reader_config();
        assert_eq!(config.lead_in_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_speed_bounds_are_rejected_at_construction() {
        let args = parse(&["sposa", "book.txt", "--min-speed", "2.0", "--max-speed", "1.0"]);
        let result = Scheduler::from_document(Default::default(), args.reader_config());
        assert!(result.is_err());
    }
}
