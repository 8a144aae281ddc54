use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use inputview_core::{candidates_from_json, Candidate, ExpandedCandidateView, GridConfig, ViewState};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use textgrid::repl::{apply, parse_command, Outcome};
use textgrid::{status_line, TextRenderer, DEFAULT_COLUMN_PX};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textgrid")]
#[command(about = "Lay out and page through keyboard candidates in a text grid")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Grid configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// View width in pixels, including the key column
    #[arg(long, global = true, default_value_t = 620)]
    width: u32,

    /// View height in pixels
    #[arg(long, global = true, default_value_t = 160)]
    height: u32,

    /// Pixels per terminal column
    #[arg(long, global = true, default_value_t = DEFAULT_COLUMN_PX)]
    column_px: u32,

    /// Why the candidates are shown
    #[arg(long, global = true, value_enum, default_value_t = StateArg::None)]
    state: StateArg,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive paging (default)
    Repl(Source),
    /// Print one page and exit
    Show {
        /// Page to print (0-based), reached by paging down from the first
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[command(flatten)]
        source: Source,
    },
    /// Print the grid configuration in effect as TOML
    Config,
}

#[derive(Args, Default)]
struct Source {
    /// JSON array of candidates (strings or {text, annotation} objects)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Candidates given on the command line
    words: Vec<String>,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum StateArg {
    None,
    Completion,
    Prediction,
}

impl From<StateArg> for ViewState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::None => ViewState::None,
            StateArg::Completion => ViewState::CompletionCorrection,
            StateArg::Prediction => ViewState::Prediction,
        }
    }
}

fn load_candidates(source: &Source) -> Result<Vec<Candidate>> {
    if let Some(path) = &source.json {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return candidates_from_json(&content).with_context(|| format!("in {}", path.display()));
    }
    Ok(source.words.iter().map(|w| Candidate::new(w.as_str())).collect())
}

fn build_view(cli: &Cli) -> Result<ExpandedCandidateView<TextRenderer>> {
    let config = match &cli.config {
        Some(path) => GridConfig::load_toml(path)?,
        None => GridConfig::default(),
    };
    debug!(?config, width = cli.width, height = cli.height, "building view");
    let mut view = ExpandedCandidateView::with_config(TextRenderer::with_column_px(cli.column_px), config)?;
    view.set_state(cli.state.into());
    view.resize(cli.width, cli.height);
    Ok(view)
}

fn print_view(view: &ExpandedCandidateView<TextRenderer>) {
    println!("{}", status_line(view));
    print!("{}", view.renderer().render(view.config().rows));
}

fn run_show(cli: &Cli, page: usize, source: &Source) -> Result<()> {
    let mut view = build_view(cli)?;
    view.show_candidates(load_candidates(source)?, 0);
    for _ in 0..page {
        if !view.page_down() {
            break;
        }
    }
    print_view(&view);
    Ok(())
}

fn run_repl(cli: &Cli, source: &Source) -> Result<()> {
    let mut view = build_view(cli)?;
    let candidates = load_candidates(source)?;
    if !candidates.is_empty() {
        view.show_candidates(candidates, 0);
        print_view(&view);
    }
    println!("Type h for help.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match parse_command(&line) {
                Ok(command) => match apply(&mut view, command) {
                    Outcome::Redraw => print_view(&view),
                    Outcome::Message(msg) => println!("{}", msg),
                    Outcome::Quit => return Ok(()),
                },
                Err(e) => println!("{} (h for help)", e),
            }
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Some(Commands::Repl(source)) => run_repl(&cli, source),
        Some(Commands::Show { page, source }) => run_show(&cli, *page, source),
        Some(Commands::Config) => {
            let config = match &cli.config {
                Some(path) => GridConfig::load_toml(path)?,
                None => GridConfig::default(),
            };
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        None => run_repl(&cli, &Source::default()),
    }
}
