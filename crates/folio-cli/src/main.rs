mod contact;
mod typewriter;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures_util::{StreamExt, pin_mut};
use tokio_util::sync::CancellationToken;

use folio_core::{FilterState, SortBy, Theme, category_counts, filter_and_sort};
use folio_store::Profile;

use crate::typewriter::StagedSnapshot;

/// Tags shown per project before truncation.
const TAGS_SHOWN: usize = 3;

/// Per-character cadence for the terminal demo.
const TERM_DELAY: Duration = Duration::from_millis(40);
/// Pause between the two typed commands.
const TERM_PAUSE: Duration = Duration::from_millis(1000);

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio content engine CLI")]
struct Cli {
    /// Override the data directory (default: FOLIO_DATA_DIR or ~/.folio)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects, filtered and sorted
    List {
        /// Keep only this category (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Free-text search over title, description, and tags
        #[arg(long)]
        search: Option<String>,

        /// Sort order: date, title, or featured
        #[arg(long, default_value = "date")]
        sort: String,
    },

    /// Show category labels with project counts
    Categories,

    /// Show catalog statistics
    Stats,

    /// Show or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Type a string to stdout, one character at a time
    Type {
        text: String,

        /// Per-character delay in milliseconds
        #[arg(long, default_value_t = 25)]
        delay_ms: u64,
    },

    /// Terminal-style demo: type two commands with a pause between them
    Term,

    /// Validate a contact message and simulate sending it
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },

    /// Write the active content catalog to a JSON file
    Export {
        /// Output file path
        path: PathBuf,
    },

    /// Validate a catalog JSON file and install it
    Import {
        /// Input file path
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the active theme
    Show,
    /// Flip between light and dark
    Toggle,
    /// Set the theme explicitly
    Set { value: String },
}

fn open_profile(cli: &Cli) -> Result<Profile> {
    let base_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var("FOLIO_DATA_DIR").ok().map(PathBuf::from));
    Profile::open(base_dir.as_deref()).context("failed to open data directory")
}

/// The theme to assume when nothing is persisted yet. Stands in for the
/// OS preference a graphical host would query.
fn system_theme() -> Theme {
    std::env::var("FOLIO_THEME")
        .map(|v| Theme::parse_or(&v, Theme::Light))
        .unwrap_or_default()
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::List {
            category,
            search,
            sort,
        } => cmd_list(&cli, category.as_deref(), search.as_deref(), sort),
        Commands::Categories => cmd_categories(&cli),
        Commands::Stats => cmd_stats(&cli),
        Commands::Theme { action } => cmd_theme(&cli, action.as_ref()),
        Commands::Type { text, delay_ms } => cmd_type(text, *delay_ms).await,
        Commands::Term => cmd_term(&cli).await,
        Commands::Contact {
            name,
            email,
            message,
        } => cmd_contact(name, email, message).await,
        Commands::Export { path } => cmd_export(&cli, path),
        Commands::Import { path } => cmd_import(&cli, path),
    }
}

fn cmd_list(
    cli: &Cli,
    category: Option<&str>,
    search: Option<&str>,
    sort: &str,
) -> Result<()> {
    let profile = open_profile(cli)?;
    let content = profile.load_content().context("failed to load content")?;

    let state = FilterState {
        active_category: category.unwrap_or(folio_core::ALL_CATEGORY).to_string(),
        search_term: search.unwrap_or_default().to_string(),
        sort_by: sort.parse::<SortBy>().map_err(|e| anyhow::anyhow!(e))?,
    };

    let results = filter_and_sort(&content.projects, &state);
    if results.is_empty() {
        println!("(no projects match)");
        return Ok(());
    }

    for project in &results {
        let marker = if project.featured { "*" } else { " " };
        println!(
            "{:>3} {} {}  {:<20} {}",
            project.id, marker, project.year, project.category, project.title
        );
        println!("      tags: {}", format_tags(&project.tags));
    }
    println!("{} project(s)", results.len());
    Ok(())
}

fn format_tags(tags: &[String]) -> String {
    let shown: Vec<&str> = tags.iter().take(TAGS_SHOWN).map(String::as_str).collect();
    let mut out = shown.join(", ");
    if tags.len() > TAGS_SHOWN {
        out.push_str(&format!(" (+{})", tags.len() - TAGS_SHOWN));
    }
    out
}

fn cmd_categories(cli: &Cli) -> Result<()> {
    let profile = open_profile(cli)?;
    let content = profile.load_content().context("failed to load content")?;

    for category in category_counts(&content.projects, &content.categories) {
        println!("{:<20} {}", category.name, category.count);
    }
    Ok(())
}

fn cmd_stats(cli: &Cli) -> Result<()> {
    let profile = open_profile(cli)?;
    let content = profile.load_content().context("failed to load content")?;
    let stats = content.stats();
    let theme = profile.store().theme(system_theme())?;

    println!("projects:     {}", stats.projects);
    println!("featured:     {}", stats.featured);
    println!("categories:   {}", stats.categories);
    println!("skills:       {}", stats.skills);
    println!("services:     {}", stats.services);
    println!("testimonials: {}", stats.testimonials);
    println!("theme:        {theme}");
    println!("data_dir:     {}", profile.base_dir().display());
    Ok(())
}

fn cmd_theme(cli: &Cli, action: Option<&ThemeAction>) -> Result<()> {
    let profile = open_profile(cli)?;
    let default = system_theme();

    match action.unwrap_or(&ThemeAction::Show) {
        ThemeAction::Show => {
            println!("{}", profile.store().theme(default)?);
        }
        ThemeAction::Toggle => {
            let theme = profile.store().toggle_theme(default)?;
            println!("theme set to {theme}");
        }
        ThemeAction::Set { value } => {
            let theme: Theme = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            profile.store().set_theme(theme)?;
            println!("theme set to {theme}");
        }
    }
    Ok(())
}

/// Cancel the token when the user interrupts, so a typing run tears down
/// without emitting further snapshots.
fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });
}

async fn cmd_type(text: &str, delay_ms: u64) -> Result<()> {
    let token = CancellationToken::new();
    cancel_on_ctrl_c(token.clone());

    let stream = typewriter::snapshots(text, Duration::from_millis(delay_ms), token);
    pin_mut!(stream);

    let mut stdout = std::io::stdout();
    while let Some(snapshot) = stream.next().await {
        write!(stdout, "\r{snapshot}")?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}

async fn cmd_term(cli: &Cli) -> Result<()> {
    let profile = open_profile(cli)?;
    let content = profile.load_content().context("failed to load content")?;

    let skills_cmd = "cat ~/Skills.txt";
    let education_cmd = "cat ~/Education.txt";

    let token = CancellationToken::new();
    cancel_on_ctrl_c(token.clone());

    let stream = typewriter::chained(skills_cmd, education_cmd, TERM_DELAY, TERM_PAUSE, token.clone());
    pin_mut!(stream);

    let mut stdout = std::io::stdout();
    while let Some(item) = stream.next().await {
        match item {
            StagedSnapshot::First(snapshot) => {
                write!(stdout, "\r$ {snapshot}")?;
                stdout.flush()?;
                if snapshot == skills_cmd {
                    writeln!(stdout)?;
                    for skill in &content.skills {
                        writeln!(
                            stdout,
                            "  {:<24} {:>3}%  [{}]",
                            skill.name, skill.level, skill.category
                        )?;
                    }
                }
            }
            StagedSnapshot::Second(snapshot) => {
                write!(stdout, "\r$ {snapshot}")?;
                stdout.flush()?;
                if snapshot == education_cmd {
                    writeln!(stdout)?;
                    for entry in &content.education {
                        writeln!(
                            stdout,
                            "  {} | {} ({})",
                            entry.degree, entry.institution, entry.year
                        )?;
                    }
                }
            }
        }
    }
    if token.is_cancelled() {
        writeln!(stdout)?;
    }
    Ok(())
}

async fn cmd_contact(name: &str, email: &str, message: &str) -> Result<()> {
    let msg = contact::ContactMessage::new(name, email, message)?;
    println!("sending...");
    let confirmation = contact::submit(&msg).await;
    println!("{confirmation}");
    Ok(())
}

fn cmd_export(cli: &Cli, path: &std::path::Path) -> Result<()> {
    let profile = open_profile(cli)?;
    let json = profile
        .export_content()
        .context("failed to serialize content")?;
    std::fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;

    println!("exported to {}", path.display());
    Ok(())
}

fn cmd_import(cli: &Cli, path: &std::path::Path) -> Result<()> {
    let profile = open_profile(cli)?;
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let content = profile
        .install_content(&json)
        .context("failed to import content")?;

    let stats = content.stats();
    println!(
        "imported from {}. projects={}, categories={}",
        path.display(),
        stats.projects,
        stats.categories
    );
    Ok(())
}
