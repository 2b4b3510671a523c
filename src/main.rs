//! Binary entrypoint for LifeWappen.
//!
//! Commands:
//! - (none) - open the interactive menu
//! - `card` - print the profile card
//! - `badges` - list every badge with its unlock state
//! - `unlock <id> [--date YYYY-MM-DD]` - unlock a badge and save
//! - `log <text>` - add a custom activity entry and save
//! - `demo` - run the sample story on a throwaway profile and print its card
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use miette::{miette, IntoDiagnostic, Result};
use ratatui::{backend::CrosstermBackend, Terminal};

use lifewappen::config::AppConfig;
use lifewappen::core::badge::BadgeCatalog;
use lifewappen::core::logging::{self, print_info, print_success, print_warning, terminal_caps};
use lifewappen::core::profile::{parse_date, Profile};
use lifewappen::core::storage::ProfileStore;
use lifewappen::tui::app::AppState;
use lifewappen::tui::plain::{card_content_width, render_card, render_lines, ColorMode};
use lifewappen::tui::views::{unlock, ViewContext};

#[derive(Parser)]
#[command(name = "lifewappen")]
#[command(about = "A gamified life record: badges, attributes and a character card")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Save file to use instead of the configured one
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print without colors
    #[arg(long, global = true)]
    plain: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the profile card
    Card,
    /// List all badges and which ones are unlocked
    Badges,
    /// Unlock a badge and save
    Unlock {
        /// Badge id, e.g. sunset_watcher
        badge_id: String,
        /// Unlock date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Add a custom entry to the activity log and save
    Log {
        /// Entry text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Print the card of a sample profile (nothing is saved)
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = match cli.command {
        None => logging::init_tui(),
        Some(_) => logging::init(),
    };
    tracing::info!("{} v{} starting", lifewappen::NAME, lifewappen::VERSION);

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    if let Some(path) = cli.profile {
        config.profile.path = Some(path);
    }
    if cli.plain {
        config.display.color = false;
    }

    let catalog = BadgeCatalog::builtin();
    let store = ProfileStore::new(config.profile_path());

    match cli.command {
        None => run_tui(&config, &catalog, store),
        Some(Commands::Card) => {
            let profile = load_profile(&config, &catalog, &store)?;
            print_card(&config, &catalog, &profile);
            Ok(())
        }
        Some(Commands::Badges) => {
            let profile = load_profile(&config, &catalog, &store)?;
            let lines = unlock::catalog_overview(&profile, &catalog);
            println!("{}", render_lines(&lines, color_mode(&config)));
            Ok(())
        }
        Some(Commands::Unlock { badge_id, date }) => {
            let badge = catalog.lookup(&badge_id).ok_or_else(|| {
                let ids: Vec<&str> = catalog.list_all().iter().map(|b| b.id).collect();
                miette!(
                    code = "lifewappen::cli::unknown_badge",
                    help = format!("valid ids: {}", ids.join(", ")),
                    "unknown badge id `{badge_id}`"
                )
            })?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let mut profile = load_profile(&config, &catalog, &store)?;
            if profile.unlock_badge(badge, date).applied {
                store.save(&profile)?;
                print_success(&badge.unlock_message());
            } else if let Some(existing) = profile.unlocked_badges().get(badge.id) {
                print_info(&format!(
                    "{} was already unlocked on {}",
                    badge.name, existing.date
                ));
            }
            Ok(())
        }
        Some(Commands::Log { text }) => {
            let text = text.join(" ");
            let mut profile = load_profile(&config, &catalog, &store)?;
            profile.add_custom_log_entry(text.clone());
            store.save(&profile)?;
            print_success(&format!("Logged: {text}"));
            Ok(())
        }
        Some(Commands::Demo) => run_demo(&config, &catalog),
    }
}

fn load_profile(config: &AppConfig, catalog: &BadgeCatalog, store: &ProfileStore) -> Result<Profile> {
    if !store.exists() {
        print_info(&format!(
            "No save file at {}; starting a fresh profile",
            store.path().display()
        ));
    }
    let profile = store.load(
        catalog,
        &config.profile.default_name,
        &config.profile.default_birth_date,
    )?;
    Ok(profile)
}

fn color_mode(config: &AppConfig) -> ColorMode {
    ColorMode::detect(terminal_caps(), config.display.color)
}

fn print_card(config: &AppConfig, catalog: &BadgeCatalog, profile: &Profile) {
    let ctx = ViewContext {
        profile,
        catalog,
        display: &config.display,
        today: lifewappen::core::profile::today(),
        cursor: 0,
        width: card_content_width(&config.display),
    };
    println!("{}", render_card(&ctx, color_mode(config)));
}

fn run_demo(config: &AppConfig, catalog: &BadgeCatalog) -> Result<()> {
    let mut profile = Profile::create(
        config.profile.default_name.clone(),
        &config.profile.default_birth_date,
    )?;

    let script: [(&str, Option<&str>); 5] = [
        ("first_paycheck", Some("2018-07-01")),
        ("sunset_watcher", None),
        ("meeting_terminator", None),
        ("romance_knight", None),
        ("comfort_zone_breaker", None),
    ];
    for (id, date) in script {
        let badge = catalog
            .lookup(id)
            .ok_or_else(|| miette!("badge `{id}` missing from the catalog"))?;
        let date = date.map(parse_date).transpose()?;
        if profile.unlock_badge(badge, date).applied {
            print_success(&badge.unlock_message());
        }
    }
    profile.add_custom_log_entry("Watched 158 sunsets in total");

    println!();
    print_card(config, catalog, &profile);
    Ok(())
}

// ============================================================================
// Interactive mode
// ============================================================================

fn run_tui(config: &AppConfig, catalog: &BadgeCatalog, store: ProfileStore) -> Result<()> {
    // Load before taking over the terminal so a corrupt file reports normally.
    let profile = load_profile(config, catalog, &store)?;

    install_panic_hook();
    enable_raw_mode().into_diagnostic()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        restore_terminal();
        return Err(e).into_diagnostic();
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal();
            return Err(e).into_diagnostic();
        }
    };

    let mut app = AppState::new(profile, catalog, store, config.display.clone());
    let result = app.run(&mut terminal);

    restore_terminal();
    result.into_diagnostic()?;

    if app.dirty {
        print_warning("Left without saving; this session's changes were discarded.");
    }
    Ok(())
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

/// Put the terminal back before the default hook prints the panic.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}
