//! trophy-case CLI
//!
//! Renders achievement-site page fragments (titles, progress bars,
//! breadcrumbs, metadata tables, hash lists) from a site data file.

mod error;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use trophy_case_core::lookup::HashSource;
use trophy_case_core::progress::ProgressSummary;
use trophy_case_core::types::GameId;
use trophy_case_data::{CardCache, SiteStore, load_site_data};
use trophy_case_render::{
    AvatarOptions, SiteUrls, game_avatar, render_game_breadcrumb, render_game_card_by_id,
    render_game_progress, render_game_title, render_hashes_page, render_metadata_row,
    render_recent_players, render_related_games,
};

use error::CliError;

#[derive(Parser)]
#[command(name = "trophy-case")]
#[command(about = "Render achievement-site page fragments", long_about = None)]
struct Cli {
    /// Site data file, YAML or JSON (defaults to the saved settings value)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a game title with category tag styling
    Title {
        title: String,

        /// Strip markers instead of rendering tag spans
        #[arg(long)]
        strip: bool,
    },

    /// Render a player's completion bar for an achievement set
    Progress {
        #[arg(long)]
        total: u32,

        #[arg(long, default_value_t = 0)]
        casual: i64,

        #[arg(long, default_value_t = 0)]
        hardcore: u32,

        /// Print the computed summary as JSON instead of markup
        #[arg(long)]
        json: bool,
    },

    /// Render the breadcrumb for a game
    Breadcrumb {
        game: GameId,

        /// Leave the final crumb unlinked
        #[arg(long)]
        unlinked: bool,
    },

    /// Render the hover-card fragment for a game
    Card { game: GameId },

    /// Render the supported-game-files page body for a game
    Hashes { game: GameId },

    /// Render the metadata, progress, and community fragments for a game
    Page { game: GameId },

    /// Save the default site data file path
    SetData { path: PathBuf },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".if_supports_color(Stderr, |t| t.red()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Title { title, strip } => {
            println!("{}", render_game_title(&title, !strip));
            Ok(())
        }

        Commands::Progress {
            total,
            casual,
            hardcore,
            json,
        } => {
            if json {
                let summary = ProgressSummary::compute(total, casual, hardcore);
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", render_game_progress(total, casual, hardcore));
            }
            Ok(())
        }

        Commands::Breadcrumb { game, unlinked } => {
            let store = load_store(cli.data)?;
            let record = store.game(game).ok_or(CliError::UnknownGame(game))?;
            let urls = SiteUrls::new();
            println!(
                "{}",
                render_game_breadcrumb(record, &store, &urls, !unlinked)
            );
            Ok(())
        }

        Commands::Card { game } => {
            let store = load_store(cli.data)?;
            let cards = CardCache::new(&store);
            let urls = SiteUrls::new();
            let html = render_game_card_by_id(game, &cards, &urls);
            if html.is_empty() {
                return Err(CliError::UnknownGame(game));
            }
            println!("{html}");
            Ok(())
        }

        Commands::Hashes { game } => {
            let store = load_store(cli.data)?;
            let record = store.game(game).ok_or(CliError::UnknownGame(game))?;
            let hashes = store.hashes_for_game(game);
            let urls = SiteUrls::new();
            println!("{}", render_hashes_page(record, &hashes, &store, &urls));
            Ok(())
        }

        Commands::Page { game } => {
            let store = load_store(cli.data)?;
            run_page(&store, game)
        }

        Commands::SetData { path } => {
            settings::save_data_path(&path)?;
            println!(
                "{} default data file set to {}",
                "Saved:".if_supports_color(Stdout, |t| t.bold()),
                path.display()
            );
            Ok(())
        }
    }
}

/// Metadata rows shown on a game page, with their alternate hub labels.
const METADATA_LABELS: &[(&str, &[&str])] = &[
    ("Developer", &["Hacker"]),
    ("Publisher", &["Hacks"]),
    ("Genre", &["Subgenre"]),
];

fn run_page(store: &SiteStore, game_id: GameId) -> Result<(), CliError> {
    let record = store.game(game_id).ok_or(CliError::UnknownGame(game_id))?;
    let urls = SiteUrls::new();
    let hubs = store.hubs_for_game(game_id);
    let extra = store.extra(game_id).cloned().unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!(
        "<div class='navpath'>{}</div>",
        render_game_breadcrumb(record, store, &urls, false)
    ));
    out.push_str(&game_avatar(record, AvatarOptions::icon_size(64), &urls));

    out.push_str("<table class='table-highlight'><tbody>");
    for &(label, alts) in METADATA_LABELS {
        let value = match label {
            "Developer" => extra.developer.as_deref(),
            "Publisher" => extra.publisher.as_deref(),
            _ => extra.genre.as_deref(),
        };
        if let Some(row) = render_metadata_row(label, value, hubs, alts, &urls) {
            out.push_str(&row);
        }
    }
    out.push_str("</tbody></table>");

    if let Some(stats) = store.progress(game_id) {
        out.push_str(&render_game_progress(
            stats.total,
            stats.earned_casual,
            stats.earned_hardcore,
        ));
    }

    let related = store.related_games(game_id);
    if !related.is_empty() {
        out.push_str(&render_related_games(related, Some("Similar Games"), &urls));
    }

    let players = store.recent_players(game_id);
    if !players.is_empty() {
        out.push_str(&render_recent_players(players, &urls));
    }

    println!("{out}");
    Ok(())
}

fn load_store(data: Option<PathBuf>) -> Result<SiteStore, CliError> {
    let path = data.or_else(settings::load_data_path).ok_or_else(|| {
        CliError::config("no site data file; pass --data or run `trophy-case set-data`")
    })?;
    let data = load_site_data(&path)?;
    let store = SiteStore::from_data(data);
    log::info!("loaded {} games from {}", store.games().len(), path.display());
    Ok(store)
}
