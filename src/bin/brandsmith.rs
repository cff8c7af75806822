use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use brandsmith::catalog::EXAMPLE_DESCRIPTIONS;
use brandsmith::error::{Error, Result};
use brandsmith::export::KitExport;
use brandsmith::listing::NameQuery;
use brandsmith::models::{BrandingKit, NameFilter, NameSort};
use brandsmith::random::StdRandom;
use brandsmith::studio::{BrandStudio, GenerationOutcome, Notice};

#[derive(Parser)]
#[clap(name = "brandsmith", version, about = "Brand names, logos and palettes for your product")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate five branding kits for a description
    Generate {
        #[clap(required = true)]
        description: Vec<String>,
        /// Print the kits as JSON
        #[clap(long)]
        json: bool,
        /// Seed the random source for repeatable output
        #[clap(long)]
        seed: Option<u64>,
        /// Skip the simulated delay
        #[clap(long)]
        no_delay: bool,
    },
    /// Recent generations stored on this machine
    History {
        #[clap(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Names saved to your account
    Saved {
        #[clap(subcommand)]
        action: SavedAction,
    },
    /// Collections of saved names
    Collections {
        #[clap(subcommand)]
        action: CollectionAction,
    },
    /// Write one kit from history as a JSON document
    Export {
        /// Generation index in history, 0 being the newest
        #[clap(long, default_value = "0")]
        generation: usize,
        /// Kit index within the generation
        #[clap(long, default_value = "0")]
        kit: usize,
        /// Directory to write into
        #[clap(long, default_value = ".")]
        out: PathBuf,
    },
    /// Account summary
    Dashboard,
    /// Check the table store connection
    Check,
    /// Example descriptions to try
    Examples,
}

#[derive(Subcommand)]
enum HistoryAction {
    List,
    Clear,
}

#[derive(Subcommand)]
enum SavedAction {
    List {
        #[clap(long, default_value = "")]
        search: String,
        #[clap(long, default_value = "all")]
        filter: NameFilter,
        #[clap(long, default_value = "newest")]
        sort: NameSort,
        /// Only names in this collection
        #[clap(long)]
        collection: Option<String>,
    },
    Save {
        name: String,
        #[clap(long, default_value = "")]
        description: String,
    },
    /// Flip the favorite flag of a saved name
    Favorite { id: String },
    Delete { id: String },
    Share { id: String },
}

#[derive(Subcommand)]
enum CollectionAction {
    List,
    Create {
        name: String,
        #[clap(long, default_value = "")]
        description: String,
        #[clap(long)]
        color: Option<String>,
    },
    /// Delete a collection; its names stay saved
    Delete { id: String },
    Share { id: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    }
}

/// `Ok(false)` when the command ended with an error notice
async fn run(cli: Cli) -> Result<bool> {
    let mut studio = BrandStudio::from_env()?;

    let needs_store = matches!(
        cli.command,
        Command::Saved { .. } | Command::Collections { .. } | Command::Check
    );
    if needs_store && !studio.has_store() {
        return Err(Error::config("SUPABASE_URL and SUPABASE_ANON_KEY must be set"));
    }

    match cli.command {
        Command::Generate {
            description,
            json,
            seed,
            no_delay,
        } => {
            if no_delay {
                studio = studio.with_generation_delay(Duration::ZERO);
            }
            let mut rng = match seed {
                Some(seed) => StdRandom::seeded(seed),
                None => StdRandom::from_entropy(),
            };

            match studio.generate(&description.join(" "), &mut rng).await? {
                GenerationOutcome::Completed(kits) if json => {
                    println!("{}", serde_json::to_string_pretty(&kits)?)
                }
                GenerationOutcome::Completed(kits) => {
                    for (i, kit) in kits.iter().enumerate() {
                        print_kit(i, kit);
                    }
                }
                GenerationOutcome::Superseded { ticket } => debug!(ticket, "superseded"),
            }
            Ok(true)
        }
        Command::History { action } => match action.unwrap_or(HistoryAction::List) {
            HistoryAction::List => {
                for (i, generation) in studio.recent_generations()?.iter().enumerate() {
                    let names: Vec<&str> =
                        generation.results.iter().map(|k| k.name.as_str()).collect();
                    println!(
                        "{:>2}  {}  {:?}\n    {}",
                        i,
                        generation.timestamp.format("%Y-%m-%d %H:%M"),
                        generation.description,
                        names.join(", ")
                    );
                }
                Ok(true)
            }
            HistoryAction::Clear => {
                studio.clear_history()?;
                println!("History cleared");
                Ok(true)
            }
        },
        Command::Saved { action } => saved(&studio, action).await,
        Command::Collections { action } => collections(&studio, action).await,
        Command::Export {
            generation,
            kit,
            out,
        } => {
            let history = studio.recent_generations()?;
            let kit = history
                .get(generation)
                .and_then(|g| g.results.get(kit))
                .ok_or_else(|| Error::invalid_input("no such kit in history"))?;
            let path = KitExport::from(kit).write_to(&out)?;
            println!("{}", path.display());
            Ok(true)
        }
        Command::Dashboard => {
            if let Some(user) = studio.session().user() {
                println!("Welcome back, {}!", user.display_name());
            }
            match studio.dashboard().await {
                Ok(stats) => {
                    println!("Total generations  {}", stats.total_generations);
                    println!("Saved names        {}", stats.saved_names);
                    println!("Favorites          {}", stats.favorites);
                    Ok(true)
                }
                Err(notice) => Ok(report(notice)),
            }
        }
        Command::Check => {
            let status = studio.check_connection().await?;
            println!("Connected ({} row(s) read)", status.rows_read);
            Ok(match status.test_row_inserted {
                Some(true) => report(Notice::success("Test data inserted successfully!")),
                Some(false) => report(Notice::error("Failed to insert test data")),
                None => true,
            })
        }
        Command::Examples => {
            for example in EXAMPLE_DESCRIPTIONS.iter() {
                println!("{}", example);
            }
            Ok(true)
        }
    }
}

async fn saved(studio: &BrandStudio, action: SavedAction) -> Result<bool> {
    let notice = match action {
        SavedAction::List {
            search,
            filter,
            sort,
            collection,
        } => {
            let query = NameQuery::new().search(&search).filter(filter).sort(sort);
            return match studio.saved_names(&query, collection.as_deref()).await {
                Ok(names) => {
                    for name in names {
                        let star = if name.is_favorite { "*" } else { " " };
                        println!(
                            "{} {}  {}  {}  {}",
                            star,
                            name.id,
                            name.created_at.format("%Y-%m-%d"),
                            name.name,
                            name.description
                        );
                    }
                    Ok(true)
                }
                Err(notice) => Ok(report(notice)),
            };
        }
        SavedAction::Save { name, description } => studio.save_name(&name, &description).await,
        SavedAction::Favorite { id } => {
            let current = match studio.saved_names(&NameQuery::new(), None).await {
                Ok(names) => names.into_iter().find(|n| n.id == id).map(|n| n.is_favorite),
                Err(notice) => return Ok(report(notice)),
            };
            match current {
                Some(current) => studio.toggle_favorite(&id, current).await,
                None => Notice::error(format!("No saved name with id {}", id)),
            }
        }
        SavedAction::Delete { id } => studio.delete_name(&id).await,
        SavedAction::Share { id } => return Ok(print_link(studio.share_name(&id))),
    };
    Ok(report(notice))
}

async fn collections(studio: &BrandStudio, action: CollectionAction) -> Result<bool> {
    let notice = match action {
        CollectionAction::List => {
            return match studio.collections().await {
                Ok(collections) => {
                    for collection in collections {
                        println!(
                            "{}  {}  {}",
                            collection.id,
                            collection.name,
                            collection.description.unwrap_or_default()
                        );
                    }
                    Ok(true)
                }
                Err(notice) => Ok(report(notice)),
            };
        }
        CollectionAction::Create {
            name,
            description,
            color,
        } => {
            studio
                .create_collection(&name, &description, color.as_deref())
                .await
        }
        CollectionAction::Delete { id } => studio.delete_collection(&id).await,
        CollectionAction::Share { id } => return Ok(print_link(studio.share_collection(&id))),
    };
    Ok(report(notice))
}

fn print_kit(index: usize, kit: &BrandingKit) {
    let availability = if kit.domain_available { "available" } else { "taken" };
    println!("{}. {}", index + 1, kit.name);
    println!("   domain   {} ({})", kit.domain, availability);
    println!("   logo     {} {} [{}]", kit.logo.icon, kit.logo.text, kit.logo.style);
    println!("   slogan   {}", kit.slogan);
    println!(
        "   colors   {} / {} / {}",
        kit.colors.primary, kit.colors.secondary, kit.colors.accent
    );
    if let Some(story) = kit.brand_story() {
        println!("   story    {}", story.story);
    }
}

fn print_link(link: std::result::Result<String, Notice>) -> bool {
    match link {
        Ok(link) => {
            println!("{}", link);
            true
        }
        Err(notice) => report(notice),
    }
}

fn report(notice: Notice) -> bool {
    if notice.is_success() {
        println!("{}", notice);
    } else {
        eprintln!("{}", notice);
    }
    notice.is_success()
}
