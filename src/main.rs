//! Monkey CLI - manage monkey profiles and their friendships

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use monkey::config;
use monkey::output::{error_envelope, OutputMode};
use monkey::{EntryFields, RelationshipService, SqliteStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "monkey")]
#[command(version)]
#[command(about = "Monkey database - profiles, friendships and best friends")]
#[command(long_about = r#"
Monkey keeps profiles of monkeys and who is friends with whom.

Reading (list, show, stats) is open to everyone. Changes require the
administrator credentials from the config file.

Example usage:
  monkey init
  monkey -u admin -p default add --name Paavo --age 28 --mail paavo@monkey.fi --text "Kova koodari"
  monkey -u admin -p default befriend kamu@monkey.fi paavo@monkey.fi
  monkey list --sort friend
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file (defaults to $MONKEY_SETTINGS, then monkey.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Administrator username
    #[arg(short, long, global = true, env = "MONKEY_USER")]
    user: Option<String>,

    /// Administrator password
    #[arg(short, long, global = true, env = "MONKEY_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file and create the database
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// List all monkeys with freshly counted friends
    List {
        /// Sort key: id, age, name, best or friend
        #[arg(short, long, default_value = "id")]
        sort: String,
    },

    /// Show a profile with its friends and non-friends
    Show {
        mail: String,
    },

    /// Add a monkey
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i64,
        #[arg(long)]
        mail: String,
        #[arg(long)]
        text: String,
    },

    /// Rewrite a monkey's fields, including its mail
    Edit {
        /// Current mail of the monkey
        old_mail: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i64,
        #[arg(long)]
        mail: String,
        #[arg(long)]
        text: String,
    },

    /// Remove a monkey (its friendships are kept)
    Delete {
        mail: String,
    },

    /// Make two monkeys friends
    Befriend {
        mail1: String,
        mail2: String,
    },

    /// End a friendship and clear best-friend marks that depended on it
    Unfriend {
        mail1: String,
        mail2: String,
    },

    /// Set the best friend of a monkey, or clear it when BEST is omitted
    Best {
        mail: String,
        best: Option<String>,
    },

    /// Show statistics about the database
    Stats,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::List { .. } => "list",
            Commands::Show { .. } => "show",
            Commands::Add { .. } => "add",
            Commands::Edit { .. } => "edit",
            Commands::Delete { .. } => "delete",
            Commands::Befriend { .. } => "befriend",
            Commands::Unfriend { .. } => "unfriend",
            Commands::Best { .. } => "best",
            Commands::Stats => "stats",
        }
    }

    /// Whether the command changes the database
    fn writes(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. }
                | Commands::Edit { .. }
                | Commands::Delete { .. }
                | Commands::Befriend { .. }
                | Commands::Unfriend { .. }
                | Commands::Best { .. }
        )
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = OutputMode::from_json_flag(cli.json);
    let command = cli.command.name();

    if let Err(err) = run(cli, output_mode) {
        let message = match err.downcast_ref::<monkey::Error>() {
            Some(err) => commands::describe(err),
            None => format!("{:#}", err),
        };
        if output_mode.is_human() {
            monkey::ui::error(&message);
        } else {
            println!("{}", error_envelope(command, &message)?);
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let loaded = config::load_config(cli.config.as_deref())?;
    let settings = loaded.unwrap_or_default();
    let database = cli.database.clone().unwrap_or_else(|| settings.database_path());

    if let Commands::Init { force } = cli.command {
        let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
        return commands::run_init(output_mode, &config_path, &database, &settings.admin, force);
    }

    let access = settings
        .admin
        .resolve(cli.user.as_deref(), cli.password.as_deref(), cli.command.writes())?;
    tracing::debug!("Opening {} as {:?}", database.display(), access);

    let store = SqliteStore::open(&database)?;
    let service = RelationshipService::new(&store);

    match cli.command {
        Commands::Init { .. } => unreachable!("handled above"),

        Commands::List { sort } => commands::run_list(output_mode, &service, &sort),

        Commands::Show { mail } => commands::run_show(output_mode, &service, &mail),

        Commands::Add { name, age, mail, text } => {
            let fields = EntryFields::new(name, age, mail, text);
            commands::run_add(output_mode, &service, access, &fields)
        }

        Commands::Edit { old_mail, name, age, mail, text } => {
            let fields = EntryFields::new(name, age, mail, text);
            commands::run_edit(output_mode, &service, access, &old_mail, &fields)
        }

        Commands::Delete { mail } => commands::run_delete(output_mode, &service, access, &mail),

        Commands::Befriend { mail1, mail2 } => {
            commands::run_befriend(output_mode, &service, access, &mail1, &mail2)
        }

        Commands::Unfriend { mail1, mail2 } => {
            commands::run_unfriend(output_mode, &service, access, &mail1, &mail2)
        }

        Commands::Best { mail, best } => {
            commands::run_best(output_mode, &service, access, &mail, best.as_deref())
        }

        Commands::Stats => commands::run_stats(output_mode, &service, &database),
    }
}
