#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use roulement::{io, Planner};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de calcul de planning d'astreinte (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculer le planning (rotation + overrides) sur une fenêtre
    Plan {
        /// Fichier JSON de config de rotation
        #[arg(long)]
        config: String,
        /// Fichier JSON d'overrides
        #[arg(long)]
        overrides: Option<String>,
        /// Fichier CSV d'overrides (cumulable avec --overrides)
        #[arg(long)]
        overrides_csv: Option<String>,
        /// Début de fenêtre (RFC3339 UTC, inclus)
        #[arg(long)]
        from: String,
        /// Fin de fenêtre (RFC3339 UTC, exclue)
        #[arg(long)]
        until: String,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Rotation de base seule, sans overrides
    Base {
        #[arg(long)]
        config: String,
        /// RFC3339 UTC
        #[arg(long)]
        from: String,
        /// RFC3339 UTC
        #[arg(long)]
        until: String,
    },

    /// Vérifier une config de rotation
    Validate {
        #[arg(long)]
        config: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Plan {
            config,
            overrides,
            overrides_csv,
            from,
            until,
            out_json,
            out_csv,
        } => {
            let config = io::load_config_json(&config)?;
            let mut planner = Planner::new(config)?;
            if let Some(path) = overrides {
                planner.add_overrides(io::load_overrides_json(path)?)?;
            }
            if let Some(path) = overrides_csv {
                planner.add_overrides(io::import_overrides_csv(path)?)?;
            }
            let from: DateTime<Utc> = from.parse()?;
            let until: DateTime<Utc> = until.parse()?;
            let schedule = planner.plan(from, until)?;
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            // impression compacte
            for s in &schedule {
                println!("{} | {} → {}", s.user.as_str(), s.start_at, s.end_at);
            }
            0
        }
        Commands::Base {
            config,
            from,
            until,
        } => {
            let config = io::load_config_json(&config)?;
            let planner = Planner::new(config)?;
            let from: DateTime<Utc> = from.parse()?;
            let until: DateTime<Utc> = until.parse()?;
            for s in planner.base_schedule(from, until)? {
                println!(
                    "{} | {} → {}",
                    s.user.as_str(),
                    s.start.to_rfc3339(),
                    s.end.to_rfc3339()
                );
            }
            0
        }
        Commands::Validate { config } => match io::load_config_json(&config) {
            Ok(c) => {
                println!(
                    "OK: {} user(s), rotation every {} day(s) from {}",
                    c.users.len(),
                    c.interval_days,
                    c.anchor.to_rfc3339()
                );
                0
            }
            Err(err) => {
                eprintln!("invalid config: {err:#}");
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        },
    };

    std::process::exit(code);
}
