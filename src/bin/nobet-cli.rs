#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nobet::{
    io,
    matching::Matcher,
    model::{MonthLength, PersonId, Roster},
    report::{join_days, render_offers, TextReport},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI d'échange de jours de garde (planning CSV ou JSON)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de roster
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    /// Lire le planning depuis ce CSV plutôt que depuis le JSON
    #[arg(long, global = true)]
    csv: Option<String>,

    /// Nombre de jours de la grille CSV (28 à 31)
    #[arg(long, global = true, conflicts_with_all = ["year", "month"])]
    month_length: Option<u8>,

    /// Année du planning CSV (avec `--month`)
    #[arg(long, global = true, requires = "month")]
    year: Option<i32>,

    /// Mois du planning CSV, 1 à 12 (avec `--year`)
    #[arg(long, global = true, requires = "year")]
    month: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les personnes du planning
    Persons,

    /// Jours de garde d'une personne
    Shifts {
        #[arg(long)]
        person: String,
    },

    /// Trouver les échanges possibles pour un jour de garde
    Suitable {
        #[arg(long)]
        person: String,
        /// Jour du mois (1-based)
        #[arg(long)]
        day: u8,
        /// Sortie JSON sur stdout
        #[arg(long)]
        json: bool,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Convertir un planning CSV en roster JSON
    Import {
        #[arg(long)]
        from: String,
    },
}

impl Cli {
    fn month_length(&self) -> Result<MonthLength> {
        let month = match (self.month_length, self.year, self.month) {
            (Some(days), _, _) => MonthLength::new(days)?,
            (None, Some(year), Some(month)) => MonthLength::for_month(year, month)?,
            _ => MonthLength::default(),
        };
        Ok(month)
    }

    fn load_roster(&self) -> Result<Roster> {
        match &self.csv {
            Some(path) => io::import_roster_csv(path, self.month_length()?),
            None => JsonStorage::open(&self.roster)
                .load()
                .with_context(|| "no roster available (use --csv or import first)"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match &cli.cmd {
        Commands::Persons => {
            let roster = cli.load_roster()?;
            for id in Matcher::new(&roster).person_ids() {
                println!("{id}");
            }
            0
        }
        Commands::Shifts { person } => {
            let roster = cli.load_roster()?;
            let days = Matcher::new(&roster).duty_days(&PersonId::new(person))?;
            println!("{}", join_days(&days));
            0
        }
        Commands::Suitable {
            person,
            day,
            json,
            out_json,
            out_csv,
        } => {
            let roster = cli.load_roster()?;
            let requester = PersonId::new(person);
            let offers = Matcher::new(&roster).suitable_for(&requester, *day)?;
            if let Some(path) = out_json {
                io::export_offers_json(path, &offers)?;
            }
            if let Some(path) = out_csv {
                io::export_offers_csv(path, &offers)?;
            }
            if *json {
                println!("{}", serde_json::to_string_pretty(&offers)?);
            } else {
                print!("{}", render_offers(&requester, *day, &offers, &TextReport));
            }
            // Code 2 = aucun échange possible
            if offers.is_empty() {
                2
            } else {
                0
            }
        }
        Commands::Import { from } => {
            let roster = io::import_roster_csv(from, cli.month_length()?)?;
            let storage = JsonStorage::open(&cli.roster);
            storage.save(&roster)?;
            println!(
                "Imported {} person(s) into {}",
                roster.people.len(),
                storage.path().display()
            );
            0
        }
    };

    std::process::exit(code);
}
