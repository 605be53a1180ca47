use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use spotwatch::records::collections;
use spotwatch::store::import_documents;
use spotwatch::{
    AdminConsole, Cluster, Config, NewSpot, ProfileUpdate, ProximityClusterer,
    Report, ReportAction, SqliteStore,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Admin console for citizen infrastructure-damage reports
#[derive(Parser)]
#[command(name = "spotwatch")]
#[command(version)]
struct Cli {
    /// JSON config file
    #[arg(short, long, env = "SPOTWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Document store file (overrides the config file)
    #[arg(long, env = "SPOTWATCH_DB")]
    db: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List reports, newest first
    Reports,
    /// Group reports that lie close to each other
    Clusters {
        /// Grouping radius in meters (overrides the config file)
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Accept a pending report for processing
    Verify { id: String },
    /// Mark a report in progress as done
    Complete { id: String },
    /// Delete a report
    DeleteReport { id: String },
    /// List registered damage locations
    Spots,
    /// Register a new damage location
    AddSpot {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Move a spot to its next repair state
    AdvanceSpot { id: String },
    /// Spot counts per repair state and category
    Stats,
    /// List end-user accounts
    Users,
    /// Block an end-user account
    Block { id: String },
    /// Show an admin profile after checking the admin role
    Profile { uid: String },
    /// Create the admin document for a newly created auth account
    RegisterAdmin {
        uid: String,
        #[arg(long)]
        nama: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Edit an admin profile
    UpdateProfile {
        uid: String,
        #[arg(long)]
        nama: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Load a JSON array of documents into a collection
    Import { collection: String, file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(db) = &cli.db {
        config.database_path = db.clone();
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = SqliteStore::open(&config.database_path).with_context(|| {
        format!(
            "Failed to open document store at {}",
            config.database_path.display()
        )
    })?;
    let console = AdminConsole::new(store);

    run(&console, &config, cli.command, cli.json)
}

fn run(
    console: &AdminConsole<SqliteStore>,
    config: &Config,
    command: Command,
    json: bool,
) -> Result<()> {
    match command {
        Command::Reports => {
            let reports = console.reports()?;
            emit(json, &reports, || {
                for report in &reports {
                    print_report(report);
                }
                println!("{} reports", reports.len());
            })
        }
        Command::Clusters { radius } => {
            let clusterer = match radius {
                Some(r) => ProximityClusterer::new(r)?,
                None => config.clusterer()?,
            };
            let clusters = console.report_clusters(&clusterer)?;
            emit(json, &clusters, || print_clusters(&clusters, &clusterer))
        }
        Command::Verify { id } => change_status(console, &id, ReportAction::Verify, json),
        Command::Complete { id } => change_status(console, &id, ReportAction::Complete, json),
        Command::DeleteReport { id } => {
            console.delete_report(&id)?;
            emit(json, &serde_json::json!({ "deleted": id }), || {
                println!("Deleted report {}", id)
            })
        }
        Command::Spots => {
            let spots = console.spots()?;
            emit(json, &spots, || {
                for spot in &spots {
                    println!(
                        "{}  [{}] {} ({}) at {:.6}, {:.6}",
                        spot.id,
                        spot.status.label(),
                        spot.title,
                        spot.category_or_default(),
                        spot.latitude,
                        spot.longitude
                    );
                }
                println!("{} spots", spots.len());
            })
        }
        Command::AddSpot {
            title,
            category,
            description,
            lat,
            lon,
        } => {
            let spot = console.register_spot(NewSpot {
                category,
                title,
                description,
                latitude: lat,
                longitude: lon,
            })?;
            emit(json, &spot, || {
                println!("Registered spot {} \"{}\"", spot.id, spot.title)
            })
        }
        Command::AdvanceSpot { id } => {
            let status = console.advance_spot(&id)?;
            emit(json, &status, || println!("Spot {} is now {}", id, status))
        }
        Command::Stats => {
            let stats = console.dashboard_stats()?;
            emit(json, &stats, || {
                println!("Total spots: {}", stats.total);
                println!("\nBy status:");
                for entry in &stats.by_status {
                    println!("  {:<20} {}", entry.label, entry.count);
                }
                println!("\nBy category:");
                for (category, count) in &stats.by_category {
                    println!("  {:<20} {}", category, count);
                }
            })
        }
        Command::Users => {
            let users = console.users()?;
            emit(json, &users, || {
                for user in &users {
                    println!(
                        "{}  {}  {}  {}  {}",
                        user.id,
                        user.name.as_deref().unwrap_or("-"),
                        user.email.as_deref().unwrap_or("-"),
                        user.phone.as_deref().unwrap_or("-"),
                        if user.is_blocked() { "Blocked" } else { "Active" }
                    );
                }
            })
        }
        Command::Block { id } => {
            let changed = console.block_user(&id)?;
            emit(json, &serde_json::json!({ "id": id, "changed": changed }), || {
                if changed {
                    println!("Blocked user {}", id);
                } else {
                    println!("User {} was already blocked", id);
                }
            })
        }
        Command::Profile { uid } => {
            let profile = console.verify_admin(&uid)?;
            emit(json, &profile, || {
                println!("Nama:        {}", profile.nama);
                println!("Email:       {}", profile.email);
                println!("No. Telepon: {}", profile.no_phone);
            })
        }
        Command::RegisterAdmin {
            uid,
            nama,
            email,
            phone,
        } => {
            let profile = console.register_admin(
                &uid,
                ProfileUpdate {
                    nama,
                    email,
                    no_phone: phone,
                },
            )?;
            emit(json, &profile, || {
                println!("Registered admin {} ({})", profile.nama, uid)
            })
        }
        Command::UpdateProfile {
            uid,
            nama,
            email,
            phone,
        } => {
            let profile = console.update_profile(
                &uid,
                ProfileUpdate {
                    nama,
                    email,
                    no_phone: phone,
                },
            )?;
            emit(json, &profile, || println!("Updated profile of {}", profile.nama))
        }
        Command::Import { collection, file } => {
            let imported = import(console.store(), &collection, &file)?;
            emit(json, &serde_json::json!({ "imported": imported }), || {
                println!("Imported {} documents into {}", imported, collection)
            })
        }
    }
}

fn change_status(
    console: &AdminConsole<SqliteStore>,
    id: &str,
    action: ReportAction,
    json: bool,
) -> Result<()> {
    let status = console.apply_report_action(id, action)?;
    emit(json, &status, || println!("Report {} is now {}", id, status))
}

/// Print as JSON or run the text renderer
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text();
    }
    Ok(())
}

fn print_report(report: &Report) {
    let position = match report.point() {
        Some(p) => format!("{:.6}, {:.6}", p.latitude, p.longitude),
        None => "no position".to_string(),
    };
    let when = report
        .timestamp
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "no timestamp".to_string());

    println!(
        "{}  [{}] {} at {} ({})",
        report.id,
        report.status.as_deref().unwrap_or("-"),
        report.report_type.as_deref().unwrap_or("-"),
        position,
        when
    );
}

fn print_clusters(clusters: &[Cluster], clusterer: &ProximityClusterer) {
    if clusters.is_empty() {
        println!(
            "No reports within {} m of each other",
            clusterer.radius_meters()
        );
        return;
    }

    for cluster in clusters {
        println!(
            "{} reports near {} ({:.6}, {:.6})",
            cluster.count(),
            cluster.location.label,
            cluster.location.latitude,
            cluster.location.longitude
        );
        for member in &cluster.members {
            println!("    {}", member.id);
        }
    }
}

fn import(store: &SqliteStore, collection: &str, file: &Path) -> Result<usize> {
    let known = [
        collections::REPORTS,
        collections::SPOTS,
        collections::USERS,
        collections::ADMINS,
    ];
    if !known.contains(&collection) {
        bail!(
            "Unknown collection {:?}, expected one of {}",
            collection,
            known.join(", ")
        );
    }

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let documents: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array", file.display()))?;

    let imported = import_documents(store, collection, documents)
        .with_context(|| format!("Failed to import {}", file.display()))?;
    Ok(imported)
}
