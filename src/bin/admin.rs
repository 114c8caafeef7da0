//! CLI administration tool for employee-directory.
//!
//! Inspects employee records and performs database operations without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all employees
//! cargo run --bin admin -- employee list
//!
//! # Show one employee
//! cargo run --bin admin -- employee show 1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string, or
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: its components
//!
//! Employee commands are read-only. A running server caches reads in process, so
//! writes must go through the HTTP API for its cache to be invalidated.

use employee_directory::config;
use employee_directory::domain::repositories::EmployeeRepository;
use employee_directory::infrastructure::persistence::PgEmployeeRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing employee-directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect employee records
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Employee inspection subcommands.
#[derive(Subcommand)]
enum EmployeeAction {
    /// List all employees
    List,

    /// Show a single employee
    Show {
        /// Employee ID
        id: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = config::require_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Employee { action } => handle_employee_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches employee commands.
async fn handle_employee_action(action: EmployeeAction, pool: &PgPool) -> Result<()> {
    let repo = PgEmployeeRepository::new(Arc::new(pool.clone()));

    match action {
        EmployeeAction::List => list_employees(&repo).await,
        EmployeeAction::Show { id } => show_employee(&repo, id).await,
    }
}

/// Lists all employees ordered by ID.
///
/// # Output Format
///
/// ```text
/// 👥 Employees
///
///   ID    Name                           Salary      Department
///   ───────────────────────────────────────────────────────────────────
///   1     John Doe                       10000       IT
/// ```
async fn list_employees(repo: &PgEmployeeRepository) -> Result<()> {
    println!("{}", "👥 Employees".bright_blue().bold());
    println!();

    let employees = repo
        .find_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list employees: {}", e))?;

    if employees.is_empty() {
        println!("{}", "  No employees found".yellow());
        println!();
        println!(
            "  Create one with: {}",
            "curl -u user:pass -X POST -H 'Content-Type: application/json' \
             -d '{\"name\":\"John Doe\",\"salary\":10000,\"department\":\"IT\"}' \
             http://localhost:8080/api/v1/employees"
                .bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<11} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Salary".bright_white().bold(),
        "Department".bright_white().bold()
    );
    println!("  {}", "─".repeat(67).bright_black());

    for employee in &employees {
        println!(
            "  {:<5} {:<30} {:<11} {}",
            employee.id.to_string().bright_black(),
            employee.name.cyan(),
            employee.salary.to_string().bright_green(),
            employee.department
        );
    }

    println!();
    println!(
        "  Total: {}",
        employees.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints one employee or a not-found notice.
async fn show_employee(repo: &PgEmployeeRepository, id: i64) -> Result<()> {
    let employee = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match employee {
        Some(employee) => {
            println!("{}", "👤 Employee".bright_blue().bold());
            println!();
            println!("  ID:         {}", employee.id.to_string().bright_black());
            println!("  Name:       {}", employee.name.cyan());
            println!("  Salary:     {}", employee.salary.to_string().bright_green());
            println!("  Department: {}", employee.department);
            println!();
        }
        None => {
            println!("{}", format!("⚠️  Employee {} not found", id).yellow());
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let employees_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
                .fetch_one(pool)
                .await
                .context("Failed to count employees (are migrations applied?)")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Employees:  {}",
                employees_count.to_string().bright_green().bold()
            );
            println!();
        }
        DbAction::Migrate { yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Apply pending migrations?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
