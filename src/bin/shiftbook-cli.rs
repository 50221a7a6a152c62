#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use shiftbook::{
    io,
    model::{parse_clock, Config, EmployeeId, Shift, ShiftId},
    storage::JsonStore,
    Scheduler,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de gestion des employés et des shifts
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du roster (employés, shifts, affectations)
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    /// Fichier JSON de configuration (`maxDailyHours`)
    #[arg(long, global = true, default_value = "config.json")]
    config: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher tous les employés
    ListEmployees,

    /// Ajouter un employé
    AddEmployee {
        #[arg(long)]
        name: String,
        /// Format `DDDD-DDDD`
        #[arg(long)]
        phone: String,
    },

    /// Modifier un employé existant
    EditEmployee {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
    },

    /// Importer des employés depuis un CSV (`name,phone`)
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },

    /// Créer un shift
    CreateShift {
        /// Identifiant (UUID généré si absent)
        #[arg(long)]
        id: Option<String>,
        /// `YYYY-MM-DD`
        #[arg(long)]
        date: String,
        /// `HH:MM`
        #[arg(long)]
        start: String,
        /// `HH:MM`
        #[arg(long)]
        end: String,
    },

    /// Importer des shifts depuis un CSV (`shiftId,date,startTime,endTime`)
    ImportShifts {
        #[arg(long)]
        csv: String,
    },

    /// Lister les shifts
    ListShifts,

    /// Affecter un employé à un shift
    Assign {
        #[arg(long)]
        employee: String,
        #[arg(long)]
        shift: String,
    },

    /// Afficher le planning d'un employé
    Schedule {
        #[arg(long)]
        employee: String,
        /// Export CSV (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Définir le plafond d'heures par jour
    SetLimit {
        #[arg(long)]
        hours: Decimal,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let scheduler = Scheduler::new(JsonStore::open(&cli.roster, &cli.config));

    let code = match cli.cmd {
        Commands::ListEmployees => {
            let employees = scheduler.list_employees().await?;
            print!("{}", io::render_employee_table(&employees));
            0
        }
        Commands::AddEmployee { name, phone } => {
            let employee = scheduler.register_employee(&name, &phone).await?;
            println!("Employee added: {}", employee.employee_id);
            0
        }
        Commands::EditEmployee { id, name, phone } => {
            let employee = scheduler
                .update_employee(&EmployeeId::new(id), &name, &phone)
                .await?;
            println!("Employee updated: {}", employee.employee_id);
            0
        }
        Commands::ImportEmployees { csv } => {
            let rows = io::import_employees_csv(&csv)?;
            let count = rows.len();
            for details in rows {
                scheduler
                    .register_employee(details.name(), details.phone())
                    .await?;
            }
            println!("{count} employee(s) imported");
            0
        }
        Commands::CreateShift {
            id,
            date,
            start,
            end,
        } => {
            let id = id.map(ShiftId::new).unwrap_or_else(ShiftId::random);
            let date: chrono::NaiveDate = date.parse().with_context(|| format!("invalid date: {date}"))?;
            let shift = Shift::new(id.clone(), date, parse_clock(&start)?, parse_clock(&end)?)?;
            scheduler.add_shift(shift).await?;
            println!("Shift created: {id}");
            0
        }
        Commands::ImportShifts { csv } => {
            let shifts = io::import_shifts_csv(&csv)?;
            let count = shifts.len();
            for shift in shifts {
                scheduler.add_shift(shift).await?;
            }
            println!("{count} shift(s) imported");
            0
        }
        Commands::ListShifts => {
            for s in scheduler.list_shifts().await? {
                println!(
                    "{} | {} | {} → {}",
                    s.shift_id,
                    s.date,
                    s.start_time.format("%H:%M"),
                    s.end_time.format("%H:%M")
                );
            }
            0
        }
        Commands::Assign { employee, shift } => {
            let outcome = scheduler
                .assign_shift(&EmployeeId::new(employee), &ShiftId::new(shift))
                .await?;
            println!("{outcome}");
            // Code 2 = refus métier
            if outcome.is_ok() {
                0
            } else {
                2
            }
        }
        Commands::Schedule { employee, out_csv } => {
            let schedule = scheduler.employee_schedule(&EmployeeId::new(employee)).await?;
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            println!("date,start,end");
            for entry in &schedule {
                println!(
                    "{},{},{}",
                    entry.shift.date,
                    entry.shift.start_time.format("%H:%M"),
                    entry.shift.end_time.format("%H:%M")
                );
            }
            0
        }
        Commands::SetLimit { hours } => {
            let config = Config::new(hours)?;
            scheduler.store().save_config(&config).await?;
            println!("Max daily hours set to {hours}");
            0
        }
    };

    std::process::exit(code);
}
