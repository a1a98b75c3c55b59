use api_shared::{ErrorRes, PatientRes, ValidationErrorRes};
use clap::{Parser, Subcommand};
use patients_core::{
    InMemoryPatientRepository, Outcome, PatientError, PatientService, PatientValidator,
};
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "patients")]
#[command(about = "Patient lookup CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one patient by identifier
    Get {
        /// Patient identifier (must be greater than 0)
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    /// List all seed patients
    List,
    /// Check every seed patient against the patient business rules
    CheckSeed,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let repository = InMemoryPatientRepository::seeded()?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Some(command) => {
            if execute(command, &repository, &mut stdout)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        None => {
            writeln!(stdout, "Use 'patients --help' for commands")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Runs one command, writing its output to `out`.
///
/// Returns `false` when the command ran but reported a failure (unknown or invalid
/// patient, broken seed record).
fn execute(
    command: Commands,
    repository: &InMemoryPatientRepository,
    out: &mut dyn Write,
) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Commands::Get { id } => {
            let service = PatientService::new(Arc::new(repository.clone()));
            match service.get_patient(id) {
                Ok(Outcome::Success(patient)) => {
                    let json = serde_json::to_string_pretty(&PatientRes::from(patient))?;
                    writeln!(out, "{json}")?;
                    Ok(true)
                }
                Ok(Outcome::Failure(message)) => {
                    let json = serde_json::to_string_pretty(&ErrorRes::new(message))?;
                    writeln!(out, "{json}")?;
                    Ok(false)
                }
                Err(PatientError::Validation(errors)) => {
                    let json = serde_json::to_string_pretty(&ValidationErrorRes::from(&errors))?;
                    writeln!(out, "{json}")?;
                    Ok(false)
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::List => {
            for patient in repository.all() {
                writeln!(
                    out,
                    "ID: {}, NHS: {}, Name: {}, Born: {}, Practice: {}",
                    patient.id,
                    patient.nhs_number,
                    patient.name,
                    patient.date_of_birth,
                    patient.gp_practice
                )?;
            }
            Ok(true)
        }
        Commands::CheckSeed => {
            let validator = PatientValidator::new();
            let now = chrono::Utc::now();
            let mut invalid = 0usize;
            for patient in repository.all() {
                let failures = validator.validate_at(patient, now);
                if failures.is_empty() {
                    writeln!(out, "ID {}: ok", patient.id)?;
                    continue;
                }
                invalid += 1;
                for failure in failures {
                    writeln!(out, "ID {}: {}: {}", patient.id, failure.field, failure.message)?;
                }
            }
            Ok(invalid == 0)
        }
    }
}
