use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;

use shelter_app::bootstrap;
use shelter_app::breeds::repo::BreedRepo;
use shelter_app::dogs::models::{AdoptionStatus, Gender, NewDog};
use shelter_app::dogs::repo::DogRepo;
use shelter_app::utils::validation::{is_valid_age, validate_age};
use shelter_kernel::settings::Settings;
use shelter_kernel::DbPool;

#[derive(Debug, Parser)]
#[command(name = "shelter", about = "Operator commands for the shelter catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending module migrations
    Migrate,
    /// Insert a small demonstration catalog
    Seed,
    /// Check a dog age value; VALUE is read as JSON, bare words as strings
    CheckAge {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load shelter settings")?;
    shelter_telemetry::init(&settings.telemetry);

    match cli.command {
        Command::Migrate => {
            let registry = bootstrap::registry();
            let pool = bootstrap::prepare_database(&settings, &registry).await?;
            pool.close().await;
            Ok(ExitCode::SUCCESS)
        }
        Command::Seed => {
            let registry = bootstrap::registry();
            let pool = bootstrap::prepare_database(&settings, &registry).await?;
            seed(&pool).await?;
            pool.close().await;
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckAge { value } => {
            if check_age(&value) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Print the verdict for `raw` and report whether it is a valid age.
fn check_age(raw: &str) -> bool {
    let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.into()));

    match validate_age(&value) {
        Ok(age) => {
            println!("valid: {value} -> {age}");
        }
        Err(err) => {
            println!("invalid: {value} ({err})");
        }
    }

    is_valid_age(&value)
}

/// One demonstration dog, keyed by breed name.
struct SeedDog {
    name: &'static str,
    breed: &'static str,
    age: Option<f64>,
    gender: Gender,
    description: Option<&'static str>,
    status: AdoptionStatus,
}

const SEED_CATALOG: &[SeedDog] = &[
    SeedDog {
        name: "Buddy",
        breed: "Labrador Retriever",
        age: Some(3.0),
        gender: Gender::Male,
        description: Some("Friendly and loves to fetch tennis balls."),
        status: AdoptionStatus::Available,
    },
    SeedDog {
        name: "Luna",
        breed: "German Shepherd",
        age: Some(5.0),
        gender: Gender::Female,
        description: Some("Calm, loyal and great with older children."),
        status: AdoptionStatus::Pending,
    },
    SeedDog {
        name: "Max",
        breed: "Poodle",
        age: None,
        gender: Gender::Unknown,
        description: None,
        status: AdoptionStatus::Adopted,
    },
    SeedDog {
        name: "Bella",
        breed: "Labrador Retriever",
        age: Some(1.5),
        gender: Gender::Female,
        description: Some("Energetic puppy still learning her manners."),
        status: AdoptionStatus::Available,
    },
];

impl SeedDog {
    fn to_new_dog(&self, breed_id: i64) -> anyhow::Result<NewDog> {
        let dog = NewDog::new(self.name, breed_id, self.gender.as_str())
            .and_then(|dog| dog.with_age(self.age))
            .and_then(|dog| dog.with_description(self.description))
            .with_context(|| format!("seed dog {} is invalid", self.name))?;
        Ok(dog.with_status(self.status))
    }
}

/// Insert the demonstration catalog, skipping dogs already recorded under the
/// same name and breed. Returns how many dogs were inserted.
async fn seed(pool: &DbPool) -> anyhow::Result<usize> {
    let mut inserted = 0;

    for entry in SEED_CATALOG {
        let breed = match BreedRepo::find_by_name(pool, entry.breed).await? {
            Some(breed) => breed,
            None => BreedRepo::create(pool, entry.breed)
                .await
                .with_context(|| format!("failed to create breed {}", entry.breed))?,
        };

        if DogRepo::exists(pool, entry.name, breed.id).await? {
            tracing::debug!(dog = entry.name, breed = %breed.name, "already seeded");
            continue;
        }

        let dog = DogRepo::create(pool, &entry.to_new_dog(breed.id)?)
            .await
            .with_context(|| format!("failed to insert seed dog {}", entry.name))?;
        tracing::info!(dog_id = dog.id, dog = ?dog.to_detail(Some(&breed)), "seeded dog");
        inserted += 1;
    }

    tracing::info!(inserted, "seed finished");
    Ok(inserted)
}
