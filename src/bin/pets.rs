use clap::Parser;
use woc_bootcamp::utils::logger;
use woc_bootcamp::{Pet, TomlConfig};

#[derive(Parser)]
#[command(name = "pets")]
#[command(about = "Introduce some household pets and let them speak")]
struct Args {
    /// Optional TOML file with [[pets]] entries
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn default_pets() -> Vec<Pet> {
    vec![Pet::cat("Whiskers", "black"), Pet::dog("Rex", "brown")]
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let pets = match &args.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            if let Err(e) = config.validate_pets() {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.severity().exit_code());
            }
            tracing::debug!("Loaded {} pets from {}", config.pets.len(), path);
            config.pets
        }
        None => default_pets(),
    };

    if pets.is_empty() {
        tracing::warn!("No pets configured");
    }

    for pet in &pets {
        println!("{}", pet.info());
        match pet.speak() {
            Some(sound) => println!("{}", sound),
            None => tracing::debug!("{} has no sound", pet.name),
        }
    }

    Ok(())
}
