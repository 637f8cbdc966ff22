use clap::Parser;
use zoo_management::utils::{logger, validation::Validate};
use zoo_management::{CliConfig, Creature, ZooConfig, ZooTour};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading roster from: {}", args.config);

    let config = match ZooConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load roster '{}': {}", args.config, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Roster validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let roster = config.build_roster()?;
    tracing::info!("✅ Roster loaded with {} animals", roster.len());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the tour will not run");
        println!("Roster from {}:", args.config);
        for animal in &roster {
            println!("- {} the {} (Age: {})", animal.name(), animal.species(), animal.age());
        }
        return Ok(());
    }

    let stdout = std::io::stdout();
    let report = ZooTour::new(roster).run(stdout.lock())?;

    if args.json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}
