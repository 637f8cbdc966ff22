use zoo_management::utils::logger;
use zoo_management::{founding_animals, ZooTour};

fn main() {
    logger::init_cli_logger(false);

    tracing::info!("Opening the zoo");

    let stdout = std::io::stdout();
    if let Err(e) = ZooTour::new(founding_animals()).run(stdout.lock()) {
        tracing::error!("❌ Tour interrupted: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
