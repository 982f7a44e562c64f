use clap::Parser;
use dhex_shipping::config::{BranchProfile, Cli, Command};
use dhex_shipping::utils::logger;
use dhex_shipping::{SendingRequestParams, ShippingError, ShippingService};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting dhex CLI");
    if cli.verbose {
        tracing::debug!("CLI arguments: {:?}", cli);
    }

    let profile = match &cli.profile {
        Some(path) => {
            let profile = BranchProfile::from_file(path)?;
            tracing::debug!("Loaded branch profile from {}", path.display());
            profile
        }
        None => BranchProfile::default(),
    };

    let service = ShippingService::default();

    let json = match cli.command {
        Command::Register {
            receiver,
            sender,
            location,
            cost,
            observation,
        } => {
            let params = SendingRequestParams {
                receiver,
                sender: sender.or(profile.sender),
                location: location.or(profile.location),
                cost,
                observation: observation.or(profile.observation),
            };
            match service.register_request(params) {
                Ok(request) => {
                    tracing::info!("Registered request {}", request.id);
                    serde_json::to_string_pretty(&request)?
                }
                Err(e) => reject(e),
            }
        }
        Command::Status {
            request_id,
            location,
            label,
            observation,
        } => {
            let location = location.or(profile.location);
            let observation = observation.or(profile.observation);
            match service.register_status(
                request_id.as_deref(),
                location.as_deref(),
                label.as_deref(),
                observation.as_deref(),
            ) {
                Ok(status) => {
                    tracing::info!(
                        "Recorded status {} for request {}",
                        status.id,
                        status.request_id
                    );
                    serde_json::to_string_pretty(&status)?
                }
                Err(e) => reject(e),
            }
        }
    };

    println!("✅ Registered successfully");
    println!("{}", json);
    Ok(())
}

/// Validation failures are user input problems, reported with a hint and
/// exit code 2; unexpected failures bubble up through `anyhow` as exit 1.
fn reject(e: ShippingError) -> ! {
    tracing::error!("Registration failed: {}", e);
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.hint());
    std::process::exit(2);
}
