use anyhow::Context;
use bamoe_poc::utils::{logger, validation::Validate};
use bamoe_poc::{client_from_config, CliConfig, Command, CustomerLookup, Order};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting bamoe-poc CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::info!(source = ?settings.source, "Customer lookup configured");

    let client = client_from_config(&settings).context("building customer client")?;
    let lookup = CustomerLookup::new(client);

    match cli.command {
        Command::Customer { ids } => {
            for id in ids {
                let customer = lookup.fetch_customer(&id).await;
                println!("{}", serde_json::to_string(&customer)?);
            }
        }
        Command::Order {
            id,
            customer_id,
            amount,
        } => {
            let order = Order::new(id, customer_id, amount);
            tracing::info!("Created {}", order);

            let customer = lookup.fetch_customer(&order.customer_id).await;
            let output = serde_json::json!({
                "order": order,
                "customer": customer,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
