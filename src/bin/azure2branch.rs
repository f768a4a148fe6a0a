use clap::Parser;

use ticket2branch::config::AzureConfig;
use ticket2branch::domain::branch::SanitizeMode;
use ticket2branch::error::AppResult;
use ticket2branch::infra::azure::AzureDevOpsClient;
use ticket2branch::workflow::branch_for_ticket;

#[derive(Parser)]
#[command(name = "azure2branch", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Azure DevOps work item ID, e.g. 12345.
    work_item_id: String,
}

fn print_usage() {
    println!("\nAzure2Branch v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "-".repeat(30));
    println!("Usage: azure2branch <Azure DevOps work item ID>");
    println!("Example: azure2branch 12345");
    println!("Output: 12345-This-is-an-Azure-DevOps-work-item-title\n");
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(error) = run(&cli.work_item_id).await {
        println!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run(work_item_id: &str) -> AppResult<()> {
    let tracker = AzureDevOpsClient::new(AzureConfig::from_env());
    let branch = branch_for_ticket(&tracker, work_item_id, SanitizeMode::Strict).await?;
    // Strict-mode branch names carry their own newline wrapping.
    println!("{}", branch.as_str());
    Ok(())
}
