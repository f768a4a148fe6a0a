use clap::Parser;

use ticket2branch::config::JiraConfig;
use ticket2branch::domain::branch::SanitizeMode;
use ticket2branch::error::AppResult;
use ticket2branch::infra::jira::JiraClient;
use ticket2branch::workflow::branch_for_ticket;

#[derive(Parser)]
#[command(name = "jira2branch", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Jira ticket number, e.g. ABC-1234.
    ticket_number: String,
}

fn print_usage() {
    println!("\nJira2Branch v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "-".repeat(30));
    println!("Usage: jira2branch <Jira ticket number>");
    println!("Example: jira2branch ABC-1234");
    println!("Output: ABC-1234-This-is-a-Jira-ticket-title\n");
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

    if let Err(error) = run(&cli.ticket_number).await {
        println!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run(ticket_number: &str) -> AppResult<()> {
    let tracker = JiraClient::new(JiraConfig::from_env());
    let branch = branch_for_ticket(&tracker, ticket_number, SanitizeMode::Simple).await?;
    println!("\n{}\n", branch.as_str());
    Ok(())
}
