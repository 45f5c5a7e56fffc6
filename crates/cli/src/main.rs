use clap::Parser;
use dohjson_domain::{CliOverrides, DohProvider, RecordType, SkipStats};
use hickory_proto::rr::Record;
use tracing::{info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dohjson")]
#[command(version)]
#[command(about = "Resolve names over JSON DNS-over-HTTPS and print DNS records")]
struct Cli {
    /// Domain name to resolve
    name: String,

    /// Record type (A, AAAA, CNAME, SOA, TXT)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DoH provider (google, cloudflare, custom)
    #[arg(short = 'p', long)]
    provider: Option<DohProvider>,

    /// Endpoint URL, required for the custom provider
    #[arg(short = 'e', long)]
    endpoint: Option<String>,

    /// EDNS client subnet hint, e.g. 203.0.113.0/24
    #[arg(long)]
    client_subnet: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Only print A records
    #[arg(long)]
    a_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let cli_overrides = CliOverrides {
        provider: cli.provider,
        endpoint: cli.endpoint.clone(),
        client_subnet: cli.client_subnet.clone(),
        timeout_secs: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("dohjson v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DohServices::new(&config)?;
    let use_cases = di::UseCases::new(&services);

    if cli.a_only {
        let records = use_cases.lookup_a.execute(&cli.name).await?;
        print_section("ANSWER", &records);
        return Ok(());
    }

    let translation = use_cases
        .lookup
        .execute(&cli.name, cli.record_type)
        .await?;
    let message = &translation.message;

    println!(
        ";; status: {}, truncated: {}, authenticated: {}",
        message.response_code(),
        message.truncated(),
        message.authentic_data()
    );
    for query in message.queries() {
        println!(";; QUESTION: {}", query);
    }
    print_section("ANSWER", translation.answers());
    print_section("AUTHORITY", translation.authorities());

    report_skipped(&translation.skipped);

    Ok(())
}

fn print_section(title: &str, records: &[Record]) {
    if records.is_empty() {
        return;
    }

    println!();
    println!(";; {} SECTION:", title);
    for record in records {
        println!("{}", record);
    }
}

fn report_skipped(skipped: &SkipStats) {
    if skipped.is_empty() {
        return;
    }

    warn!(
        unsupported = skipped.unsupported,
        malformed = skipped.malformed,
        invalid_header = skipped.invalid_header,
        "Some records could not be represented and were left out"
    );
}
