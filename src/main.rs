use anyhow::Result;
use clap::Parser;
use zonesweep::pipeline::{self, Cli, Outcome};
use zonesweep::store::route53::Route53Store;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = Route53Store::from_env().await;
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout();

    let outcome =
        pipeline::sweep(&store, &cli.name_regex, &cli.zone, &mut input, &mut output).await?;

    match outcome {
        Outcome::NoMatches => println!("No matching record sets."),
        Outcome::Declined => println!("Aborted."),
        Outcome::Deleted(count) => println!("Deleted {count} record set(s)."),
    }

    Ok(())
}
