use std::io::IsTerminal;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use grog::cli::Cli;
use grog::error::GrogError;
use grog::probe;
use grog::prompt::{Prompter, TerminalPrompter};
use grog::questionnaire;
use grog::render;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("grog=debug")
    } else {
        EnvFilter::from_default_env()
            .add_directive("grog=warn".parse().expect("valid log directive"))
    };

    let terminal_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(terminal_layer).init();

    run(&cli).await.map_err(Into::into)
}

async fn run(cli: &Cli) -> Result<(), GrogError> {
    // Probing and prompting both assume a human at a terminal.
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        return Err(GrogError::NotATerminal);
    }

    println!();
    println!(
        "{}",
        style("Welcome to the grog Vagrantfile generator!").cyan().bold()
    );
    println!();

    let mut prompter = TerminalPrompter;

    if cli.output.exists() {
        let overwrite = prompter.confirm(
            &format!("{} already exists. Overwrite?", cli.output.display()),
            false,
        )?;
        if !overwrite {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let probed = probe::probe_all().await;

    let answers = questionnaire::run(&mut prompter, &probed)?;

    render::write_vagrantfile(&answers, &cli.output)?;

    println!();
    println!("Created {}", cli.output.display());
    println!("Run `vagrant up` to start the guest machine.");
    println!(
        "After the first run, uncomment the Landrush lines and run `vagrant up --provision` to enable Landrush."
    );
    Ok(())
}
