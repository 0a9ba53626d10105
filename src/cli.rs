use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "grog",
    about = "Interactive Vagrantfile generator for Chef-managed guests"
)]
pub struct Cli {
    /// Where to write the generated Vagrantfile
    #[arg(short, long, default_value = "Vagrantfile")]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
