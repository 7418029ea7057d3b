use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "xtask")]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run fmt+clippy
    Lint,
    /// Run the whole workspace test suite
    Test,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Lint => {
            run("cargo", &["fmt", "--all"])?;
            run("cargo", &["clippy", "--all-targets", "--", "-Dwarnings"])?;
        }
        Commands::Test => {
            run("cargo", &["test", "--workspace"])?;
        }
    }
    Ok(())
}

fn run(cmd: &str, args: &[&str]) -> Result<()> {
    println!("+ {} {}", cmd, args.join(" "));
    let status = std::process::Command::new(cmd).args(args).status()?;
    if !status.success() {
        anyhow::bail!("command failed")
    }
    Ok(())
}
