use clap::{Parser, Subcommand};
use lrhook::{AppError, HookConfig};

#[derive(Parser)]
#[command(name = "lrhook")]
#[command(version)]
#[command(
    about = "Rotate the automation log through logrotate after each run",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detach and rotate in the background (hook entry point)
    #[clap(visible_alias = "r")]
    Run,
    /// Rotate in the foreground
    #[clap(visible_alias = "ro")]
    Rotate,
    /// Print the resolved configuration
    #[clap(visible_alias = "c")]
    Config,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = HookConfig::load().and_then(|config| match cli.command {
        Commands::Run => lrhook::run(&config),
        Commands::Rotate => lrhook::rotate(&config),
        Commands::Config => {
            let paths = lrhook::resolved(&config);
            println!("confdir = {}", paths.conf_dir.display());
            println!("logdir = {}", paths.log_dir.display());
            println!("logrotate = {}", config.tool_path.display());
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
