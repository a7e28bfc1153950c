use clap::Parser;
use netfun::command::{dispatch, Command};
use netfun::config::Config;
use netfun::output;
use netfun::session::ProgressFile;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netfun")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Learn IP addressing and binary, one command at a time", long_about = None)]
struct Cli {
    /// Progress snapshot file
    #[arg(long, global = true, env = "NETFUN_PROGRESS_FILE")]
    progress_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(path) = cli.progress_file {
        config.progress_file = path;
    }
    if cli.no_color {
        config.color = false;
    }

    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!(
            "warning: logging disabled, could not load {}: {e}",
            config.log_config.display()
        );
    }
    log::info!("#Start main()");
    output::set_color(config.color);

    let progress = ProgressFile::new(&config.progress_file);
    let mut state = progress.load();
    let before = state.clone();

    println!("{}", dispatch(&cli.command, &mut state));

    if state != before {
        if let Err(e) = progress.save(&state) {
            log::warn!("Could not save progress: {e}");
        }
    }
    Ok(())
}
