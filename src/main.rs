use clap::Parser;
use soundtrack::{
    app::{App, Outcome},
    command::Command,
    config::{ConfigSource, FileConfigSource, CONFIG_ENV_VAR},
    logging,
    notifier::TerminalNotifier,
    SoundtrackError,
};
use std::{io::stdin, path::PathBuf, process::ExitCode};

/// match the track to the task
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Shows and activates cognitive-state soundtrack presets from a JSON configuration. Run without a command for the interactive menu; run `help` for the command list."
)]
pub struct Cli {
    /// path to the soundtrack configuration file
    #[clap(short = 'c', long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// command to run (anthem, playlist, states, guidelines, recommend, open-playlist, open-anthem, web, help, or a state name)
    command: Option<String>,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Unrecognized) => ExitCode::from(2),
        Err(err) => {
            eprintln!("⚠️  {err}");
            if matches!(err, SoundtrackError::ConfigurationUnavailable { .. }) {
                eprintln!("Failed to load configuration. Exiting.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> soundtrack::Result<Outcome> {
    let source = FileConfigSource::resolve(cli.config);
    let config = source.load()?;

    let mut app = App::new(config, TerminalNotifier::stdout())
        .with_config_dir(source.path())
        .with_program_name(env!("CARGO_BIN_NAME"));

    match cli.command {
        Some(word) => app.run_command(Command::parse(&word)),
        None => {
            app.run_interactive(stdin().lock())?;
            Ok(Outcome::Done)
        }
    }
}
