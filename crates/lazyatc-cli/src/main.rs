use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use lazyatc_models::{Mode, Preset, BUILTIN_PRESETS};
use lazyatc_plugin::{settings, Notifier, RequestWindow, SystemClipboard};
use lazyatc_sdk::{ApiConfig, RoutesClient};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "lazyatc")]
#[command(about = "Alternate routes and flight levels for controllers")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Routes API base URL (overrides LAZYATC_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Phraseology settings file (defaults to the per-user settings.json)
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch alternate routes between two airports
    Route {
        /// Departure ICAO code (ex: YSSY)
        departure: String,
        /// Destination ICAO code (ex: YMML)
        destination: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Suggest flight levels around a filed one
    Alt {
        /// Filed flight level in hundreds of feet (ex: 350)
        #[arg(allow_hyphen_values = true)]
        level: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show a built-in city pair
    Preset {
        /// Preset label (ex: SY-ML)
        label: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List built-in presets
    Presets,
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct OutputArgs {
    /// Select the entry with this number and print its phraseology
    #[arg(long)]
    pub pick: Option<usize>,

    /// Also copy the phraseology to the clipboard (requires --pick)
    #[arg(long, requires = "pick")]
    pub copy: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let templates = match &cli.template_file {
        Some(path) => settings::load_templates_from(path)
            .with_context(|| format!("loading templates from {}", path.display()))?,
        None => settings::load_templates(&mut StderrNotifier),
    };
    let mut window = RequestWindow::new(templates);

    let output = match cli.command {
        Commands::Presets => {
            for preset in &BUILTIN_PRESETS {
                println!(
                    "{}\t{} → {}\t{}",
                    preset.label, preset.departure, preset.destination, preset.route
                );
            }
            return Ok(());
        }
        Commands::Preset { label, output } => {
            let preset = Preset::find(&label)?;
            window.apply_preset(preset);
            output
        }
        Commands::Alt { level, output } => {
            window.set_mode(Mode::Altitude);
            window.altitude = level;
            window.begin_fetch()?;
            output
        }
        Commands::Route {
            departure,
            destination,
            output,
        } => {
            let config = match cli.api_url {
                Some(url) => ApiConfig::with_base_url(url),
                None => ApiConfig::from_env(),
            };
            let client = RoutesClient::new(config)?;
            debug!(url = %client.routes_url(), "using routes API");

            window.set_mode(Mode::Route);
            window.departure = departure;
            window.destination = destination;
            let outcome = window.fetch(&client).await;
            // Entries read before a malformed one are still shown.
            print_entries(&window);
            outcome?;
            return finish(&mut window, output);
        }
    };

    print_entries(&window);
    finish(&mut window, output)
}

/// Reports notices on stderr so stdout carries only results.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

fn print_entries(window: &RequestWindow) {
    for (i, entry) in window.results.iter().enumerate() {
        println!("{:>2}. {entry}", i + 1);
    }
}

/// Apply `--pick` / `--copy` once the list is filled. Entries are numbered
/// from 1.
fn finish(window: &mut RequestWindow, output: OutputArgs) -> anyhow::Result<()> {
    let Some(pick) = output.pick else {
        return Ok(());
    };
    if pick == 0 || pick > window.results.len() {
        bail!("no entry #{pick} (list has {})", window.results.len());
    }
    window.select(Some(pick - 1));

    let message = if output.copy {
        window.copy_selection(&mut SystemClipboard)?
    } else {
        window.selection_message()
    };
    match message {
        Some(message) => println!("\n{message}"),
        None => bail!("entry #{pick} has no {} phraseology", window.mode.label()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_with_pick_and_copy() {
        let cli = Cli::try_parse_from([
            "lazyatc", "route", "yssy", "ymml", "--pick", "2", "--copy",
        ])
        .unwrap();
        assert!(cli.api_url.is_none());
        match cli.command {
            Commands::Route {
                departure,
                destination,
                output,
            } => {
                assert_eq!(departure, "yssy");
                assert_eq!(destination, "ymml");
                assert_eq!(output.pick, Some(2));
                assert!(output.copy);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn copy_requires_pick() {
        assert!(Cli::try_parse_from(["lazyatc", "alt", "350", "--copy"]).is_err());
    }

    #[test]
    fn negative_level_is_accepted_as_a_value() {
        let cli = Cli::try_parse_from(["lazyatc", "alt", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Alt { ref level, .. } if level == "-5"));
    }

    #[test]
    fn global_options_precede_the_subcommand() {
        let cli = Cli::try_parse_from([
            "lazyatc",
            "--api-url",
            "http://127.0.0.1:9000",
            "--template-file",
            "/tmp/t.json",
            "presets",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(cli.template_file, Some(PathBuf::from("/tmp/t.json")));
        assert!(matches!(cli.command, Commands::Presets));
    }

    #[test]
    fn pick_prints_level_phraseology() {
        let mut window = RequestWindow::default();
        window.set_mode(Mode::Altitude);
        window.altitude = "350".into();
        window.begin_fetch().unwrap();

        finish(&mut window, OutputArgs { pick: Some(1), copy: false }).unwrap();
        assert_eq!(window.selected, Some(0));
    }

    #[test]
    fn pick_out_of_range_fails() {
        let mut window = RequestWindow::default();
        window.apply_preset(&lazyatc_models::SY_ML);

        let err = finish(&mut window, OutputArgs { pick: Some(3), copy: false }).unwrap_err();
        assert_eq!(err.to_string(), "no entry #3 (list has 2)");
        assert!(finish(&mut window, OutputArgs { pick: Some(0), copy: false }).is_err());
    }

    #[test]
    fn preset_route_pick_selects_route_line() {
        let mut window = RequestWindow::default();
        window.apply_preset(&lazyatc_models::SY_ML);

        finish(&mut window, OutputArgs { pick: Some(1), copy: false }).unwrap();
        assert_eq!(window.selected, Some(0));
        assert_eq!(
            window.selection_message().as_deref(),
            Some("Unfortunately your filed route is invalid. Are you able to accept WOL H65 LEECE Q29 ML?")
        );
    }
}
