//! CLI application for controlling LIFX lights through the cloud API.
//!
//! This example demonstrates a command-line interface with one command per
//! API operation.
//!
//! Run with: cargo run --example lifx_cli -- --help

use clap::{Parser, Subcommand};
use lifx_cloud_rs::{
    ActionResults, Brightness, Color, Error, Infrared, Light, Lifx, PowerState, Response, Scene,
    SceneActivation, SceneProperty, StateChange, Toggle,
};

#[derive(Parser)]
#[command(name = "lifx-cli")]
#[command(about = "Control LIFX lights through the LIFX cloud API", long_about = None)]
struct Cli {
    /// LIFX personal access token (https://cloud.lifx.com/settings)
    #[arg(short, long, env = "LIFX_TOKEN", hide_env_values = true)]
    token: String,

    /// Print raw response bodies instead of a summary
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List lights matching a selector
    Lights {
        /// Selector, e.g. all, label:Kitchen, group_id:123
        #[arg(default_value = "all")]
        selector: String,
    },

    /// Set the state of lights
    State {
        /// Selector, e.g. all, label:Kitchen, group_id:123
        selector: String,

        /// Power state (on or off)
        #[arg(short, long)]
        power: String,

        /// Color string, e.g. red, #ff8800, kelvin:2700
        #[arg(short, long)]
        color: Option<String>,

        /// Brightness (0-100)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        brightness: Option<u8>,

        /// Transition time in seconds
        #[arg(short, long, default_value = "1.0")]
        duration: f64,

        /// Maximum infrared level (0.0-1.0)
        #[arg(long)]
        infrared: Option<f64>,

        /// Don't wait for the lights to report back
        #[arg(long)]
        fast: bool,
    },

    /// Toggle the power of lights
    Toggle {
        /// Selector, e.g. all, label:Kitchen, group_id:123
        selector: String,

        /// Transition time in seconds
        #[arg(short, long, default_value = "1.0")]
        duration: f64,
    },

    /// List scenes
    Scenes,

    /// Activate a scene
    Activate {
        /// Scene selector, e.g. scene_id:<uuid>
        selector: String,

        /// Transition time in seconds
        #[arg(short, long, default_value = "1.0")]
        duration: f64,

        /// Leave the power of the lights untouched
        #[arg(long)]
        keep_power: bool,

        /// Don't wait for the lights to report back
        #[arg(long)]
        fast: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let lifx = Lifx::new(cli.token);

    let (result, output) = match cli.command {
        Commands::Lights { selector } => (lifx.list_lights(&selector).await, Output::Lights),

        Commands::State {
            selector,
            power,
            color,
            brightness,
            duration,
            infrared,
            fast,
        } => {
            let mut change = StateChange::from(power.parse::<PowerState>()?);
            if let Some(color) = color {
                change.color(&color.parse::<Color>()?);
            }
            if let Some(level) = brightness.and_then(Brightness::from_percent) {
                change.brightness(&level);
            }
            if let Some(infrared) = infrared {
                let level =
                    Infrared::create(infrared).ok_or("Infrared must be between 0.0 and 1.0")?;
                change.infrared(&level);
            }
            change.duration(duration);
            change.fast(fast);

            (lifx.set_state(&selector, &change).await, Output::Results)
        }

        Commands::Toggle { selector, duration } => {
            let toggle = Toggle::with_duration(duration);
            (lifx.toggle_power(&selector, &toggle).await, Output::Results)
        }

        Commands::Scenes => (lifx.list_scenes().await, Output::Scenes),

        Commands::Activate {
            selector,
            duration,
            keep_power,
            fast,
        } => {
            let mut activation = SceneActivation::new();
            activation.duration(duration);
            activation.fast(fast);
            if keep_power {
                activation.ignore(SceneProperty::Power);
            }

            (lifx.activate_scene(&selector, &activation).await, Output::Results)
        }
    };

    match result {
        Ok(response) if cli.raw => println!("{}", response.text()),
        Ok(response) => print_summary(&response, output),
        Err(e) => report_error(&e),
    }

    Ok(())
}

/// How to summarize a successful response.
#[derive(Clone, Copy)]
enum Output {
    Lights,
    Scenes,
    Results,
}

fn print_summary(response: &Response, output: Output) {
    println!("HTTP {}", response.status());

    if response.body().is_empty() {
        return;
    }

    let summarized = match output {
        Output::Lights => print_lights(response),
        Output::Scenes => print_scenes(response),
        Output::Results => print_results(response),
    };

    // Fall back to the raw body if it has an unexpected shape
    if summarized.is_err() {
        println!("{}", response.text());
    }
}

fn print_lights(response: &Response) -> Result<(), Error> {
    let lights: Vec<Light> = response.json()?;
    println!("\nFound {} light(s):", lights.len());
    for light in lights {
        println!(
            "  {:20}  {:3}  {:>3.0}%  {}",
            light.label,
            light.power.as_str(),
            light.brightness * 100.0,
            if light.connected { "connected" } else { "offline" }
        );
    }
    Ok(())
}

fn print_scenes(response: &Response) -> Result<(), Error> {
    let scenes: Vec<Scene> = response.json()?;
    println!("\nFound {} scene(s):", scenes.len());
    for scene in scenes {
        println!("  {:20}  scene_id:{}", scene.name, scene.uuid);
    }
    Ok(())
}

fn print_results(response: &Response) -> Result<(), Error> {
    let results: ActionResults = response.json()?;
    for result in results.results {
        let label = result.label.as_deref().unwrap_or("-");
        println!("  {:20}  {:14}  {:?}", label, result.id, result.status);
    }
    Ok(())
}

fn report_error(err: &Error) {
    if err.is_validation() {
        eprintln!("Invalid arguments: {}", err);
    } else if let Some(response) = err.response() {
        eprintln!("LIFX API answered HTTP {}: {}", response.status(), response.text());
    } else {
        eprintln!("Error: {}", err);
    }
}
