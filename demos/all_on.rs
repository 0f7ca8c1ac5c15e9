//! Turn every LIFX light on the account on, in warm white.
//!
//! This example demonstrates:
//! - Listing the lights of an account
//! - Setting power, color and brightness in one state change
//!
//! Run with: LIFX_TOKEN=<token> cargo run --example all_on

use lifx_cloud_rs::{
    ActionResults, Brightness, Color, Light, Lifx, PowerState, Selector, StateChange,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("LIFX_TOKEN").map_err(|_| "LIFX_TOKEN is not set")?;
    let lifx = Lifx::new(token);

    println!("Listing lights...");
    let lights: Vec<Light> = lifx.list_lights(Selector::all()).await?.json()?;

    if lights.is_empty() {
        println!("No lights found on this account.");
        return Ok(());
    }

    println!("Found {} light(s):", lights.len());
    for light in &lights {
        println!("  - {} ({}), power {}", light.label, light.id, light.power);
    }

    let mut change = StateChange::from(PowerState::On);
    change.color(&Color::kelvin(2700));
    change.brightness(&Brightness::create_or(0.8));
    change.duration(2.0);

    println!("\nTurning all lights on...");
    let results: ActionResults = lifx.set_state(Selector::all(), &change).await?.json()?;

    for result in results.results {
        let label = result.label.as_deref().unwrap_or(&result.id);
        println!("  {}: {:?}", label, result.status);
    }

    println!("\nDone!");
    Ok(())
}
