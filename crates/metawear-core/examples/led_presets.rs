//! Print the frames for every preset pattern and color.
//!
//! Run with: `cargo run --example led_presets`
//! Set `RUST_LOG=debug` to see the encoder's own logging.

use metawear_core::{Led, RecordingSink};
use metawear_types::{Color, Preset};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("metawear_core=info".parse()?))
        .init();

    let led = Led::new(RecordingSink::new());

    for preset in Preset::ALL {
        for color in Color::ALL {
            led.write_preset(preset, color, 10)?;
            if let Some(frame) = led.sink().last_frame() {
                println!("{:<6} {:<6} {}", preset.to_string(), color.to_string(), frame);
            }
        }
    }

    led.play()?;
    led.stop_and_clear(true)?;
    for frame in led.sink().frames().iter().rev().take(2).rev() {
        println!("{:<13} {}", "control", frame);
    }

    Ok(())
}
