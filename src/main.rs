// src/main.rs

//! `projectile`: traces a projectile launched under gravity and wind and
//! writes its path as a P3 image.

use anyhow::Context;
use log::{debug, info, trace, warn};

use canvas_core::config::{ProjectileConfig, CONFIG};
use canvas_core::sink::FileSink;
use canvas_core::{Canvas, CanvasError, Color, Point, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Projectile {
    position: Point,
    velocity: Vector,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Environment {
    gravity: Vector,
    wind: Vector,
}

fn tick(env: &Environment, proj: Projectile) -> Projectile {
    Projectile {
        position: proj.position + proj.velocity,
        velocity: proj.velocity + env.gravity + env.wind,
    }
}

/// Plots `position` with the y axis flipped so the ground is the bottom row.
/// Positions off the canvas are skipped.
fn plot(canvas: &mut Canvas, position: Point, color: Color) -> canvas_core::Result<()> {
    let x = position.x.floor();
    let y = (canvas.height() as f64 - position.y).floor();
    match canvas.write_pixel(x, y, color) {
        Err(CanvasError::OutOfBounds { .. }) => {
            trace!("Skipping off-canvas position {}", position);
            Ok(())
        }
        other => other,
    }
}

/// Runs the simulation until the projectile reaches the ground or
/// `max_ticks` steps have run, returning the canvas and the tick count.
fn simulate(config: &ProjectileConfig) -> anyhow::Result<(Canvas, usize)> {
    let mut canvas = Canvas::new(config.width, config.height)
        .context("Failed to create projectile canvas")?;

    let env = Environment {
        gravity: config.gravity,
        wind: config.wind,
    };
    let mut proj = Projectile {
        position: config.start,
        velocity: config.direction.normalize() * config.speed,
    };

    plot(&mut canvas, proj.position, config.color)?;
    let mut ticks = 0;
    while proj.position.y > 0.0 {
        if ticks >= config.max_ticks {
            warn!("Projectile still airborne after {} ticks, stopping", ticks);
            break;
        }
        proj = tick(&env, proj);
        ticks += 1;
        debug!("tick {}: position {}, velocity {}", ticks, proj.position, proj.velocity);
        plot(&mut canvas, proj.position, config.color)?;
    }
    Ok((canvas, ticks))
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = &*CONFIG;
    let sink = FileSink::from_config(&config.output);
    debug!("Default output directory: {}", sink.default_dir().display());

    let (canvas, ticks) = simulate(&config.projectile)?;
    info!("Projectile landed after {} ticks", ticks);

    let path = canvas
        .write_to_sink(&sink, Some(config.projectile.output_name.as_str()), None)
        .context("Failed to write projectile image")?;
    info!("Wrote {}", path.display());
    Ok(())
}
