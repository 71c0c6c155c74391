//! Falling Spheres Demo
//!
//! Drops two columns of small spheres and a ring of sliding spheres onto the ground
//! next to a static wall, drives the world with a background step loop for a few
//! seconds and prints where everything ended up.
//!
//! Run with `RUST_LOG=debug cargo run --example falling_spheres`.

use parking_lot::Mutex;
use setphysics_engine::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    let mut world = World::new(WorldConfig::default().with_gravity(0.0, -1.0, 0.0))?;

    let wall = world.add_body(Body::fixed(Shape::cuboid(3.0, 0.1, 2.0), Vec3::new(0.0, 0.15, -1.0)))?;

    for i in 0..5 {
        let i = i as f64;
        world.add_body(Body::new(Shape::sphere(0.1), Vec3::new(0.0, i + 2.0, 0.0)))?;
        world.add_body(Body::new(Shape::sphere(0.1), Vec3::new(0.0, i + 7.0, 0.05)))?;
    }

    for i in 0..24 {
        let angle = i as f64 * std::f64::consts::TAU / 24.0;
        let start = Vec3::new(2.5 * angle.cos(), 0.5 + i as f64 / 3.0, 2.5 * angle.sin());
        let mut sphere = Body::new(Shape::sphere(0.1), start);
        sphere.add_force(Vec3::new(-angle.cos(), 0.0, -angle.sin()) * 2.0);
        world.add_body(sphere)?;
    }

    let world = Arc::new(Mutex::new(world));
    let step_loop = StepLoop::start_configured(Arc::clone(&world))?;
    std::thread::sleep(Duration::from_secs(4));
    step_loop.stop();

    let world = world.lock();
    println!(
        "{} steps, {:.2}s simulated, {} corrections in the last step",
        world.step_count(),
        world.time(),
        world.collision_events().len()
    );
    for (handle, body) in world.bodies() {
        let tag = if handle == world.ground() {
            "ground"
        } else if handle == wall {
            "wall"
        } else {
            "sphere"
        };
        println!("{:>4} {:<6} at {}", handle.raw(), tag, body.position());
    }

    Ok(())
}
