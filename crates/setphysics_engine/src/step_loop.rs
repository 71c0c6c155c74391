//! Background step loop driving a shared world at a fixed rate

use crate::error::{PhysicsError, Result};
use crate::world::World;
use crossbeam_channel::{bounded, select, tick, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Handle to a running step loop
///
/// Every tick locks the world and steps it by the wall-clock time elapsed since the
/// previous tick. Dropping the handle stops the loop.
pub struct StepLoop {
    shutdown: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
    period: Duration,
}

impl StepLoop {
    /// Start stepping `world` `rate` times per second
    pub fn start(world: Arc<Mutex<World>>, rate: u32) -> Result<Self> {
        if rate == 0 {
            return Err(PhysicsError::InvalidConfig("step rate must be at least 1".into()));
        }
        let period = Duration::from_millis(u64::from((1000 / rate).max(1)));
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);

        let thread = std::thread::Builder::new()
            .name("setphysics-step".into())
            .spawn(move || {
                let ticker = tick(period);
                let mut last = Instant::now();
                loop {
                    select! {
                        recv(ticker) -> _ => {
                            let now = Instant::now();
                            let elapsed = now.duration_since(last);
                            last = now;
                            if elapsed > period * 4 {
                                log::warn!("Step loop is falling behind: {:?} since last tick", elapsed);
                            }
                            world.lock().step_seconds(elapsed.as_secs_f64());
                        }
                        recv(shutdown_rx) -> _ => break,
                    }
                }
            })
            .map_err(|e| PhysicsError::StepLoopSpawn(e.to_string()))?;

        log::debug!("Started step loop at {} Hz", rate);
        Ok(Self {
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
            period,
        })
    }

    /// Start stepping `world` at its configured step rate
    pub fn start_configured(world: Arc<Mutex<World>>) -> Result<Self> {
        let rate = world.lock().config().step_rate;
        Self::start(world, rate)
    }

    /// Interval between ticks
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the loop and wait for the in-flight step to finish
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("Step loop thread panicked");
            }
            log::debug!("Stopped step loop");
        }
    }
}

impl Drop for StepLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;
    use setphysics_math::{Shape, Vec3};

    #[test]
    fn test_zero_rate_rejected() {
        let world = Arc::new(Mutex::new(World::default()));
        assert!(matches!(
            StepLoop::start(world, 0),
            Err(PhysicsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_loop_steps_world_until_stopped() {
        let world = Arc::new(Mutex::new(World::default()));
        let body = world
            .lock()
            .add_body(Body::with_velocity(Shape::sphere(0.1), Vec3::new(0.0, 5.0, 0.0), Vec3::X))
            .unwrap();

        let step_loop = StepLoop::start(Arc::clone(&world), 200).unwrap();
        assert_eq!(step_loop.period(), Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(100));
        step_loop.stop();

        let steps = world.lock().step_count();
        assert!(steps > 0);
        assert!(world.lock().body(body).unwrap().position().x > 0.0);

        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(world.lock().step_count(), steps);
    }

    #[test]
    fn test_simulated_time_tracks_wall_clock() {
        let world = Arc::new(Mutex::new(World::default()));
        let started = Instant::now();
        let step_loop = StepLoop::start(Arc::clone(&world), 300).unwrap();
        let period = step_loop.period();
        std::thread::sleep(Duration::from_secs(1));
        step_loop.stop();
        let wall = started.elapsed().as_secs_f64();

        let simulated = world.lock().time();
        assert!(simulated <= wall, "simulated {simulated}s ahead of wall {wall}s");
        // Sub-millisecond remainders must carry over instead of being dropped each tick
        let slack = (period * 5).as_secs_f64();
        assert!(
            wall - simulated < slack,
            "simulated {simulated}s lags wall {wall}s by more than {slack}s"
        );
    }
}
