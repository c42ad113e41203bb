/// Fixed timestep accumulator.
/// Turns variable host frame times into a whole number of simulation ticks.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Upper bound on ticks issued for a single frame.
    max_steps: u32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            max_steps,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    /// Time beyond `max_steps` ticks is dropped so a long stall cannot snowball.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        let cap = self.dt * self.max_steps as f32;
        if self.accumulator > cap {
            log::warn!(
                "frame took {:.3}s, dropping {:.3}s of simulation time",
                frame_dt,
                self.accumulator - cap
            );
            self.accumulator = cap;
        }
        let steps = ((self.accumulator / self.dt) as u32).min(self.max_steps);
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}
