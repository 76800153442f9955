use crate::engine::State;

/// Advance the state by dt seconds.
///
/// Forces first, then velocities, then positions (semi-implicit Euler:
/// v += a*dt, then x += v*dt). Reordering changes the energy drift.
pub fn update(state: &mut State, dt: f32) {
    state.refresh_pair_factors();
    state.compute_accelerations();

    for (vel, accel) in state.velocities.iter_mut().zip(&state.accelerations) {
        *vel += *accel * dt;
    }

    for (pos, vel) in state.positions.iter_mut().zip(&state.velocities) {
        *pos += *vel * dt;
    }
}

impl State {
    pub fn update(&mut self, dt: f32) {
        update(self, dt);
    }
}
