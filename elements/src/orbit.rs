// Copyright (c) 2024 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

use crate::astro_util::KPC_PER_MYR_PER_KM_S;
use crate::phase_space::GalactocentricState;
use crate::potential::PotentialTrait;
use crate::ElementsError;

/// Default upper bound on a single leapfrog step, Myr.
pub const DEFAULT_MAX_STEP_MYR: f64 = 0.01;

/// Specific orbital energy, (km/s)^2.
pub fn energy(state: &GalactocentricState, potential: &dyn PotentialTrait) -> f64 {
    0.5 * state.velocity.norm_squared() + potential.potential(&state.position)
}

/// Integrates every initial state through `potential`, sampling each orbit at
/// `times_myr`. The initial states are taken to be at `times_myr[0]`; the
/// times must be finite and strictly increasing.
///
/// Returns one vector per orbit, each holding one state per requested time
/// (the first being the initial state itself).
///
/// Between samples the orbit is advanced with a kick-drift-kick leapfrog
/// using equal steps no longer than `max_step_myr`.
pub fn integrate_orbits(
    initial_states: &[GalactocentricState],
    times_myr: &[f64],
    potential: &dyn PotentialTrait,
    max_step_myr: f64,
) -> Result<Vec<Vec<GalactocentricState>>, ElementsError> {
    validate_time_grid(times_myr)?;
    if !(max_step_myr.is_finite() && max_step_myr > 0.0) {
        return Err(ElementsError::InvalidArgument(format!(
            "max_step_myr must be positive; got {}",
            max_step_myr
        )));
    }
    for (index, state) in initial_states.iter().enumerate() {
        if state.position.iter().chain(state.velocity.iter())
            .any(|c| !c.is_finite())
        {
            return Err(ElementsError::InvalidArgument(format!(
                "initial state {} is not finite: {:?}", index, state)));
        }
    }

    let mut orbits = Vec::with_capacity(initial_states.len());
    for initial in initial_states {
        let mut samples = Vec::with_capacity(times_myr.len());
        let mut state = *initial;
        samples.push(state);
        for window in times_myr.windows(2) {
            let interval = window[1] - window[0];
            let num_steps = (interval / max_step_myr).ceil().max(1.0) as usize;
            state = leapfrog(&state, interval / num_steps as f64, num_steps,
                             potential);
            samples.push(state);
        }
        orbits.push(samples);
    }
    Ok(orbits)
}

fn validate_time_grid(times_myr: &[f64]) -> Result<(), ElementsError> {
    if times_myr.is_empty() {
        return Err(ElementsError::InvalidArgument(
            "time grid must not be empty".to_string()));
    }
    if let Some(t) = times_myr.iter().find(|t| !t.is_finite()) {
        return Err(ElementsError::InvalidArgument(format!(
            "time grid contains non-finite value {}", t)));
    }
    if times_myr.windows(2).any(|w| w[1] <= w[0]) {
        return Err(ElementsError::InvalidArgument(format!(
            "time grid must be strictly increasing; got {:?}", times_myr)));
    }
    Ok(())
}

fn leapfrog(
    start: &GalactocentricState,
    dt_myr: f64,
    num_steps: usize,
    potential: &dyn PotentialTrait,
) -> GalactocentricState {
    // Velocities stay in km/s; these scale factors carry the Myr and kpc.
    let kick = 0.5 * dt_myr * KPC_PER_MYR_PER_KM_S;
    let drift = dt_myr * KPC_PER_MYR_PER_KM_S;

    let mut position = start.position;
    let mut velocity = start.velocity;
    let mut acceleration = potential.acceleration(&position);
    for _ in 0..num_steps {
        velocity += acceleration * kick;
        position += velocity * drift;
        acceleration = potential.acceleration(&position);
        velocity += acceleration * kick;
    }
    GalactocentricState { position, velocity }
}
