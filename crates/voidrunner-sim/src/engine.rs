//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the session, processes
//! player commands, runs all systems in a fixed order per step, and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::commands::{ControlInput, PlayerCommand};
use voidrunner_core::constants::*;
use voidrunner_core::enums::{DriveMode, GamePhase, ToneCue};
use voidrunner_core::events::EffectEvent;
use voidrunner_core::state::GameStateSnapshot;
use voidrunner_core::types::SimTime;

use voidrunner_economy::try_purchase;

use crate::error::{ConfigError, DriveError};
use crate::session::Session;
use crate::systems;
use crate::systems::abilities::AbilityTriggers;
use crate::world_setup;

/// Configuration for a simulation session.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Gems to collect before the gate opens.
    pub resource_goal: u32,
    /// Gems kept on the field until the gate opens.
    pub gem_target_count: usize,
    /// Cap on a single real-time frame delta (seconds).
    pub max_frame_delta: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            resource_goal: DEFAULT_RESOURCE_GOAL,
            gem_target_count: DEFAULT_GEM_TARGET_COUNT,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resource_goal == 0 {
            return Err(ConfigError::ZeroResourceGoal);
        }
        if self.gem_target_count == 0 {
            return Err(ConfigError::ZeroGemTarget);
        }
        if !self.max_frame_delta.is_finite() || self.max_frame_delta < DT {
            return Err(ConfigError::InvalidFrameDelta(self.max_frame_delta));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    session: Session,
    rng: ChaCha8Rng,
    /// Restarts so far; each run re-seeds with `seed + run_index`.
    run_index: u64,
    controls: ControlInput,
    triggers: AbilityTriggers,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    effect_events: Vec<EffectEvent>,
    drive_mode: Option<DriveMode>,
    /// Real-time carry-over smaller than one step.
    accumulator: f64,
}

impl SimulationEngine {
    /// Create a new simulation engine in the menu.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            session: Session::new(config.resource_goal, config.gem_target_count),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            run_index: 0,
            controls: ControlInput::default(),
            triggers: AbilityTriggers::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            effect_events: Vec::new(),
            drive_mode: None,
            accumulator: 0.0,
            config,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held controls. Movement intent is normalized.
    pub fn set_controls(&mut self, controls: ControlInput) {
        self.controls = controls.normalized();
    }

    /// Advance by `duration` seconds of simulated time, rounded to whole
    /// steps. Returns the number of steps simulated.
    pub fn advance(&mut self, duration: f64) -> Result<u32, DriveError> {
        self.claim_drive_mode(DriveMode::Deterministic)?;
        let steps = if duration.is_finite() && duration > 0.0 {
            (duration / DT).round() as u32
        } else {
            0
        };
        Ok(self.run_steps(steps))
    }

    /// Feed one wall-clock frame delta. The delta is capped at
    /// `max_frame_delta` and accumulated; every whole step that fits is run
    /// and the remainder carries over. Returns the number of steps simulated.
    pub fn frame(&mut self, real_dt: f64) -> Result<u32, DriveError> {
        self.claim_drive_mode(DriveMode::RealTime)?;
        let capped = if real_dt.is_finite() {
            real_dt.clamp(0.0, self.config.max_frame_delta)
        } else {
            0.0
        };
        self.accumulator += capped;
        let mut steps = 0;
        while self.accumulator + TIMER_EPSILON >= DT {
            self.accumulator = (self.accumulator - DT).max(0.0);
            steps += 1;
        }
        Ok(self.run_steps(steps))
    }

    /// Build a snapshot of the full session. Never mutates state.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.session)
    }

    /// Drain the effect events raised since the last call.
    pub fn take_effects(&mut self) -> Vec<EffectEvent> {
        self.collect_effects();
        std::mem::take(&mut self.effect_events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The time-advancement mode this session is bound to, once driven.
    pub fn drive_mode(&self) -> Option<DriveMode> {
        self.drive_mode
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Mutable world and session together, for staging test scenarios.
    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut World, &mut Session, &mut ChaCha8Rng) {
        (&mut self.world, &mut self.session, &mut self.rng)
    }

    fn claim_drive_mode(&mut self, requested: DriveMode) -> Result<(), DriveError> {
        match self.drive_mode {
            Some(active) if active != requested => {
                Err(DriveError::ModeConflict { active, requested })
            }
            Some(_) => Ok(()),
            None => {
                debug!("session driven in {requested:?} mode");
                self.drive_mode = Some(requested);
                Ok(())
            }
        }
    }

    fn run_steps(&mut self, steps: u32) -> u32 {
        self.process_commands();
        let mut simulated = 0;
        for _ in 0..steps {
            if self.session.phase != GamePhase::Playing {
                break;
            }
            self.step();
            simulated += 1;
        }
        self.collect_effects();
        simulated
    }

    fn collect_effects(&mut self) {
        self.effect_events
            .append(&mut self.session.effects.pending);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
        if self.session.phase != GamePhase::Playing {
            self.triggers = AbilityTriggers::default();
        }
    }

    /// Handle a single player command. Commands invalid for the current
    /// phase are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        let phase = self.session.phase;
        match (command, phase) {
            (PlayerCommand::Start, GamePhase::Menu) => self.begin_run(),
            (PlayerCommand::Restart, p) if p != GamePhase::Menu => {
                self.run_index += 1;
                self.rng = ChaCha8Rng::seed_from_u64(self.config.seed.wrapping_add(self.run_index));
                self.begin_run();
            }
            (PlayerCommand::Pause, GamePhase::Playing) => self.session.set_phase(GamePhase::Paused),
            (PlayerCommand::Resume, GamePhase::Paused) => self.session.set_phase(GamePhase::Playing),
            (PlayerCommand::OpenShop, GamePhase::Playing) => self.session.set_phase(GamePhase::Shop),
            (PlayerCommand::CloseShop, GamePhase::Shop) => self.session.set_phase(GamePhase::Playing),
            (PlayerCommand::Purchase { upgrade }, GamePhase::Shop) => {
                match try_purchase(&mut self.session.upgrades, upgrade, self.session.score) {
                    Ok(cost) => {
                        self.session.score -= cost;
                        self.session.apply_upgrades();
                        self.session.effects.tone(ToneCue::Purchase);
                        debug!("purchased {upgrade:?} for {cost}");
                    }
                    Err(err) => debug!("purchase rejected: {err}"),
                }
            }
            (PlayerCommand::Dash, GamePhase::Playing) => self.triggers.dash = true,
            (PlayerCommand::Shield, GamePhase::Playing) => self.triggers.shield = true,
            (command, phase) => debug!("ignored {command:?} in {phase:?}"),
        }
    }

    /// Reset every pool and timer to a fresh run and enter play.
    fn begin_run(&mut self) {
        self.collect_effects();
        self.session = Session::new(self.config.resource_goal, self.config.gem_target_count);
        self.time = SimTime::default();
        self.triggers = AbilityTriggers::default();
        self.despawn_buffer.clear();
        world_setup::setup_run(&mut self.world, &mut self.session, &mut self.rng);
        info!("run {} started (seed {})", self.run_index, self.config.seed);
        self.session.set_phase(GamePhase::Playing);
    }

    /// Advance the simulation by one fixed step.
    fn step(&mut self) {
        let dt = self.time.dt();
        let triggers = std::mem::take(&mut self.triggers);
        self.run_systems(triggers, dt);
        self.time.advance();
    }

    /// Run all systems in order.
    fn run_systems(&mut self, triggers: AbilityTriggers, dt: f64) {
        let world = &mut self.world;
        let session = &mut self.session;
        let rng = &mut self.rng;
        let despawn = &mut self.despawn_buffer;

        // 1. Ability and cooldown decay, dash and shield triggers
        systems::abilities::run(world, session, &self.controls, triggers, dt);
        // 2. Player movement integration
        systems::movement::run_player(session, &self.controls, dt);
        // 3. Weapon heat and firing
        systems::weapon::run(world, session, &self.controls, dt);
        // 4. Homing projectile steering
        systems::projectiles::steer_homing(world, dt);
        // 5. Companion drone
        systems::drone::run(world, session, dt);
        // 6. Enemy AI (may drop hazards, spawn enemies, fire)
        systems::enemy_ai::run(world, session, rng, dt);
        // 7. Pool kinematics and wall handling
        systems::movement::run(world, dt);
        systems::movement::confine_enemies(world);
        systems::movement::bounce_projectiles(world);
        // 8. Projectile lifetime and off-field removal
        systems::projectiles::expire(world, dt, despawn);
        systems::cleanup::flush(world, despawn);
        // 9. Pickups (magnet, expiry, timed spawns)
        systems::pickups::run(world, session, rng, dt, despawn);
        // 10. Hazards (occupancy, risk damage may end the run)
        systems::hazards::run(world, session, rng, dt, despawn);
        // 11. Collision resolution (may end the run)
        if session.phase == GamePhase::Playing {
            systems::collision::run(world, session, rng, despawn);
        }
        // 12. Waves and objectives
        if session.phase == GamePhase::Playing {
            systems::waves::run(world, session, rng, dt);
            systems::objectives::run(session, rng, dt);
        }
        // 13. Cosmetic effect decay
        systems::effects::run(&mut session.effects, dt);
        // 14. Cleanup
        systems::cleanup::run(world, despawn);
    }
}
