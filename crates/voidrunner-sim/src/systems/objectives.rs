//! Objective rotation.
//!
//! At most one objective is active. When none is, a re-arm cooldown runs
//! and then a random objective is chosen. Progress arrives as events raised
//! by collision resolution; "survive" progresses with time and is voided by
//! any damage.

use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::components::Objective;
use voidrunner_core::constants::*;
use voidrunner_core::enums::{ObjectiveKind, ToneCue};
use voidrunner_core::types::tick_down;

use crate::session::Session;

/// Progress notifications raised mid-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveEvent {
    Collect,
    Slay,
    Damage,
}

const KINDS: [ObjectiveKind; 3] = [
    ObjectiveKind::Survive,
    ObjectiveKind::Collect,
    ObjectiveKind::Slay,
];

/// Fresh objective of the given kind.
pub fn make_objective(kind: ObjectiveKind) -> Objective {
    let (target, timer, reward) = match kind {
        ObjectiveKind::Survive => (SURVIVE_TARGET_SECS, SURVIVE_TIMER, SURVIVE_REWARD),
        ObjectiveKind::Collect => (COLLECT_TARGET as f64, COLLECT_TIMER, COLLECT_REWARD),
        ObjectiveKind::Slay => (SLAY_TARGET as f64, SLAY_TIMER, SLAY_REWARD),
    };
    Objective {
        kind,
        target,
        progress: 0.0,
        timer,
        reward,
    }
}

/// Apply a progress event to the active objective.
pub fn notify(session: &mut Session, event: ObjectiveEvent) {
    let Some(objective) = session.objective.as_mut() else {
        return;
    };
    match (objective.kind, event) {
        (ObjectiveKind::Collect, ObjectiveEvent::Collect)
        | (ObjectiveKind::Slay, ObjectiveEvent::Slay) => {
            objective.progress += 1.0;
            if objective.progress >= objective.target {
                complete(session);
            }
        }
        (ObjectiveKind::Survive, ObjectiveEvent::Damage) => fail(session),
        _ => {}
    }
}

/// Tick the active objective, or the re-arm cooldown when there is none.
pub fn run(session: &mut Session, rng: &mut ChaCha8Rng, dt: f64) {
    match session.objective.as_mut() {
        Some(objective) => {
            if objective.kind == ObjectiveKind::Survive {
                objective.progress = (objective.progress + dt).min(objective.target);
                if objective.target - objective.progress <= TIMER_EPSILON {
                    complete(session);
                    return;
                }
            }
            objective.timer = tick_down(objective.timer, dt);
            if objective.timer == 0.0 {
                fail(session);
            }
        }
        None => {
            session.objective_rearm = tick_down(session.objective_rearm, dt);
            if session.objective_rearm == 0.0 {
                let kind = KINDS[rng.gen_range(0..KINDS.len())];
                debug!("objective started: {kind:?}");
                session.objective = Some(make_objective(kind));
                session.effects.tone(ToneCue::ObjectiveStart);
            }
        }
    }
}

fn complete(session: &mut Session) {
    if let Some(objective) = session.objective.take() {
        debug!("objective complete: {:?} (+{})", objective.kind, objective.reward);
        session.score += objective.reward;
        session.objective_rearm = OBJECTIVE_REARM;
        session.effects.tone(ToneCue::ObjectiveComplete);
    }
}

fn fail(session: &mut Session) {
    if let Some(objective) = session.objective.take() {
        debug!("objective failed: {:?}", objective.kind);
        session.objective_rearm = OBJECTIVE_REARM;
        session.effects.tone(ToneCue::ObjectiveFailed);
    }
}
