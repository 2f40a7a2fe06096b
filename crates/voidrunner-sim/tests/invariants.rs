//! Property tests: random input scripts never break the session invariants.

use glam::DVec2;
use proptest::prelude::*;

use voidrunner_sim::core::commands::{ControlInput, PlayerCommand};
use voidrunner_sim::core::constants::*;
use voidrunner_sim::core::enums::GamePhase;
use voidrunner_sim::core::state::GameStateSnapshot;
use voidrunner_sim::{SimConfig, SimulationEngine};

#[derive(Debug, Clone)]
struct Op {
    angle: f64,
    moving: bool,
    fire: bool,
    dash: bool,
    shield: bool,
    steps: u32,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    (
        0.0..std::f64::consts::TAU,
        any::<bool>(),
        any::<bool>(),
        prop::bool::weighted(0.2),
        prop::bool::weighted(0.1),
        1u32..30,
    )
        .prop_map(|(angle, moving, fire, dash, shield, steps)| Op {
            angle,
            moving,
            fire,
            dash,
            shield,
            steps,
        })
}

fn check_snapshot(snap: &GameStateSnapshot) {
    let p = &snap.player;
    assert!((0..=p.max_health).contains(&p.health), "health {}", p.health);
    assert!((0.0..=HEAT_MAX).contains(&p.heat), "heat {}", p.heat);
    assert_eq!(p.chain > 0, p.chain_timer > 0.0, "chain {} timer {}", p.chain, p.chain_timer);
    assert!(p.position.x >= 0.0 && p.position.x <= FIELD_WIDTH);
    assert!(p.position.y >= 0.0 && p.position.y <= FIELD_HEIGHT);

    for enemy in &snap.enemies {
        assert!(
            enemy.hp >= 1 && enemy.hp <= enemy.max_hp,
            "enemy {} hp {}",
            enemy.id,
            enemy.hp
        );
    }
    assert!(snap.enemies.windows(2).all(|w| w[0].id < w[1].id));
    assert!(snap.projectiles.windows(2).all(|w| w[0].id < w[1].id));
    assert!(snap.pickups.windows(2).all(|w| w[0].id < w[1].id));
    assert!(snap.hazards.windows(2).all(|w| w[0].id < w[1].id));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let mut engine = SimulationEngine::new(SimConfig {
            seed,
            resource_goal: 8,
            ..Default::default()
        })
        .unwrap();
        engine.queue_command(PlayerCommand::Start);
        engine.advance(0.0).unwrap();

        let mut last_score = 0;
        let mut gate_seen = None;

        for op in ops {
            if engine.phase().is_terminal() {
                engine.queue_command(PlayerCommand::Restart);
                engine.advance(0.0).unwrap();
                last_score = 0;
                gate_seen = None;
            }

            let movement = if op.moving {
                DVec2::new(op.angle.cos(), op.angle.sin())
            } else {
                DVec2::ZERO
            };
            engine.set_controls(ControlInput {
                movement,
                aim: None,
                fire: op.fire,
            });
            if op.dash {
                engine.queue_command(PlayerCommand::Dash);
            }
            if op.shield {
                engine.queue_command(PlayerCommand::Shield);
            }
            engine.advance(op.steps as f64 * DT).unwrap();

            let snap = engine.snapshot();
            check_snapshot(&snap);

            prop_assert!(snap.score >= last_score, "score went down");
            last_score = snap.score;

            if let Some(gate) = &gate_seen {
                prop_assert_eq!(snap.gate.as_ref(), Some(gate));
            }
            if snap.gate.is_some() {
                gate_seen = snap.gate.clone();
            }
            if snap.phase == GamePhase::GameOver {
                prop_assert_eq!(snap.player.health, 0);
            }
        }
    }
}
