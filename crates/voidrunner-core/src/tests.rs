#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::{ControlInput, PlayerCommand};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{EffectEvent, ParticleBurst};
    use crate::state::GameStateSnapshot;
    use crate::types::*;

    #[test]
    fn test_sim_time_sixty_ticks_one_second() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tick_down_expires_on_exact_step() {
        // 0.5s = 30 steps; float drift must not add a 31st.
        let mut timer = 0.5;
        let mut steps = 0;
        while timer > 0.0 {
            timer = tick_down(timer, DT);
            steps += 1;
        }
        assert_eq!(steps, 30);

        let mut timer = CHARGER_DASH_DURATION;
        let mut steps = 0;
        while timer > 0.0 {
            timer = tick_down(timer, DT);
            steps += 1;
        }
        assert_eq!(steps, 24);
    }

    #[test]
    fn test_tick_down_floors_at_zero() {
        assert_eq!(tick_down(0.0, DT), 0.0);
        assert_eq!(tick_down(0.001, DT), 0.0);
    }

    #[test]
    fn test_circles_overlap_strict() {
        let a = DVec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 5.0, DVec2::new(9.0, 0.0), 5.0));
        // Touching is not overlapping.
        assert!(!circles_overlap(a, 5.0, DVec2::new(10.0, 0.0), 5.0));
    }

    #[test]
    fn test_clamp_to_field_respects_radius() {
        let p = clamp_to_field(DVec2::new(-50.0, FIELD_HEIGHT + 50.0), 10.0);
        assert_eq!(p, DVec2::new(10.0, FIELD_HEIGHT - 10.0));
    }

    #[test]
    fn test_fan_directions_symmetric() {
        let dirs = fan_directions(DVec2::X, 3, 0.2);
        assert_eq!(dirs.len(), 3);
        assert!((dirs[1] - DVec2::X).length() < 1e-12);
        assert!((dirs[0].y + dirs[2].y).abs() < 1e-12);
        assert!((dirs[0].y.atan2(dirs[0].x) + 0.2).abs() < 1e-12);

        let single = fan_directions(DVec2::Y, 1, 0.5);
        assert!((single[0] - DVec2::Y).length() < 1e-12);
    }

    #[test]
    fn test_control_input_normalizes_movement() {
        let input = ControlInput {
            movement: DVec2::new(3.0, 4.0),
            aim: None,
            fire: true,
        }
        .normalized();
        assert!((input.movement.length() - 1.0).abs() < 1e-12);
        assert!(input.fire);

        let idle = ControlInput::default().normalized();
        assert_eq!(idle.movement, DVec2::ZERO);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::Win.is_terminal());
        assert!(!GamePhase::Paused.is_terminal());
        assert!(!GamePhase::Shop.is_terminal());
    }

    #[test]
    fn test_friendly_owners() {
        assert!(ProjectileOwner::Player.is_friendly());
        assert!(ProjectileOwner::Drone.is_friendly());
        assert!(!ProjectileOwner::Enemy.is_friendly());
    }

    #[test]
    fn test_command_json_is_tagged() {
        let cmd = PlayerCommand::Purchase {
            upgrade: UpgradeKind::Shield,
        };
        let json = serde_json::to_value(cmd).unwrap();
        assert_eq!(json["type"], "Purchase");
        assert_eq!(json["upgrade"], "Shield");

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Dash"}"#).unwrap();
        assert_eq!(back, PlayerCommand::Dash);
    }

    #[test]
    fn test_particle_event_json_shape() {
        let event = EffectEvent::Particles(ParticleBurst {
            pos: DVec2::new(1.0, 2.0),
            color: COLOR_GEM,
            count: 8,
            speed: 90.0,
            lifetime: 0.4,
        });
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["type"], "Particles");
        assert_eq!(json["pos"], serde_json::json!([1.0, 2.0]));
    }

    #[test]
    fn test_default_snapshot_schema() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_value(&snapshot).unwrap();
        for key in [
            "time",
            "phase",
            "score",
            "wave",
            "player",
            "drone",
            "gate",
            "objective",
            "upgrades",
            "enemies",
            "projectiles",
            "pickups",
            "hazards",
            "effects",
            "stats",
        ] {
            assert!(json.get(key).is_some(), "snapshot missing {key}");
        }
        assert_eq!(json["phase"], "Menu");
        assert_eq!(json["player"]["position"], serde_json::json!([0.0, 0.0]));
    }
}
