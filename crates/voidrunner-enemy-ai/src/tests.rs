#[cfg(test)]
mod tests {
    use glam::DVec2;

    use voidrunner_core::components::EnemyTimers;
    use voidrunner_core::constants::*;
    use voidrunner_core::enums::{EnemyMode, Species};

    use crate::fsm::{evaluate, EnemyAction, EnemyContext, EnemyUpdate};
    use crate::profiles::{get_profile, initial_cooldowns};

    const PLAYER: DVec2 = DVec2::new(480.0, 270.0);

    fn make_context(species: Species, mode: EnemyMode, distance: f64) -> EnemyContext {
        let profile = get_profile(species);
        EnemyContext {
            species,
            mode,
            position: PLAYER - DVec2::new(distance, 0.0),
            velocity: DVec2::ZERO,
            player_position: PLAYER,
            timers: EnemyTimers::default(),
            orbit_radius: profile.orbit_radius.unwrap_or(0.0),
            orbit_dir: 1.0,
            dash_dir: DVec2::ZERO,
            dt: DT,
        }
    }

    /// Feed an update back into the context, holding position fixed.
    fn carry(ctx: &EnemyContext, update: &EnemyUpdate) -> EnemyContext {
        EnemyContext {
            mode: update.mode,
            velocity: update.velocity,
            timers: update.timers,
            dash_dir: update.dash_dir,
            ..*ctx
        }
    }

    /// Run until the mode changes; returns (steps taken, context after change).
    fn run_until_mode_change(mut ctx: EnemyContext, limit: usize) -> (usize, EnemyContext) {
        for step in 1..=limit {
            let update = evaluate(&ctx);
            ctx = carry(&ctx, &update);
            if update.mode_changed {
                return (step, ctx);
            }
        }
        panic!("mode did not change within {limit} steps");
    }

    #[test]
    fn test_chaser_pursues_and_is_speed_capped() {
        let mut ctx = make_context(Species::Chaser, EnemyMode::Normal, 300.0);
        let first = evaluate(&ctx);
        assert!(first.velocity.x > 0.0, "chaser should accelerate toward the player");
        assert_eq!(first.velocity.y, 0.0);

        for _ in 0..600 {
            let update = evaluate(&ctx);
            ctx = carry(&ctx, &update);
        }
        let cap = get_profile(Species::Chaser).max_speed;
        assert!((ctx.velocity.length() - cap).abs() < 1e-9);
    }

    #[test]
    fn test_charger_full_cycle_uses_exact_durations() {
        let ctx = make_context(Species::Charger, EnemyMode::Normal, 200.0);

        // Off cooldown and in range: windup on the first step.
        let update = evaluate(&ctx);
        assert!(update.mode_changed);
        assert_eq!(update.mode, EnemyMode::Windup);
        assert_eq!(update.timers.windup, CHARGER_WINDUP);
        let ctx = carry(&ctx, &update);

        let (windup_steps, ctx) = run_until_mode_change(ctx, 1000);
        assert_eq!(windup_steps, (CHARGER_WINDUP / DT).round() as usize);
        assert_eq!(ctx.mode, EnemyMode::Dash);
        assert!((ctx.dash_dir - DVec2::X).length() < 1e-12);
        assert!((ctx.velocity.length() - CHARGER_DASH_SPEED).abs() < 1e-9);

        let (dash_steps, ctx) = run_until_mode_change(ctx, 1000);
        assert_eq!(dash_steps, (CHARGER_DASH_DURATION / DT).round() as usize);
        assert_eq!(ctx.mode, EnemyMode::Normal);
        assert_eq!(ctx.timers.charge_cooldown, CHARGER_COOLDOWN);

        // Still in range, but the post-dash cooldown must elapse first.
        let (normal_steps, ctx) = run_until_mode_change(ctx, 1000);
        assert_eq!(normal_steps, (CHARGER_COOLDOWN / DT).round() as usize);
        assert_eq!(ctx.mode, EnemyMode::Windup);
    }

    #[test]
    fn test_charger_dash_ignores_speed_cap() {
        let mut ctx = make_context(Species::Charger, EnemyMode::Dash, 200.0);
        ctx.dash_dir = DVec2::Y;
        ctx.timers.dash = CHARGER_DASH_DURATION;
        let update = evaluate(&ctx);
        assert_eq!(update.mode, EnemyMode::Dash);
        assert!(update.velocity.length() > get_profile(Species::Charger).max_speed);
        // Direction is the one captured at windup end, not toward the player.
        assert!((update.velocity.normalize() - DVec2::Y).length() < 1e-12);
    }

    #[test]
    fn test_charger_out_of_range_stays_normal() {
        let ctx = make_context(Species::Charger, EnemyMode::Normal, CHARGER_RANGE + 50.0);
        let update = evaluate(&ctx);
        assert!(!update.mode_changed);
        assert_eq!(update.mode, EnemyMode::Normal);
    }

    #[test]
    fn test_stunned_charger_reverts_to_normal() {
        let mut ctx = make_context(Species::Charger, EnemyMode::Dash, 100.0);
        ctx.dash_dir = DVec2::X;
        ctx.timers.dash = 0.3;
        ctx.timers.stun = 2.0 * DT;
        ctx.velocity = DVec2::new(-400.0, 0.0);

        let update = evaluate(&ctx);
        assert_eq!(update.mode, EnemyMode::Dash, "still stunned");
        assert!((update.velocity.x - (-400.0 * STUN_DAMPING)).abs() < 1e-9);
        let ctx = carry(&ctx, &update);

        let update = evaluate(&ctx);
        assert_eq!(update.timers.stun, 0.0);
        assert!(update.mode_changed);
        assert_eq!(update.mode, EnemyMode::Normal);
        assert_eq!(update.timers.dash, 0.0);
        assert_eq!(update.timers.charge_cooldown, CHARGER_COOLDOWN);
    }

    #[test]
    fn test_stunned_enemy_keeps_knockback_above_cap() {
        let mut ctx = make_context(Species::Chaser, EnemyMode::Normal, 100.0);
        ctx.timers.stun = SHIELD_STUN_SECS;
        ctx.velocity = DVec2::new(-SHIELD_KNOCKBACK, 0.0);
        let update = evaluate(&ctx);
        assert!(update.velocity.length() > get_profile(Species::Chaser).max_speed);
        assert!(update.velocity.x < 0.0, "stunned enemies do not steer");
    }

    #[test]
    fn test_skirmisher_closes_in_from_far_and_backs_off_when_close() {
        let profile = get_profile(Species::Skirmisher);
        let orbit = profile.orbit_radius.unwrap();

        let far = make_context(Species::Skirmisher, EnemyMode::Normal, orbit + 150.0);
        assert!(evaluate(&far).velocity.x > 0.0);

        let near = make_context(Species::Skirmisher, EnemyMode::Normal, orbit - 120.0);
        assert!(evaluate(&near).velocity.x < 0.0);
    }

    #[test]
    fn test_skirmisher_orbit_direction_is_per_instance() {
        let orbit = get_profile(Species::Skirmisher).orbit_radius.unwrap();
        let mut ccw = make_context(Species::Skirmisher, EnemyMode::Normal, orbit);
        ccw.orbit_dir = 1.0;
        let mut cw = ccw;
        cw.orbit_dir = -1.0;

        let a = evaluate(&ccw).velocity;
        let b = evaluate(&cw).velocity;
        assert!(a.y * b.y < 0.0, "opposite orbit directions should weave opposite ways");
    }

    #[test]
    fn test_sapper_drops_slow_field_in_range() {
        let ctx = make_context(Species::Sapper, EnemyMode::Normal, 200.0);
        let update = evaluate(&ctx);
        assert_eq!(
            update.actions,
            vec![EnemyAction::DropSlowField { at: ctx.position }]
        );
        assert_eq!(update.timers.drop_cooldown, SAPPER_DROP_COOLDOWN);

        let next = evaluate(&carry(&ctx, &update));
        assert!(next.actions.is_empty(), "cooldown blocks a second drop");
    }

    #[test]
    fn test_sapper_out_of_range_holds_drop() {
        let ctx = make_context(Species::Sapper, EnemyMode::Normal, SAPPER_DROP_RANGE + 10.0);
        assert!(evaluate(&ctx).actions.is_empty());
    }

    #[test]
    fn test_boss_spawns_and_fires_on_separate_cooldowns() {
        let mut ctx = make_context(Species::Boss, EnemyMode::Normal, 250.0);
        ctx.timers = initial_cooldowns(Species::Boss);
        ctx.timers.fire_cooldown = DT;
        ctx.timers.spawn_cooldown = 10.0;

        let update = evaluate(&ctx);
        assert_eq!(update.actions.len(), 1);
        match update.actions[0] {
            EnemyAction::FireFan { origin, heading } => {
                assert_eq!(origin, ctx.position);
                assert!((heading - DVec2::X).length() < 1e-12);
            }
            other => panic!("expected a fan, got {other:?}"),
        }
        assert_eq!(update.timers.fire_cooldown, BOSS_FIRE_COOLDOWN);

        ctx.timers.fire_cooldown = 10.0;
        ctx.timers.spawn_cooldown = DT;
        let update = evaluate(&ctx);
        assert_eq!(
            update.actions,
            vec![EnemyAction::SpawnReinforcements {
                at: ctx.position,
                count: BOSS_REINFORCEMENTS,
            }]
        );
    }

    #[test]
    fn test_only_splitters_split() {
        for species in [
            Species::Chaser,
            Species::Skirmisher,
            Species::Charger,
            Species::Sapper,
            Species::Splitlet,
            Species::Boss,
        ] {
            assert!(!get_profile(species).splits_on_death, "{species:?}");
        }
        assert!(get_profile(Species::Splitter).splits_on_death);
    }

    #[test]
    fn test_splitlet_is_fast_and_fragile() {
        let splitlet = get_profile(Species::Splitlet);
        let chaser = get_profile(Species::Chaser);
        assert!(splitlet.max_speed > chaser.max_speed);
        assert_eq!(splitlet.hp, 1);
    }
}
