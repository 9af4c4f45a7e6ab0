//! Integration scenarios: facade, host grid, views, and actions together
//!
//! These tests drive multi-tick sequences the way a ship script would run
//! them: one facade pass per tick against a moving host.

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::core::query::BlockSliceExt;
    use crate::facade::{FacadeConfig, GridFacade};
    use crate::grid::memory::{BlockSpec, MemoryGrid};
    use crate::{KindTag, LockState};

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Hangar rig: two door pistons, a docking gear, lights, a bay sensor,
    /// and a status panel.
    fn hangar_grid() -> (MemoryGrid, GridFacade) {
        let grid = MemoryGrid::new();
        grid.add(
            BlockSpec::piston("Door Piston L")
                .with_limits(0.0, 4.0)
                .with_velocity(1.0)
                .disabled(),
        );
        grid.add(
            BlockSpec::piston("Door Piston R")
                .with_limits(0.0, 4.0)
                .with_velocity(1.0)
                .disabled(),
        );
        grid.add(BlockSpec::landing_gear("Dock Clamp").locked());
        grid.add(BlockSpec::light("Bay Light 1").disabled());
        grid.add(BlockSpec::light("Bay Light 2").disabled());
        grid.add(BlockSpec::sensor("Bay Sensor"));
        grid.add(BlockSpec::generic("LCD Bay Status"));

        let config = FacadeConfig {
            debug_panel: Some("LCD Bay Status".to_string()),
            ..FacadeConfig::default()
        };
        let facade = GridFacade::with_config(grid.clone(), config);
        (grid, facade)
    }

    // ====================================================================
    // Scenario 1: full hangar door cycle
    // ====================================================================

    #[test]
    fn hangar_door_cycle_opens_releases_and_reports() {
        init_logs();
        let (grid, facade) = hangar_grid();

        // --- Step 1: a ship enters the bay field ---
        let sensor_block = facade.block_with_name("Bay Sensor").unwrap();
        grid.set_sensor_active(&sensor_block, true);
        assert!(facade.sensor(&sensor_block).unwrap().is_active());

        // --- Step 2: the script reacts: lights on, clamp released ---
        facade
            .find_blocks_of_type(KindTag::Light)
            .for_each(|light| {
                light.turn_on().expect("lights accept OnOff_On");
            });
        let clamp_block = facade.block_with_name("Dock Clamp").unwrap();
        clamp_block.apply_action("Unlock").expect("gears accept Unlock");

        // the clamp's detail text still shows the old state until the host
        // ticks; the typed state machine already moved
        grid.tick(0.0);
        let clamp = facade.landing_gear(&clamp_block).unwrap();
        assert_eq!(clamp.lock_state(), Some(LockState::Unlocked));

        // --- Step 3: run the doors until both pistons report open ---
        let pistons = facade.find_blocks_of_name("Door Piston");
        assert_eq!(pistons.len(), 2);
        pistons.for_each(|piston| {
            piston.turn_on().expect("pistons accept OnOff_On");
        });

        let mut ticks = 0;
        loop {
            grid.tick(0.5);
            ticks += 1;
            assert!(ticks < 64, "doors never opened");

            let all_open = pistons.all(|block| {
                facade.piston(block).map_or(false, |p| p.is_expanded())
            });
            if all_open {
                break;
            }
        }
        // 4 m at 1 m/s in half-second steps
        assert_eq!(ticks, 8);

        // --- Step 4: park the doors and report ---
        pistons.for_each(|piston| {
            piston.turn_off().expect("pistons accept OnOff_Off");
            facade
                .debug(&format!("'{}' open", piston.name()))
                .expect("panel resolved at construction");
        });

        let panel = facade
            .blocks()
            .filtered(|b| b.name().starts_with("LCD Bay Status"));
        assert_eq!(
            panel[0].name(),
            "LCD Bay Status\n'Door Piston L' open\n'Door Piston R' open"
        );

        // parked doors stay put through further ticks
        grid.tick(10.0);
        assert!(pistons.all(|block| facade.piston(block).unwrap().is_expanded()));
    }

    // ====================================================================
    // Scenario 2: drill arm sweeps until damaged
    // ====================================================================

    #[test]
    fn drill_arm_sweeps_then_stalls_when_damaged() {
        init_logs();
        let grid = MemoryGrid::new();
        let arm = grid.add(
            BlockSpec::motor("Drill Arm")
                .with_angle_limits_rad(0.0, PI)
                .with_velocity(10.0)
                .at_angle(0.0),
        );
        let facade = GridFacade::new(grid.clone());

        // sweep: reverse at each stop, 10 rpm is 60 degrees per second
        let mut reversals = 0;
        for _ in 0..20 {
            grid.tick(1.0);
            let motor = facade.motor(&arm).unwrap();
            if motor.is_at_upper_limit() || motor.is_at_lower_limit() {
                motor.reverse().expect("motors accept Reverse");
                reversals += 1;
            }
        }
        assert!(reversals >= 2, "arm never swept: {} reversals", reversals);

        // --- damage the arm mid-run: it keeps its reading but stops ---
        grid.set_functional(&arm, false);
        let frozen = facade.motor(&arm).unwrap().angle().unwrap();
        grid.tick(5.0);
        assert!(arm.is_not_working());
        assert_eq!(facade.motor(&arm).unwrap().angle(), Some(frozen));

        // --- repaired: movement resumes from where it stalled ---
        grid.set_functional(&arm, true);
        grid.tick(1.0);
        assert_ne!(facade.motor(&arm).unwrap().angle(), Some(frozen));
    }

    // ====================================================================
    // Scenario 3: reads are stale until the host ticks
    // ====================================================================

    #[test]
    fn detail_reports_lag_mutations_by_one_tick() {
        init_logs();
        let grid = MemoryGrid::new();
        let block = grid.add(
            BlockSpec::piston("Piston")
                .with_limits(0.0, 10.0)
                .with_velocity(2.0),
        );
        let facade = GridFacade::new(grid.clone());

        grid.tick(1.0);
        assert_eq!(facade.piston(&block).unwrap().position(), Some(2.0));

        // reversing flips the typed velocity immediately, but the reported
        // position only moves on the next tick
        block.reverse().unwrap();
        assert_eq!(facade.piston(&block).unwrap().velocity(), -2.0);
        assert_eq!(facade.piston(&block).unwrap().position(), Some(2.0));

        grid.tick(0.5);
        assert_eq!(facade.piston(&block).unwrap().position(), Some(1.0));
    }
}
