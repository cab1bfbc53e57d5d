use physics::{QuadcopterSim, SimParams, Simulator, DT};

#[test]
fn unpowered_quadcopter_falls_close_to_analytic() {
    // initial height 10 m, no initial velocity, rotors stopped
    let mut sim = QuadcopterSim::new(SimParams::default()).unwrap();
    let steps = 50_usize; // 1 s, still well above ground
    for _ in 0..steps {
        assert!(!sim.advance(&[0.0; 4]));
    }

    // analytic: h = h0 − ½ g t²  (g = 9.81), drag only slows the fall
    let t = DT * steps as f32;
    let expected = 10.0 - 0.5 * 9.81 * t.powi(2);
    let z = sim.pose().position.z;
    let diff = (z - expected).abs();
    assert!(diff < 0.5, "z={z} expected={expected} diff={diff}");
    assert!(sim.velocity().z < 0.0);
}

#[test]
fn hitting_the_ground_ends_the_episode() {
    let mut sim = QuadcopterSim::new(SimParams::default()).unwrap();
    let mut done = false;
    for _ in 0..200 {
        done = sim.advance(&[0.0; 4]);
        if done {
            break;
        }
    }
    assert!(done, "free fall from 10 m should reach the ground");
    assert_eq!(sim.pose().position.z, 0.0);
    assert!(sim.time() < 5.0);
}
