use physics::{Pose, QuadcopterSim, SimParams, Simulator, Vec3};

#[test]
fn full_throttle_climbs() {
    let mut sim = QuadcopterSim::new(SimParams::default()).unwrap();
    for _ in 0..25 {
        sim.advance(&[900.0; 4]);
    }
    assert!(sim.pose().position.z > 10.0);
    assert!(sim.velocity().z > 0.0);
}

#[test]
fn symmetric_rotors_keep_attitude_level() {
    let mut sim = QuadcopterSim::new(SimParams::default()).unwrap();
    for _ in 0..25 {
        sim.advance(&[450.0; 4]);
    }
    assert_eq!(sim.pose().angles, Vec3::ZERO);
    assert_eq!(sim.angular_velocity(), Vec3::ZERO);
    assert!(sim.pose().position.x.abs() < 1e-6);
    assert!(sim.pose().position.y.abs() < 1e-6);
}

#[test]
fn uneven_rotors_roll_the_airframe() {
    let mut sim = QuadcopterSim::new(SimParams::default()).unwrap();
    // more thrust on +y than on -y
    sim.advance(&[400.0, 500.0, 400.0, 300.0]);
    assert!(sim.angular_velocity().x > 0.0);
}

#[test]
fn initial_velocity_carries_the_body() {
    let params = SimParams {
        init_pose: Pose::new(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO),
        init_velocities: Vec3::new(3.0, 0.0, 0.0),
        ..SimParams::default()
    };
    let mut sim = QuadcopterSim::new(params).unwrap();
    sim.advance(&[400.0; 4]);
    assert!(sim.pose().position.x > 0.0);
}
