use physics::{Pose, Simulator, Vec3};

/// Time step of [`ScriptedSim`].
pub const SCRIPTED_DT: f32 = 0.1;

/// Constant-velocity simulator that signals termination exactly once, on
/// step `horizon`. Records every command it receives.
pub struct ScriptedSim {
    pub initial: Pose,
    pub pose: Pose,
    pub velocity: Vec3,
    pub horizon: usize,
    pub steps: usize,
    pub commands: Vec<[f32; 4]>,
}

impl ScriptedSim {
    pub fn new(initial: Pose, velocity: Vec3, horizon: usize) -> Self {
        Self {
            initial,
            pose: initial,
            velocity,
            horizon,
            steps: 0,
            commands: Vec::new(),
        }
    }
}

impl Simulator for ScriptedSim {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn angular_velocity(&self) -> Vec3 {
        Vec3::ZERO
    }

    fn time(&self) -> f32 {
        self.steps as f32 * SCRIPTED_DT
    }

    fn advance(&mut self, rotor_speeds: &[f32; 4]) -> bool {
        self.commands.push(*rotor_speeds);
        self.pose.position += self.velocity * SCRIPTED_DT;
        self.steps += 1;
        self.steps == self.horizon
    }

    fn reset(&mut self) {
        self.pose = self.initial;
        self.steps = 0;
    }
}

pub fn pose_at(x: f32, y: f32, z: f32) -> Pose {
    Pose::new(Vec3::new(x, y, z), Vec3::ZERO)
}
