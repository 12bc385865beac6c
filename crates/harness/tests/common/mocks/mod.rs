/// `SimulationModel` mock and recording fake.
pub mod model;
