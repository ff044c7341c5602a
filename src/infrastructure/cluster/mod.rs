//! Cluster gateway implementations

mod kubectl;

pub use kubectl::KubectlGateway;
