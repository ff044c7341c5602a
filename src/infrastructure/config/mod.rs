//! Configuration repository implementations

mod yaml_config;

pub use yaml_config::YamlConfigRepository;
