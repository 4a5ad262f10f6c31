mod determinism;
mod infection;
mod network_build;
mod properties;
