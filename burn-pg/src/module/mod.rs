pub mod component;
pub mod distribution;
pub mod nn;
