pub mod controller;
pub mod event;
pub mod generator;
pub mod params;
pub mod queue;
pub mod simulator;
pub mod statistics;
