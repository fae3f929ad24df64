pub mod orchestrator;
pub mod sequencer;
pub mod timer;
