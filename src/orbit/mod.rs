pub mod elements;
pub mod sampler;
pub mod state;

pub use elements::KeplerianElements;
pub use sampler::sample_segment;
pub use state::SampleState;
