//! Fitted model artifacts and the inference engine that runs them

pub mod bundle;
pub mod encoder;
pub mod estimator;
pub mod inference;
pub mod kmeans;
pub mod loader;
pub mod scaler;
pub mod tree;

pub use bundle::{MedianValues, ModelBundle};
pub use inference::{DomainGap, InferenceEngine};
pub use loader::ModelLoader;
