pub mod executable_utils;
pub mod model;
pub mod predictor;
pub mod recommendation;
pub mod remote;
pub mod scorer;
pub mod store;
