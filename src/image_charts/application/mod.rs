pub mod chart_parameters;
pub mod error;
pub mod image_charts;
pub mod response_decoder;
