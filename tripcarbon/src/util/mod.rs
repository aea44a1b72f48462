pub mod geo_ops;
pub mod round_ops;
