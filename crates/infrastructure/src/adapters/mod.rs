//! Port adapters

pub mod jma_adapter;

pub use jma_adapter::JmaWeatherAdapter;
