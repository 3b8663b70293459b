// Service module exports

pub mod engine;
