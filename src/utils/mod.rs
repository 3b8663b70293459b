// Utility module exports

pub mod format;
