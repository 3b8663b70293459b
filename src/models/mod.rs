// Module exports for models

pub mod time_left;
