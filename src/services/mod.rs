// Service module exports

pub mod countdown;
pub mod database;
pub mod preferences;
pub mod ticker;
