// Business domains
pub mod exchange;
