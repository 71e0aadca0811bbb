pub mod sim;
pub mod topology;
