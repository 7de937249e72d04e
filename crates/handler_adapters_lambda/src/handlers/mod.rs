pub mod audit;
pub mod echo;
pub mod greeting;
