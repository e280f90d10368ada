pub mod customers;
pub mod system;
