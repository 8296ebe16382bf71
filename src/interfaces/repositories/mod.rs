pub mod admin;
pub mod contact;
pub mod memory;
pub mod project;
pub mod token;
