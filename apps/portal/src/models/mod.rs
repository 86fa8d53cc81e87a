pub mod employee;
pub mod odata;
