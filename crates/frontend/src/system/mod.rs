pub mod pages;
pub mod rights;
pub mod session;
