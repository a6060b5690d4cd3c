pub mod menu;
pub mod role_rights;
pub mod session;
