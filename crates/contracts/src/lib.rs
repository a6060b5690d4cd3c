//! Shared contracts between the admin console client and its REST backend.
//!
//! Besides the DTOs, this crate carries the pure logic every list page and
//! the navigation chrome rely on: the tabular view engine and the role-rights
//! resolver. Nothing here touches the browser, so it is tested natively.

pub mod shared;
pub mod system;
