pub(crate) mod base;
pub(crate) mod researcher;
pub(crate) mod session;
pub(crate) mod user;
