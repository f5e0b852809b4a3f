pub mod google;
pub mod session;
