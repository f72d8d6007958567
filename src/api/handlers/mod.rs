pub mod health;
pub mod login;
pub mod navigation;
pub mod page;
pub mod session;
