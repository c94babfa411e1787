pub mod integrity;
pub mod log;
pub mod sanitize;
pub mod store;
pub mod tracker;
pub mod validator;
