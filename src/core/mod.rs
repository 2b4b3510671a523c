pub mod badge;
pub mod logging;
pub mod profile;
pub mod storage;
