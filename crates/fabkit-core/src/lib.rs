pub mod config;
pub mod logging;

pub mod column;
pub mod i18n;
pub mod redirect;
