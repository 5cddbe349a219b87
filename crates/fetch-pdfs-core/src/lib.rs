pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod rewrite;
pub mod run;
pub mod scan;
pub mod storage;
pub mod url_model;
pub mod validate;
