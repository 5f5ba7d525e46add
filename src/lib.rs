#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(clippy::no_effect_underscore_binding)]

#[path = "../table/mod.rs"]
pub mod table;

#[path = "../tdist/mod.rs"]
pub mod tdist;

#[path = "../shared/config.rs"]
pub mod config;
