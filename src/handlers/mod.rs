pub mod catalog;
pub mod playground;
pub mod run;
