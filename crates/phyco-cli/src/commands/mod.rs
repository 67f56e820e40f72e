pub mod compare;
pub mod run;
pub mod scenarios;
