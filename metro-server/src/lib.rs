//! Metro network route server.
//!
//! Models a metro as stations joined by fare-weighted edges and grouped
//! into named lines, and answers: "what are all the ways from here to
//! there, which lines meet where, where does each line end, and which
//! interchange is closest to me?"

pub mod config;
pub mod domain;
pub mod input;
pub mod network;
pub mod planner;
pub mod shell;
pub mod web;
