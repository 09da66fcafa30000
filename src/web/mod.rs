//! HTML front end for the calculator

pub mod handlers;
