//! Positional number systems: reading and writing numerals in any base from 2 to 16,
//! and a walkthrough that explains the arithmetic.

#[macro_use]
extern crate nom;

#[macro_use]
extern crate log;

pub mod commands;
pub mod converter;
pub mod demo;
pub mod utils;
