//! EV charger finder.
//!
//! A web application that answers: "Where can I charge near here?"
//! It locates the user once, queries a charger search backend within a
//! radius, and shows the results as a list and on a map.

pub mod chargers;
pub mod config;
pub mod domain;
pub mod finder;
pub mod map;
pub mod web;
