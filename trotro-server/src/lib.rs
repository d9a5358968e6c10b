//! Trotro route planner server.
//!
//! A web application that answers: "what is the cheapest trotro route
//! from here to there?" The transit network is a weighted directed graph,
//! seeded from a static dataset and grown at runtime by merging
//! user-contributed routes.

pub mod cache;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod seed;
pub mod stops;
pub mod web;
