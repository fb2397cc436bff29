//! quizshelf: a terminal quiz catalog with a category filter bar and an
//! animated result grid.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod ui;
