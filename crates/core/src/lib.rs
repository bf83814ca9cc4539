//! Core for the cookbook project.
//!
//! Pure domain logic with no I/O: the [`recipe::Recipe`] entity, the
//! repository trait storage backends implement, and the built-in sample
//! data a fresh store is seeded with.

pub mod recipe;
pub mod storage;
