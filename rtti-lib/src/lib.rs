#![allow(clippy::missing_safety_doc)]
pub mod app;
pub mod cast;
pub mod common;
pub mod hierarchy;
pub mod identity;
pub mod layout;
pub mod lookup;
pub mod obj_ref;
pub mod object;
pub mod simd;
pub mod table;

#[cfg(test)]
mod fixture;
