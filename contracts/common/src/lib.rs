#![no_std]

pub mod guard;
pub mod ttl;
