//! Shared memory addresses and thread ids for the built-in scenarios.

pub const DATA0: u64 = 0;
pub const DATA1: u64 = 1;
pub const TAIL: u64 = 2;
pub const HEAD: u64 = 3;

pub const PRODUCER: i64 = 1;
pub const CONSUMER: i64 = 2;
