use lazy_static::lazy_static;
use std::time::Instant;

lazy_static! {
    static ref PROGRAM_START: Instant = Instant::now();
}

pub fn get_microseconds_as_u64() -> u64 {
    let start = *PROGRAM_START;
    Instant::now().duration_since(start).as_nanos() as u64 / 1_000
}
