//! Embedded default data
//!
//! Word list and frequency table compiled into the binary at build time.

// Include generated data from build script
include!(concat!(env!("OUT_DIR"), "/wordlist.rs"));
include!(concat!(env!("OUT_DIR"), "/frequency.rs"));
