#![doc = include_str!("../README.md")]
#![no_std]

pub use lume_rtti as rtti;
