#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use zeug_cfg as cfg;
pub use zeug_reflect as reflect;
pub use zeug_utils as utils;
