#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use jp_pointer as pointer;
pub use jp_reflect as reflect;
pub use jp_utils as utils;

pub use jp_pointer::{Pointer, PointerError, PointerErrorKind, get, get_as};
pub use jp_reflect::Reflect;
