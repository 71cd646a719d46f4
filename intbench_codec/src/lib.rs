// Integer sequence codecs under benchmark
// 被测整数序列编解码器

#![cfg_attr(docsrs, feature(doc_cfg))]

mod bitpack;
mod codec;
mod delta;
mod error;
mod pfor;
mod raw;
mod varintgb;
mod vbyte;

pub use bitpack::{DeltaBitPack, DeltaBp128, DeltaBp256};
pub use codec::IntCodec;
pub use delta::{delta_decode, delta_encode};
pub use error::{Error, Result};
pub use pfor::{DeltaFastPFor, DeltaFastPFor128, DeltaFastPFor256};
pub use raw::Raw;
pub use varintgb::DeltaVarIntGb;
pub use vbyte::DeltaVByte;
