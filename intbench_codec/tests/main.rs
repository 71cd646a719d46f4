use aok::{OK, Void};
use intbench_codec::{
  DeltaBp128, DeltaBp256, DeltaFastPFor128, DeltaFastPFor256, DeltaVByte, DeltaVarIntGb, Error,
  IntCodec, Raw,
};
use log::info;
use proptest::prelude::*;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn roundtrip<C: IntCodec + Default>(vals: &[u32]) -> Result<usize, Error> {
  let mut codec = C::default();
  let mut enc = vec![0u8; C::max_encoded_len(vals.len())];
  let len = codec.encode(vals, &mut enc)?;
  let mut dec = vec![0u32; vals.len()];
  let n = codec.decode(&enc[..len], &mut dec)?;
  assert_eq!(n, vals.len(), "{}", C::NAME);
  assert_eq!(dec, vals, "{}", C::NAME);
  Ok(len)
}

fn sorted(n: usize, seed: u64) -> Vec<u32> {
  let mut rng = fastrand::Rng::with_seed(seed);
  let mut v: Vec<u32> = (0..n).map(|_| rng.u32(..)).collect();
  v.sort_unstable();
  v
}

#[test]
fn test_unconstrained_codecs() -> Void {
  for n in [0usize, 1, 3, 4, 5, 127, 1000] {
    let v = sorted(n, n as u64);
    roundtrip::<Raw>(&v)?;
    roundtrip::<DeltaVByte>(&v)?;
    roundtrip::<DeltaVarIntGb>(&v)?;
  }
  OK
}

#[test]
fn test_block_codecs() -> Void {
  for blocks in [0usize, 1, 3] {
    roundtrip::<DeltaBp128>(&sorted(blocks * 128, 7))?;
    roundtrip::<DeltaBp256>(&sorted(blocks * 256, 7))?;
    roundtrip::<DeltaFastPFor128>(&sorted(blocks * 128, 7))?;
    roundtrip::<DeltaFastPFor256>(&sorted(blocks * 256, 7))?;
  }
  OK
}

/// Timestamps are not guaranteed sorted / 时间戳不保证有序
#[test]
fn test_unsorted_input() -> Void {
  let mut rng = fastrand::Rng::with_seed(11);
  let v: Vec<u32> = (0..512).map(|_| rng.u32(..)).collect();
  roundtrip::<DeltaVByte>(&v)?;
  roundtrip::<DeltaVarIntGb>(&v)?;
  roundtrip::<DeltaBp128>(&v)?;
  roundtrip::<DeltaBp256>(&v)?;
  roundtrip::<DeltaFastPFor128>(&v)?;
  roundtrip::<DeltaFastPFor256>(&v)?;
  OK
}

#[test]
fn test_dense_compresses() -> Void {
  let v: Vec<u32> = (0..1024).map(|i| i * 3).collect();
  let raw = roundtrip::<Raw>(&v)?;
  assert_eq!(raw, 4096);
  for len in [
    roundtrip::<DeltaVByte>(&v)?,
    roundtrip::<DeltaVarIntGb>(&v)?,
    roundtrip::<DeltaBp128>(&v)?,
    roundtrip::<DeltaBp256>(&v)?,
    roundtrip::<DeltaFastPFor128>(&v)?,
    roundtrip::<DeltaFastPFor256>(&v)?,
  ] {
    assert!(len < raw / 2, "len {len}");
  }
  info!("dense ok");
  OK
}

#[test]
fn test_block_codec_rejects_unaligned() {
  let v = sorted(130, 1);
  let mut enc = vec![0u8; DeltaBp128::max_encoded_len(v.len())];
  assert_eq!(
    DeltaBp128::default().encode(&v, &mut enc),
    Err(Error::Unaligned { len: 130, block: 128 })
  );
  let mut enc = vec![0u8; DeltaFastPFor256::max_encoded_len(v.len())];
  assert_eq!(
    DeltaFastPFor256::default().encode(&v, &mut enc),
    Err(Error::Unaligned { len: 130, block: 256 })
  );
}

#[test]
fn test_fastpfor_header() -> Void {
  let v = sorted(384, 12);
  let mut codec = DeltaFastPFor128::default();
  let mut enc = vec![0u8; DeltaFastPFor128::max_encoded_len(v.len())];
  let len = codec.encode(&v, &mut enc)?;
  assert_eq!(len % 4, 0);
  assert_eq!(u32::from_le_bytes([enc[0], enc[1], enc[2], enc[3]]), 384);

  let mut dec = vec![0u32; v.len()];
  assert_eq!(
    codec.decode(&enc[..len - 1], &mut dec),
    Err(Error::Truncated { at: len - 4 })
  );
  let mut short = vec![0u32; 256];
  assert_eq!(
    codec.decode(&enc[..len], &mut short),
    Err(Error::TooMany { cap: 256 })
  );
  OK
}

#[test]
fn test_overflow() {
  let v = vec![u32::MAX; 8];
  let mut small = [0u8; 6];
  assert!(matches!(
    DeltaVByte.encode(&v, &mut small),
    Err(Error::Overflow { .. })
  ));
  assert!(matches!(
    DeltaVarIntGb.encode(&v, &mut small),
    Err(Error::Overflow { .. })
  ));
  assert!(matches!(Raw.encode(&v, &mut small), Err(Error::Overflow { .. })));
}

#[test]
fn test_truncated_input() {
  let v = sorted(256, 3);
  let mut enc = vec![0u8; DeltaBp128::max_encoded_len(v.len())];
  let mut codec = DeltaBp128::default();
  let len = codec.encode(&v, &mut enc).unwrap();
  let mut dec = vec![0u32; v.len()];
  assert!(matches!(
    codec.decode(&enc[..len - 1], &mut dec),
    Err(Error::Truncated { .. })
  ));

  // Continuation bit on last byte / 最后一个字节带续位
  assert!(matches!(
    DeltaVByte.decode(&[0x80], &mut dec),
    Err(Error::Truncated { .. })
  ));
}

#[test]
fn test_output_too_small() {
  let v = sorted(10, 5);
  let mut enc = vec![0u8; DeltaVByte::max_encoded_len(v.len())];
  let len = DeltaVByte.encode(&v, &mut enc).unwrap();
  let mut dec = vec![0u32; 9];
  assert_eq!(
    DeltaVByte.decode(&enc[..len], &mut dec),
    Err(Error::TooMany { cap: 9 })
  );
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn prop_vbyte_roundtrip(v in prop::collection::vec(any::<u32>(), 0..600)) {
    prop_assert!(roundtrip::<DeltaVByte>(&v).is_ok());
    prop_assert!(roundtrip::<DeltaVarIntGb>(&v).is_ok());
  }

  #[test]
  fn prop_bitpack_roundtrip(blocks in 0usize..4, seed in any::<u64>()) {
    prop_assert!(roundtrip::<DeltaBp128>(&sorted(blocks * 128, seed)).is_ok());
    prop_assert!(roundtrip::<DeltaBp256>(&sorted(blocks * 256, seed)).is_ok());
    prop_assert!(roundtrip::<DeltaFastPFor128>(&sorted(blocks * 128, seed)).is_ok());
    prop_assert!(roundtrip::<DeltaFastPFor256>(&sorted(blocks * 256, seed)).is_ok());
  }
}
