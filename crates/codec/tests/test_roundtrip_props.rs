//! Property tests: decoding what was encoded gives the value back.

use chrono::{DateTime, FixedOffset};
use ndarray::{Array2, ArrayD, IxDyn};
use num_complex::Complex64;
use proptest::prelude::*;
use sarmeta_codec::{
    BoolCodec, CmplxCodec, Codec, DblCodec, HexCodec, IntCodec, MtxCodec, PolyCodec, TxtCodec,
    TupleCodec, Xdt, XdtCodec, XyzPolyCodec,
};

fn finite_or_infinite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("NaN never compares equal", |v| !v.is_nan())
}

proptest! {
    #[test]
    fn prop_dbl_roundtrip(value in finite_or_infinite()) {
        let elem = DblCodec.make_elem("node", &value).unwrap();
        prop_assert_eq!(DblCodec.parse_elem(&elem).unwrap().to_bits(), value.to_bits());
    }

    #[test]
    fn prop_int_roundtrip(value in any::<i64>()) {
        let elem = IntCodec.make_elem("node", &value).unwrap();
        prop_assert_eq!(IntCodec.parse_elem(&elem).unwrap(), value);
    }

    #[test]
    fn prop_bool_roundtrip(value in any::<bool>()) {
        let elem = BoolCodec.make_elem("node", &value).unwrap();
        prop_assert_eq!(BoolCodec.parse_elem(&elem).unwrap(), value);
    }

    #[test]
    fn prop_txt_roundtrip(value in ".*") {
        let elem = TxtCodec.make_elem("node", &value).unwrap();
        prop_assert_eq!(TxtCodec.parse_elem(&elem).unwrap(), value);
    }

    #[test]
    fn prop_hex_roundtrip(value in proptest::collection::vec(any::<u8>(), 0..64)) {
        let elem = HexCodec.make_elem("node", &value).unwrap();
        let text = elem.text().unwrap_or_default();
        prop_assert_eq!(text.len(), value.len() * 2);
        prop_assert!(!text.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(HexCodec.parse_elem(&elem).unwrap(), value);
    }

    #[test]
    fn prop_cmplx_roundtrip(re in finite_or_infinite(), im in finite_or_infinite()) {
        let value = Complex64::new(re, im);
        let elem = CmplxCodec.make_elem("{faux-ns}node", &value).unwrap();
        prop_assert_eq!(CmplxCodec.parse_elem(&elem).unwrap(), value);
    }

    #[test]
    fn prop_xdt_roundtrip(
        secs in -2_000_000_000i64..4_000_000_000i64,
        nanos in 0u32..1_000_000_000,
        offset_minutes in -(23 * 60)..(23 * 60 + 59),
    ) {
        let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let utc = DateTime::from_timestamp(secs, nanos).unwrap();
        let aware = utc.with_timezone(&offset);
        let codec = XdtCodec::default();

        let elem = codec.make_elem("Xdt", &Xdt::from(aware)).unwrap();
        let parsed = codec.parse_elem(&elem).unwrap();
        prop_assert_eq!(parsed.to_utc(), utc);
        prop_assert_eq!(parsed.to_aware().offset().local_minus_utc(), 0);

        let naive = aware.naive_local();
        let elem = codec.make_elem("Xdt", &Xdt::from(naive)).unwrap();
        prop_assert_eq!(codec.parse_elem(&elem).unwrap(), Xdt::Aware(naive.and_utc().fixed_offset()));
    }

    #[test]
    fn prop_xyz_roundtrip(values in proptest::collection::vec(finite_or_infinite(), 3)) {
        let elem = TupleCodec::xyz().make_elem("Xyz", &values).unwrap();
        prop_assert_eq!(TupleCodec::xyz().parse_elem(&elem).unwrap(), values);
    }

    #[test]
    fn prop_tuple_rejects_wrong_arity(len in 0usize..8) {
        prop_assume!(len != 2);
        let values = vec![1_i64; len];
        let mut elem = TupleCodec::line_samp().make_elem("Ls", &vec![1, 2]).unwrap();
        let before = elem.clone();
        prop_assert!(TupleCodec::line_samp().set_elem(&mut elem, &values).is_err());
        prop_assert_eq!(elem, before);
    }

    #[test]
    fn prop_mtx_roundtrip(rows in 1usize..5, cols in 1usize..5, seed in any::<u64>()) {
        let data = Array2::from_shape_fn((rows, cols), |(r, c)| {
            (seed.wrapping_mul(31).wrapping_add((r * cols + c) as u64) % 10_000) as f64 / 7.0
        });
        let codec = MtxCodec::new((rows, cols));
        let elem = codec.make_elem("Mtx", &data).unwrap();
        prop_assert_eq!(codec.parse_elem(&elem).unwrap(), data);
    }

    #[test]
    fn prop_poly2d_roundtrip(
        rows in 1usize..5,
        cols in 1usize..5,
        coefs in proptest::collection::vec(finite_or_infinite(), 16),
    ) {
        let value = ArrayD::from_shape_fn(IxDyn(&[rows, cols]), |idx| coefs[idx[0] * 4 + idx[1]]);
        let elem = PolyCodec::poly2d().make_elem("Poly", &value).unwrap();
        prop_assert_eq!(PolyCodec::poly2d().parse_elem(&elem).unwrap(), value);
    }

    #[test]
    fn prop_xyzpoly_roundtrip(
        rows in 1usize..8,
        coefs in proptest::collection::vec(-1e6f64..1e6, 24),
    ) {
        let value = Array2::from_shape_fn((rows, 3), |(r, c)| coefs[r * 3 + c]);
        let elem = XyzPolyCodec.make_elem("XyzPoly", &value).unwrap();
        prop_assert_eq!(XyzPolyCodec.parse_elem(&elem).unwrap(), value);
    }
}
