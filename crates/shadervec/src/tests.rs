//! Properties that hold across every vector width and naming scheme.

use crate::{
    BufferLayout, Float2, Float2x3, Float3, Float3x2, Float4, Float4x4, NamingScheme, SwizzleError,
    SwizzlePattern, Swizzled, VectorFormat,
};
use pretty_assertions::assert_eq;
use tracing_subscriber::FmtSubscriber;

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    // Another test may have installed it already.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

const VALUES: [f32; 4] = [10.0, 20.0, 30.0, 40.0];

macro_rules! for_each_vector {
    ($body:ident) => {
        $body!(Float2, 2);
        $body!(Float3, 3);
        $body!(Float4, 4);
    };
}

#[test]
fn names_in_every_scheme_alias_one_field() {
    init_logging();
    macro_rules! check {
        ($vec:ident, $width:literal) => {
            for index in 0..$width {
                for writer in NamingScheme::ALL {
                    let mut v = $vec::ZERO;
                    let letter = writer.letter(index).unwrap().to_string();
                    v.set_swizzle(&letter, VALUES[index]).unwrap();
                    assert_eq!(v[index], VALUES[index]);
                    for reader in NamingScheme::ALL {
                        let letter = reader.letter(index).unwrap().to_string();
                        assert_eq!(
                            v.swizzle(&letter),
                            Ok(Swizzled::Scalar(VALUES[index])),
                            "{} written as {writer}, read as {reader}",
                            stringify!($vec)
                        );
                    }
                }
            }
        };
    }
    for_each_vector!(check);
}

#[test]
fn writable_swizzles_write_back_in_order() {
    init_logging();
    macro_rules! check {
        ($vec:ident, $width:literal) => {
            for pattern in SwizzlePattern::all($width).filter(SwizzlePattern::is_writable) {
                let value = Swizzled::from_slice(&VALUES[..pattern.len()]).unwrap();
                for scheme in NamingScheme::ALL {
                    let name = pattern.name(scheme);
                    let mut v = $vec::ZERO;
                    v.set_swizzle(&name, value).unwrap();
                    for (i, &index) in pattern.indices().iter().enumerate() {
                        assert_eq!(v[index], VALUES[i], "{} via {name}", stringify!($vec));
                    }
                    assert_eq!(v.swizzle(&name), Ok(value));
                }
            }
        };
    }
    for_each_vector!(check);
}

#[test]
fn repeating_swizzles_are_read_only() {
    init_logging();
    macro_rules! check {
        ($vec:ident, $width:literal) => {
            let source = $vec::from_array(core::array::from_fn(|i| VALUES[i]));
            for pattern in SwizzlePattern::all($width).filter(|p| !p.is_writable()) {
                let name = pattern.name(NamingScheme::Color);
                let expected: Vec<f32> = pattern.indices().iter().map(|&i| VALUES[i]).collect();
                assert_eq!(
                    source.swizzle(&name).map(|s| s.as_slice().to_vec()),
                    Ok(expected)
                );

                let mut v = source;
                let value = Swizzled::from_slice(&VALUES[..pattern.len()]).unwrap();
                assert_eq!(
                    v.set_swizzle(&name, value),
                    Err(SwizzleError::NotWritable { name })
                );
                assert_eq!(v, source);
            }
        };
    }
    for_each_vector!(check);
}

#[test]
fn generated_accessors_agree_with_dynamic_resolution() {
    let v = Float4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v.swizzle("wzyx"), Ok(Swizzled::Float4(v.wzyx())));
    assert_eq!(v.swizzle("bgr"), Ok(Swizzled::Float3(v.bgr())));
    assert_eq!(v.swizzle("WX"), Ok(Swizzled::Float2(v.WX())));
    assert_eq!(v.swizzle("aaaa"), Ok(Swizzled::Float4(v.aaaa())));

    let mut generated = Float4::ZERO;
    generated.set_yw(Float2::new(5.0, 6.0));
    let mut dynamic = Float4::ZERO;
    dynamic.set_swizzle("yw", Float2::new(5.0, 6.0)).unwrap();
    assert_eq!(generated, dynamic);

    let mut proxied = Float4::ZERO;
    proxied.YW_mut().set(Float2::new(5.0, 6.0));
    assert_eq!(proxied, dynamic);
}

#[test]
fn vectors_are_packed_floats() {
    let vectors = [Float3::new(1.0, 2.0, 3.0), Float3::new(4.0, 5.0, 6.0)];
    let floats: &[f32] = bytemuck::cast_slice(&vectors);
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let mut words = [0u32; 12];
    let v = Float4::new(1.5, -0.0, f32::MAX, f32::MIN_POSITIVE);
    for offset in 0..=12 - Float4::WORDS {
        v.write(&mut words, offset).unwrap();
        assert_eq!(Float4::read(&words, offset), Ok(v));
    }
}

#[test]
fn arithmetic() {
    assert_eq!(
        Float2::new(1.0, 2.0) + Float2::new(3.0, 4.0),
        Float2::new(4.0, 6.0)
    );
    assert_eq!(Float3::new(1.0, 2.0, 3.0) * 2.0, Float3::new(2.0, 4.0, 6.0));
    assert!(Float2::new(1.0, 2.0).cmpeq(Float2::new(1.0, 2.0)).all());
}

#[test]
fn formatting() {
    init_logging();
    assert_eq!(Float2::new(1.5, -2.25).to_string(), "<1.5, -2.25>");

    let german = VectorFormat::new().with_locale(crate::Locale::new(',', '.'));
    assert_eq!(Float2::new(1.5, -2.25).format_with(&german), "<1,5. -2,25>");

    let mut buf = [0xFFu8; 4];
    assert!(
        Float2::new(1.5, -2.25)
            .try_format(&mut buf, &VectorFormat::default())
            .is_err()
    );
    assert_eq!(buf, [0; 4]);
}

#[test]
fn constants() {
    assert_eq!(Float3::ZERO, Float3::new(0.0, 0.0, 0.0));
    assert_eq!(Float3::UNIT_Y, Float3::new(0.0, 1.0, 0.0));
}

#[test]
fn matrix_products() {
    let m = Float2x3::from_rows([Float3::new(1.0, -2.0, 0.5), Float3::new(3.0, 0.0, -1.0)]);
    let t: Float3x2 = m.transpose();
    for v in [Float2::UNIT_X, Float2::UNIT_Y, Float2::new(2.0, -3.0)] {
        assert_eq!(v * m, t * v);
    }
    let v = Float4::new(0.5, 1.0, -1.5, 2.0);
    assert_eq!(Float4x4::IDENTITY * v, v);
}
