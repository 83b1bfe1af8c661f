use super::*;

fn composited<C: Channel>(mut dst: Pixel<C>, src: Pixel<C>) -> Pixel<C> {
    over(&mut dst, src);
    dst
}

#[test]
fn transparent_source_is_noop() {
    let dst = Pixel::<u8>::new(10, 20, 30, 40);
    assert_eq!(composited(dst, Pixel::new(255, 255, 255, 0)), dst);

    let dst16 = Pixel::<u16>::new(100, 200, 300, 400);
    assert_eq!(composited(dst16, Pixel::TRANSPARENT), dst16);

    let dstf = Pixel::<f32>::new(0.1, f32::NAN, 0.3, 0.4);
    let out = composited(dstf, Pixel::new(0.5, 0.5, 0.5, 0.0));
    assert_eq!(out.r.to_bits(), dstf.r.to_bits());
    assert_eq!(out.g.to_bits(), dstf.g.to_bits());
}

#[test]
fn opaque_source_overwrites() {
    for dst in [Pixel::<u8>::new(0, 0, 0, 255), Pixel::new(9, 8, 7, 6)] {
        let src = Pixel::new(255, 0, 0, 255);
        assert_eq!(composited(dst, src), src);
    }
    let src16 = Pixel::<u16>::new(1, 2, 3, 32768);
    assert_eq!(composited(Pixel::new(5, 5, 5, 5), src16), src16);
    let srcf = Pixel::<f32>::new(0.2, 0.4, 0.6, 1.0);
    assert_eq!(composited(Pixel::new(1.0, 1.0, 1.0, 1.0), srcf), srcf);
}

#[test]
fn transparent_destination_takes_source() {
    let src = Pixel::<u8>::new(100, 110, 120, 200);
    assert_eq!(composited(Pixel::TRANSPARENT, src), src);
}

#[test]
fn half_alpha_blends_with_rounding() {
    // keep = 1 - 128/255
    let dst = Pixel::<u8>::new(255, 255, 255, 255);
    let src = Pixel::new(128, 0, 0, 128);
    let out = composited(dst, src);
    assert_eq!(out, Pixel::new(255, 127, 127, 255));
}

#[test]
fn float_blend_is_clamped_to_unit_range() {
    let dst = Pixel::<f32>::new(1.0, 0.5, 0.0, 1.0);
    let src = Pixel::new(0.5, 0.25, 0.0, 0.5);
    let out = composited(dst, src);
    assert_eq!(out, Pixel::new(1.0, 0.5, 0.0, 1.0));

    let overbright = Pixel::new(0.8, 0.8, 0.8, 0.5);
    assert_eq!(composited(dst, overbright).r, 1.0);
}

#[test]
fn corrupt_float_source_covers_instead_of_mixing() {
    let dst = Pixel::<f32>::new(0.9, 0.9, 0.9, 0.9);
    let src = Pixel::new(0.2, f32::NAN, 0.2, f32::NAN);
    let out = composited(dst, src);
    assert_eq!(out, Pixel::new(0.2, 0.0, 0.2, 0.0));
}

#[test]
fn negative_inputs_are_clamped() {
    let dst = Pixel::<f32>::new(-1.0, -1.0, -1.0, -1.0);
    let src = Pixel::new(0.25, 0.25, 0.25, 0.5);
    assert_eq!(composited(dst, src), Pixel::new(0.25, 0.25, 0.25, 0.5));
}
