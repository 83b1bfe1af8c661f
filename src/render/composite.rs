use crate::render::pixel::{Channel, Pixel};

/// Premultiplied alpha-over: `dst = src + dst * (1 - src_alpha)`.
///
/// Transparent sources leave `dst` untouched; fully opaque sources replace it exactly. Results are
/// clamped to `[0, MAX]`, and a non-finite blend factor counts as zero so a corrupt source covers
/// instead of mixing.
pub fn over<C: Channel>(dst: &mut Pixel<C>, src: Pixel<C>) {
    if src.a == C::ZERO {
        return;
    }
    if src.a == C::MAX {
        *dst = src;
        return;
    }

    let src_a = src.a.to_f64() / C::MAX_F64;
    let mut keep = 1.0 - src_a;
    if !keep.is_finite() {
        keep = 0.0;
    }
    let keep = keep.clamp(0.0, 1.0);

    let s = src.channels();
    let d = dst.channels();
    let mut out = [C::ZERO; 4];
    for i in 0..4 {
        out[i] = C::saturate(s[i].to_f64().max(0.0) + d[i].to_f64().max(0.0) * keep);
    }
    *dst = Pixel::from_channels(out);
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
