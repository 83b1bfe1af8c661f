use crate::transform::compute::CopyTransform;

/// Order copies for back-to-front compositing: ascending `camera_depth`, so copies further
/// along the view axis are drawn later and land on top.
///
/// The sort is stable; copies with equal depth keep their grid order. `-0.0` and `+0.0` are
/// equal depths.
pub fn sort_copies_by_depth(transforms: &mut [CopyTransform]) {
    if transforms.len() <= 1 {
        return;
    }
    transforms.sort_by(|a, b| depth_key(a).total_cmp(&depth_key(b)));
}

// Adding +0.0 folds -0.0 into +0.0, which `total_cmp` would otherwise order first.
fn depth_key(t: &CopyTransform) -> f64 {
    t.camera_depth + 0.0
}
