use super::*;

#[test]
fn rejects_short_buffers_and_narrow_strides() {
    let data = vec![Pixel::<u8>::TRANSPARENT; 10];
    assert!(Surface::new(4, 3, 4, &data).unwrap_err().is_bad_parameter());
    assert!(Surface::new(4, 2, 3, &data).unwrap_err().is_bad_parameter());
    assert!(Surface::new(4, 2, 5, &data).is_ok());
    // the last row only needs `width` pixels
    assert!(Surface::new(4, 2, 6, &data).is_ok());
    assert!(Surface::new(2, 3, 4, &data).is_ok());
}

#[test]
fn empty_surfaces_are_valid() {
    let data: Vec<Pixel<f32>> = Vec::new();
    let s = Surface::new(0, 0, 0, &data).unwrap();
    assert_eq!(s.width(), 0);
}

#[test]
fn fill_respects_stride_padding() {
    let pad = Pixel::<u16>::new(1, 1, 1, 1);
    let mut data = vec![pad; 3 * 2];
    {
        let mut s = SurfaceMut::new(2, 2, 3, &mut data).unwrap();
        s.fill(Pixel::TRANSPARENT);
    }
    assert_eq!(data[0], Pixel::TRANSPARENT);
    assert_eq!(data[1], Pixel::TRANSPARENT);
    assert_eq!(data[2], pad);
    assert_eq!(data[5], pad);
}

#[test]
fn strided_reads() {
    let data: Vec<Pixel<u8>> = (0..8u8).map(|i| Pixel::new(i, 0, 0, 255)).collect();
    let s = Surface::new(3, 2, 4, &data).unwrap();
    assert_eq!(s.pixel(1, 1).r, 5);
    assert_eq!(s.row(1).len(), 3);
}

#[test]
fn owned_image_views() {
    let mut img = PixelImage::<f32>::from_fn(3, 2, |x, y| Pixel::new(x as f32, y as f32, 0.0, 1.0));
    assert_eq!(img.get(2, 1), Pixel::new(2.0, 1.0, 0.0, 1.0));
    img.put(0, 0, Pixel::TRANSPARENT);
    assert_eq!(img.view().pixel(0, 0), Pixel::TRANSPARENT);
    let frame: OutputFrame<'_> = img.view_mut().into();
    assert_eq!(frame.depth(), PixelDepth::F32);
}
