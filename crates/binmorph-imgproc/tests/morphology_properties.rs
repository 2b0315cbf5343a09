use binmorph_image::{Image, ImageSize};
use binmorph_imgproc::morphology::{
    black_hat, boundary_extraction, close, dilate, erode, gradient, open, top_hat, Morphology,
    MorphologyError,
};
use binmorph_imgproc::parallel::ExecutionStrategy;
use binmorph_imgproc::threshold::{binarize, MAX_PIXEL, MIN_PIXEL};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_gray(rng: &mut StdRng, width: usize, height: usize) -> Image<u8, 1> {
    let data = (0..width * height).map(|_| rng.random::<u8>()).collect();
    Image::new(ImageSize { width, height }, data).unwrap()
}

fn random_binary(rng: &mut StdRng, width: usize, height: usize) -> Image<u8, 1> {
    binarize(&random_gray(rng, width, height)).unwrap()
}

fn sizes() -> Vec<(usize, usize)> {
    vec![(1, 1), (2, 3), (5, 5), (7, 4), (16, 9), (31, 17)]
}

#[test]
fn binarize_is_two_valued_and_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    for (w, h) in sizes() {
        let gray = random_gray(&mut rng, w, h);
        let once = binarize(&gray).unwrap();
        assert!(once
            .as_slice()
            .iter()
            .all(|&v| v == MIN_PIXEL || v == MAX_PIXEL));
        assert_eq!(binarize(&once).unwrap(), once);
    }
}

#[test]
fn erode_and_dilate_preserve_shape() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(11);
    for (w, h) in sizes() {
        let src = random_binary(&mut rng, w, h);
        for level in 2..=6 {
            let morph = Morphology::with_exact_level(level)?;
            assert_eq!(erode(&src, &morph)?.size(), src.size());
            assert_eq!(dilate(&src, &morph)?.size(), src.size());
        }
    }
    Ok(())
}

#[test]
fn erosion_is_below_dilation() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(13);
    for (w, h) in sizes() {
        let src = random_binary(&mut rng, w, h);
        for level in [None, Some(4), Some(5)] {
            let morph = Morphology::new(level);
            let eroded = erode(&src, &morph)?;
            let dilated = dilate(&src, &morph)?;
            assert!(eroded
                .as_slice()
                .iter()
                .zip(dilated.as_slice())
                .all(|(e, d)| e <= d));
        }
    }
    Ok(())
}

#[test]
fn foreground_image_keeps_interior() -> Result<(), MorphologyError> {
    let src = Image::<u8, 1>::from_size_val(
        ImageSize {
            width: 9,
            height: 6,
        },
        MAX_PIXEL,
    )?;
    let morph = Morphology::default();

    let dilated = dilate(&src, &morph)?;
    assert!(dilated.as_slice().iter().all(|&v| v == MAX_PIXEL));

    let eroded = erode(&src, &morph)?;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let border = y == 0 || x == 0 || y == src.height() - 1 || x == src.width() - 1;
            let expected = if border { MIN_PIXEL } else { MAX_PIXEL };
            assert_eq!(eroded.get_pixel(x, y, 0)?, &expected);
        }
    }

    Ok(())
}

#[test]
fn background_image_is_fixed_point() -> Result<(), MorphologyError> {
    let src = Image::<u8, 1>::from_size_val(
        ImageSize {
            width: 8,
            height: 5,
        },
        MIN_PIXEL,
    )?;
    for level in [None, Some(3), Some(4), Some(7)] {
        let morph = Morphology::new(level);
        assert_eq!(erode(&src, &morph)?, src);
        assert_eq!(dilate(&src, &morph)?, src);
    }
    Ok(())
}

#[test]
fn composites_follow_their_definitions() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(17);
    let src = random_binary(&mut rng, 23, 19);
    let morph = Morphology::default();

    let eroded = erode(&src, &morph)?;
    let dilated = dilate(&src, &morph)?;
    let opened = open(&src, &morph)?;
    let closed = close(&src, &morph)?;

    assert_eq!(opened, dilate(&eroded, &morph)?);
    assert_eq!(closed, erode(&dilated, &morph)?);

    let diff = |a: &Image<u8, 1>, b: &Image<u8, 1>| -> Vec<i16> {
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(&x, &y)| i16::from(x) - i16::from(y))
            .collect()
    };

    assert_eq!(gradient(&src, &morph)?.as_slice(), diff(&dilated, &eroded));
    assert_eq!(boundary_extraction(&src, &morph)?.as_slice(), diff(&src, &eroded));
    assert_eq!(top_hat(&src, &morph)?.as_slice(), diff(&src, &opened));
    assert_eq!(black_hat(&src, &morph)?.as_slice(), diff(&closed, &src));

    Ok(())
}

#[test]
fn clamped_levels_behave_like_default() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(19);
    let src = random_binary(&mut rng, 12, 10);

    let default = Morphology::new(Some(3));
    for level in [None, Some(-1), Some(0), Some(2)] {
        let morph = Morphology::new(level);
        assert_eq!(erode(&src, &morph)?, erode(&src, &default)?);
        assert_eq!(dilate(&src, &morph)?, dilate(&src, &default)?);
    }

    Ok(())
}

#[test]
fn strategies_produce_identical_output() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(23);
    let src = random_binary(&mut rng, 40, 33);

    for level in [None, Some(5)] {
        let serial = Morphology::new(level).with_strategy(ExecutionStrategy::Serial);
        let parallel = Morphology::new(level).with_strategy(ExecutionStrategy::ParallelRows);
        assert_eq!(erode(&src, &serial)?, erode(&src, &parallel)?);
        assert_eq!(dilate(&src, &serial)?, dilate(&src, &parallel)?);
        assert_eq!(gradient(&src, &serial)?, gradient(&src, &parallel)?);
    }

    Ok(())
}

#[test]
fn random_scan_matches_brute_force() -> Result<(), MorphologyError> {
    let mut rng = StdRng::seed_from_u64(29);
    let (w, h) = (13, 11);
    let src = random_binary(&mut rng, w, h);

    for level in 3..=5usize {
        let pad = (level - 2) as isize;
        let morph = Morphology::new(Some(level as i64));
        let eroded = erode(&src, &morph)?;
        let dilated = dilate(&src, &morph)?;

        for y in 0..h {
            for x in 0..w {
                // window of output (y, x) starts at original (y - pad, x - pad)
                let mut all = true;
                let mut any = false;
                for dy in 0..level as isize {
                    for dx in 0..level as isize {
                        let sy = y as isize - pad + dy;
                        let sx = x as isize - pad + dx;
                        let inside = sy >= 0 && sx >= 0 && sy < h as isize && sx < w as isize;
                        let v = if inside {
                            *src.get_pixel(sx as usize, sy as usize, 0)?
                        } else {
                            MIN_PIXEL
                        };
                        all &= v == MAX_PIXEL;
                        any |= v == MAX_PIXEL;
                    }
                }
                let expect_e = if all { MAX_PIXEL } else { MIN_PIXEL };
                let expect_d = if any { MAX_PIXEL } else { MIN_PIXEL };
                assert_eq!(eroded.get_pixel(x, y, 0)?, &expect_e);
                assert_eq!(dilated.get_pixel(x, y, 0)?, &expect_d);
            }
        }
    }

    Ok(())
}
