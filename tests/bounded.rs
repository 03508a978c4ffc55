use fairdraw::rng::bounded::{next, next_with};

/// Byte source that replays `bytes` in order.
fn scripted(bytes: &[u8]) -> impl FnMut(&mut [u8]) + '_ {
    let mut pos = 0;
    move |buf: &mut [u8]| {
        buf.copy_from_slice(&bytes[pos..pos + buf.len()]);
        pos += buf.len();
    }
}

#[test]
fn test_bounded_stays_in_range() {
    for _ in 0..10_000 {
        let value = next(10, 17);
        assert!((10..17).contains(&value));
    }
}

#[test]
fn test_bounded_single_value_range() {
    assert_eq!(next(5, 6), 5);
}

#[test]
fn test_bounded_rejects_values_at_or_above_cutoff() {
    // range 3 over one byte: cutoff = 256 - 256 % 3 = 255
    let mut fill = scripted(&[255, 254, 7]);

    assert_eq!(next_with(&mut fill, 10, 13), 12);
    assert_eq!(next_with(&mut fill, 10, 13), 11);
}

#[test]
fn test_bounded_reads_big_endian_multi_byte_values() {
    // range 300 over two bytes: cutoff = 65536 - 136 = 65400 = 0xFF78
    let mut fill = scripted(&[0xFF, 0x78, 0x01, 0x2D]);

    assert_eq!(next_with(&mut fill, 0, 300), 0x012D % 300);
}

#[test]
fn test_bounded_accepts_value_just_below_cutoff() {
    let mut fill = scripted(&[0xFF, 0x77]);

    assert_eq!(next_with(&mut fill, 0, 300), 0xFF77 % 300);
}

#[test]
fn test_bounded_power_of_two_range_never_rejects() {
    let mut calls = 0;
    let value = next_with(
        |buf: &mut [u8]| {
            calls += 1;
            buf.fill(0xFF);
        },
        0,
        256,
    );

    assert_eq!(value, 255);
    assert_eq!(calls, 1);
}

#[test]
fn test_bounded_full_width_range() {
    let value = next_with(|buf: &mut [u8]| buf.fill(0xAB), 1, u64::MAX);

    assert_eq!(value, 1 + 0xABAB_ABAB_ABAB_ABAB % (u64::MAX - 1));
}

#[test]
#[should_panic]
fn test_bounded_empty_range_panics() {
    next(3, 3);
}

#[test]
fn test_bounded_is_uniform_for_non_power_of_two_range() {
    const RANGE: u64 = 6;
    const SAMPLES: usize = 60_000;

    let mut counts = [0usize; RANGE as usize];
    for _ in 0..SAMPLES {
        counts[next(0, RANGE) as usize] += 1;
    }

    let expected = SAMPLES as f64 / RANGE as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // 5 degrees of freedom; 40 is far beyond the 1e-6 tail.
    assert!(chi_square < 40.0, "chi-square {chi_square} for counts {counts:?}");
}
