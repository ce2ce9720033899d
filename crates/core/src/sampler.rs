use rand::Rng;

/// Number of questions drawn for a session when nothing else is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// Draw `count` distinct elements from `source` without replacement.
///
/// Runs a partial Fisher–Yates shuffle over a copy of `source`: for each slot
/// `i` in `0..count` a uniform index in `i..len` is swapped into place and
/// taken. Every element is equally likely to land in any output slot, and the
/// output order is random.
///
/// When `source` has `count` elements or fewer, the whole slice is returned
/// as-is, in its original order.
///
/// `source` is never modified. Pass a seeded RNG for reproducible draws.
///
/// # Examples
///
/// ```
/// # use quiz_core::sampler::sample;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = sample(&[1, 2, 3, 4, 5], 3, &mut rng);
/// assert_eq!(picked.len(), 3);
///
/// let all = sample(&[1, 2], 3, &mut rng);
/// assert_eq!(all, vec![1, 2]);
/// ```
pub fn sample<T: Clone, R: Rng + ?Sized>(source: &[T], count: usize, rng: &mut R) -> Vec<T> {
    if source.len() <= count {
        return source.to_vec();
    }

    let mut working = source.to_vec();
    let len = working.len();
    let mut picked = Vec::with_capacity(count);

    for i in 0..count {
        let j = rng.random_range(i..len);
        working.swap(i, j);
        picked.push(working[i].clone());
    }

    picked
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
