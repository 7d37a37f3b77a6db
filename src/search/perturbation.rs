//! Contains [`double_bridge`], the four-segment perturbation used to escape RVND fixed points.
use rand::rngs::StdRng;
use rand::Rng;

/// The minimum schedule length for which Double-Bridge has room to act.
pub const MIN_SCHEDULE_LEN_FOR_PERTURBATION: usize = 8;

/// Splits `schedule` into four contiguous segments `P1, P2, P3, P4` at cut points
/// `pos1 < pos2 < pos3 < pos4` and reassembles them as `prefix || P3 || P1 || P2 || suffix`,
/// where `prefix = schedule[..pos1]` and `suffix = schedule[pos4..]`. Leaves `schedule` unchanged
/// if its length is below [`MIN_SCHEDULE_LEN_FOR_PERTURBATION`].
///
/// Cut selection: `segmentSize = max(2, N/4)`; `pos1` is drawn uniformly from
/// `[1, N - 3*segmentSize - 1]`, then `pos2/pos3/pos4` follow at `segmentSize` intervals. If that
/// would push `pos4` past `N`, the cuts fall back to the whole-array split `pos1 = 0, pos4 = N`.
pub fn double_bridge(schedule: &mut Vec<usize>, rng: &mut StdRng) {
    let n = schedule.len();
    if n < MIN_SCHEDULE_LEN_FOR_PERTURBATION {
        return;
    }

    let segment_size = (n / 4).max(2);

    let high = n.saturating_sub(3 * segment_size + 1);
    let mut pos1 = if high >= 1 { rng.gen_range(1..=high) } else { 0 };
    let mut pos4 = pos1 + 3 * segment_size;

    if pos4 > n {
        pos1 = 0;
        pos4 = n;
    }
    let pos2 = pos1 + segment_size;
    let pos3 = pos2 + segment_size;

    let prefix = &schedule[..pos1];
    let p1 = &schedule[pos1..pos2];
    let p2 = &schedule[pos2..pos3];
    let p3 = &schedule[pos3..pos4];
    let suffix = &schedule[pos4..];

    let mut rebuilt = Vec::with_capacity(n);
    rebuilt.extend_from_slice(prefix);
    rebuilt.extend_from_slice(p3);
    rebuilt.extend_from_slice(p1);
    rebuilt.extend_from_slice(p2);
    rebuilt.extend_from_slice(suffix);

    *schedule = rebuilt;
}
