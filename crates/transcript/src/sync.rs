use crate::types::TranscriptLine;

/// Map a playback position (seconds) to the index of the line being
/// spoken: the highest index whose start time is at or before `time_secs`.
///
/// Returns `0` when the sequence is empty or the position precedes the
/// first line. That floor is a deliberate policy so the presentation
/// layer always has a line to highlight, not an error case.
///
/// For chronologically ordered lines the result is monotonically
/// non-decreasing as `time_secs` increases. Seek-originated jumps are
/// indistinguishable from natural progression; both just recompute.
pub fn active_index(lines: &[TranscriptLine], time_secs: f64) -> usize {
    lines
        .iter()
        .rposition(|line| line.start_ms as f64 / 1000.0 <= time_secs)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(starts: &[i64]) -> Vec<TranscriptLine> {
        starts
            .iter()
            .map(|&s| TranscriptLine::new(s, s + 900, format!("line at {s}")))
            .collect()
    }

    #[test]
    fn picks_highest_started_line() {
        let lines = lines(&[0, 5000]);

        assert_eq!(active_index(&lines, 3.0), 0);
        assert_eq!(active_index(&lines, 6.0), 1);
        assert_eq!(active_index(&lines, 0.0), 0);
    }

    #[test]
    fn time_before_first_line_floors_to_zero() {
        let lines = lines(&[2000, 5000]);

        assert_eq!(active_index(&lines, 1.0), 0);
    }

    #[test]
    fn empty_transcript_is_zero() {
        assert_eq!(active_index(&[], 10.0), 0);
    }

    #[test]
    fn exact_boundary_activates_line() {
        let lines = lines(&[0, 5000]);

        assert_eq!(active_index(&lines, 5.0), 1);
    }

    #[test]
    fn monotone_in_playback_time() {
        let lines = lines(&[0, 1200, 1201, 4000, 9000, 9001]);

        let mut previous = 0;
        let mut t = 0.0;
        while t < 12.0 {
            let idx = active_index(&lines, t);
            assert!(idx >= previous, "index regressed at t={t}");
            previous = idx;
            t += 0.1;
        }
    }
}
