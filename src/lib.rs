use log::debug;
use std::fmt;

/// Default tracker parameters
pub mod defaults {
    /// Upper bound for either shell category slider.
    pub const MAX_SHOTS: usize = 12;
}

/// Tracked state of a single shell in the chamber sequence.
///
/// Every shell starts out `Unmarked`; the player marks it `Live` or `Blank`
/// as information is revealed during the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotState {
    #[default]
    Unmarked,
    Live,
    Blank,
}

impl ShotState {
    /// Uppercase label used in accessibility text and the marking menu.
    pub fn label(&self) -> &'static str {
        match self {
            ShotState::Unmarked => "UNMARKED",
            ShotState::Live => "LIVE",
            ShotState::Blank => "BLANK",
        }
    }

    /// CSS class selecting the indicator color for this state.
    pub fn css_class(&self) -> &'static str {
        match self {
            ShotState::Unmarked => "shot-unmarked",
            ShotState::Live => "shot-live",
            ShotState::Blank => "shot-blank",
        }
    }
}

impl fmt::Display for ShotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Clamp a requested shell count into the supported `[0, MAX_SHOTS]` range.
#[inline]
pub fn clamp_shot_count(n: usize) -> usize {
    n.min(defaults::MAX_SHOTS)
}

/// Build a fresh indicator list for the given category counts.
///
/// Called whenever either slider moves: the list is rebuilt at the new
/// length with every entry reset to `Unmarked`. Marks from the previous
/// length are intentionally not preserved, since the shell order is
/// reshuffled whenever the shotgun is reloaded.
pub fn rebuild_shots(live_shots: usize, blank_shots: usize) -> Vec<ShotState> {
    let total = clamp_shot_count(live_shots) + clamp_shot_count(blank_shots);
    debug!(
        "Rebuilding shot list: {} live + {} blank = {} shells",
        live_shots, blank_shots, total
    );
    vec![ShotState::Unmarked; total]
}

/// Return a copy of `shots` with exactly `index` set to `state`.
///
/// All other indices are untouched. An out-of-range index leaves the list
/// unchanged; a click can land on an indicator that a concurrent slider
/// rebuild has already removed, so this is not an error.
pub fn mark_shot(shots: &[ShotState], index: usize, state: ShotState) -> Vec<ShotState> {
    let mut updated = shots.to_vec();
    match updated.get_mut(index) {
        Some(slot) => {
            debug!("Marking shell {} as {}", index + 1, state);
            *slot = state;
        }
        None => {
            debug!(
                "Ignoring mark for shell index {} (only {} shells tracked)",
                index,
                shots.len()
            );
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_produces_all_unmarked() {
        for live in 0..=defaults::MAX_SHOTS {
            for blank in 0..=defaults::MAX_SHOTS {
                let shots = rebuild_shots(live, blank);
                assert_eq!(shots.len(), live + blank);
                assert!(shots.iter().all(|s| *s == ShotState::Unmarked));
            }
        }
    }

    #[test]
    fn rebuild_clamps_oversized_counts() {
        let shots = rebuild_shots(99, 3);
        assert_eq!(shots.len(), defaults::MAX_SHOTS + 3);
    }

    #[test]
    fn rebuild_discards_previous_marks() {
        let shots = mark_shot(&rebuild_shots(2, 2), 1, ShotState::Live);
        assert_eq!(shots[1], ShotState::Live);

        // Any counter change resets everything, including unchanged indices.
        let rebuilt = rebuild_shots(2, 3);
        assert!(rebuilt.iter().all(|s| *s == ShotState::Unmarked));
    }

    #[test]
    fn mark_changes_only_the_given_index() {
        let shots = rebuild_shots(3, 2);
        let marked = mark_shot(&shots, 2, ShotState::Live);
        assert_eq!(
            marked,
            vec![
                ShotState::Unmarked,
                ShotState::Unmarked,
                ShotState::Live,
                ShotState::Unmarked,
                ShotState::Unmarked,
            ]
        );
    }

    #[test]
    fn mark_can_return_a_shell_to_unmarked() {
        let shots = mark_shot(&rebuild_shots(1, 1), 0, ShotState::Blank);
        let cleared = mark_shot(&shots, 0, ShotState::Unmarked);
        assert_eq!(cleared, vec![ShotState::Unmarked, ShotState::Unmarked]);
    }

    #[test]
    fn mark_is_idempotent() {
        let once = mark_shot(&rebuild_shots(2, 0), 1, ShotState::Live);
        let twice = mark_shot(&once, 1, ShotState::Live);
        assert_eq!(once, twice);
    }

    #[test]
    fn mark_out_of_range_is_a_noop() {
        let shots = rebuild_shots(1, 1);
        assert_eq!(mark_shot(&shots, 5, ShotState::Live), shots);
        assert_eq!(mark_shot(&[], 0, ShotState::Blank), Vec::new());
    }

    #[test]
    fn clamp_shot_count_bounds() {
        assert_eq!(clamp_shot_count(0), 0);
        assert_eq!(clamp_shot_count(12), 12);
        assert_eq!(clamp_shot_count(13), 12);
    }
}
