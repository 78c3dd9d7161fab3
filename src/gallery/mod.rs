// SPDX-License-Identifier: MPL-2.0
//! The 4 x 5 thumbnail grid model.
//!
//! A [`Gallery`] owns the candidate set of one successful fetch, the
//! candidate index shown in each of the [`SLOT_COUNT`] slots, and the set of
//! candidates currently on screen. Slots hold indices into the candidate
//! list, so a candidate is identified by its position.

mod artwork;
pub mod download;

pub use artwork::{decode_thumbnail, placeholder_handle, Artwork, ArtworkStatus};
pub use download::{download_artwork, download_events, DownloadEvent, DownloadReport};

use crate::config::{MIN_CANDIDATES, SLOT_COUNT};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("{found} distinct results were found, but {required} or more are required.")]
    InsufficientResults { found: usize, required: usize },
}

/// Result of a successful [`Gallery::swap_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutcome {
    pub slot: usize,
    pub previous: usize,
    pub current: usize,
}

/// Fails unless there are strictly more candidates than slots, so the
/// slideshow always has something unseen to swap in.
pub fn check_candidate_count<T>(candidates: &[T]) -> Result<(), GalleryError> {
    if candidates.len() < MIN_CANDIDATES {
        return Err(GalleryError::InsufficientResults {
            found: candidates.len(),
            required: MIN_CANDIDATES,
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Gallery {
    candidates: Vec<Artwork>,
    slots: [Option<usize>; SLOT_COUNT],
    shown: HashSet<usize>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            slots: [None; SLOT_COUNT],
            shown: HashSet::with_capacity(SLOT_COUNT),
        }
    }
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the candidate set and shows the first [`SLOT_COUNT`]
    /// candidates in order. Leaves the gallery untouched on error.
    pub fn populate(&mut self, candidates: Vec<Artwork>) -> Result<(), GalleryError> {
        check_candidate_count(&candidates)?;

        self.candidates = candidates;
        self.shown.clear();
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            *entry = Some(slot);
            self.shown.insert(slot);
        }
        Ok(())
    }

    /// Replaces a random slot with a random candidate that is not on screen.
    ///
    /// Returns `None` when the gallery is empty or every candidate is shown.
    pub fn swap_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SwapOutcome> {
        if !self.is_populated() {
            return None;
        }
        let current = (0..self.candidates.len())
            .filter(|index| !self.shown.contains(index))
            .choose(rng)?;
        let slot = rng.gen_range(0..SLOT_COUNT);
        let previous = self.slots[slot]?;

        self.shown.remove(&previous);
        self.slots[slot] = Some(current);
        self.shown.insert(current);

        tracing::debug!(slot, previous, current, "swapped thumbnail");
        Some(SwapOutcome {
            slot,
            previous,
            current,
        })
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.slots.iter().all(Option::is_some) && !self.candidates.is_empty()
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn candidate(&self, index: usize) -> Option<&Artwork> {
        self.candidates.get(index)
    }

    /// Candidate index shown in `slot`.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.contains(&index)
    }

    /// Artwork per slot in grid order; `None` for an empty slot.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Artwork>> + '_ {
        self.slots
            .iter()
            .map(|entry| entry.and_then(|index| self.candidates.get(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn artworks(count: usize) -> Vec<Artwork> {
        (0..count)
            .map(|i| Artwork::placeholder(format!("https://img.test/{i}.jpg")))
            .collect()
    }

    fn assert_consistent(gallery: &Gallery) {
        let in_slots: HashSet<usize> = (0..SLOT_COUNT).filter_map(|s| gallery.slot(s)).collect();
        assert_eq!(in_slots.len(), SLOT_COUNT, "a candidate appears twice");
        assert_eq!(gallery.shown_count(), SLOT_COUNT);
        for index in in_slots {
            assert!(gallery.is_shown(index));
        }
    }

    #[test]
    fn check_rejects_twenty_candidates() {
        let err = check_candidate_count(&vec![0u8; 20]).expect_err("too few");
        assert_eq!(
            err.to_string(),
            "20 distinct results were found, but 21 or more are required."
        );
    }

    #[test]
    fn check_accepts_twenty_one_candidates() {
        assert!(check_candidate_count(&vec![0u8; 21]).is_ok());
    }

    #[test]
    fn populate_shows_first_candidates_in_order() {
        let mut gallery = Gallery::new();
        gallery.populate(artworks(25)).expect("enough candidates");
        assert!(gallery.is_populated());
        assert_eq!(gallery.candidate_count(), 25);
        for slot in 0..SLOT_COUNT {
            assert_eq!(gallery.slot(slot), Some(slot));
        }
        assert_consistent(&gallery);
    }

    #[test]
    fn failed_populate_keeps_previous_state() {
        let mut gallery = Gallery::new();
        gallery.populate(artworks(22)).expect("enough candidates");
        let mut rng = StdRng::seed_from_u64(1);
        gallery.swap_one(&mut rng).expect("swap");
        let before: Vec<_> = (0..SLOT_COUNT).map(|s| gallery.slot(s)).collect();

        let err = gallery.populate(artworks(10)).expect_err("too few");
        assert_eq!(
            err,
            GalleryError::InsufficientResults {
                found: 10,
                required: 21
            }
        );
        let after: Vec<_> = (0..SLOT_COUNT).map(|s| gallery.slot(s)).collect();
        assert_eq!(before, after);
        assert_eq!(gallery.candidate_count(), 22);
    }

    #[test]
    fn repopulate_resets_shown_set() {
        let mut gallery = Gallery::new();
        gallery.populate(artworks(30)).expect("first");
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            gallery.swap_one(&mut rng);
        }
        gallery.populate(artworks(21)).expect("second");
        assert_eq!(gallery.candidate_count(), 21);
        for slot in 0..SLOT_COUNT {
            assert_eq!(gallery.slot(slot), Some(slot));
        }
        assert!(!gallery.is_shown(20));
    }

    #[test]
    fn swap_on_empty_gallery_is_noop() {
        let mut gallery = Gallery::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(gallery.swap_one(&mut rng), None);
        assert!(!gallery.is_populated());
        assert!(gallery.slots().all(|artwork| artwork.is_none()));
    }

    #[test]
    fn swap_changes_exactly_one_slot_to_an_unseen_candidate() {
        let mut gallery = Gallery::new();
        gallery.populate(artworks(40)).expect("enough candidates");
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let before: Vec<_> = (0..SLOT_COUNT).map(|s| gallery.slot(s)).collect();
            let outcome = gallery.swap_one(&mut rng).expect("unseen candidate exists");
            let after: Vec<_> = (0..SLOT_COUNT).map(|s| gallery.slot(s)).collect();

            let changed: Vec<usize> = (0..SLOT_COUNT).filter(|&s| before[s] != after[s]).collect();
            assert_eq!(changed, vec![outcome.slot]);
            assert_eq!(before[outcome.slot], Some(outcome.previous));
            assert_eq!(after[outcome.slot], Some(outcome.current));
            assert!(!before.contains(&Some(outcome.current)));
            assert!(!gallery.is_shown(outcome.previous));
            assert_consistent(&gallery);
        }
    }

    #[test]
    fn swap_with_single_spare_alternates() {
        let mut gallery = Gallery::new();
        gallery.populate(artworks(21)).expect("enough candidates");
        let mut rng = StdRng::seed_from_u64(7);

        let first = gallery.swap_one(&mut rng).expect("swap");
        assert_eq!(first.current, 20);
        let second = gallery.swap_one(&mut rng).expect("swap");
        assert_eq!(second.current, first.previous);
        assert_consistent(&gallery);
    }

    #[test]
    fn every_candidate_is_eventually_shown() {
        let mut gallery = Gallery::new();
        gallery.populate(artworks(30)).expect("enough candidates");
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen: HashSet<usize> = (0..SLOT_COUNT).collect();
        for _ in 0..2000 {
            if let Some(outcome) = gallery.swap_one(&mut rng) {
                seen.insert(outcome.current);
            }
        }
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn slots_iterates_in_grid_order() {
        let mut gallery = Gallery::new();
        gallery.populate(artworks(21)).expect("enough candidates");
        let urls: Vec<String> = gallery
            .slots()
            .map(|artwork| artwork.map(|a| a.url.clone()).unwrap_or_default())
            .collect();
        assert_eq!(urls.len(), SLOT_COUNT);
        assert_eq!(urls[0], "https://img.test/0.jpg");
        assert_eq!(urls[19], "https://img.test/19.jpg");
    }
}
