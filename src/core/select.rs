use crate::domain::model::VocabularyEntry;
use rand::seq::SliceRandom;
use rand::Rng;

/// At most this many entries are shown per generation.
pub const MAX_SELECTED: usize = 5;

/// Uniform sample without replacement of up to [`MAX_SELECTED`] entries. The
/// rng is injected so tests can seed it; production call sites pass
/// `rand::thread_rng()`.
pub fn select_entries<R: Rng + ?Sized>(
    entries: &[VocabularyEntry],
    rng: &mut R,
) -> Vec<VocabularyEntry> {
    let n = MAX_SELECTED.min(entries.len());
    entries.choose_multiple(rng, n).cloned().collect()
}
