//! Quiz draws: one unseen question at a time, chosen uniformly at random.
//!
//! The session state (identifiers already asked) is held by the caller and
//! passed in on every draw. Randomness comes from an injected
//! [`CandidatePicker`] so tests can script or seed the choice and concurrent
//! sessions never share generator state.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{CategoryFilter, Question, QuestionId};

/// Strategy for a uniform pick from a finite candidate set.
pub trait CandidatePicker: Send + Sync {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Production picker backed by the calling thread's RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl CandidatePicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic picker seeded once at construction.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededPicker {
    /// Create a picker whose sequence is fixed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl CandidatePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..len)
    }
}

/// Outcome of one quiz draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDraw {
    /// An unseen question.
    Question(Question),
    /// Every eligible question has been asked. A normal end of session.
    Exhausted,
}

impl QuizDraw {
    /// The drawn question, if any.
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Question(question) => Some(question),
            Self::Exhausted => None,
        }
    }

    /// Consume the draw, returning the question if any.
    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Question(question) => Some(question),
            Self::Exhausted => None,
        }
    }
}

/// Draw the next question of a quiz session.
///
/// `pool` should already be restricted to `filter`; questions outside the
/// filter are skipped regardless so a draw never leaves its category. The
/// filter is assumed to reference an existing category.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
///
/// use backend::domain::{
///     CategoryFilter, CategoryId, QuestionDraft, QuestionId, QuizDraw, SeededPicker,
///     next_question,
/// };
///
/// let question = QuestionDraft::try_new(Some("2 + 2?"), Some("4"), Some(CategoryId::new(1)), Some(1))?
///     .into_question(QuestionId::new(1));
/// let pool = vec![question];
/// let picker = SeededPicker::new(7);
///
/// let mut asked = HashSet::new();
/// let first = next_question(CategoryFilter::Any, &asked, &pool, &picker);
/// asked.insert(QuestionId::new(1));
/// assert!(first.question().is_some());
/// assert_eq!(next_question(CategoryFilter::Any, &asked, &pool, &picker), QuizDraw::Exhausted);
/// # Ok::<(), backend::domain::QuestionValidationError>(())
/// ```
pub fn next_question(
    filter: CategoryFilter,
    asked: &HashSet<QuestionId>,
    pool: &[Question],
    picker: &dyn CandidatePicker,
) -> QuizDraw {
    let candidates: Vec<&Question> = pool
        .iter()
        .filter(|question| filter.admits(question.category()))
        .filter(|question| !asked.contains(&question.id()))
        .collect();

    let Some(last) = candidates.len().checked_sub(1) else {
        return QuizDraw::Exhausted;
    };
    let index = picker.pick(candidates.len()).min(last);
    candidates
        .get(index)
        .map_or(QuizDraw::Exhausted, |question| QuizDraw::Question((*question).clone()))
}
