use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    EnrichmentError, EnrichmentResult, FormErrors, FormValues, QuestionSource, SubmissionId,
    SubmittedSnapshot, ValidationRuleset,
};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the UI shows these messages next to their fields.
    Rejected(FormErrors),
    /// Validation passed; question enrichment has been started for the snapshot.
    Accepted(SubmittedSnapshot),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn errors(&self) -> Option<&FormErrors> {
        match self {
            Self::Rejected(errors) => Some(errors),
            Self::Accepted(_) => None,
        }
    }

    pub fn snapshot(&self) -> Option<&SubmittedSnapshot> {
        match self {
            Self::Accepted(snapshot) => Some(snapshot),
            Self::Rejected(_) => None,
        }
    }
}

/// What the confirmation popup renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub snapshot: SubmittedSnapshot,
    pub questions: EnrichmentResult,
}

/// Submission state shared with in-flight enrichment tasks.
#[derive(Debug, Default)]
struct Confirmation {
    last_id: Option<SubmissionId>,
    snapshot: Option<SubmittedSnapshot>,
    questions: Option<EnrichmentResult>,
    popup_visible: bool,
}

impl Confirmation {
    fn next_id(&mut self) -> SubmissionId {
        let id = self
            .last_id
            .map_or_else(|| SubmissionId::new(1), SubmissionId::next);
        self.last_id = Some(id);
        id
    }

    fn clear(&mut self) {
        self.snapshot = None;
        self.questions = None;
        self.popup_visible = false;
    }

    /// Store questions for `id` if it is still the current snapshot.
    fn apply(&mut self, id: SubmissionId, result: Result<EnrichmentResult, EnrichmentError>) -> bool {
        let current = self.snapshot.as_ref().map(SubmittedSnapshot::id);
        if current != Some(id) {
            debug!(
                submission = %id,
                current = ?current.map(SubmissionId::get),
                "discarding stale question enrichment"
            );
            return false;
        }

        let questions = result.unwrap_or_else(|err| {
            warn!(
                submission = %id,
                error = %err,
                "question enrichment failed; confirming without additional questions"
            );
            Vec::new()
        });
        debug!(submission = %id, questions = questions.len(), "question enrichment applied");
        self.questions = Some(questions);
        self.popup_visible = true;
        true
    }
}

/// Runs validation, freezes accepted submissions, and drives the
/// confirmation popup from the question enrichment result.
///
/// Enrichment runs as a task on the caller's Tokio runtime. Without a
/// runtime no fetch is made and the confirmation opens with no additional
/// questions. A result is applied only while
/// the snapshot it was fetched for is still current; results for superseded
/// or dismissed submissions are dropped.
pub struct SubmissionController<Q> {
    source: Arc<Q>,
    ruleset: ValidationRuleset,
    state: Arc<Mutex<Confirmation>>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl<Q> SubmissionController<Q>
where
    Q: QuestionSource + 'static,
{
    /// Create a controller using the standard survey rules.
    pub fn new(source: Q) -> Self {
        Self {
            source: Arc::new(source),
            ruleset: ValidationRuleset::standard(),
            state: Arc::new(Mutex::new(Confirmation::default())),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Replace the validation rules.
    pub fn with_ruleset(mut self, ruleset: ValidationRuleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    pub fn ruleset(&self) -> &ValidationRuleset {
        &self.ruleset
    }

    pub fn source(&self) -> &Q {
        &self.source
    }

    /// Validate `values` and, if clean, accept them.
    ///
    /// Accepting replaces any previous snapshot, hides the popup until the
    /// new questions arrive, and spawns a single fetch for the snapshot's topic.
    pub fn submit(&self, values: &FormValues) -> SubmitOutcome {
        let errors = self.ruleset.validate(values);
        if !errors.is_empty() {
            info!(errors = errors.len(), "submission rejected");
            return SubmitOutcome::Rejected(errors);
        }

        let snapshot = {
            let mut state = self.state.lock();
            let snapshot = SubmittedSnapshot::new(state.next_id(), values.clone());
            state.clear();
            state.snapshot = Some(snapshot.clone());
            snapshot
        };
        info!(
            submission = %snapshot.id(),
            topic = snapshot.raw_topic(),
            "submission accepted"
        );

        match Handle::try_current() {
            Ok(runtime) => {
                let task = runtime.spawn(enrich(
                    Arc::clone(&self.source),
                    Arc::clone(&self.state),
                    snapshot.id(),
                    snapshot.raw_topic().to_string(),
                ));
                let mut pending = self.pending.lock();
                pending.retain(|task| !task.is_finished());
                pending.push(task);
            }
            Err(err) => {
                self.state
                    .lock()
                    .apply(snapshot.id(), Err(EnrichmentError::backend(err)));
            }
        }

        SubmitOutcome::Accepted(snapshot)
    }

    /// Apply an enrichment result for submission `id`.
    ///
    /// Failures degrade to an empty question list. Returns `false` when `id`
    /// is not the current snapshot, in which case nothing changes.
    pub fn apply_enrichment(
        &self,
        id: SubmissionId,
        result: Result<EnrichmentResult, EnrichmentError>,
    ) -> bool {
        self.state.lock().apply(id, result)
    }

    /// Wait for every enrichment fetch started so far to finish.
    pub async fn settle(&self) {
        let tasks = std::mem::take(&mut *self.pending.lock());
        for task in tasks {
            if let Err(err) = task.await {
                warn!(error = %err, "question enrichment task did not complete");
            }
        }
    }

    /// Dismiss the confirmation: hide the popup and drop the snapshot and
    /// its questions. Fetches still in flight will be discarded.
    pub fn close_popup(&self) {
        let mut state = self.state.lock();
        if let Some(snapshot) = &state.snapshot {
            debug!(submission = %snapshot.id(), "confirmation closed");
        }
        state.clear();
    }

    pub fn is_popup_visible(&self) -> bool {
        self.state.lock().popup_visible
    }

    /// The current snapshot, if a submission is awaiting or showing confirmation.
    pub fn snapshot(&self) -> Option<SubmittedSnapshot> {
        self.state.lock().snapshot.clone()
    }

    /// Questions obtained for the current snapshot.
    pub fn questions(&self) -> Option<EnrichmentResult> {
        self.state.lock().questions.clone()
    }

    /// Snapshot and questions, only while the popup is visible.
    pub fn confirmation(&self) -> Option<ConfirmationView> {
        let state = self.state.lock();
        if !state.popup_visible {
            return None;
        }
        Some(ConfirmationView {
            snapshot: state.snapshot.clone()?,
            questions: state.questions.clone().unwrap_or_default(),
        })
    }
}

async fn enrich<Q>(
    source: Arc<Q>,
    state: Arc<Mutex<Confirmation>>,
    id: SubmissionId,
    topic: String,
) where
    Q: QuestionSource + ?Sized,
{
    let result = source.fetch(&topic).await;
    state.lock().apply(id, result);
}
