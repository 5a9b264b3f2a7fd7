//! Drives the two-phase quiz cycle.
//!
//! Flow: submit → run_analysis → confirm → run_matching (→ retry → run_matching).
//! `submit`, `confirm` and `retry` move the machine synchronously and hand back a
//! job tagged with the generation it was issued under; `run_*` performs the model
//! call and dispatches the completion. Completions from a superseded generation
//! are dropped.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::aptitude::analyzer::analyze_with_fallback;
use crate::careers::matcher::try_match_careers;
use crate::llm_client::GenerativeModel;
use crate::models::analysis::AptitudeAnalysis;
use crate::models::profile::{AptitudeAnswers, UserProfile};
use crate::session::machine::{Event, Session, TransitionError};
use crate::session::store::SessionStore;

/// Pending analysis call.
#[derive(Debug, Clone)]
pub struct AnalysisJob {
    pub generation: u64,
    pub profile: UserProfile,
    pub answers: AptitudeAnswers,
}

/// Pending career matching call.
#[derive(Debug, Clone)]
pub struct MatchingJob {
    pub generation: u64,
    pub analysis: AptitudeAnalysis,
}

#[derive(Clone)]
pub struct Workflow {
    store: SessionStore,
    model: Arc<dyn GenerativeModel>,
}

impl Workflow {
    pub fn new(store: SessionStore, model: Arc<dyn GenerativeModel>) -> Self {
        Self { store, model }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Input → Analyzing.
    pub async fn submit(
        &self,
        profile: UserProfile,
        answers: AptitudeAnswers,
    ) -> Result<(Session, AnalysisJob), TransitionError> {
        let session = self
            .store
            .dispatch(Event::Submit {
                profile: profile.clone(),
                answers: answers.clone(),
            })
            .await?;
        let job = AnalysisJob {
            generation: session.generation,
            profile,
            answers,
        };
        Ok((session, job))
    }

    /// Performs the analysis call and applies the result if still current.
    /// Returns the session as it stands afterwards.
    pub async fn run_analysis(&self, job: AnalysisJob) -> Session {
        let outcome = analyze_with_fallback(self.model.as_ref(), &job.profile, &job.answers).await;
        self.complete(Event::AnalysisResolved {
            generation: job.generation,
            outcome,
        })
        .await
    }

    /// DashboardAptitude → Matching.
    pub async fn confirm(&self) -> Result<(Session, MatchingJob), TransitionError> {
        let session = self.store.dispatch(Event::Confirm).await?;
        Self::matching_job(session, Event::Confirm.name())
    }

    /// MatchingFailed → Matching.
    pub async fn retry(&self) -> Result<(Session, MatchingJob), TransitionError> {
        let session = self.store.dispatch(Event::Retry).await?;
        Self::matching_job(session, Event::Retry.name())
    }

    /// Performs the matching call and applies the result if still current.
    pub async fn run_matching(&self, job: MatchingJob) -> Session {
        let result = try_match_careers(self.model.as_ref(), &job.analysis)
            .await
            .map_err(|e| {
                warn!("Career matching failed, session will offer retry: {e}");
                e.kind()
            });
        self.complete(Event::MatchingResolved {
            generation: job.generation,
            result,
        })
        .await
    }

    /// Runs the analysis job in the background.
    pub fn spawn_analysis(&self, job: AnalysisJob) {
        let workflow = self.clone();
        tokio::spawn(async move {
            workflow.run_analysis(job).await;
        });
    }

    /// Runs the matching job in the background.
    pub fn spawn_matching(&self, job: MatchingJob) {
        let workflow = self.clone();
        tokio::spawn(async move {
            workflow.run_matching(job).await;
        });
    }

    fn matching_job(
        session: Session,
        event: &'static str,
    ) -> Result<(Session, MatchingJob), TransitionError> {
        let analysis = session
            .analysis
            .clone()
            .ok_or(TransitionError::NotAllowed {
                step: session.step,
                event,
            })?;
        let job = MatchingJob {
            generation: session.generation,
            analysis,
        };
        Ok((session, job))
    }

    async fn complete(&self, event: Event) -> Session {
        let event_name = event.name();
        match self.store.dispatch(event).await {
            Ok(session) => session,
            Err(TransitionError::Stale { current, got }) => {
                info!("Discarding {event_name} from generation {got} (current {current})");
                self.store.snapshot().await
            }
            Err(e) => {
                debug!("Ignoring {event_name}: {e}");
                self.store.snapshot().await
            }
        }
    }
}
