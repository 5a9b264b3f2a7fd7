//! Quiz session state machine.
//!
//! `Session` is an immutable record; `reduce` is a pure function from the current
//! record and an `Event` to the next record. Every dispatched model call and every
//! reset bumps `generation`, and completion events carry the generation they were
//! issued under, so a result that arrives after a reset (or a retry) is rejected
//! as `Stale` instead of overwriting newer state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aptitude::analyzer::AnalysisOutcome;
use crate::errors::FailureKind;
use crate::models::analysis::{AnalysisSource, AptitudeAnalysis};
use crate::models::career::CareerDetail;
use crate::models::profile::{AptitudeAnswers, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Step {
    Input,
    Analyzing,
    DashboardAptitude,
    Matching,
    DashboardCareer,
    CareerDetail,
    MatchingFailed,
}

impl Step {
    /// Copy shown while a step is pending or has failed.
    pub fn status_message(self) -> Option<&'static str> {
        match self {
            Step::Analyzing => Some("AI กำลังดำน้ำลึกเพื่อค้นหาตัวตนของคุณ..."),
            Step::Matching => Some("กำลังปรุงสูตรอาชีพที่กลมกล่อมที่สุด..."),
            Step::MatchingFailed => Some("ไม่สามารถจับคู่อาชีพได้ในขณะนี้ กรุณาลองใหม่อีกครั้ง"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub generation: u64,
    pub step: Step,
    pub profile: Option<UserProfile>,
    pub analysis: Option<AptitudeAnalysis>,
    pub analysis_source: Option<AnalysisSource>,
    pub careers: Vec<CareerDetail>,
    pub selected_career: Option<CareerDetail>,
    pub failure: Option<FailureKind>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::initial(0, Utc::now())
    }

    fn initial(generation: u64, updated_at: DateTime<Utc>) -> Self {
        Session {
            generation,
            step: Step::Input,
            profile: None,
            analysis: None,
            analysis_source: None,
            careers: Vec::new(),
            selected_career: None,
            failure: None,
            updated_at,
        }
    }

    /// True when the stored analysis is the fallback record.
    pub fn is_degraded(&self) -> bool {
        self.analysis_source
            .map(|s| s.is_degraded())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    Submit {
        profile: UserProfile,
        answers: AptitudeAnswers,
    },
    AnalysisResolved {
        generation: u64,
        outcome: AnalysisOutcome,
    },
    Confirm,
    MatchingResolved {
        generation: u64,
        result: Result<Vec<CareerDetail>, FailureKind>,
    },
    Retry,
    Select {
        index: usize,
    },
    Back,
    Reset,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Submit { .. } => "submit",
            Event::AnalysisResolved { .. } => "analysis_resolved",
            Event::Confirm => "confirm",
            Event::MatchingResolved { .. } => "matching_resolved",
            Event::Retry => "retry",
            Event::Select { .. } => "select",
            Event::Back => "back",
            Event::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("profile requires name, age and interest")]
    IncompleteProfile,

    #[error("all five answers are required")]
    IncompleteAnswers,

    #[error("'{event}' is not allowed in step {step:?}")]
    NotAllowed { step: Step, event: &'static str },

    #[error("career index {index} out of range (have {len})")]
    CareerOutOfRange { index: usize, len: usize },

    #[error("result from generation {got} superseded by generation {current}")]
    Stale { current: u64, got: u64 },
}

/// Computes the session that follows `event`. Never mutates `session`.
pub fn reduce(session: &Session, event: Event) -> Result<Session, TransitionError> {
    let event_name = event.name();
    let not_allowed = || TransitionError::NotAllowed {
        step: session.step,
        event: event_name,
    };

    match event {
        Event::Submit { profile, answers } => {
            if session.step != Step::Input {
                return Err(not_allowed());
            }
            if !profile.is_complete() {
                return Err(TransitionError::IncompleteProfile);
            }
            if !answers.is_complete() {
                return Err(TransitionError::IncompleteAnswers);
            }
            let mut next = Session::initial(session.generation + 1, session.updated_at);
            next.step = Step::Analyzing;
            next.profile = Some(profile);
            Ok(next)
        }

        Event::AnalysisResolved {
            generation,
            outcome,
        } => {
            check_generation(session, generation)?;
            if session.step != Step::Analyzing {
                return Err(not_allowed());
            }
            Ok(Session {
                step: Step::DashboardAptitude,
                analysis: Some(outcome.analysis),
                analysis_source: Some(outcome.source),
                ..session.clone()
            })
        }

        Event::Confirm => {
            if session.step != Step::DashboardAptitude || session.analysis.is_none() {
                return Err(not_allowed());
            }
            Ok(Session {
                generation: session.generation + 1,
                step: Step::Matching,
                failure: None,
                ..session.clone()
            })
        }

        Event::MatchingResolved { generation, result } => {
            check_generation(session, generation)?;
            if session.step != Step::Matching {
                return Err(not_allowed());
            }
            Ok(match result {
                Ok(careers) => Session {
                    step: Step::DashboardCareer,
                    careers,
                    failure: None,
                    ..session.clone()
                },
                Err(kind) => Session {
                    step: Step::MatchingFailed,
                    careers: Vec::new(),
                    failure: Some(kind),
                    ..session.clone()
                },
            })
        }

        Event::Retry => {
            if session.step != Step::MatchingFailed {
                return Err(not_allowed());
            }
            Ok(Session {
                generation: session.generation + 1,
                step: Step::Matching,
                failure: None,
                ..session.clone()
            })
        }

        Event::Select { index } => {
            if session.step != Step::DashboardCareer {
                return Err(not_allowed());
            }
            let career = session
                .careers
                .get(index)
                .cloned()
                .ok_or(TransitionError::CareerOutOfRange {
                    index,
                    len: session.careers.len(),
                })?;
            Ok(Session {
                step: Step::CareerDetail,
                selected_career: Some(career),
                ..session.clone()
            })
        }

        Event::Back => {
            if session.step != Step::CareerDetail {
                return Err(not_allowed());
            }
            Ok(Session {
                step: Step::DashboardCareer,
                selected_career: None,
                ..session.clone()
            })
        }

        Event::Reset => Ok(Session::initial(
            session.generation + 1,
            session.updated_at,
        )),
    }
}

fn check_generation(session: &Session, got: u64) -> Result<(), TransitionError> {
    if got != session.generation {
        return Err(TransitionError::Stale {
            current: session.generation,
            got,
        });
    }
    Ok(())
}
