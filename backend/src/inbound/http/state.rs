//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::TriviaService;
use crate::domain::ports::{QuizQuery, TriviaCommand, TriviaQuery, TriviaRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Question and category reads.
    pub query: Arc<dyn TriviaQuery>,
    /// Quiz draws.
    pub quiz: Arc<dyn QuizQuery>,
    /// Question creation and deletion.
    pub command: Arc<dyn TriviaCommand>,
}

impl HttpState {
    /// Construct state from individual ports.
    pub fn new(
        query: Arc<dyn TriviaQuery>,
        quiz: Arc<dyn QuizQuery>,
        command: Arc<dyn TriviaCommand>,
    ) -> Self {
        Self {
            query,
            quiz,
            command,
        }
    }

    /// Construct state where one service backs every port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::TriviaService;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryTriviaRepository;
    ///
    /// let service = TriviaService::new(Arc::new(InMemoryTriviaRepository::new()));
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _query = state.query.clone();
    /// ```
    pub fn from_service<R>(service: Arc<TriviaService<R>>) -> Self
    where
        R: TriviaRepository + 'static,
    {
        Self {
            query: service.clone(),
            quiz: service.clone(),
            command: service,
        }
    }
}
