//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod trivia_command;
mod trivia_query;
mod trivia_repository;

#[cfg(test)]
pub use trivia_command::MockTriviaCommand;
pub use trivia_command::{CreateQuestionResponse, DeleteQuestionResponse, TriviaCommand};
#[cfg(test)]
pub use trivia_query::{MockQuizQuery, MockTriviaQuery};
pub use trivia_query::{QuestionListing, QuestionPage, QuizQuery, QuizRequest, TriviaQuery};
#[cfg(test)]
pub use trivia_repository::MockTriviaRepository;
pub use trivia_repository::{TriviaRepository, TriviaRepositoryError};
