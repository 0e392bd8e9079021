//! Tests for the trivia service.

use std::collections::HashSet;
use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockTriviaRepository;
use crate::domain::{ErrorCode, SeededPicker};

fn question(id: u64, category: u64, text: &str) -> Question {
    QuestionDraft::try_new(Some(text), Some("answer"), Some(CategoryId::new(category)), Some(2))
        .expect("valid draft")
        .into_question(QuestionId::new(id))
}

fn categories() -> Vec<Category> {
    vec![
        Category::new(CategoryId::new(1), "Science"),
        Category::new(CategoryId::new(2), "Art"),
        Category::new(CategoryId::new(4), "History"),
    ]
}

#[fixture]
fn nineteen_questions() -> Vec<Question> {
    (1..=19)
        .map(|id| question(id, 1 + id % 2, &format!("What is fact number {id}?")))
        .collect()
}

fn page(number: usize) -> PageNumber {
    PageNumber::new(number).expect("valid page number")
}

fn repo_with_questions(questions: Vec<Question>) -> MockTriviaRepository {
    let mut repo = MockTriviaRepository::new();
    repo.expect_list_all_questions()
        .returning(move || Ok(questions.clone()));
    repo.expect_list_all_categories()
        .returning(|| Ok(categories()));
    repo
}

fn service(repo: MockTriviaRepository) -> TriviaService<MockTriviaRepository> {
    TriviaService::new(Arc::new(repo)).with_picker(Arc::new(SeededPicker::new(7)))
}

#[rstest]
#[tokio::test]
async fn list_questions_returns_first_page_and_categories(nineteen_questions: Vec<Question>) {
    let service = service(repo_with_questions(nineteen_questions));

    let listing = service.list_questions(page(1)).await.expect("first page");

    assert_eq!(listing.page.questions.len(), 10);
    assert_eq!(listing.page.total_questions, 19);
    assert_eq!(listing.page.current_category, None);
    assert_eq!(
        listing.page.questions.first().map(|q| q.id.get()),
        Some(1)
    );
    assert_eq!(listing.categories.len(), 3);
}

#[rstest]
#[tokio::test]
async fn second_page_holds_remaining_questions(nineteen_questions: Vec<Question>) {
    let service = service(repo_with_questions(nineteen_questions));

    let listing = service.list_questions(page(2)).await.expect("second page");

    let ids: Vec<u64> = listing.page.questions.iter().map(|q| q.id.get()).collect();
    assert_eq!(ids, (11..=19).collect::<Vec<_>>());
}

#[rstest]
#[tokio::test]
async fn page_beyond_end_is_not_found(nineteen_questions: Vec<Question>) {
    let service = service(repo_with_questions(nineteen_questions));

    let error = service
        .list_questions(page(3))
        .await
        .expect_err("page 3 is past the end");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn empty_store_yields_empty_first_page() {
    let service = service(repo_with_questions(Vec::new()));

    let listing = service.list_questions(page(1)).await.expect("empty page");

    assert!(listing.page.questions.is_empty());
    assert_eq!(listing.page.total_questions, 0);
}

#[rstest]
#[tokio::test]
async fn page_size_is_configurable(nineteen_questions: Vec<Question>) {
    let service = service(repo_with_questions(nineteen_questions))
        .with_page_size(PageSize::new(5).expect("valid size"));

    let listing = service.list_questions(page(4)).await.expect("fourth page");

    assert_eq!(listing.page.questions.len(), 4);
}

#[rstest]
#[tokio::test]
async fn category_questions_are_scoped_and_named(nineteen_questions: Vec<Question>) {
    let art: Vec<Question> = nineteen_questions
        .into_iter()
        .filter(|q| q.category() == CategoryId::new(2))
        .collect();
    let mut repo = MockTriviaRepository::new();
    repo.expect_list_all_categories()
        .returning(|| Ok(categories()));
    repo.expect_list_questions_by_category()
        .with(eq(CategoryId::new(2)))
        .times(1)
        .return_once(move |_| Ok(art));
    let service = service(repo);

    let result = service
        .list_category_questions(CategoryId::new(2), page(1))
        .await
        .expect("art questions");

    assert_eq!(result.current_category.as_deref(), Some("Art"));
    assert_eq!(result.total_questions, 10);
    assert!(result.questions.iter().all(|q| q.category == CategoryId::new(2)));
}

#[rstest]
#[tokio::test]
async fn unknown_category_questions_are_not_found() {
    let mut repo = MockTriviaRepository::new();
    repo.expect_list_all_categories()
        .returning(|| Ok(categories()));
    repo.expect_list_questions_by_category().times(0);
    let service = service(repo);

    let error = service
        .list_category_questions(CategoryId::new(2000), page(1))
        .await
        .expect_err("unknown category");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn search_ignores_case() {
    let corpus = vec![
        question(1, 1, "What is the heaviest organ in the human body?"),
        question(2, 4, "Who discovered penicillin?"),
        question(3, 2, "La Giaconda is better known as what?"),
    ];
    let service = service(repo_with_questions(corpus));

    let upper = service
        .search_questions(SearchTerm::new("WHAT").expect("term"), page(1))
        .await
        .expect("upper-case search");
    let lower = service
        .search_questions(SearchTerm::new("what").expect("term"), page(1))
        .await
        .expect("lower-case search");

    assert_eq!(upper, lower);
    assert_eq!(upper.total_questions, 2);
}

#[rstest]
#[tokio::test]
async fn search_without_matches_is_empty_success(nineteen_questions: Vec<Question>) {
    let service = service(repo_with_questions(nineteen_questions));

    let result = service
        .search_questions(SearchTerm::new("scripple tip top").expect("term"), page(1))
        .await
        .expect("no matches is not an error");

    assert!(result.questions.is_empty());
    assert_eq!(result.total_questions, 0);
}

#[rstest]
#[tokio::test]
async fn get_question_reports_missing_as_not_found() {
    let mut repo = MockTriviaRepository::new();
    repo.expect_get_question()
        .with(eq(QuestionId::new(404)))
        .return_once(|_| Ok(None));
    let service = service(repo);

    let error = service
        .get_question(QuestionId::new(404))
        .await
        .expect_err("missing question");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn store_failures_are_distinct_from_absence() {
    let mut repo = MockTriviaRepository::new();
    repo.expect_get_question()
        .return_once(|_| Err(TriviaRepositoryError::query("syntax error")));
    let service = service(repo);

    let error = service
        .get_question(QuestionId::new(1))
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn resolve_category_finds_existing_and_rejects_missing() {
    let service = service(repo_with_questions(Vec::new()));

    let history = service
        .resolve_category(CategoryId::new(4))
        .await
        .expect("history exists");
    let error = service
        .resolve_category(CategoryId::new(3))
        .await
        .expect_err("category 3 is missing");

    assert_eq!(history.kind(), "History");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn create_question_rejects_unknown_category() {
    let mut repo = MockTriviaRepository::new();
    repo.expect_get_category().return_once(|_| Ok(None));
    repo.expect_insert_question().times(0);
    let service = service(repo);
    let draft = QuestionDraft::try_new(Some("q"), Some("a"), Some(CategoryId::new(9)), Some(1))
        .expect("valid draft");

    let error = service
        .create_question(draft)
        .await
        .expect_err("unknown category");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn create_question_returns_stored_question() {
    let stored = question(24, 4, "Who is the current president of the United States");
    let returned = stored.clone();
    let mut repo = MockTriviaRepository::new();
    repo.expect_get_category()
        .with(eq(CategoryId::new(4)))
        .return_once(|id| Ok(Some(Category::new(id, "History"))));
    repo.expect_insert_question()
        .times(1)
        .return_once(move |_| Ok(returned));
    repo.expect_list_all_questions()
        .return_once(move || Ok(vec![stored]));
    let service = service(repo);
    let draft = QuestionDraft::try_new(
        Some("Who is the current president of the United States"),
        Some("answer"),
        Some(CategoryId::new(4)),
        Some(2),
    )
    .expect("valid draft");

    let response = service.create_question(draft).await.expect("created");

    assert_eq!(response.question.id, QuestionId::new(24));
    assert_eq!(response.total_questions, 1);
}

#[rstest]
#[tokio::test]
async fn delete_missing_question_is_unprocessable() {
    let mut repo = MockTriviaRepository::new();
    repo.expect_delete_question()
        .return_once(|id| Err(TriviaRepositoryError::question_not_found(id)));
    repo.expect_list_all_questions().times(0);
    let service = service(repo);

    let error = service
        .delete_question(QuestionId::new(200))
        .await
        .expect_err("missing question");

    assert_eq!(error.code(), ErrorCode::Unprocessable);
}

#[rstest]
#[tokio::test]
async fn delete_reports_remaining_total(nineteen_questions: Vec<Question>) {
    let mut repo = repo_with_questions(nineteen_questions);
    repo.expect_delete_question()
        .with(eq(QuestionId::new(2)))
        .times(1)
        .return_once(|_| Ok(()));
    let service = service(repo);

    let response = service
        .delete_question(QuestionId::new(2))
        .await
        .expect("deleted");

    assert_eq!(response.deleted, QuestionId::new(2));
    assert_eq!(response.total_questions, 19);
}

#[rstest]
#[tokio::test]
async fn quiz_with_unknown_category_is_not_found() {
    let mut repo = MockTriviaRepository::new();
    repo.expect_get_category().return_once(|_| Ok(None));
    repo.expect_list_questions_by_category().times(0);
    let service = service(repo);

    let error = service
        .next_question(QuizRequest {
            filter: CategoryFilter::Only(CategoryId::new(7)),
            asked: HashSet::new(),
        })
        .await
        .expect_err("unknown category");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn quiz_session_draws_each_question_once(nineteen_questions: Vec<Question>) {
    let history: Vec<Question> = nineteen_questions
        .into_iter()
        .filter(|q| q.category() == CategoryId::new(1))
        .collect();
    let expected = history.len();
    let mut repo = MockTriviaRepository::new();
    repo.expect_get_category()
        .returning(|id| Ok(Some(Category::new(id, "Science"))));
    repo.expect_list_questions_by_category()
        .returning(move |_| Ok(history.clone()));
    let service = service(repo);

    let mut asked = HashSet::new();
    loop {
        let draw = service
            .next_question(QuizRequest {
                filter: CategoryFilter::Only(CategoryId::new(1)),
                asked: asked.clone(),
            })
            .await
            .expect("draw succeeds");
        let Some(question) = draw.into_question() else {
            break;
        };
        assert_eq!(question.category(), CategoryId::new(1));
        assert!(asked.insert(question.id()), "question repeated");
    }

    assert_eq!(asked.len(), expected);
}

#[rstest]
#[tokio::test]
async fn quiz_connection_failure_is_service_unavailable() {
    let mut repo = MockTriviaRepository::new();
    repo.expect_list_all_questions()
        .return_once(|| Err(TriviaRepositoryError::connection("store offline")));
    let service = service(repo);

    let error = service
        .next_question(QuizRequest::default())
        .await
        .expect_err("store offline");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
