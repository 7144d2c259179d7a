use super::lesson::Lesson;
use crate::flow::{FlowAction, PASS_THRESHOLD, QUIZ_LENGTH};
use crate::games::Question;
use leptos::*;

#[component]
fn QuestionCard(lesson: Lesson, number: usize, question: Question) -> impl IntoView {
    let selection = move || lesson.state.with(|s| s.quiz().selection(number));
    let submitted = move || lesson.state.with(|s| s.outcome().is_some());

    let options = question
        .options
        .into_iter()
        .enumerate()
        .map(|(option, text)| {
            let class = move || {
                let picked = selection() == Some(option);
                match (submitted(), picked, option == question.answer) {
                    (true, _, true) => "option correct",
                    (true, true, false) => "option wrong",
                    (_, true, _) => "option selected",
                    _ => "option",
                }
            };
            view! {
                <button
                    class=class
                    disabled=move || selection().is_some()
                    on:click=move |_| lesson.apply(FlowAction::Answer { question: number, option })
                >
                    {text}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="question-card">
            <p class="question">
                <span class="question-number">{format!("{}. ", number + 1)}</span>
                {question.prompt}
            </p>
            <div class="options">{options}</div>
        </div>
    }
}

/// The ten-question test. Answers lock on selection; submitting scores the
/// sheet, and the footer's continue button then routes to mastery or back to
/// review.
#[component]
pub fn QuizPanel(lesson: Lesson) -> impl IntoView {
    let questions = lesson.with_content(|c| c.questions.clone());
    let answered = move || lesson.state.with(|s| s.quiz().answered_count());
    let outcome = create_memo(move |_| lesson.state.with(|s| s.outcome()));

    let cards = questions
        .into_iter()
        .take(QUIZ_LENGTH)
        .enumerate()
        .map(|(number, question)| view! { <QuestionCard lesson=lesson number=number question=question/> })
        .collect_view();

    view! {
        <section class="quiz">
            <h2>"Test your understanding"</h2>
            <p class="progress-note">
                {move || format!("{} of {QUIZ_LENGTH} answered · {PASS_THRESHOLD} to pass", answered())}
            </p>
            {cards}
            {move || match outcome.get() {
                None => view! {
                    <button
                        class="primary"
                        disabled=move || answered() < QUIZ_LENGTH
                        on:click=move |_| lesson.navigate(FlowAction::SubmitQuiz)
                    >
                        "Submit answers"
                    </button>
                }
                .into_view(),
                Some(result) => view! {
                    <div class="quiz-result" class:passed=result.passed>
                        <p class="score">{format!("{} / {}", result.score, result.total)}</p>
                        <p>
                            {if result.passed {
                                "Passed! Continue to claim your mastery."
                            } else {
                                "Not quite. Continue to review the ideas and try again."
                            }}
                        </p>
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}
