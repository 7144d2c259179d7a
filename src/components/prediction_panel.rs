use super::lesson::Lesson;
use crate::flow::{FlowAction, PredictionChoice};
use crate::games::PredictionPrompt;
use leptos::*;

fn prompt_for(lesson: Lesson, twist: bool) -> PredictionPrompt {
    lesson.with_content(|c| {
        if twist {
            c.twist_predict.clone()
        } else {
            c.predict.clone()
        }
    })
}

fn choice_for(lesson: Lesson, twist: bool) -> Option<PredictionChoice> {
    lesson.state.with(|s| {
        if twist {
            s.twist_prediction()
        } else {
            s.prediction()
        }
    })
}

/// Lettered options for the predict and twist-predict phases. A choice is
/// locked in once made.
#[component]
pub fn PredictionPanel(lesson: Lesson, twist: bool) -> impl IntoView {
    let prompt = prompt_for(lesson, twist);
    let chosen = create_memo(move |_| choice_for(lesson, twist));

    let options = prompt
        .options
        .into_iter()
        .zip(PredictionChoice::ALL)
        .map(|(text, choice)| {
            let pick = move |_: ev::MouseEvent| {
                let action = if twist {
                    FlowAction::TwistPredict(choice)
                } else {
                    FlowAction::Predict(choice)
                };
                lesson.apply(action);
            };
            view! {
                <button
                    class="option"
                    class:selected=move || chosen.get() == Some(choice)
                    disabled=move || chosen.get().is_some()
                    on:click=pick
                >
                    <span class="option-letter">{choice.letter().to_string()}</span>
                    <span class="option-text">{text}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="prediction">
            <h2>{if twist { "A twist" } else { "Make a prediction" }}</h2>
            <p class="question">{prompt.question}</p>
            <div class="options">{options}</div>
            <Show when=move || chosen.get().is_some()>
                <p class="locked-in">"Prediction locked in. Let's test it."</p>
            </Show>
        </section>
    }
}

/// Review copy plus how the learner's prediction compared with the answer.
#[component]
pub fn ReviewPanel(lesson: Lesson, twist: bool) -> impl IntoView {
    let prompt = prompt_for(lesson, twist);
    let summary = lesson.with_content(|c| {
        if twist {
            c.twist_review.clone()
        } else {
            c.review.clone()
        }
    });
    let chosen = lesson.state.with_untracked(|s| {
        if twist {
            s.twist_prediction()
        } else {
            s.prediction()
        }
    });
    let correct = PredictionChoice::from_index(prompt.answer);
    let answer_text = prompt.options.get(prompt.answer).cloned().unwrap_or_default();

    let verdict = match chosen {
        Some(choice) if Some(choice) == correct => "You predicted correctly.",
        Some(_) => "Your prediction was off, and that's how intuition gets built.",
        None => "You skipped the prediction.",
    };

    view! {
        <section class="review">
            <h2>{if twist { "What the twist showed" } else { "What happened" }}</h2>
            <p class="verdict">{verdict}</p>
            <p class="answer">
                "Answer: "
                <strong>
                    {correct.map(|c| format!("{}. ", c.letter())).unwrap_or_default()}
                    {answer_text}
                </strong>
            </p>
            <p class="explanation">{prompt.explanation}</p>
            <p>{summary}</p>
        </section>
    }
}
