use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FAQS;

/// Only one answer is open at a time; clicking the open one closes it.
pub fn faq_toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <div class="section-header">
                <h2>{"Preguntas Frecuentes"}</h2>
                <p>{"Resuelve tus dudas antes de inscribirte"}</p>
            </div>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let open_index = open_index.clone();
                        Callback::from(move |_| open_index.set(faq_toggle(*open_index, index)))
                    };
                    html! {
                        <FaqItem
                            key={index}
                            question={entry.question}
                            answer={entry.answer}
                            is_open={*open_index == Some(index)}
                            on_toggle={on_toggle}
                        />
                    }
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    padding: 5rem 1.5rem;
                    background: var(--background);
                }
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-item {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .faq-item:hover {
                    border-color: rgba(14, 165, 233, 0.5);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: var(--foreground);
                    cursor: pointer;
                }
                .toggle-icon {
                    color: var(--primary);
                    font-size: 1.5rem;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    color: #4b5563;
                    line-height: 1.6;
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 24rem;
                    padding-bottom: 1.25rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_question_closes_the_previous_one() {
        assert_eq!(faq_toggle(None, 2), Some(2));
        assert_eq!(faq_toggle(Some(2), 4), Some(4));
    }

    #[test]
    fn clicking_the_open_question_closes_it() {
        assert_eq!(faq_toggle(Some(3), 3), None);
    }
}
