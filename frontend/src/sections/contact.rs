use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{self, ContactRequest, Subject};
use crate::{browser, config};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FormStatus {
    Idle,
    Submitted,
}

#[function_component(Contact)]
pub fn contact_section() -> Html {
    let form = use_state(ContactRequest::default);
    let status = use_state(|| FormStatus::Idle);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactRequest {
                name: contact::capitalize_words(&input.value()),
                ..(*form).clone()
            });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactRequest {
                email: contact::normalize_email(&input.value()),
                ..(*form).clone()
            });
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactRequest {
                phone: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_phone_focus = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            if let Some(phone) = contact::prefill_phone(&form.phone) {
                form.set(ContactRequest { phone, ..(*form).clone() });
            }
        })
    };

    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ContactRequest {
                subject: Subject::from_key_or_other(&select.value()),
                ..(*form).clone()
            });
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactRequest {
                message: textarea.value(),
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let link = form.whatsapp_link();
            log::debug!("Contact form submitted with subject {}", form.subject.key());
            browser::open_in_new_tab(&link);
            status.set(FormStatus::Submitted);

            let form_setter = form.setter();
            let status_setter = status.setter();
            Timeout::new(config::RESET_DELAY_MS, move || {
                status_setter.set(FormStatus::Idle);
                form_setter.set(ContactRequest::default());
            })
            .forget();
        })
    };

    let submitted = *status == FormStatus::Submitted;

    html! {
        <section id="contacto" class="contact-section">
            <div class="section-header">
                <h2>{"Contáctanos"}</h2>
                <p>{"Estamos aquí para responder tus preguntas"}</p>
            </div>

            <div class="contact-card">
                <h3>{"Envíanos un mensaje"}</h3>
                <form class="contact-form" onsubmit={onsubmit}>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="contact-name">{"Nombre completo *"}</label>
                            <input
                                id="contact-name"
                                type="text"
                                required={true}
                                placeholder="Juan Pérez"
                                value={form.name.clone()}
                                oninput={on_name}
                            />
                        </div>
                        <div class="form-field">
                            <label for="contact-email">{"Email"}</label>
                            <input
                                id="contact-email"
                                type="email"
                                placeholder="juan@ejemplo.cl"
                                value={form.email.clone()}
                                oninput={on_email}
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label for="contact-phone">{"Teléfono"}</label>
                            <input
                                id="contact-phone"
                                type="tel"
                                placeholder="+56 9 1234 5678"
                                value={form.phone.clone()}
                                oninput={on_phone}
                                onfocus={on_phone_focus}
                            />
                        </div>
                        <div class="form-field">
                            <label for="contact-subject">{"Asunto"}</label>
                            <select id="contact-subject" onchange={on_subject}>
                                { for Subject::ALL.into_iter().map(|subject| html! {
                                    <option
                                        key={subject.key()}
                                        value={subject.key()}
                                        selected={form.subject == subject}
                                    >
                                        {subject.label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="form-field">
                        <label for="contact-message">{"Mensaje *"}</label>
                        <textarea
                            id="contact-message"
                            rows="5"
                            required={true}
                            placeholder="Cuéntanos en qué podemos ayudarte..."
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                    </div>

                    <button type="submit" class="contact-submit" disabled={submitted}>
                        { if submitted { "Redirigiendo a WhatsApp..." } else { "Enviar" } }
                    </button>
                </form>
            </div>
            <style>
                {r#"
                .contact-section {
                    padding: 5rem 1.5rem;
                    background: #fff;
                }
                .contact-card {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 16px;
                    background: var(--background);
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
                }
                .contact-card h3 {
                    margin-bottom: 1.5rem;
                    color: var(--foreground);
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }
                .form-field label {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #374151;
                    margin-bottom: 0.4rem;
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                    font-family: inherit;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: var(--primary);
                }
                .contact-submit {
                    width: 100%;
                    padding: 1rem;
                    background: var(--secondary);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    font-size: 1.1rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .contact-submit:disabled {
                    opacity: 0.7;
                    cursor: default;
                }
                @media (max-width: 700px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
