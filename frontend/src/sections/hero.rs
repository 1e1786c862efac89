use web_sys::MouseEvent;
use yew::prelude::*;

use crate::{browser, contact};

#[function_component(Hero)]
pub fn hero() -> Html {
    let request_quote = Callback::from(|_: MouseEvent| {
        browser::open_in_new_tab(&contact::enterprise_quote_link());
    });

    html! {
        <section class="hero" id="inicio">
            <div class="hero-content">
                <div class="hero-badges">
                    <span class="hero-badge">{"Certificación oficial"}</span>
                    <span class="hero-badge">{"Modalidad presencial y mixta"}</span>
                    <span class="hero-badge">{"+5,000 profesionales formados"}</span>
                </div>
                <h1>{"Capacitaciones en Soporte Vital y Emergencias"}</h1>
                <p class="hero-subtitle">
                    {"Cursos certificados, instructores clínicos, metodologías hands-on. Entrena habilidades críticas. Responde mejor."}
                </p>
                <div class="hero-ctas">
                    <a href="#cursos" class="hero-cta primary">{"Ver cursos"}</a>
                    <button class="hero-cta secondary" onclick={request_quote}>
                        {"Cotizar para empresas"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 1.5rem 4rem;
                    background: linear-gradient(135deg, rgba(14, 165, 233, 0.12), rgba(255, 255, 255, 1) 60%);
                    text-align: center;
                }
                .hero-content {
                    max-width: 900px;
                }
                .hero-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .hero-badge {
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    background: rgba(14, 165, 233, 0.1);
                    color: var(--primary);
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                    color: var(--foreground);
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2.5rem;
                }
                .hero-ctas {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .hero-cta {
                    padding: 1rem 2rem;
                    border-radius: 10px;
                    font-weight: 700;
                    font-size: 1.1rem;
                    cursor: pointer;
                    text-decoration: none;
                    border: 2px solid var(--primary);
                }
                .hero-cta.primary {
                    background: var(--primary);
                    color: #fff;
                }
                .hero-cta.secondary {
                    background: transparent;
                    color: var(--primary);
                }
                @media (max-width: 700px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
