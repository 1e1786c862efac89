use yew::prelude::*;

use crate::content::PILLARS;

#[function_component(Methodology)]
pub fn methodology() -> Html {
    html! {
        <section id="metodologia" class="methodology-section">
            <div class="section-header">
                <h2>{"Nuestra Metodología"}</h2>
                <p>{"Entrena en escenarios que imitan el estrés real, con feedback clínico accionable"}</p>
            </div>
            <div class="pillars-grid">
                { for PILLARS.iter().enumerate().map(|(i, pillar)| html! {
                    <div class="pillar" key={pillar.title}>
                        <span class="pillar-number">{format!("{:02}", i + 1)}</span>
                        <h3>{pillar.title}</h3>
                        <p>{pillar.description}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .methodology-section {
                    padding: 5rem 1.5rem;
                    background: var(--background);
                }
                .pillars-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 2rem;
                }
                .pillar {
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.05);
                }
                .pillar-number {
                    font-size: 2rem;
                    font-weight: 800;
                    color: rgba(14, 165, 233, 0.3);
                }
                "#}
            </style>
        </section>
    }
}
