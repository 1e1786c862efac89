use yew::prelude::*;

use crate::content::INSTRUCTORS;

#[function_component(Instructors)]
pub fn instructors() -> Html {
    html! {
        <section id="instructores" class="instructors-section">
            <div class="section-header">
                <h2>{"Nuestros Instructores"}</h2>
                <p>{"Profesionales certificados con amplia experiencia en capacitación y atención de emergencias"}</p>
            </div>
            <div class="instructors-grid">
                { for INSTRUCTORS.iter().map(|instructor| html! {
                    <div class="instructor" key={instructor.id}>
                        <div class="instructor-photo">
                            <img src={instructor.image} alt={instructor.name} />
                            <span class="instructor-badge">{"Instructor Certificado"}</span>
                        </div>
                        <h3>{instructor.name}</h3>
                        <p class="instructor-title">{instructor.title}</p>
                        <h4>{"Credenciales"}</h4>
                        <ul class="credentials">
                            { for instructor.credentials.iter().map(|credential| html! { <li>{*credential}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .instructors-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, var(--background), #fff 50%, rgba(14, 165, 233, 0.05));
                }
                .instructors-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
                    gap: 3rem;
                }
                .instructor {
                    background: #fff;
                    border-radius: 24px;
                    padding: 2rem;
                    text-align: center;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.06);
                }
                .instructor-photo {
                    position: relative;
                    width: 16rem;
                    height: 16rem;
                    margin: 0 auto 2rem;
                }
                .instructor-photo img {
                    width: 100%;
                    height: 100%;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .instructor-badge {
                    position: absolute;
                    bottom: -0.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: var(--primary);
                    color: #fff;
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    white-space: nowrap;
                }
                .instructor-title {
                    color: var(--primary);
                    font-weight: 600;
                }
                .credentials {
                    text-align: left;
                    color: #374151;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </section>
    }
}
