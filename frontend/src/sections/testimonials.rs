use yew::prelude::*;

use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonios" class="testimonials-section">
            <div class="section-header">
                <h2>{"Lo que dicen nuestros alumnos"}</h2>
                <p>{"Historias reales de profesionales que elevaron su práctica clínica"}</p>
            </div>
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().map(|testimonial| html! {
                    <div class="testimonial" key={testimonial.name}>
                        <div class="stars">{testimonial.stars()}</div>
                        <p class="quote">{format!("\"{}\"", testimonial.quote)}</p>
                        <p class="author">{testimonial.name}</p>
                        if let Some(byline) = testimonial.byline() {
                            <p class="byline">{byline}</p>
                        }
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .testimonials-section {
                    padding: 5rem 1.5rem;
                    background: #fff;
                }
                .testimonials-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .testimonial {
                    background: var(--background);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .stars {
                    color: #f59e0b;
                    letter-spacing: 0.2rem;
                    margin-bottom: 1rem;
                }
                .quote {
                    font-style: italic;
                    color: #374151;
                }
                .author {
                    font-weight: 700;
                    margin-bottom: 0;
                }
                .byline {
                    color: #6b7280;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }
                "#}
            </style>
        </section>
    }
}
