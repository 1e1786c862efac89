use yew::prelude::*;

use crate::content::GALLERY;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id="galeria" class="gallery-section">
            <div class="section-header">
                <h2>{"Nuestras Capacitaciones"}</h2>
                <p>{"Experiencias reales de aprendizaje práctico con equipamiento profesional"}</p>
            </div>
            <div class="gallery-grid">
                { for GALLERY.iter().map(|image| html! {
                    <div
                        key={image.id}
                        class={classes!("gallery-item", image.wide.then(|| "wide"), image.tall.then(|| "tall"))}
                    >
                        <img src={image.src} alt={image.alt} loading="lazy" />
                        <span class="gallery-category">{image.category}</span>
                    </div>
                }) }
            </div>
            <div class="gallery-cta">
                <p>{"¿Quieres ser parte de nuestra próxima capacitación?"}</p>
                <a href="#calendario" class="gallery-cta-link">{"Ver Cursos Disponibles"}</a>
            </div>
            <style>
                {r#"
                .gallery-section {
                    padding: 5rem 1.5rem;
                    background: #fff;
                }
                .gallery-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    grid-auto-rows: 220px;
                    gap: 1rem;
                }
                .gallery-item {
                    position: relative;
                    border-radius: 12px;
                    overflow: hidden;
                }
                .gallery-item.wide {
                    grid-column: span 2;
                }
                .gallery-item.tall {
                    grid-row: span 2;
                }
                .gallery-item img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .gallery-item:hover img {
                    transform: scale(1.05);
                }
                .gallery-category {
                    position: absolute;
                    left: 1rem;
                    bottom: 1rem;
                    background: rgba(255, 255, 255, 0.9);
                    color: var(--primary);
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .gallery-cta {
                    text-align: center;
                    margin-top: 3rem;
                }
                .gallery-cta-link {
                    display: inline-block;
                    background: var(--primary);
                    color: #fff;
                    padding: 0.9rem 2rem;
                    border-radius: 10px;
                    text-decoration: none;
                    font-weight: 600;
                }
                @media (max-width: 800px) {
                    .gallery-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
