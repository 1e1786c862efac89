use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <span class="footer-brand">{"Centro de Capacitación"}</span>
                    <p>{"Formando profesionales de la salud con capacitaciones certificadas"}</p>
                </div>
                <div>
                    <h3>{"Enlaces rápidos"}</h3>
                    <ul class="footer-links">
                        <li><a href="#cursos">{"Cursos"}</a></li>
                        <li><a href="#galeria">{"Galería"}</a></li>
                        <li><a href="#metodologia">{"Metodología"}</a></li>
                        <li><a href="#testimonios">{"Testimonios"}</a></li>
                        <li><a href="#faq">{"FAQ"}</a></li>
                        <li><a href="#contacto">{"Contacto"}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Síguenos"}</h3>
                    <a href="https://instagram.com/" target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                        {"Instagram"}
                    </a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("{} DL Capacitaciones. Todos los derechos reservados.", current_year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: var(--foreground);
                    color: #fff;
                    padding: 3rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .footer-brand {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .footer-links {
                    list-style: none;
                    padding: 0;
                }
                .site-footer a {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 0 auto;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 1.5rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                "#}
            </style>
        </footer>
    }
}
