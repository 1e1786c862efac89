use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::browser;

const SCROLLED_THRESHOLD: f64 = 50.0;

const LINKS: &[(&str, &str)] = &[
    ("#cursos", "Cursos"),
    ("#calendario", "Fechas"),
    ("#galeria", "Galería"),
    ("#metodologia", "Metodología"),
    ("#testimonios", "Testimonios"),
    ("#faq", "FAQ"),
    ("#contacto", "Contacto"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let scroll_callback = Closure::<dyn Fn()>::new(move || {
                        is_scrolled.set(browser::scroll_y() > SCROLLED_THRESHOLD);
                    });

                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not register scroll listener");
                    }

                    Box::new(move || {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    })
                } else {
                    Box::new(|| ())
                };

                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens; only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open { "nav-links mobile-menu-open" } else { "nav-links" };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="logo-mark">{"DL"}</span>
                    <span class="logo-text">{"Capacitaciones"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menú">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href="#contacto" class="nav-cta" onclick={close_menu.clone()}>{"Inscríbete"}</a>
                </div>
            </nav>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                    background: transparent;
                }
                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    height: 80px;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    color: var(--foreground);
                    text-decoration: none;
                }
                .logo-mark {
                    background: var(--primary);
                    color: #fff;
                    border-radius: 8px;
                    padding: 0.25rem 0.5rem;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: var(--foreground);
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link:hover {
                    color: var(--primary);
                }
                .nav-cta {
                    background: var(--accent);
                    color: #fff;
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--foreground);
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 80px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #fff;
                        padding: 1.5rem;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
