use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"La página que buscas no existe."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Volver al inicio"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: var(--foreground);
                }
                .not-found h1 {
                    font-size: 4rem;
                    color: var(--primary);
                }
                .not-found-link {
                    padding: 0.8rem 1.5rem;
                    border-radius: 8px;
                    background: var(--primary);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
