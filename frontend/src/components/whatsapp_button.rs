use web_sys::MouseEvent;
use yew::prelude::*;

use crate::{browser, contact};

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        browser::open_in_new_tab(&contact::greeting_link());
    });

    html! {
        <>
            <a href={contact::greeting_link()} class="whatsapp-float" onclick={onclick} aria-label="WhatsApp">
                <img src="https://upload.wikimedia.org/wikipedia/commons/6/6b/WhatsApp.svg" alt="WhatsApp" />
            </a>
            <style>
                {r#"
                .whatsapp-float {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: #25D366;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
                    z-index: 60;
                    transition: transform 0.2s ease;
                }
                .whatsapp-float:hover {
                    transform: scale(1.1);
                }
                .whatsapp-float img {
                    width: 32px;
                    height: 32px;
                }
                "#}
            </style>
        </>
    }
}
