use yew::prelude::*;

use crate::components::{footer::Footer, header::Header, whatsapp_button::WhatsAppButton};
use crate::sections::{
    calendar::Calendar, contact::Contact, courses::CoursesGrid, faq::Faq, gallery::Gallery, hero::Hero,
    instructors::Instructors, methodology::Methodology, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <Header />
            <main>
                <Hero />
                <CoursesGrid />
                <Calendar />
                <Gallery />
                <Methodology />
                <Testimonials />
                <Instructors />
                <Faq />
                <Contact />
            </main>
            <Footer />
            <WhatsAppButton />
        </div>
    }
}
