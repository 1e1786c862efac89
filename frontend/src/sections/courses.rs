use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{CourseCard, COURSES};
use crate::{browser, contact};

#[derive(Properties, PartialEq)]
struct CourseCardProps {
    index: usize,
}

#[function_component(CourseCardView)]
fn course_card_view(props: &CourseCardProps) -> Html {
    let course: &'static CourseCard = &COURSES[props.index];

    let ask_about_course = Callback::from(move |_: MouseEvent| {
        log::debug!("Quick inquiry for {}", course.id);
        browser::open_in_new_tab(&contact::course_inquiry_link(course.name));
    });

    html! {
        <div class="course-card">
            <h3>{course.name}</h3>
            <ul class="course-objectives">
                { for course.objectives.iter().map(|objective| html! { <li>{*objective}</li> }) }
            </ul>
            <div class="course-meta">
                <span>{course.duration}</span>
                <span class="course-modality">{course.modality}</span>
            </div>
            <button class="course-cta" onclick={ask_about_course}>{"Saber más"}</button>
        </div>
    }
}

#[function_component(CoursesGrid)]
pub fn courses_grid() -> Html {
    html! {
        <section id="cursos" class="courses-section">
            <div class="section-header">
                <h2>{"Nuestros Cursos"}</h2>
                <p>{"Aprende protocolos validados y prácticas simuladas que transfieren a la realidad clínica"}</p>
            </div>
            <div class="courses-grid">
                { for (0..COURSES.len()).map(|index| html! {
                    <CourseCardView key={COURSES[index].id} index={index} />
                }) }
            </div>
            <style>
                {r#"
                .courses-section {
                    padding: 5rem 1.5rem;
                    background: var(--background);
                }
                .courses-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .course-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.06);
                    display: flex;
                    flex-direction: column;
                    transition: transform 0.3s ease;
                }
                .course-card:hover {
                    transform: translateY(-6px);
                }
                .course-objectives {
                    flex-grow: 1;
                    color: #4b5563;
                    padding-left: 1.2rem;
                }
                .course-meta {
                    display: flex;
                    justify-content: space-between;
                    color: #6b7280;
                    font-size: 0.875rem;
                    border-top: 1px solid #f3f4f6;
                    padding-top: 1rem;
                    margin-bottom: 1rem;
                }
                .course-modality {
                    color: var(--secondary);
                    font-weight: 500;
                }
                .course-cta {
                    background: var(--primary);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.8rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}
