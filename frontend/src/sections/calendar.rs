use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::catalog::{Catalog, CourseOffering, DateFilter, Selection};
use crate::{browser, config, contact};

#[derive(Properties, PartialEq)]
struct FacetSelectProps {
    label: &'static str,
    all_label: &'static str,
    options: Vec<String>,
    selected: Selection,
    on_change: Callback<Selection>,
}

#[function_component(FacetSelect)]
fn facet_select(props: &FacetSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(Selection::from_value(&select.value()));
        })
    };

    html! {
        <div class="facet-select">
            <label>{props.label}</label>
            <select onchange={onchange}>
                <option value={config::ALL} selected={props.selected == Selection::All}>{props.all_label}</option>
                { for props.options.iter().map(|option| html! {
                    <option
                        value={option.clone()}
                        selected={props.selected.value() == option.as_str()}
                    >
                        {option}
                    </option>
                }) }
            </select>
        </div>
    }
}

fn offering_card(offering: &CourseOffering) -> Html {
    let low = offering.is_low_availability();
    let course_name = offering.course_name.clone();
    let enroll = Callback::from(move |_: MouseEvent| {
        browser::open_in_new_tab(&contact::course_inquiry_link(&course_name));
    });

    html! {
        <div class="date-card" key={offering.id.clone()}>
            <div class="date-card-header">
                <div>
                    <h3>{&offering.course_name}</h3>
                    <div class="date-card-tags">
                        <span class="tag modality">{&offering.modality}</span>
                        if low {
                            <span class="tag low-slots">{"Últimos cupos"}</span>
                        }
                    </div>
                </div>
                <p class="date-card-price">{&offering.price}</p>
            </div>

            <ul class="date-card-details">
                <li>{&offering.date}</li>
                <li>{&offering.time}</li>
                <li>{&offering.location}</li>
            </ul>

            <div class="slots">
                <div class="slots-label">
                    <span>{"Cupos disponibles"}</span>
                    <strong>{format!("{} de {}", offering.available_slots, offering.total_slots)}</strong>
                </div>
                <div class="slots-track">
                    <div
                        class={classes!("slots-fill", if low { "low" } else { "" })}
                        style={format!("width: {}%;", offering.slots_percentage())}
                    />
                </div>
            </div>

            <div class="date-card-perks">
                <span>{"Certificado al finalizar"}</span>
                <span>{"Material descargable"}</span>
            </div>

            <div class="date-card-actions">
                <button class="enroll" onclick={enroll}>{"Inscribirme"}</button>
                <a class="more-info" href="#contacto">{"Más info"}</a>
            </div>
        </div>
    }
}

#[function_component(Calendar)]
pub fn calendar() -> Html {
    let catalog = use_memo(
        |_| match Catalog::bundled() {
            Ok(catalog) => {
                log::debug!("Loaded {} course dates", catalog.offerings().len());
                Some(catalog)
            }
            Err(e) => {
                log::error!("Course catalog unavailable: {}", e);
                None
            }
        },
        (),
    );
    let filter = use_state(DateFilter::default);

    let set_course = {
        let filter = filter.clone();
        Callback::from(move |course: Selection| {
            log::debug!("Course filter: {}", course.value());
            filter.set(DateFilter { course, ..(*filter).clone() });
        })
    };
    let set_city = {
        let filter = filter.clone();
        Callback::from(move |city: Selection| {
            log::debug!("City filter: {}", city.value());
            filter.set(DateFilter { city, ..(*filter).clone() });
        })
    };
    let set_modality = {
        let filter = filter.clone();
        Callback::from(move |modality: Selection| {
            log::debug!("Modality filter: {}", modality.value());
            filter.set(DateFilter { modality, ..(*filter).clone() });
        })
    };

    let (filtered, facets) = match &*catalog {
        Some(catalog) => {
            let facets = catalog.facets();
            let owned = |values: Vec<&str>| values.into_iter().map(String::from).collect::<Vec<_>>();
            (
                catalog.filter(&filter),
                (owned(facets.courses), owned(facets.cities), owned(facets.modalities)),
            )
        }
        None => (Vec::new(), (Vec::new(), Vec::new(), Vec::new())),
    };
    let (courses, cities, modalities) = facets;

    html! {
        <section id="calendario" class="calendar-section">
            <div class="section-header">
                <h2>{"Próximas Fechas"}</h2>
                <p>{"Encuentra el curso que necesitas y reserva tu cupo"}</p>
            </div>

            <div class="calendar-filters">
                <FacetSelect
                    label="Curso"
                    all_label="Todos los cursos"
                    options={courses}
                    selected={filter.course.clone()}
                    on_change={set_course}
                />
                <FacetSelect
                    label="Ciudad"
                    all_label="Todas las ciudades"
                    options={cities}
                    selected={filter.city.clone()}
                    on_change={set_city}
                />
                <FacetSelect
                    label="Modalidad"
                    all_label="Todas las modalidades"
                    options={modalities}
                    selected={filter.modality.clone()}
                    on_change={set_modality}
                />
            </div>

            <div class="dates-grid">
                if filtered.is_empty() {
                    <div class="dates-empty">
                        <p>{"No hay fechas disponibles con los filtros seleccionados"}</p>
                    </div>
                } else {
                    { for filtered.into_iter().map(offering_card) }
                }
            </div>
            <style>
                {r#"
                .calendar-section {
                    padding: 5rem 1.5rem;
                    background: #fff;
                }
                .calendar-filters {
                    position: sticky;
                    top: 80px;
                    z-index: 40;
                    max-width: 1200px;
                    margin: 0 auto 2rem;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.95);
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                }
                .facet-select label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }
                .facet-select select {
                    width: 100%;
                    padding: 0.6rem 1rem;
                    border-radius: 8px;
                    border: 1px solid #d1d5db;
                }
                .dates-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(420px, 1fr));
                    gap: 1.5rem;
                }
                .dates-empty {
                    grid-column: 1 / -1;
                    text-align: center;
                    padding: 3rem 0;
                    color: #6b7280;
                    font-size: 1.1rem;
                }
                .date-card {
                    background: var(--background);
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .date-card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                }
                .date-card-price {
                    font-size: 1.75rem;
                    font-weight: 700;
                    color: var(--primary);
                }
                .tag {
                    display: inline-block;
                    padding: 0.2rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 500;
                    margin-right: 0.5rem;
                }
                .tag.modality {
                    background: rgba(14, 165, 233, 0.1);
                    color: var(--primary);
                }
                .tag.low-slots {
                    background: rgba(239, 68, 68, 0.1);
                    color: var(--accent);
                }
                .date-card-details {
                    list-style: none;
                    padding: 0;
                    color: #4b5563;
                }
                .slots-label {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }
                .slots-track {
                    height: 8px;
                    border-radius: 999px;
                    background: #e5e7eb;
                    overflow: hidden;
                }
                .slots-fill {
                    height: 100%;
                    border-radius: 999px;
                    background: var(--secondary);
                    transition: width 0.5s ease;
                }
                .slots-fill.low {
                    background: var(--accent);
                }
                .date-card-perks {
                    display: flex;
                    gap: 1rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin: 1rem 0;
                    padding-bottom: 1rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                .date-card-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .date-card-actions .enroll {
                    flex: 1;
                    padding: 0.8rem;
                    background: var(--accent);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .date-card-actions .more-info {
                    padding: 0.8rem 1.5rem;
                    border: 2px solid var(--primary);
                    color: var(--primary);
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                }
                @media (max-width: 700px) {
                    .dates-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
