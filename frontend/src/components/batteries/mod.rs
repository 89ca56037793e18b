//! Battery list view with inline creation. Same discipline as the device
//! list: fetch on first render, re-fetch after a successful create, keep the
//! form open on failure.

pub mod detail;

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::battery::Battery;
use common::sync::ApiError;

use crate::api;
use crate::app::Route;
use crate::helpers::show_toast;

pub enum Msg {
    Fetch,
    Fetched(Result<Vec<Battery>, ApiError>),
    OpenForm,
    CloseForm,
    UpdateName(String),
    Create,
    Created(Result<Battery, ApiError>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct BatteriesProps {
    pub on_navigate: Callback<Route>,
}

pub struct BatteriesComponent {
    batteries: Vec<Battery>,
    creating: bool,
    name: String,
    error: Option<String>,
    loaded: bool,
}

impl Component for BatteriesComponent {
    type Message = Msg;
    type Properties = BatteriesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BatteriesComponent {
            batteries: Vec::new(),
            creating: false,
            name: String::new(),
            error: None,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Fetched(api::list_batteries().await));
                });
                false
            }
            Msg::Fetched(Ok(batteries)) => {
                self.batteries = batteries;
                true
            }
            Msg::Fetched(Err(err)) => {
                self.error = Some(format!("Error al cargar los acumuladores: {}", err));
                true
            }
            Msg::OpenForm => {
                self.creating = true;
                true
            }
            Msg::CloseForm => {
                self.creating = false;
                self.name.clear();
                self.error = None;
                true
            }
            Msg::UpdateName(name) => {
                self.name = name;
                true
            }
            Msg::Create => {
                let name = self.name.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Created(api::create_battery(name).await));
                });
                false
            }
            Msg::Created(Ok(_)) => {
                self.creating = false;
                self.name.clear();
                self.error = None;
                show_toast("Acumulador creado.");
                ctx.link().send_message(Msg::Fetch);
                true
            }
            Msg::Created(Err(err)) => {
                self.error = Some(format!("Error al crear el acumulador: {}", err));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = ctx.props().on_navigate.clone();

        html! {
            <div>
                <h1>{"Acumuladores"}</h1>
                <button onclick={link.callback(|_| Msg::OpenForm)}>
                    {"Crear nuevo acumulador"}
                </button>
                {
                    if self.creating {
                        html! {
                            <form onsubmit={link.callback(|e: SubmitEvent| {
                                e.prevent_default();
                                Msg::Create
                            })}>
                                <h3>{"Crear nuevo acumulador"}</h3>
                                <label>
                                    {"Nombre:"}
                                    <input
                                        type="text"
                                        value={self.name.clone()}
                                        oninput={link.callback(|e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            Msg::UpdateName(input.value())
                                        })}
                                    />
                                </label>
                                <button type="submit">{"Crear"}</button>
                                <button type="button" onclick={link.callback(|_| Msg::CloseForm)}>
                                    {"Cancelar"}
                                </button>
                            </form>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(error) = &self.error {
                        html! { <p class="error">{ error }</p> }
                    } else {
                        html! {}
                    }
                }
                <ul>
                    { for self.batteries.iter().map(|battery| {
                        let on_navigate = on_navigate.clone();
                        let id = battery.id;
                        html! {
                            <li key={battery.id}>
                                <a onclick={Callback::from(move |_| on_navigate.emit(Route::Battery(id)))}>
                                    { &battery.name }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Fetch);
        }
    }
}
