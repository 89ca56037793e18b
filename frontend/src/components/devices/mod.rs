//! Device list view with inline creation.
//!
//! The list is fetched once on first render and re-fetched after every
//! successful create, so what is displayed always equals a fresh server read.
//! New items are never spliced in locally. A failed create keeps the form
//! open with the entered name so the user can retry.

pub mod detail;

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::device::Device;
use common::sync::ApiError;

use crate::api;
use crate::app::Route;
use crate::helpers::show_toast;

pub enum Msg {
    Fetch,
    Fetched(Result<Vec<Device>, ApiError>),
    OpenForm,
    CloseForm,
    UpdateName(String),
    Create,
    Created(Result<Device, ApiError>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct DevicesProps {
    pub on_navigate: Callback<Route>,
}

pub struct DevicesComponent {
    devices: Vec<Device>,
    creating: bool,
    name: String,
    error: Option<String>,
    loaded: bool,
}

impl Component for DevicesComponent {
    type Message = Msg;
    type Properties = DevicesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DevicesComponent {
            devices: Vec::new(),
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
                    link.send_message(Msg::Fetched(api::list_devices().await));
                });
                false
            }
            Msg::Fetched(Ok(devices)) => {
                self.devices = devices;
                true
            }
            Msg::Fetched(Err(err)) => {
                self.error = Some(format!("Error al cargar los dispositivos: {}", err));
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
                    link.send_message(Msg::Created(api::create_device(name).await));
                });
                false
            }
            Msg::Created(Ok(_)) => {
                self.creating = false;
                self.name.clear();
                self.error = None;
                show_toast("Dispositivo creado.");
                ctx.link().send_message(Msg::Fetch);
                true
            }
            Msg::Created(Err(err)) => {
                // The form stays open with the entered name for a retry.
                self.error = Some(format!("Error al crear el dispositivo: {}", err));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = ctx.props().on_navigate.clone();

        html! {
            <div>
                <h1>{"Dispositivos"}</h1>
                <button onclick={link.callback(|_| Msg::OpenForm)}>
                    {"Crear nuevo dispositivo"}
                </button>
                {
                    if self.creating {
                        html! {
                            <form onsubmit={link.callback(|e: SubmitEvent| {
                                e.prevent_default();
                                Msg::Create
                            })}>
                                <h3>{"Crear nuevo dispositivo"}</h3>
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
                    { for self.devices.iter().map(|device| {
                        let on_navigate = on_navigate.clone();
                        let id = device.id;
                        html! {
                            <li key={device.id}>
                                <a onclick={Callback::from(move |_| on_navigate.emit(Route::Device(id)))}>
                                    { &device.name }
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
