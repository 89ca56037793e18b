//! Battery detail view: fetch by id, inline rename, delete.
//!
//! The fetch state is the shared `RemoteResource` machine: a missing battery
//! renders a dedicated not-found screen with a way back to the list, while a
//! failed fetch renders the error with a retry. Deletion navigates away only
//! after the backend confirms it.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::battery::Battery;
use common::sync::{ApiError, RemoteResource};

use crate::api;
use crate::app::Route;
use crate::helpers::show_toast;

pub enum Msg {
    Fetch,
    Fetched(Result<Option<Battery>, ApiError>),
    StartEdit,
    CancelEdit,
    UpdateName(String),
    Save,
    Saved(Result<Battery, ApiError>),
    Delete,
    Deleted(Result<(), ApiError>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct BatteryDetailProps {
    pub battery_id: i64,
    pub on_navigate: Callback<Route>,
}

pub struct BatteryDetailComponent {
    battery: RemoteResource<Battery>,
    editing: bool,
    name: String,
    error: Option<String>,
    loaded: bool,
}

impl Component for BatteryDetailComponent {
    type Message = Msg;
    type Properties = BatteryDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BatteryDetailComponent {
            battery: RemoteResource::Loading,
            editing: false,
            name: String::new(),
            error: None,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let battery_id = ctx.props().battery_id;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Fetched(api::get_battery(battery_id).await));
                });
                false
            }
            Msg::Fetched(result) => {
                self.battery = RemoteResource::from_fetch(result);
                true
            }
            Msg::StartEdit => {
                if let RemoteResource::Loaded(battery) = &self.battery {
                    self.name = battery.name.clone();
                    self.editing = true;
                }
                true
            }
            Msg::CancelEdit => {
                self.editing = false;
                self.error = None;
                true
            }
            Msg::UpdateName(name) => {
                self.name = name;
                true
            }
            Msg::Save => {
                let battery_id = ctx.props().battery_id;
                let name = self.name.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Saved(api::update_battery(battery_id, name).await));
                });
                false
            }
            Msg::Saved(Ok(_)) => {
                self.editing = false;
                self.error = None;
                show_toast("Acumulador actualizado.");
                // The re-fetch confirms the new state.
                ctx.link().send_message(Msg::Fetch);
                true
            }
            Msg::Saved(Err(ApiError::NotFound)) => {
                self.editing = false;
                self.battery = RemoteResource::NotFound;
                true
            }
            Msg::Saved(Err(err)) => {
                self.error = Some(format!("Error al actualizar el acumulador: {}", err));
                true
            }
            Msg::Delete => {
                let battery_id = ctx.props().battery_id;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Deleted(api::delete_battery(battery_id).await));
                });
                false
            }
            Msg::Deleted(Ok(())) | Msg::Deleted(Err(ApiError::NotFound)) => {
                show_toast("Acumulador eliminado.");
                ctx.props().on_navigate.emit(Route::Batteries);
                false
            }
            Msg::Deleted(Err(err)) => {
                self.error = Some(format!("Error al eliminar el acumulador: {}", err));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = ctx.props().on_navigate.clone();
        let back = Callback::from(move |_| on_navigate.emit(Route::Batteries));

        match &self.battery {
            RemoteResource::Loading => html! { <p>{"Cargando..."}</p> },
            RemoteResource::NotFound => html! {
                <div>
                    <h1>{"Acumulador no encontrado"}</h1>
                    <button onclick={back}>{"Volver a la lista de acumuladores"}</button>
                </div>
            },
            RemoteResource::Error(message) => html! {
                <div>
                    <h1>{ message }</h1>
                    <button onclick={link.callback(|_| Msg::Fetch)}>{"Reintentar"}</button>
                    <button onclick={back}>{"Volver a la lista de acumuladores"}</button>
                </div>
            },
            RemoteResource::Loaded(battery) => html! {
                <div>
                    <h1>{"Detalles del acumulador"}</h1>
                    {
                        if self.editing {
                            html! {
                                <form onsubmit={link.callback(|e: SubmitEvent| {
                                    e.prevent_default();
                                    Msg::Save
                                })}>
                                    <h3>{"Editar acumulador"}</h3>
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
                                    <button type="submit">{"Actualizar"}</button>
                                    <button type="button" onclick={link.callback(|_| Msg::CancelEdit)}>
                                        {"Cancelar"}
                                    </button>
                                </form>
                            }
                        } else {
                            html! {
                                <div>
                                    <h2>{ &battery.name }</h2>
                                    <button onclick={link.callback(|_| Msg::StartEdit)}>{"Editar"}</button>
                                    <button onclick={link.callback(|_| Msg::Delete)}>{"Eliminar"}</button>
                                </div>
                            }
                        }
                    }
                    {
                        if let Some(error) = &self.error {
                            html! { <p class="error">{ error }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Fetch);
        }
    }
}
