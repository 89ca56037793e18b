//! View rendering for the device detail view: header with rename/delete, the
//! attached battery list with per-battery detach, and the attach form. The
//! attach and detach controls are disabled while a chain is outstanding.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::device::Device;
use common::sync::RemoteResource;

use crate::app::Route;

use super::messages::Msg;
use super::state::DeviceDetailComponent;

pub fn view(component: &DeviceDetailComponent, ctx: &Context<DeviceDetailComponent>) -> Html {
    let link = ctx.link();
    let on_navigate = ctx.props().on_navigate.clone();
    let back = Callback::from(move |_| on_navigate.emit(Route::Devices));

    match &component.device {
        RemoteResource::Loading => html! { <p>{"Cargando..."}</p> },
        RemoteResource::NotFound => html! {
            <div>
                <h1>{"Dispositivo no encontrado"}</h1>
                <button onclick={back}>{"Volver a la lista de dispositivos"}</button>
            </div>
        },
        RemoteResource::Error(message) => html! {
            <div>
                <h1>{ message }</h1>
                <button onclick={link.callback(|_| Msg::FetchDevice)}>{"Reintentar"}</button>
                <button onclick={back}>{"Volver a la lista de dispositivos"}</button>
            </div>
        },
        RemoteResource::Loaded(device) => html! {
            <div>
                <h1>{"Detalles del dispositivo"}</h1>
                { build_header(component, link, device) }
                {
                    if let Some(error) = &component.error {
                        html! { <p class="error">{ error }</p> }
                    } else {
                        html! {}
                    }
                }
                { build_batteries(component, link, device) }
                { build_attach_form(component, link) }
            </div>
        },
    }
}

fn build_header(
    component: &DeviceDetailComponent,
    link: &Scope<DeviceDetailComponent>,
    device: &Device,
) -> Html {
    if component.editing {
        html! {
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Save
            })}>
                <h3>{"Editar dispositivo"}</h3>
                <label>
                    {"Nombre:"}
                    <input
                        type="text"
                        value={component.name.clone()}
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
                <h2>{ &device.name }</h2>
                <button onclick={link.callback(|_| Msg::StartEdit)}>{"Editar"}</button>
                <button onclick={link.callback(|_| Msg::Delete)}>{"Eliminar"}</button>
            </div>
        }
    }
}

fn build_batteries(
    component: &DeviceDetailComponent,
    link: &Scope<DeviceDetailComponent>,
    device: &Device,
) -> Html {
    let busy = component.coordinator.in_flight();
    html! {
        <div>
            <h3>{"Acumuladores conectados"}</h3>
            {
                if device.batteries.is_empty() {
                    html! { <p>{"No hay acumuladores conectados"}</p> }
                } else {
                    html! {
                        <ul>
                            { for device.batteries.iter().map(|battery| {
                                let id = battery.id;
                                html! {
                                    <li key={battery.id}>
                                        { &battery.name }
                                        <button
                                            disabled={busy}
                                            onclick={link.callback(move |_| Msg::Detach(id))}
                                        >
                                            {"Desconectar"}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

fn build_attach_form(
    component: &DeviceDetailComponent,
    link: &Scope<DeviceDetailComponent>,
) -> Html {
    let busy = component.coordinator.in_flight();
    let selected = component
        .selected
        .map(|id| id.to_string())
        .unwrap_or_default();

    html! {
        <div>
            <h3>{"Conectar acumulador"}</h3>
            <select
                value={selected}
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::Select(select.value().parse::<i64>().ok())
                })}
            >
                <option value="">{"Selecciona un acumulador"}</option>
                { for component.choices.iter().map(|battery| {
                    html! {
                        <option key={battery.id} value={battery.id.to_string()}>
                            { &battery.name }
                        </option>
                    }
                }) }
            </select>
            <button disabled={busy} onclick={link.callback(|_| Msg::Attach)}>
                {"Conectar acumulador"}
            </button>
        </div>
    }
}
