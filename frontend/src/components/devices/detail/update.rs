//! Update function for the device detail view.
//!
//! The attach and detach arms are the interesting part: both claim a chain
//! from the coordinator, run the mutation followed by the mandatory device
//! re-fetch in one spawned task, and report back through `ChainResolved` with
//! the chain's ticket. The coordinator drops any chain that is no longer the
//! newest, so a slow re-fetch can never overwrite a later result.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::sync::coordinator::{
    RelationAttempt, RelationError, RelationOutcome, RelationResolution,
};
use common::sync::{ApiError, RemoteResource};

use crate::api;
use crate::app::Route;
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::DeviceDetailComponent;

pub fn update(
    component: &mut DeviceDetailComponent,
    ctx: &Context<DeviceDetailComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FetchDevice => {
            let device_id = ctx.props().device_id;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::DeviceFetched(api::get_device(device_id).await));
            });
            false
        }
        Msg::DeviceFetched(result) => {
            component.device = RemoteResource::from_fetch(result);
            true
        }
        Msg::FetchChoices => {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ChoicesFetched(api::list_batteries().await));
            });
            false
        }
        Msg::ChoicesFetched(Ok(batteries)) => {
            component.choices = batteries;
            true
        }
        Msg::ChoicesFetched(Err(err)) => {
            component.error = Some(format!("Error al cargar los acumuladores: {}", err));
            true
        }
        Msg::StartEdit => {
            if let RemoteResource::Loaded(device) = &component.device {
                component.name = device.name.clone();
                component.editing = true;
            }
            true
        }
        Msg::CancelEdit => {
            component.editing = false;
            component.error = None;
            true
        }
        Msg::UpdateName(name) => {
            component.name = name;
            true
        }
        Msg::Save => {
            let device_id = ctx.props().device_id;
            let name = component.name.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Saved(api::update_device(device_id, name).await));
            });
            false
        }
        Msg::Saved(Ok(_)) => {
            component.editing = false;
            component.error = None;
            show_toast("Dispositivo actualizado.");
            // The re-fetch confirms the new state.
            ctx.link().send_message(Msg::FetchDevice);
            true
        }
        Msg::Saved(Err(ApiError::NotFound)) => {
            component.editing = false;
            component.device = RemoteResource::NotFound;
            true
        }
        Msg::Saved(Err(err)) => {
            component.error = Some(format!("Error al actualizar el dispositivo: {}", err));
            true
        }
        Msg::Delete => {
            let device_id = ctx.props().device_id;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Deleted(api::delete_device(device_id).await));
            });
            false
        }
        Msg::Deleted(Ok(())) | Msg::Deleted(Err(ApiError::NotFound)) => {
            // Navigate only once the backend confirmed the device is gone.
            show_toast("Dispositivo eliminado.");
            ctx.props().on_navigate.emit(Route::Devices);
            false
        }
        Msg::Deleted(Err(err)) => {
            component.error = Some(format!("Error al eliminar el dispositivo: {}", err));
            true
        }
        Msg::Select(selected) => {
            component.selected = selected;
            true
        }
        Msg::Attach => match component.coordinator.begin_attach(component.selected) {
            Ok(attempt) => {
                component.error = None;
                run_attach_chain(ctx, attempt);
                true
            }
            Err(_) => {
                // SelectionRequired: nothing was sent to the backend.
                component.error =
                    Some("Selecciona un acumulador antes de conectarlo.".to_string());
                true
            }
        },
        Msg::Detach(battery_id) => {
            let attempt = component.coordinator.begin_detach(battery_id);
            component.error = None;
            run_detach_chain(ctx, attempt);
            true
        }
        Msg::ChainResolved(ticket, outcome) => {
            match component.coordinator.resolve(ticket, outcome) {
                // A stale chain; its result is dropped.
                None => false,
                Some(RelationResolution::Completed(device)) => {
                    component.device = RemoteResource::Loaded(device);
                    component.selected = None;
                    component.error = None;
                    show_toast("Acumuladores del dispositivo actualizados.");
                    true
                }
                Some(RelationResolution::Failed(RelationError::AttachFailed(err))) => {
                    component.error =
                        Some(format!("No se pudo completar la operación: {}", err));
                    true
                }
                Some(RelationResolution::Failed(_)) => {
                    // StaleResource: the device disappeared under us.
                    show_toast("El dispositivo ya no existe.");
                    ctx.props().on_navigate.emit(Route::Devices);
                    false
                }
            }
        }
    }
}

/// Runs attach + confirming re-fetch as one chain.
fn run_attach_chain(ctx: &Context<DeviceDetailComponent>, attempt: RelationAttempt) {
    let device_id = ctx.props().device_id;
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = match api::attach_battery(attempt.battery_id, device_id).await {
            Err(err) => RelationOutcome::Rejected(err),
            Ok(()) => refetch(device_id).await,
        };
        link.send_message(Msg::ChainResolved(attempt.ticket, outcome));
    });
}

/// Runs detach + confirming re-fetch as one chain.
fn run_detach_chain(ctx: &Context<DeviceDetailComponent>, attempt: RelationAttempt) {
    let device_id = ctx.props().device_id;
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = match api::detach_battery(device_id, attempt.battery_id).await {
            Err(err) => RelationOutcome::Rejected(err),
            Ok(()) => refetch(device_id).await,
        };
        link.send_message(Msg::ChainResolved(attempt.ticket, outcome));
    });
}

/// The mandatory read-after-write: attach success says nothing about the
/// device's current battery list.
async fn refetch(device_id: i64) -> RelationOutcome {
    match api::get_device(device_id).await {
        Ok(Some(device)) => RelationOutcome::Refetched(device),
        Ok(None) => RelationOutcome::RefetchFailed(ApiError::NotFound),
        Err(err) => RelationOutcome::RefetchFailed(err),
    }
}
