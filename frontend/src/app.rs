use yew::{html, Component, Context, Html};

use crate::components::batteries::detail::BatteryDetailComponent;
use crate::components::batteries::BatteriesComponent;
use crate::components::devices::detail::DeviceDetailComponent;
use crate::components::devices::DevicesComponent;

/// The views of the console. There is no router; the active view is plain
/// component state, and only the resource id crosses a view boundary. Each
/// view owns its own fetched data and re-fetches on mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    Home,
    Devices,
    Device(i64),
    Batteries,
    Battery(i64),
}

pub enum Msg {
    Navigate(Route),
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App { route: Route::Home }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Navigate(route) = msg;
        self.route = route;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let navigate = link.callback(Msg::Navigate);

        let body = match self.route {
            Route::Home => html! {
                <div>
                    <h1>{"Consola de flota"}</h1>
                    <div class="button-container">
                        <button onclick={link.callback(|_| Msg::Navigate(Route::Devices))}>
                            {"Dispositivos"}
                        </button>
                        <button onclick={link.callback(|_| Msg::Navigate(Route::Batteries))}>
                            {"Acumuladores"}
                        </button>
                    </div>
                </div>
            },
            Route::Devices => html! {
                <DevicesComponent on_navigate={navigate.clone()} />
            },
            Route::Device(id) => html! {
                <DeviceDetailComponent device_id={id} on_navigate={navigate.clone()} />
            },
            Route::Batteries => html! {
                <BatteriesComponent on_navigate={navigate.clone()} />
            },
            Route::Battery(id) => html! {
                <BatteryDetailComponent battery_id={id} on_navigate={navigate.clone()} />
            },
        };

        html! {
            <div class="app-root">
                <nav>
                    <button onclick={link.callback(|_| Msg::Navigate(Route::Home))}>{"Inicio"}</button>
                    <button onclick={link.callback(|_| Msg::Navigate(Route::Devices))}>{"Dispositivos"}</button>
                    <button onclick={link.callback(|_| Msg::Navigate(Route::Batteries))}>{"Acumuladores"}</button>
                </nav>
                { body }
            </div>
        }
    }
}
