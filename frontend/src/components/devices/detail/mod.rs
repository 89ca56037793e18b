//! Device detail view: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and props.
//!
//! This view hosts the attach workflow. Forming or dissolving a relationship
//! goes through the `RelationCoordinator` in `common::sync`: the mutation and
//! its mandatory confirming re-fetch run as one chain, and only the newest
//! chain may replace the cached device. On first render the device and the
//! battery collection (for the attach select) are fetched independently;
//! this view owns both copies.

mod messages;
mod props;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::DeviceDetailProps;
pub use state::DeviceDetailComponent;

impl Component for DeviceDetailComponent {
    type Message = Msg;
    type Properties = DeviceDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DeviceDetailComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message_batch(vec![Msg::FetchDevice, Msg::FetchChoices]);
        }
    }
}
