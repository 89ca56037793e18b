use common::model::battery::Battery;
use common::model::device::Device;
use common::sync::coordinator::RelationOutcome;
use common::sync::ApiError;

pub enum Msg {
    FetchDevice,
    DeviceFetched(Result<Option<Device>, ApiError>),
    FetchChoices,
    ChoicesFetched(Result<Vec<Battery>, ApiError>),
    StartEdit,
    CancelEdit,
    UpdateName(String),
    Save,
    Saved(Result<Device, ApiError>),
    Delete,
    Deleted(Result<(), ApiError>),
    /// The attach select changed; `None` is the placeholder option.
    Select(Option<i64>),
    Attach,
    Detach(i64),
    /// An attach/detach chain came back; the ticket decides whether it still
    /// applies.
    ChainResolved(u64, RelationOutcome),
}
