pub mod api;
pub mod collection;
pub mod edit;
pub mod error;
pub mod model;
pub mod production;
pub mod queue;
pub mod request;
pub mod selection;

pub use api::{ApiClient, RawResponse, Transport};
pub use collection::{Collection, RefreshTicket};
pub use edit::{BuildingEdit, EditGate};
pub use error::{ApiError, Operation};
pub use model::*;
pub use selection::Selection;
