mod root;
mod state;

pub use root::App;
pub(crate) use state::{FetchOutcome, RequestState};
