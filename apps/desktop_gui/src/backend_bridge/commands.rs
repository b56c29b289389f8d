//! Backend commands queued from UI to the host worker.

use shared::protocol::HostRequest;

pub enum BackendCommand {
    FetchState,
    IncrementCounter,
    DecrementCounter,
    ResetCounter,
}

impl BackendCommand {
    /// The host contract request this UI intent resolves to.
    pub fn request(&self) -> HostRequest {
        match self {
            BackendCommand::FetchState => HostRequest::GetState,
            BackendCommand::IncrementCounter => HostRequest::IncrementCounter,
            BackendCommand::DecrementCounter => HostRequest::DecrementCounter,
            BackendCommand::ResetCounter => HostRequest::ResetCounter,
        }
    }
}
