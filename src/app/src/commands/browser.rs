//! Browser command definitions.
//!
//! Operations only the page can perform: asking the runtime for its local
//! time zone, handing a file to the save flow and showing a modal alert.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BrowserOperation {
    /// Resolve the runtime's IANA time zone identifier
    DetectTimezone,
    /// Save `data` through a temporary object URL and a hidden anchor
    SaveFile { filename: String, data: Vec<u8> },
    Alert { message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BrowserOutput {
    Timezone(Option<String>),
    FileSaved,
    Alerted,
    Error { message: String },
}

impl Operation for BrowserOperation {
    type Output = BrowserOutput;
}

/// Command-based browser API
pub struct Browser<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Browser<Effect, Event>
where
    Effect: Send + From<crux_core::Request<BrowserOperation>> + 'static,
    Event: Send + 'static,
{
    pub fn detect_timezone() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BrowserOperation::DetectTimezone)
    }

    pub fn save_file(filename: impl Into<String>, data: Vec<u8>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BrowserOperation::SaveFile {
            filename: filename.into(),
            data,
        })
    }

    pub fn alert(message: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BrowserOperation::Alert {
            message: message.into(),
        })
    }
}

#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: BrowserOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<BrowserOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: BrowserOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = BrowserOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
