//! Shared in-memory host platform for integration tests.

use async_trait::async_trait;
use pushwork::{
    ActiveNotification, ClientMessage, ClientView, NotificationData, NotificationDescriptor,
    Platform, PlatformError,
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Everything the dispatcher asked the host to do, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Show(NotificationDescriptor),
    Focus(Uuid),
    Message(Uuid, ClientMessage),
    OpenWindow(String),
    Close(String),
}

#[derive(Default)]
pub struct RecordingPlatform {
    pub calls: Arc<Mutex<Vec<HostCall>>>,
    pub client_ids: Vec<Uuid>,
    pub fail_render: bool,
    pub fail_clients: bool,
    pub fail_focus: bool,
}

impl RecordingPlatform {
    pub fn with_clients(count: usize) -> Self {
        Self {
            client_ids: (0..count).map(|_| Uuid::new_v4()).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn shown(&self) -> Vec<NotificationDescriptor> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HostCall::Show(descriptor) => Some(descriptor),
                _ => None,
            })
            .collect()
    }

    pub fn notification(&self, url: &str) -> RecordedNotification {
        RecordedNotification {
            data: NotificationData {
                url: url.to_string(),
                raw: None,
            },
            calls: self.calls.clone(),
            fail_close: false,
        }
    }
}

pub struct RecordedClient {
    id: Uuid,
    calls: Arc<Mutex<Vec<HostCall>>>,
    fail_focus: bool,
}

#[async_trait]
impl ClientView for RecordedClient {
    fn id(&self) -> Uuid {
        self.id
    }

    async fn focus(&self) -> Result<(), PlatformError> {
        if self.fail_focus {
            return Err(PlatformError::new("focus refused"));
        }
        self.calls.lock().unwrap().push(HostCall::Focus(self.id));
        Ok(())
    }

    async fn post_message(&self, message: &ClientMessage) -> Result<(), PlatformError> {
        self.calls
            .lock()
            .unwrap()
            .push(HostCall::Message(self.id, message.clone()));
        Ok(())
    }
}

#[async_trait]
impl Platform for RecordingPlatform {
    async fn show_notification(
        &self,
        descriptor: &NotificationDescriptor,
    ) -> Result<(), PlatformError> {
        if self.fail_render {
            return Err(PlatformError::new("render refused"));
        }
        self.calls
            .lock()
            .unwrap()
            .push(HostCall::Show(descriptor.clone()));
        Ok(())
    }

    async fn clients(&self) -> Result<Vec<Arc<dyn ClientView>>, PlatformError> {
        if self.fail_clients {
            return Err(PlatformError::new("clients unavailable"));
        }
        Ok(self
            .client_ids
            .iter()
            .map(|&id| {
                Arc::new(RecordedClient {
                    id,
                    calls: self.calls.clone(),
                    fail_focus: self.fail_focus,
                }) as Arc<dyn ClientView>
            })
            .collect())
    }

    async fn open_window(&self, url: &str) -> Result<(), PlatformError> {
        self.calls
            .lock()
            .unwrap()
            .push(HostCall::OpenWindow(url.to_string()));
        Ok(())
    }
}

pub struct RecordedNotification {
    pub data: NotificationData,
    pub calls: Arc<Mutex<Vec<HostCall>>>,
    pub fail_close: bool,
}

#[async_trait]
impl ActiveNotification for RecordedNotification {
    fn data(&self) -> &NotificationData {
        &self.data
    }

    async fn close(&self) -> Result<(), PlatformError> {
        if self.fail_close {
            return Err(PlatformError::new("close refused"));
        }
        self.calls
            .lock()
            .unwrap()
            .push(HostCall::Close(self.data.url.clone()));
        Ok(())
    }
}
