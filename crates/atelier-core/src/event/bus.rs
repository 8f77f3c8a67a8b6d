// Copyright 2025 the atelier authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log;

/// Manages a generic, thread-safe event channel.
///
/// The bus is generic over the event type `T` it transports, keeping this
/// crate decoupled from the specific events higher layers define on top of
/// it.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new EventBus with an unbounded channel for a specific event type.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::info!("Generic EventBus initialized.");
        Self { sender, receiver }
    }

    /// Attempts to send an event, logging an error if the receiver is disconnected.
    ///
    /// ## Arguments
    /// * `event` - The event to be sent over the channel.
    pub fn publish(&self, event: T) {
        log::trace!("Publishing an event.");

        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to send event: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the sender end of the channel.
    /// Use this to allow other parts of the system to send events.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a reference to the receiver end of the channel.
    /// Intended for the owner of the bus to process events.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetUUID;
    use crate::event::{AssetLifecycleEvent, AssetLifecycleEventKind};
    use flume::{SendError, TryRecvError};
    use std::time::Duration;

    fn reloaded(id: AssetUUID) -> AssetLifecycleEvent {
        AssetLifecycleEvent {
            kind: AssetLifecycleEventKind::Reloaded,
            id,
        }
    }

    #[test]
    fn event_bus_creation() {
        let bus = EventBus::<AssetLifecycleEvent>::new();
        let _sender = bus.sender();
        assert!(bus.receiver().is_empty());
    }

    #[test]
    fn send_receive_single_event() {
        let bus = EventBus::<AssetLifecycleEvent>::new();
        let event_to_send = reloaded(AssetUUID::new());

        bus.publish(event_to_send);

        match bus.receiver().recv_timeout(Duration::from_millis(100)) {
            Ok(received_event) => assert_eq!(received_event, event_to_send),
            Err(e) => panic!("Failed to receive event: {e:?}"),
        }
    }

    #[test]
    fn try_receive_empty() {
        let bus = EventBus::<AssetLifecycleEvent>::new();

        match bus.receiver().try_recv() {
            Err(TryRecvError::Empty) => { /* This is the expected outcome */ }
            Ok(event) => panic!("Received unexpected event: {event:?}"),
            Err(e) => panic!("Received unexpected error: {e:?}"),
        }
    }

    #[test]
    fn events_are_received_in_publish_order() {
        let bus = EventBus::<AssetLifecycleEvent>::new();
        let first = AssetLifecycleEvent {
            kind: AssetLifecycleEventKind::Imported,
            id: AssetUUID::new(),
        };
        let second = reloaded(first.id);
        let third = AssetLifecycleEvent {
            kind: AssetLifecycleEventKind::Removed,
            id: first.id,
        };

        bus.publish(first);
        bus.publish(second);
        bus.publish(third);

        let received: Vec<_> = bus.receiver().try_iter().collect();
        assert_eq!(received, vec![first, second, third]);
    }

    #[test]
    fn send_error_on_receiver_drop() {
        let bus = EventBus::<AssetLifecycleEvent>::new();
        let sender = bus.sender();
        let event_to_send = reloaded(AssetUUID::new());

        drop(bus);

        match sender.send(event_to_send) {
            Err(SendError(_)) => { /* This is the expected outcome */ }
            Ok(()) => panic!("Send unexpectedly succeeded after receiver drop"),
        }
    }
}
