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

//! Provides foundational primitives for event-driven communication.
//!
//! The generic [`EventBus`] is an MPSC channel the asset registry uses to
//! publish [`AssetLifecycleEvent`]s after each state change. Editor panels
//! subscribe by draining the receiver; the bus is an outward notification
//! surface only and plays no part in the synchronous reload propagation.

mod bus;
mod lifecycle;

pub use self::bus::EventBus;
pub use self::lifecycle::{AssetLifecycleEvent, AssetLifecycleEventKind};
