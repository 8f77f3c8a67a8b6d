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

/// Severity tier of a per-asset diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    /// Informational, no action required.
    Info,
    /// Something is off but the asset is still usable.
    Warning,
    /// The asset could not be fully loaded.
    Error,
}

/// A diagnostic attached to an asset and surfaced to the UI layer.
///
/// Recoverable problems (a missing dependency target, a failed
/// re-deserialization) are reported here rather than aborting; the message
/// list is cleared and repopulated on every reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMessage {
    severity: MessageSeverity,
    text: String,
}

impl AssetMessage {
    /// Creates an info-tier message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: MessageSeverity::Info,
            text: text.into(),
        }
    }

    /// Creates a warning-tier message.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: MessageSeverity::Warning,
            text: text.into(),
        }
    }

    /// Creates an error-tier message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: MessageSeverity::Error,
            text: text.into(),
        }
    }

    /// Returns the message's severity tier.
    pub fn severity(&self) -> MessageSeverity {
        self.severity
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }
}
