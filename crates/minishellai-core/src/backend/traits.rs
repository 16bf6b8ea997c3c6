use crate::error::ShellAiError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation, as stored in the history file and sent to
/// the backend. `content` is only `None` for an assistant turn whose reply
/// carried no data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: Option<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Some(content.into()),
        }
    }
}

/// Request body for the query endpoint.
///
/// `msg` must alternate user/assistant and start with a user turn; the
/// backend relies on that shape.
#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    pub msg: Vec<Message>,
    pub metadata: Map<String, Value>,
}

impl Payload {
    pub fn new(history: Vec<Message>, query: impl Into<String>) -> Self {
        let mut msg = history;
        msg.push(Message::user(query));
        Self {
            msg,
            metadata: Map::new(),
        }
    }

    pub fn roles_alternate(&self) -> bool {
        self.msg.iter().enumerate().all(|(i, m)| {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            m.role == expected
        })
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.msg
    }
}

/// Response body from the query endpoint. Only `data` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendReply {
    #[serde(default)]
    pub data: Value,
}

impl BackendReply {
    /// Text stored in history. Strings are used as-is, other JSON as compact
    /// JSON text, and a missing or null `data` as `None`.
    pub fn text(&self) -> Option<String> {
        match &self.data {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Text shown to the user; a missing `data` prints as `null`.
    pub fn render(&self) -> String {
        self.text().unwrap_or_else(|| Value::Null.to_string())
    }
}

/// The remote question-answering service.
#[async_trait::async_trait]
pub trait QueryBackend: Send + Sync {
    /// Send the payload and wait for the full reply.
    async fn query(&self, payload: &Payload) -> Result<BackendReply, ShellAiError>;
}
