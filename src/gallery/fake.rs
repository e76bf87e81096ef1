//! Scripted in-process backend for the component tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{
    api::GalleryApi,
    error::{GalleryError, Result},
    models::{
        ArtworkList, GenerateRequest, GenerateResult, InteractionEvent, ListMode,
        PreferenceUpdate, UserProfile,
    },
};

#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// Transport failure.
    Fail(String),
    /// Non-2xx answer.
    Status(u16),
}

impl<T: Clone> Reply<T> {
    fn resolve(&self, endpoint: &str) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Fail(reason) => Err(GalleryError::Request(reason.clone())),
            Reply::Status(status) => Err(GalleryError::Status {
                endpoint: endpoint.to_string(),
                status: *status,
            }),
        }
    }
}

pub struct ScriptedApi {
    session: Reply<()>,
    lists: HashMap<ListMode, Reply<ArtworkList>>,
    generate: Reply<GenerateResult>,
    profile: Reply<UserProfile>,
    export: Reply<serde_json::Value>,
    interact_replies: Mutex<VecDeque<Reply<()>>>,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<String>>,
    interactions: Mutex<Vec<InteractionEvent>>,
    generate_requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            session: Reply::Ok(()),
            lists: HashMap::new(),
            generate: Reply::Fail("generate not scripted".into()),
            profile: Reply::Fail("profile not scripted".into()),
            export: Reply::Fail("export not scripted".into()),
            interact_replies: Mutex::new(VecDeque::new()),
            gate: None,
            calls: Mutex::new(Vec::new()),
            interactions: Mutex::new(Vec::new()),
            generate_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_session(mut self, reply: Reply<()>) -> Self {
        self.session = reply;
        self
    }

    pub fn with_list(mut self, mode: ListMode, reply: Reply<ArtworkList>) -> Self {
        self.lists.insert(mode, reply);
        self
    }

    pub fn with_generate(mut self, reply: Reply<GenerateResult>) -> Self {
        self.generate = reply;
        self
    }

    pub fn with_profile(mut self, reply: Reply<UserProfile>) -> Self {
        self.profile = reply;
        self
    }

    pub fn with_export(mut self, reply: Reply<serde_json::Value>) -> Self {
        self.export = reply;
        self
    }

    /// Interactions wait for a `notify_one` on the gate before answering.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn gate(&self) -> Option<Arc<Notify>> {
        self.gate.clone()
    }

    /// Queues the answer to the next interaction. Unqueued interactions succeed.
    pub fn push_interact(&self, reply: Reply<()>) {
        self.interact_replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn interactions(&self) -> Vec<InteractionEvent> {
        self.interactions.lock().unwrap().clone()
    }

    pub fn generate_requests(&self) -> Vec<GenerateRequest> {
        self.generate_requests.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }
}

#[async_trait]
impl GalleryApi for ScriptedApi {
    async fn open_session(&self) -> Result<()> {
        self.record("GET /");
        self.session.resolve("/")
    }

    async fn list(&self, mode: ListMode) -> Result<ArtworkList> {
        self.record(&format!("GET {}", mode.path()));
        match self.lists.get(&mode) {
            Some(reply) => reply.resolve(mode.path()),
            None => Err(GalleryError::Request(format!("{:?} not scripted", mode))),
        }
    }

    async fn interact(&self, event: &InteractionEvent) -> Result<()> {
        self.record("POST /api/interact");
        self.interactions.lock().unwrap().push(event.clone());
        let reply = self
            .interact_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Ok(()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        reply.resolve("/api/interact")
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResult> {
        self.record("POST /api/generate-artwork");
        self.generate_requests.lock().unwrap().push(request.clone());
        self.generate.resolve("/api/generate-artwork")
    }

    async fn user_profile(&self) -> Result<UserProfile> {
        self.record("GET /api/user-profile");
        self.profile.resolve("/api/user-profile")
    }

    async fn update_preferences(&self, _update: &PreferenceUpdate) -> Result<()> {
        self.record("POST /api/update-preferences");
        Ok(())
    }

    async fn export_artsteps(&self) -> Result<serde_json::Value> {
        self.record("GET /export-artsteps");
        self.export.resolve("/export-artsteps")
    }
}
