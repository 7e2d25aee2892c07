//! Resource-type dispatch and the plan/apply cycle

use log::{debug, info};
use std::fmt;

use crate::error::{ProviderError, Result};
use crate::reconcile::{plan, Plan};
use crate::schema;
use crate::state::{Attributes, ResourceData};

use super::{
    credentials, keys, llm_models, mcp_servers, team_members, teams, users, vector_stores,
    LiteLlmClient, ResourceKind, RetryConfig,
};

/// What an apply did
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    Created(ResourceData),
    Updated(ResourceData),
    Replaced(ResourceData),
    Unchanged(ResourceData),
}

impl ApplyOutcome {
    pub fn data(&self) -> &ResourceData {
        match self {
            ApplyOutcome::Created(data)
            | ApplyOutcome::Updated(data)
            | ApplyOutcome::Replaced(data)
            | ApplyOutcome::Unchanged(data) => data,
        }
    }

    pub fn into_data(self) -> ResourceData {
        match self {
            ApplyOutcome::Created(data)
            | ApplyOutcome::Updated(data)
            | ApplyOutcome::Replaced(data)
            | ApplyOutcome::Unchanged(data) => data,
        }
    }
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            ApplyOutcome::Created(_) => "created",
            ApplyOutcome::Updated(_) => "updated",
            ApplyOutcome::Replaced(_) => "replaced",
            ApplyOutcome::Unchanged(_) => "unchanged",
        };
        write!(f, "{} '{}' {}", self.data().resource_type, self.data().id(), verb)
    }
}

/// Entry point for every resource operation
pub struct Provider {
    client: LiteLlmClient,
    retry: RetryConfig,
}

impl Provider {
    pub fn new(client: LiteLlmClient) -> Self {
        Self {
            client,
            retry: RetryConfig::default(),
        }
    }

    /// Override the model read-after-create backoff
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn client(&self) -> &LiteLlmClient {
        &self.client
    }

    /// Validate a configuration and return its canonical form.
    ///
    /// Runs before any network call.
    pub fn validate(kind: ResourceKind, config: &Attributes) -> Result<Attributes> {
        let schema = kind.schema();
        schema::validate(schema, config)?;
        if matches!(kind, ResourceKind::TeamMember | ResourceKind::TeamMemberAdd) {
            team_members::validate_identity(schema, config)?;
        }

        let mut normalized = config.clone();
        team_members::normalize_config(schema, &mut normalized);
        Ok(normalized)
    }

    /// Classify what applying `config` over `state` would do
    pub fn plan(
        kind: ResourceKind,
        state: Option<&ResourceData>,
        config: &Attributes,
    ) -> Result<Plan> {
        let config = Self::validate(kind, config)?;
        Ok(plan(kind.schema(), state, &config))
    }

    pub async fn create(&self, kind: ResourceKind, config: &Attributes) -> Result<ResourceData> {
        let config = Self::validate(kind, config)?;
        debug!("Creating {}", kind);
        let client = &self.client;
        match kind {
            ResourceKind::Team => teams::create(client, &config).await,
            ResourceKind::Key => keys::create(client, &config).await,
            ResourceKind::User => users::create(client, &config).await,
            ResourceKind::Model => llm_models::create_with_retry(client, &config, &self.retry).await,
            ResourceKind::Credential => credentials::create(client, &config).await,
            ResourceKind::VectorStore => vector_stores::create(client, &config).await,
            ResourceKind::McpServer => mcp_servers::create(client, &config).await,
            ResourceKind::TeamMember => team_members::member::create(client, &config).await,
            ResourceKind::TeamMemberAdd => team_members::member_set::create(client, &config).await,
        }
    }

    /// Refresh state; `None` when the entity no longer exists
    pub async fn read(
        &self,
        kind: ResourceKind,
        state: &ResourceData,
    ) -> Result<Option<ResourceData>> {
        if !state.is_present() {
            return Ok(None);
        }
        let client = &self.client;
        match kind {
            ResourceKind::Team => teams::read(client, state).await,
            ResourceKind::Key => keys::read(client, state).await,
            ResourceKind::User => users::read(client, state).await,
            ResourceKind::Model => llm_models::read(client, state).await,
            ResourceKind::Credential => credentials::read(client, state).await,
            ResourceKind::VectorStore => vector_stores::read(client, state).await,
            ResourceKind::McpServer => mcp_servers::read(client, state).await,
            ResourceKind::TeamMember => team_members::member::read(client, state).await,
            ResourceKind::TeamMemberAdd => team_members::member_set::read(client, state).await,
        }
    }

    pub async fn update(
        &self,
        kind: ResourceKind,
        state: &ResourceData,
        config: &Attributes,
    ) -> Result<ResourceData> {
        let config = Self::validate(kind, config)?;
        debug!("Updating {} '{}'", kind, state.id());
        let client = &self.client;
        match kind {
            ResourceKind::Team => teams::update(client, state, &config).await,
            ResourceKind::Key => keys::update(client, state, &config).await,
            ResourceKind::User => users::update(client, state, &config).await,
            ResourceKind::Model => llm_models::update(client, state, &config).await,
            ResourceKind::Credential => credentials::update(client, state, &config).await,
            ResourceKind::VectorStore => vector_stores::update(client, state, &config).await,
            ResourceKind::McpServer => mcp_servers::update(client, state, &config).await,
            ResourceKind::TeamMember => team_members::member::update(client, state, &config).await,
            ResourceKind::TeamMemberAdd => {
                team_members::member_set::update(client, state, &config).await
            }
        }
    }

    /// Delete the entity; an already-absent entity is success
    pub async fn delete(&self, kind: ResourceKind, state: &ResourceData) -> Result<()> {
        if !state.is_present() {
            debug!("{} has no tracked entity; nothing to delete", kind);
            return Ok(());
        }
        let client = &self.client;
        match kind {
            ResourceKind::Team => teams::delete(client, state).await,
            ResourceKind::Key => keys::delete(client, state).await,
            ResourceKind::User => users::delete(client, state).await,
            ResourceKind::Model => llm_models::delete(client, state).await,
            ResourceKind::Credential => credentials::delete(client, state).await,
            ResourceKind::VectorStore => vector_stores::delete(client, state).await,
            ResourceKind::McpServer => mcp_servers::delete(client, state).await,
            ResourceKind::TeamMember => team_members::member::delete(client, state).await,
            ResourceKind::TeamMemberAdd => team_members::member_set::delete(client, state).await,
        }
    }

    /// Populate state for an existing entity from the server
    pub async fn import(&self, kind: ResourceKind, id: &str) -> Result<ResourceData> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ProviderError::Validation {
                attribute: "id".to_string(),
                message: "import needs a non-empty identifier".to_string(),
            });
        }

        let empty = ResourceData::new(kind.type_name()).with_id(id);
        let data = self
            .read(kind, &empty)
            .await?
            .ok_or_else(|| ProviderError::NotFound {
                resource: kind.label().to_string(),
                message: format!("cannot import '{}': it does not exist", id),
            })?;
        info!("Imported {} '{}'", kind, id);
        Ok(data)
    }

    /// Converge the entity to `config`: create, update in place, replace or
    /// leave it untouched
    pub async fn apply(
        &self,
        kind: ResourceKind,
        state: Option<&ResourceData>,
        config: &Attributes,
    ) -> Result<ApplyOutcome> {
        let planned = Self::plan(kind, state, config)?;
        debug!("Plan for {}: {}", kind, planned);

        match (planned, state) {
            (Plan::Create, _) | (_, None) => {
                let data = self.create(kind, config).await?;
                Ok(ApplyOutcome::Created(data))
            }
            (Plan::NoChange, Some(current)) => Ok(ApplyOutcome::Unchanged(current.clone())),
            (Plan::Update(_), Some(current)) => {
                let data = self.update(kind, current, config).await?;
                Ok(ApplyOutcome::Updated(data))
            }
            (Plan::Replace(attrs), Some(current)) => {
                info!(
                    "Replacing {} '{}': {} changed",
                    kind,
                    current.id(),
                    attrs.join(", ")
                );
                self.delete(kind, current).await?;
                let data = self.create(kind, config).await?;
                Ok(ApplyOutcome::Replaced(data))
            }
        }
    }
}
