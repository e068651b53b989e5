use crate::error::{ActionError, CapabilityError};
use crate::handler::Action;
use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client as DynamoClient};
use lambda_http::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub const MISSING_FIELDS: &str = "Missing required fields: name and email";
pub const USER_CREATED: &str = "User created successfully";

// ========== USER ==========
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl UserRecord {
    /// Fresh record with a new v4 id. Both timestamps come from one clock read.
    pub fn new(name: String, email: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            user_id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Durable store of user records. Insert only.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, record: &UserRecord) -> Result<(), CapabilityError>;
}

/// DynamoDB table keyed by `userId`
pub struct DynamoUserStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoUserStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl UserStore for DynamoUserStore {
    async fn insert(&self, record: &UserRecord) -> Result<(), CapabilityError> {
        // Refuse to overwrite: every call creates a distinct item
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("userId", AttributeValue::S(record.user_id.clone()))
            .item("name", AttributeValue::S(record.name.clone()))
            .item("email", AttributeValue::S(record.email.clone()))
            .item("createdAt", AttributeValue::S(record.created_at.clone()))
            .item("updatedAt", AttributeValue::S(record.updated_at.clone()))
            .condition_expression("attribute_not_exists(userId)")
            .send()
            .await?;

        tracing::info!("User saved: {}", record.user_id);
        Ok(())
    }
}

/// Only key presence is checked; empty strings are valid names and emails.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub message: &'static str,
    pub user: UserRecord,
}

pub struct CreateUser {
    store: Arc<dyn UserStore>,
}

impl CreateUser {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Action for CreateUser {
    type Input = CreateUserRequest;
    type Validated = NewUser;

    const NAME: &'static str = "UserCreation";
    const INVALID_INPUT: &'static str = MISSING_FIELDS;
    const SUCCESS: StatusCode = StatusCode::CREATED;

    fn validate(&self, input: CreateUserRequest) -> Result<NewUser, ActionError> {
        match (input.name, input.email) {
            (Some(name), Some(email)) => Ok(NewUser { name, email }),
            _ => Err(ActionError::Validation(MISSING_FIELDS)),
        }
    }

    async fn execute(&self, user: NewUser) -> Result<Value, ActionError> {
        let record = UserRecord::new(user.name, user.email);

        self.store.insert(&record).await?;

        let response = CreateUserResponse {
            message: USER_CREATED,
            user: record,
        };
        Ok(serde_json::to_value(&response)?)
    }
}
