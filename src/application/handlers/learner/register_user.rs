//! RegisterUserHandler - Command handler for creating a learner account.

use std::sync::Arc;

use crate::domain::learner::{NewUser, User, UserError};
use crate::ports::UserRepository;

/// Command to register a user. Fields are raw request values.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Handler for user registration.
///
/// Username and email uniqueness is checked by the repository inside the
/// insert, so two concurrent registrations cannot both succeed.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, UserError> {
        let draft = NewUser::new(cmd.username, cmd.email, cmd.password)?
            .with_name(cmd.first_name, cmd.last_name);

        let user = self.users.create(draft).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;

    fn command(username: &str, email: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            username: username.to_string(),
            email: email.to_string(),
            password: "secret".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn registers_new_user() {
        let handler = RegisterUserHandler::new(InMemoryStore::new().users);
        let user = handler
            .handle(RegisterUserCommand {
                first_name: Some("Ada".to_string()),
                ..command("ada", "ada@example.com")
            })
            .await
            .unwrap();

        assert_eq!(user.username, "ada");
        assert_eq!(user.email.as_str(), "ada@example.com");
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert!(user.last_name.is_none());
    }

    #[tokio::test]
    async fn rejects_taken_username() {
        let handler = RegisterUserHandler::new(InMemoryStore::new().users);
        handler.handle(command("ada", "ada@example.com")).await.unwrap();

        let err = handler
            .handle(command("ada", "grace@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, UserError::UsernameTaken("ada".to_string()));
    }

    #[tokio::test]
    async fn rejects_taken_email() {
        let handler = RegisterUserHandler::new(InMemoryStore::new().users);
        handler.handle(command("ada", "ada@example.com")).await.unwrap();

        let err = handler
            .handle(command("grace", "ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::EmailTaken(_)));
    }

    #[tokio::test]
    async fn rejects_missing_password() {
        let handler = RegisterUserHandler::new(InMemoryStore::new().users);
        let err = handler
            .handle(RegisterUserCommand {
                password: String::new(),
                ..command("ada", "ada@example.com")
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::ValidationFailed { ref field, .. } if field == "password"));
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let handler = RegisterUserHandler::new(InMemoryStore::new().users);
        let err = handler.handle(command("ada", "not-an-email")).await.unwrap_err();
        assert!(matches!(err, UserError::ValidationFailed { ref field, .. } if field == "email"));
    }
}
