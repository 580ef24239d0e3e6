//! User business logic - Registration, authentication, and profiles.
//!
//! Accounts carry a role (`admin` or `customer`) that the calling layer
//! checks before invoking privileged operations; the functions here only
//! validate and persist. Passwords are stored as provided; hashing is an
//! acknowledged gap and out of scope here.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Account role, checked by the calling layer before privileged operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages inventory and seasons
    Admin,
    /// Browses the catalog and checks out carts
    Customer,
}

impl Role {
    /// The string stored in the `role` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }

    /// Parses a stored role string back into a [`Role`].
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            other => Err(Error::Validation {
                message: format!("Unknown role: {other}"),
            }),
        }
    }
}

/// Display names allow letters and spaces only.
fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(Error::Validation {
            message: "Invalid name: letters and spaces only".to_string(),
        });
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let valid = email.matches('@').count() == 1
        && email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        });
    if !valid {
        return Err(Error::Validation {
            message: "Invalid email".to_string(),
        });
    }
    Ok(())
}

/// Minimum 8 characters with an uppercase, a lowercase, and a symbol.
fn validate_password(password: &str) -> Result<()> {
    let strong = password.chars().count() >= 8
        && password.chars().any(char::is_lowercase)
        && password.chars().any(char::is_uppercase)
        && password.chars().any(|c| !c.is_alphanumeric());
    if !strong {
        return Err(Error::Validation {
            message:
                "Invalid password: minimum 8 characters with an uppercase letter, a lowercase \
                 letter, and a special character"
                    .to_string(),
        });
    }
    Ok(())
}

/// Registers a new account after validating name, email, password, and role.
///
/// # Errors
/// Returns [`Error::EmailTaken`] when the email is already registered, or
/// [`Error::Validation`] for any field that fails the rules above.
pub async fn register_user(
    db: &DatabaseConnection,
    name: String,
    email: String,
    password: String,
    role: Role,
) -> Result<user::Model> {
    let name = name.trim().to_string();
    let email = email.trim().to_string();
    let password = password.trim().to_string();

    validate_name(&name)?;
    validate_email(&email)?;
    validate_password(&password)?;

    let existing = User::find()
        .filter(user::Column::Email.eq(email.clone()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::EmailTaken { email });
    }

    let user = user::ActiveModel {
        name: Set(name),
        email: Set(email),
        password: Set(password),
        role: Set(role.as_str().to_string()),
        profile_photo: Set(None),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// Verifies an email/password pair and returns the matching account.
///
/// The error does not distinguish unknown email from wrong password, so a
/// caller cannot probe which emails are registered.
pub async fn authenticate(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<user::Model> {
    User::find()
        .filter(user::Column::Email.eq(email))
        .filter(user::Column::Password.eq(password))
        .one(db)
        .await?
        .ok_or(Error::InvalidCredentials)
}

/// Retrieves an account by id.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<user::Model> {
    User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(Error::UserNotFound { user_id })
}

/// Updates a user's profile: name always, password and photo only when
/// supplied. New passwords go through the same strength rule as
/// registration.
pub async fn update_profile(
    db: &DatabaseConnection,
    user_id: i64,
    name: String,
    new_password: Option<String>,
    new_photo: Option<Vec<u8>>,
) -> Result<user::Model> {
    let name = name.trim().to_string();
    validate_name(&name)?;

    let existing = get_user_by_id(db, user_id).await?;

    let mut active: user::ActiveModel = existing.into();
    active.name = Set(name);
    if let Some(password) = new_password {
        let password = password.trim().to_string();
        validate_password(&password)?;
        active.password = Set(password);
    }
    if let Some(photo) = new_photo {
        active.profile_photo = Set(Some(photo));
    }

    active.update(db).await.map_err(Into::into)
}

/// Fetches the stored profile photo, or None if the user never set one (the
/// caller serves a default image in that case).
pub async fn get_profile_photo(db: &DatabaseConnection, user_id: i64) -> Result<Option<Vec<u8>>> {
    let user = get_user_by_id(db, user_id).await?;
    Ok(user.profile_photo)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_customer, setup_test_db};

    #[tokio::test]
    async fn test_register_user_validation() -> Result<()> {
        let db = setup_test_db().await?;

        // Name with digits
        let result = register_user(
            &db,
            "Maria 2".to_string(),
            "maria@example.com".to_string(),
            "Secreto!1".to_string(),
            Role::Customer,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        // Bad email shapes
        for email in [
            "no-at-sign",
            "@example.com",
            "maria@nodot",
            "maria@.com",
            "maria@pan@example.com",
        ] {
            let result = register_user(
                &db,
                "Maria".to_string(),
                email.to_string(),
                "Secreto!1".to_string(),
                Role::Customer,
            )
            .await;
            assert!(
                matches!(result.unwrap_err(), Error::Validation { .. }),
                "email {email} should be rejected"
            );
        }

        // Weak passwords: too short, no uppercase, no symbol
        for password in ["Ab!1", "secreto!largo", "SecretoLargo1"] {
            let result = register_user(
                &db,
                "Maria".to_string(),
                "maria@example.com".to_string(),
                password.to_string(),
                Role::Customer,
            )
            .await;
            assert!(
                matches!(result.unwrap_err(), Error::Validation { .. }),
                "password {password} should be rejected"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_register_user_accepts_accented_names() -> Result<()> {
        let db = setup_test_db().await?;

        let user = register_user(
            &db,
            "María Peña".to_string(),
            "maria@example.com".to_string(),
            "Secreto!x".to_string(),
            Role::Customer,
        )
        .await?;
        assert_eq!(user.name, "María Peña");
        assert_eq!(user.role, "customer");

        Ok(())
    }

    #[tokio::test]
    async fn test_register_duplicate_email() -> Result<()> {
        let db = setup_test_db().await?;

        register_user(
            &db,
            "Maria".to_string(),
            "maria@example.com".to_string(),
            "Secreto!x".to_string(),
            Role::Customer,
        )
        .await?;

        let result = register_user(
            &db,
            "Mario".to_string(),
            "maria@example.com".to_string(),
            "OtroPass!x".to_string(),
            Role::Admin,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::EmailTaken { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_authenticate() -> Result<()> {
        let db = setup_test_db().await?;
        let user = register_user(
            &db,
            "Maria".to_string(),
            "maria@example.com".to_string(),
            "Secreto!x".to_string(),
            Role::Customer,
        )
        .await?;

        let found = authenticate(&db, "maria@example.com", "Secreto!x").await?;
        assert_eq!(found.id, user.id);

        // Wrong password and unknown email produce the same error
        let wrong = authenticate(&db, "maria@example.com", "Wrong!pass1").await;
        assert!(matches!(wrong.unwrap_err(), Error::InvalidCredentials));
        let unknown = authenticate(&db, "nobody@example.com", "Secreto!x").await;
        assert!(matches!(unknown.unwrap_err(), Error::InvalidCredentials));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_profile() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_customer(&db).await?;

        // Name only: password stays
        let updated = update_profile(&db, user.id, "Nuevo Nombre".to_string(), None, None).await?;
        assert_eq!(updated.name, "Nuevo Nombre");
        assert_eq!(updated.password, user.password);

        // Password change goes through the strength rule
        let weak = update_profile(
            &db,
            user.id,
            "Nuevo Nombre".to_string(),
            Some("weak".to_string()),
            None,
        )
        .await;
        assert!(matches!(weak.unwrap_err(), Error::Validation { .. }));

        let updated = update_profile(
            &db,
            user.id,
            "Nuevo Nombre".to_string(),
            Some("Fuerte!88".to_string()),
            Some(vec![1, 2]),
        )
        .await?;
        assert_eq!(updated.password, "Fuerte!88");
        assert_eq!(updated.profile_photo, Some(vec![1, 2]));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_profile_photo_defaults_to_none() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_customer(&db).await?;

        assert_eq!(get_profile_photo(&db, user.id).await?, None);

        let missing = get_profile_photo(&db, 999).await;
        assert!(matches!(missing.unwrap_err(), Error::UserNotFound { user_id: 999 }));

        Ok(())
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse("admin").unwrap(), Role::Admin);
        assert_eq!(Role::parse("customer").unwrap(), Role::Customer);
        assert_eq!(Role::Admin.as_str(), "admin");
        assert!(Role::parse("baker").is_err());
    }
}
